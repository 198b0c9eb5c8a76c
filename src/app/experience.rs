use leptos::prelude::*;

use super::homepage::SectionHeader;
use crate::portfolio::EXPERIENCES;
use crate::scroll::SectionId;

#[component]
pub fn Experiences() -> impl IntoView {
    view! {
        <section id=SectionId::Experiences.id() class="py-20 px-4 sm:px-6 lg:px-8 bg-muted/30">
            <div class="max-w-4xl mx-auto">
                <SectionHeader
                    title=SectionId::Experiences.label()
                    subtitle="Where I've put my skills to work."
                />
                <ol class="relative border-l-2 border-primary/30 space-y-10">
                    {EXPERIENCES
                        .iter()
                        .map(|exp| {
                            view! {
                                <li class="ml-6">
                                    <span class="absolute -left-2 w-4 h-4 rounded-full bg-primary ring-4 ring-background"></span>
                                    <div class="p-6 rounded-lg border border-border bg-card hover:shadow-lg transition-shadow duration-300">
                                        <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between mb-2">
                                            <h3 class="text-xl font-semibold">{exp.title}</h3>
                                            <span class="text-sm text-muted-foreground">{exp.duration}</span>
                                        </div>
                                        <p class="text-primary font-medium mb-3">{exp.company}</p>
                                        <p class="text-muted-foreground leading-relaxed">{exp.description}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
