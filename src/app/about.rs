use leptos::prelude::*;

use super::homepage::SectionHeader;
use crate::portfolio::{EXPERIENCES, FOCUS_AREAS, PROFILE, ROLES, STORY};
use crate::scroll::SectionId;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.id() class="py-20 px-4 sm:px-6 lg:px-8 bg-muted/30">
            <div class="max-w-6xl mx-auto">
                <SectionHeader title="About Me" subtitle=PROFILE.tagline />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <h3 class="text-2xl font-semibold">"My Journey"</h3>
                        {STORY
                            .iter()
                            .map(|paragraph| {
                                view! {
                                    <p class="text-muted-foreground leading-relaxed">{*paragraph}</p>
                                }
                            })
                            .collect_view()}

                        <div class="space-y-4">
                            {ROLES
                                .iter()
                                .map(|role| {
                                    view! {
                                        <div class="p-4 rounded-lg border border-border bg-card">
                                            <h4 class="font-semibold mb-1">
                                                <span class="mr-2">{role.icon}</span>
                                                {role.title}
                                            </h4>
                                            <p class="text-sm text-muted-foreground">{role.description}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex flex-wrap gap-4 text-sm text-muted-foreground">
                            <span>"📍 " {PROFILE.location}</span>
                            {EXPERIENCES
                                .first()
                                .map(|current| {
                                    view! {
                                        <span>
                                            "📅 " {current.duration} " · " {current.title} " at "
                                            {current.company}
                                        </span>
                                    }
                                })}
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-6">
                        {FOCUS_AREAS
                            .iter()
                            .map(|(icon, area)| {
                                view! {
                                    <div class="p-6 text-center rounded-lg border border-border bg-card hover:shadow-lg hover:-translate-y-1 transition-all duration-300">
                                        <div class="text-4xl mb-3">{*icon}</div>
                                        <h4 class="font-semibold">{*area}</h4>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
