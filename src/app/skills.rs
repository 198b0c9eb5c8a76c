use leptos::prelude::*;

use super::homepage::SectionHeader;
use crate::portfolio::{SkillCategory, SKILL_CATEGORIES};
use crate::scroll::SectionId;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.id() class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    title="Skills & Expertise"
                    subtitle="Technologies and tools I work with."
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <CategoryCard category=*category /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg border border-border bg-card hover:shadow-lg transition-shadow duration-300">
            <h3 class="flex items-center gap-3 text-xl font-semibold mb-6">
                <span class="text-2xl">{category.icon}</span>
                {category.title}
            </h3>
            <div class="space-y-4">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <div>
                                <div class="flex justify-between mb-2 text-sm">
                                    <span class="font-medium">{skill.name}</span>
                                    <span class="text-muted-foreground">{skill.width()}</span>
                                </div>
                                <div class="w-full h-2 rounded-full bg-muted overflow-hidden">
                                    <div
                                        class="h-full rounded-full bg-primary transition-all duration-1000 ease-out"
                                        style:width=skill.width()
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
