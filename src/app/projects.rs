use leptos::prelude::*;

use super::homepage::SectionHeader;
use crate::portfolio::{Project, PROJECTS};
use crate::scroll::SectionId;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=SectionId::Projects.id() class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    title="Featured Projects"
                    subtitle="A selection of things I've built recently."
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="group overflow-hidden rounded-lg border border-border bg-card hover:shadow-xl transition-all duration-300">
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-48 object-cover group-hover:scale-105 transition-transform duration-300"
                />
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="absolute top-4 left-4 px-2 py-1 rounded-md bg-primary text-primary-foreground text-xs font-medium">
                                "Featured"
                            </span>
                        }
                    })}
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2 group-hover:text-primary transition-colors">
                    {project.title}
                </h3>
                <p class="text-muted-foreground mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 rounded-md bg-muted text-xs font-medium">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.code_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-md border border-border text-sm hover:bg-muted"
                    >
                        "Code"
                    </a>
                    <a
                        href=project.demo_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-md bg-primary text-primary-foreground text-sm hover:bg-primary/90"
                    >
                        "Live Demo"
                    </a>
                </div>
            </div>
        </article>
    }
}
