use leptos::prelude::*;

use crate::portfolio::PROFILE;
use crate::scroll::SectionId;

const LINK_CLASS: &str = "px-4 py-2 rounded-md border border-border text-sm hover:bg-muted";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 px-4 sm:px-6 lg:px-8 border-t border-border">
            <div class="max-w-6xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-8">
                <div>
                    <a href=SectionId::Home.href() class="text-xl font-bold text-primary">
                        {PROFILE.name}
                    </a>
                    <p class="mt-2 text-sm text-muted-foreground">{PROFILE.tagline}</p>
                </div>

                <nav aria-label="Quick links">
                    <h3 class="font-semibold mb-3">"Quick Links"</h3>
                    <ul class="space-y-2 text-sm">
                        {SectionId::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <a
                                            href=section.href()
                                            class="text-muted-foreground hover:text-primary transition-colors"
                                        >
                                            {section.label()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <div>
                    <h3 class="font-semibold mb-3">"Connect"</h3>
                    <div class="flex flex-wrap gap-3">
                        <a href=format!("mailto:{}", PROFILE.email) class=LINK_CLASS>
                            "✉️ Send Email"
                        </a>
                        <a
                            href=PROFILE.linkedin_url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn Profile"
                            class=LINK_CLASS
                        >
                            "LinkedIn"
                        </a>
                        <a
                            href=PROFILE.github_url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub Profile"
                            class=LINK_CLASS
                        >
                            "GitHub"
                        </a>
                    </div>
                </div>
            </div>
            <p class="mt-10 text-center text-sm text-muted-foreground">
                "© " {env!("BUILD_YEAR")} " " {PROFILE.name} ". All rights reserved."
            </p>
        </footer>
    }
}
