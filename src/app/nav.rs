use leptos::prelude::*;

use super::scroll::ScrollContext;
use super::theme::ThemeToggle;
use crate::scroll::{is_scrolled, SectionId};

#[component]
pub fn Navigation() -> impl IntoView {
    let scroll = expect_context::<ScrollContext>();
    let (menu_open, set_menu_open) = signal(false);

    let is_active = move |section: SectionId| scroll.active.get() == Some(section);
    let bar_class = move || {
        let shade = if is_scrolled(scroll.scroll_y.get()) {
            "bg-background/95 backdrop-blur-lg shadow-lg"
        } else {
            "bg-background/80 backdrop-blur-md"
        };
        format!("fixed top-0 left-0 right-0 z-50 border-b border-border transition-all duration-300 {shade}")
    };

    view! {
        <nav class=bar_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a
                        href=SectionId::Home.href()
                        class="font-bold text-xl text-primary hover:scale-105 transition-transform duration-300"
                    >
                        "Portfolio"
                    </a>

                    <div class="hidden md:flex items-center space-x-8">
                        {SectionId::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        class=move || {
                                            if is_active(section) {
                                                "relative text-sm font-medium text-primary transition-all duration-300"
                                            } else {
                                                "relative text-sm font-medium text-muted-foreground hover:text-primary transition-all duration-300"
                                            }
                                        }
                                    >
                                        {section.label()}
                                        <Show when=move || is_active(section)>
                                            <span class="absolute -bottom-1 left-0 right-0 h-0.5 bg-primary rounded-full animate-pulse"></span>
                                        </Show>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>

                    <div class="md:hidden flex items-center space-x-2">
                        <ThemeToggle />
                        <button
                            type="button"
                            aria-label="Toggle menu"
                            class="p-2 rounded-md hover:bg-muted transition-colors duration-300"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <Show when=move || menu_open.get()>
                    <div class="md:hidden py-4 border-t border-border animate-fade-in">
                        {SectionId::ALL
                            .into_iter()
                            .enumerate()
                            .map(|(i, section)| {
                                view! {
                                    <a
                                        href=section.href()
                                        style=format!("animation-delay: {}s", i as f64 * 0.1)
                                        class=move || {
                                            if is_active(section) {
                                                "block w-full py-3 px-2 text-primary bg-primary/10 rounded-md animate-slide-in"
                                            } else {
                                                "block w-full py-3 px-2 text-muted-foreground hover:text-primary rounded-md animate-slide-in"
                                            }
                                        }
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}
