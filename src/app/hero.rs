use leptos::prelude::*;

use super::avatar::Avatar;
use super::browser::{open_in_new_tab, scroll_to_section};
use super::magnetic::MagneticButton;
use super::particles::ParticleBackground;
use super::scroll::ScrollContext;
use super::typing::TypingText;
use crate::portfolio::PROFILE;
use crate::scroll::{parallax_offset, SectionId};

#[component]
pub fn Hero() -> impl IntoView {
    let scroll = expect_context::<ScrollContext>();

    view! {
        <section
            id=SectionId::Home.id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden px-4 sm:px-6 lg:px-8"
        >
            <ParticleBackground />
            <div
                class="relative z-10 max-w-4xl mx-auto text-center"
                style:transform=move || {
                    format!("translateY({}px)", parallax_offset(scroll.scroll_y.get()))
                }
            >
                <div class="animate-fade-in-up">
                    <Avatar />
                </div>

                <div class="animate-fade-in-up" style="animation-delay: 0.2s">
                    <h1 class="text-4xl sm:text-6xl lg:text-7xl font-bold mb-6">
                        "Hi, I'm " <span class="text-primary">{PROFILE.name}</span>
                    </h1>
                    <div class="h-12 mb-8 text-2xl sm:text-3xl text-muted-foreground">
                        <TypingText phrases=PROFILE.phrases class="font-semibold" />
                    </div>
                    <p class="max-w-2xl mx-auto mb-12 text-lg sm:text-xl text-muted-foreground leading-relaxed">
                        {PROFILE.intro}
                    </p>
                </div>

                <div
                    class="animate-fade-in-up flex flex-col sm:flex-row gap-4 justify-center items-center"
                    style="animation-delay: 0.4s"
                >
                    <MagneticButton
                        class="px-8 py-3 rounded-md bg-primary text-primary-foreground font-medium hover:bg-primary/90"
                        on_click=move |_| scroll_to_section(SectionId::Projects)
                    >
                        "View My Work ↗"
                    </MagneticButton>
                    <MagneticButton
                        class="px-8 py-3 rounded-md border border-border font-medium hover:bg-muted"
                        on_click=move |_| open_in_new_tab(PROFILE.resume_url)
                    >
                        "⬇ Download CV"
                    </MagneticButton>
                </div>
            </div>
        </section>
    }
}
