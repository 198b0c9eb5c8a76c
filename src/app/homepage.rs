use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::Contact;
use super::experience::Experiences;
use super::footer::Footer;
use super::hero::Hero;
use super::projects::Projects;
use super::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Projects />
        <Experiences />
        <Skills />
        <Contact />
        <Footer />
    }
}

/// Centered heading and blurb that opens each section.
#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl sm:text-4xl font-bold mb-4">{title}</h2>
            <p class="text-lg text-muted-foreground max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}
