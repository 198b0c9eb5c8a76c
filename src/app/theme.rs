use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use super::browser::apply_theme_class;
#[cfg(feature = "hydrate")]
use crate::theme::STORAGE_KEY;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.set_theme.update(|theme| *theme = theme.toggled());
    }
}

/// Makes the theme available to the tree.
///
/// The stored preference is read once on the client. From then on every
/// change is written back and mirrored onto the document root's class list.
pub fn provide_theme() {
    let (theme, set_theme) = signal(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<Theme, FromToStringCodec>(STORAGE_KEY);
        set_theme.set(stored.get_untracked());

        Effect::watch(
            move || theme.get(),
            move |theme, prev, _| {
                apply_theme_class(*theme);
                if prev.is_some() {
                    log::debug!("theme switched to {theme}");
                    set_stored.set(*theme);
                }
            },
            true,
        );
    }

    provide_context(ThemeContext { theme, set_theme });
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    // icons follow the root class rather than the signal so server and client markup agree
    view! {
        <button
            type="button"
            aria-label="Toggle theme"
            class="p-2 rounded-md hover:bg-muted transition-colors duration-300"
            on:click=move |_| ctx.toggle()
        >
            <span class="dark:hidden">"☀️"</span>
            <span class="hidden dark:inline">"🌙"</span>
        </button>
    }
}
