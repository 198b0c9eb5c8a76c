use leptos::prelude::*;

use crate::portfolio::PROFILE;

/// Profile photo, falling back to initials when the image won't load.
#[component]
pub fn Avatar() -> impl IntoView {
    let (failed, set_failed) = signal(false);

    view! {
        <div class="w-40 h-40 mx-auto mb-8 rounded-full overflow-hidden ring-4 ring-primary/20 shadow-2xl animate-float">
            <Show
                when=move || !failed.get()
                fallback=|| {
                    view! {
                        <span class="flex w-full h-full items-center justify-center bg-primary text-primary-foreground text-4xl font-bold">
                            {PROFILE.initials}
                        </span>
                    }
                }
            >
                <img
                    src=PROFILE.avatar
                    alt=PROFILE.name
                    class="w-full h-full object-cover"
                    on:error=move |_| set_failed.set(true)
                />
            </Show>
        </div>
    }
}
