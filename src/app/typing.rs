use leptos::prelude::*;

use super::browser::BrowserTimer;
use crate::motion::{RepeatingTask, Trigger, TypingCycler, TypingTiming, Wait};

/// Types out each phrase, holds it, deletes it, and moves on to the next.
#[component]
pub fn TypingText(
    phrases: &'static [&'static str],
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let cycler = match TypingCycler::new(phrases.iter().copied(), TypingTiming::default()) {
        Ok(cycler) => cycler,
        Err(err) => {
            log::warn!("typing text disabled: {err}");
            return ().into_any();
        }
    };
    let first = cycler.first_delay();
    let cycler = RwSignal::new(cycler);

    Effect::new(move |_| {
        let ticks = RepeatingTask::start(BrowserTimer, Trigger::After(first), move || {
            cycler
                .try_update(TypingCycler::tick)
                .map_or(Wait::Stop, Wait::After)
        });
        on_cleanup(move || ticks.stop());
    });

    view! {
        <span class=class>
            {move || cycler.with(|c| c.text().to_string())}
            <span class="animate-pulse">"|"</span>
        </span>
    }
    .into_any()
}
