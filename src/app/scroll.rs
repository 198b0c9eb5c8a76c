use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::browser;
use crate::scroll::{ScrollSpy, SectionId};

#[derive(Debug, Clone, Copy)]
pub struct ScrollContext {
    pub scroll_y: ReadSignal<f64>,
    pub active: ReadSignal<Option<SectionId>>,
}

pub fn provide_scroll_tracker() {
    let (scroll_y, set_scroll_y) = signal(0.0);
    let (active, set_active) = signal(None::<SectionId>);
    let spy = StoredValue::new(ScrollSpy::default());

    let recompute = move || {
        let y = browser::scroll_y();
        set_scroll_y.set(y);
        let next = spy
            .try_update_value(|spy| spy.update(y, browser::section_extents()))
            .flatten();
        if next != active.get_untracked() {
            set_active.set(next);
        }
    };

    // once after mount, then on every scroll
    Effect::new(move |_| recompute());
    let _ = use_event_listener(use_window(), ev::scroll, move |_| recompute());

    provide_context(ScrollContext { scroll_y, active });
}
