use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, ScrollBehavior,
    ScrollIntoViewOptions,
};

use crate::contact::ContactError;
use crate::motion::schedule::{Callback, ScheduleError, Timer, Trigger};
use crate::motion::Bounds;
use crate::scroll::{Extent, SectionId};
use crate::theme::{Theme, DARK_CLASS};

/// Schedules through the browser's timeout and animation-frame queues.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

pub enum BrowserHandle {
    Timeout(TimeoutHandle),
    Frame(AnimationFrameRequestHandle),
}

impl Timer for BrowserTimer {
    type Handle = BrowserHandle;

    fn schedule(&self, trigger: Trigger, callback: Callback) -> Result<BrowserHandle, ScheduleError> {
        match trigger {
            Trigger::After(delay) => {
                set_timeout_with_handle(callback, delay).map(BrowserHandle::Timeout)
            }
            Trigger::NextFrame => {
                request_animation_frame_with_handle(callback).map(BrowserHandle::Frame)
            }
        }
        .map_err(|err| ScheduleError::Register(format!("{err:?}")))
    }

    fn cancel(&self, handle: BrowserHandle) {
        match handle {
            BrowserHandle::Timeout(h) => h.clear(),
            BrowserHandle::Frame(h) => h.cancel(),
        }
    }
}

pub fn viewport_bounds() -> Option<Bounds> {
    let window = window();
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Bounds::new(width, height))
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Page extents of every section currently in the document, in declared order.
pub fn section_extents() -> Vec<Extent> {
    let document = document();
    SectionId::ALL
        .into_iter()
        .filter_map(|section| {
            let el = document
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(Extent {
                section,
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
        })
        .collect()
}

pub fn scroll_to_section(section: SectionId) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn open_in_new_tab(url: &str) {
    if let Err(err) = window().open_with_url_and_target(url, "_blank") {
        log::error!("couldn't open {url}: {err:?}");
    }
}

pub fn open_mailto(uri: &str) -> Result<(), ContactError> {
    window()
        .location()
        .set_href(uri)
        .map_err(|err| ContactError::Navigation(format!("{err:?}")))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

pub fn apply_theme_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(err) = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
        log::warn!("couldn't apply {theme} theme: {err:?}");
    }
}
