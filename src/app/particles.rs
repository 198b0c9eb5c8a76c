use std::f64::consts::TAU;

use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::browser::{context_2d, viewport_bounds, BrowserTimer};
use crate::motion::{Bounds, ParticleConfig, ParticleField, RepeatingTask, Trigger, Wait};

/// Full-viewport canvas of slowly drifting dots behind the hero.
#[component]
pub fn ParticleBackground(#[prop(optional)] config: Option<ParticleConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new(None::<ParticleField>);

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        let (Some(canvas), Some(bounds)) = (canvas_ref.get_untracked(), viewport_bounds()) else {
            return;
        };
        size_canvas(&canvas, bounds);
        field.update_value(|field| {
            if let Some(field) = field {
                field.resize(bounds);
            }
        });
    });

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(bounds) = viewport_bounds() else {
            return;
        };
        if context_2d(&canvas).is_none() {
            log::warn!("no 2d canvas context, particle background disabled");
            return;
        }
        size_canvas(&canvas, bounds);

        let mut rng = fastrand::Rng::with_seed(random_seed());
        field.set_value(Some(ParticleField::spawn(&config, bounds, &mut rng)));

        let frames = RepeatingTask::start(BrowserTimer, Trigger::NextFrame, move || {
            let Some(ctx) = canvas_ref.get_untracked().as_ref().and_then(context_2d) else {
                return Wait::Stop;
            };
            field
                .try_update_value(|field| {
                    if let Some(field) = field {
                        field.step();
                        draw(&ctx, field, &config);
                    }
                })
                .map_or(Wait::Stop, |_| Wait::NextFrame)
        });
        on_cleanup(move || frames.stop());
    });

    view! {
        <canvas
            node_ref=canvas_ref
            aria-hidden="true"
            class="fixed inset-0 pointer-events-none z-0"
            style="background: transparent"
        ></canvas>
    }
}

fn size_canvas(canvas: &HtmlCanvasElement, bounds: Bounds) {
    canvas.set_width(bounds.width as u32);
    canvas.set_height(bounds.height as u32);
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, config: &ParticleConfig) {
    let Bounds { width, height } = field.bounds();
    ctx.clear_rect(0.0, 0.0, width, height);
    for p in field.particles() {
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.size, 0.0, TAU).is_err() {
            continue;
        }
        ctx.set_fill_style_str(&config.fill_style(p.opacity));
        ctx.fill();
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
