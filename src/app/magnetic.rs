use leptos::{ev::MouseEvent, html, prelude::*};

use crate::motion::{magnetic_offset, Offset, Rect};

/// A button that leans a little toward the pointer while hovered.
#[component]
pub fn MagneticButton(
    #[prop(into)] on_click: Callback<()>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let button_ref = NodeRef::<html::Button>::new();
    let (offset, set_offset) = signal(Offset::default());

    let follow = move |ev: MouseEvent| {
        let Some(button) = button_ref.get_untracked() else {
            return;
        };
        let rect = button.get_bounding_client_rect();
        set_offset.set(magnetic_offset(
            ev.client_x() as f64,
            ev.client_y() as f64,
            Rect {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            },
        ));
    };

    view! {
        <button
            node_ref=button_ref
            type="button"
            class=format!("transition-transform duration-300 ease-out {class}")
            style:transform=move || offset.get().transform()
            on:mousemove=follow
            on:mouseleave=move |_| set_offset.set(Offset::default())
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}
