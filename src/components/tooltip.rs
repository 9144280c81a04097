//! Hover tooltip centred above its anchor.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use leptos::prelude::*;

/// Gap between the anchor's top edge and the tooltip's bottom edge.
pub const TOOLTIP_GAP_PX: f64 = 10.0;

/// Viewport rectangle of the hovered element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

/// Viewport `(top, left)` of a `tip_width` x `tip_height` tooltip.
pub fn tooltip_position(anchor: AnchorRect, tip_width: f64, tip_height: f64) -> (f64, f64) {
    let top = anchor.top - tip_height - TOOLTIP_GAP_PX;
    let left = anchor.left + (anchor.width - tip_width) / 2.0;
    (top, left)
}

/// Inline style for the tooltip; hidden until it has been measured.
pub fn tooltip_style(position: Option<(f64, f64)>) -> String {
    match position {
        Some((top, left)) => format!("position: fixed; top: {top}px; left: {left}px;"),
        None => "position: fixed; visibility: hidden;".to_owned(),
    }
}

#[component]
pub fn Tooltip(#[prop(into)] text: String, children: Children) -> impl IntoView {
    let visible = RwSignal::new(false);
    let position = RwSignal::new(None::<(f64, f64)>);
    let anchor_ref = NodeRef::<leptos::html::Span>::new();
    let tip_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if !visible.get() {
            return;
        }
        let (Some(anchor), Some(tip)) = (anchor_ref.get(), tip_ref.get()) else {
            return;
        };
        let rect = anchor.get_bounding_client_rect();
        let anchor = AnchorRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
        };
        position.set(Some(tooltip_position(
            anchor,
            f64::from(tip.offset_width()),
            f64::from(tip.offset_height()),
        )));
    });

    view! {
        <span
            class="tooltip-anchor"
            node_ref=anchor_ref
            on:mouseenter=move |_| visible.set(true)
            on:mouseleave=move |_| {
                visible.set(false);
                position.set(None);
            }
        >
            {children()}
            <Show when=move || visible.get()>
                <div class="tooltip" role="tooltip" node_ref=tip_ref style=move || tooltip_style(position.get())>
                    {text.clone()}
                </div>
            </Show>
        </span>
    }
}
