//! Toggleable dropdown menu plus the document-wide outside-click closer.
//!
//! Every dropdown root carries `data-dropdown="<key>"`; the window click
//! listener resolves the closest such root from the click target and closes
//! the open menu when the click landed anywhere else.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Attribute naming the dropdown a DOM subtree belongs to.
pub const DROPDOWN_ATTR: &str = "data-dropdown";

#[component]
pub fn Dropdown(key: &'static str, #[prop(into)] label: String, children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.with(|state| state.is_dropdown_open(key));

    view! {
        <div class="dropdown" data-dropdown=key>
            <button
                class="dropdown-toggle"
                aria-haspopup="true"
                aria-expanded=move || open().to_string()
                on:click=move |_| ui.update(|state| state.toggle_dropdown(key))
            >
                {label}
            </button>
            <div class="dropdown-menu" class:show=open>
                {children()}
            </div>
        </div>
    }
}

/// Close open dropdowns on clicks outside them for the lifetime of the
/// calling owner.
#[cfg(feature = "csr")]
pub fn install_outside_click_close(ui: RwSignal<UiState>) {
    use wasm_bindgen::JsCast as _;

    let handle = window_event_listener(leptos::ev::click, move |ev| {
        let clicked = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(&format!("[{DROPDOWN_ATTR}]")).ok().flatten())
            .and_then(|root| root.get_attribute(DROPDOWN_ATTR));
        if ui.with_untracked(|state| state.outside_click_closes(clicked.as_deref())) {
            ui.update(|state| state.close_dropdowns_on_outside_click(clicked.as_deref()));
        }
    });
    on_cleanup(move || handle.remove());
}
