//! Dismissible flash alerts rendered from server messages.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

/// CSS classes for a flash message level. Django's `error` tag maps to the
/// stylesheet's `danger` variant; unknown levels fall back to `info`.
pub fn alert_class(level: &str) -> String {
    let variant = match level.trim().to_ascii_lowercase().as_str() {
        "error" | "danger" => "danger",
        "success" => "success",
        "warning" => "warning",
        _ => "info",
    };
    format!("alert alert-{variant}")
}

#[component]
pub fn FlashAlerts() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="alerts">
            {move || {
                ui.with(|state| {
                    state
                        .alerts
                        .iter()
                        .enumerate()
                        .map(|(index, message)| {
                            view! {
                                <div class=alert_class(&message.level) role="alert">
                                    <span class="alert-text">{message.text.clone()}</span>
                                    <button
                                        class="alert-close"
                                        aria-label="Dismiss"
                                        on:click=move |_| ui.update(|state| state.dismiss_alert(index))
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
