//! Effect picker, intensity slider, reset button, and loading indicator.

#[cfg(test)]
#[path = "effect_panel_test.rs"]
mod effect_panel_test;

use leptos::prelude::*;

use crate::config::{DEFAULT_INTENSITY, MAX_INTENSITY};
use crate::state::controller::Command;
use crate::util::tasks::{EditorHandles, dispatch};

/// Effect keys the server's `/apply-effect/` endpoint understands, with
/// their button labels.
pub const EFFECTS: &[(&str, &str)] = &[
    ("grayscale", "Grayscale"),
    ("sepia", "Sepia"),
    ("blur", "Blur"),
    ("sharpen", "Sharpen"),
    ("contour", "Contour"),
    ("edge_enhance", "Edge Enhance"),
    ("brightness", "Brightness"),
    ("contrast", "Contrast"),
    ("invert", "Invert"),
    ("solarize", "Solarize"),
    ("emboss", "Emboss"),
    ("posterize", "Posterize"),
    ("cartoon", "Cartoon"),
    ("vignette", "Vignette"),
    ("vintage", "Vintage"),
    ("cool", "Cool"),
    ("warm", "Warm"),
];

/// Parse a slider value, clamping to `0..=100`. Garbage falls back to the
/// default intensity.
pub fn parse_intensity(raw: &str) -> u8 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let clamped = value.round().clamp(0.0, f64::from(MAX_INTENSITY)) as u8;
            clamped
        }
        _ => DEFAULT_INTENSITY,
    }
}

#[component]
pub fn EffectPanel() -> impl IntoView {
    let handles = expect_context::<EditorHandles>();
    let controller = handles.controller;
    let selected = Memo::new(move |_| controller.with(|c| c.editor.effect.clone()));
    let intensity = Memo::new(move |_| controller.with(|c| c.editor.intensity));
    let loading = Memo::new(move |_| controller.with(|c| c.editor.loading()));
    let has_image = Memo::new(move |_| controller.with(|c| c.editor.has_image()));

    let buttons = EFFECTS
        .iter()
        .map(|&(key, label)| {
            view! {
                <button
                    class="effect-btn"
                    class:active=move || selected.get() == key
                    data-effect=key
                    on:click=move |_| {
                        dispatch(handles, Command::SelectEffect(key.to_owned()));
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="effect-panel">
            <div class="effect-buttons">{buttons}</div>
            <label class="intensity-control" for="intensity-slider">
                "Intensity"
                <input
                    id="intensity-slider"
                    type="range"
                    min="0"
                    max=MAX_INTENSITY.to_string()
                    prop:value=move || intensity.get().to_string()
                    on:input=move |ev| {
                        dispatch(handles, Command::AdjustIntensity(parse_intensity(&event_target_value(&ev))));
                    }
                />
                <span class="intensity-value">{move || intensity.get()}</span>
            </label>
            <button
                id="reset-btn"
                class="btn btn-secondary"
                disabled=move || !has_image.get()
                on:click=move |_| {
                    dispatch(handles, Command::Reset);
                }
            >
                "Reset"
            </button>
            <Show when=move || loading.get()>
                <div class="loading-indicator" role="status">
                    <span class="spinner"></span>
                    "Applying effect..."
                </div>
            </Show>
        </div>
    }
}
