//! Editor canvas sizing, painting, and serialization.
//!
//! The sizing rule is pure and shared with tests; painting and JPEG export
//! need a browser canvas and only exist under `csr`.

#[cfg(test)]
#[path = "canvas_render_test.rs"]
mod canvas_render_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast as _;

#[cfg(feature = "csr")]
use crate::config::{JPEG_QUALITY, MAX_CANVAS_HEIGHT};

/// Display size for an image inside a `max_width` x `max_height` box.
///
/// Images that already fit keep their natural size; larger ones shrink
/// uniformly until both dimensions fit. Never scales up.
pub fn fit_to_container(natural_width: f64, natural_height: f64, max_width: f64, max_height: f64) -> (f64, f64) {
    if natural_width <= 0.0 || natural_height <= 0.0 {
        return (natural_width.max(0.0), natural_height.max(0.0));
    }
    if natural_width <= max_width && natural_height <= max_height {
        return (natural_width, natural_height);
    }
    let ratio = (max_width / natural_width).min(max_height / natural_height).max(0.0);
    (natural_width * ratio, natural_height * ratio)
}

/// Resize `canvas` to fit its parent (capped at 500px tall), clear it, and
/// draw `image` scaled to the new size.
#[cfg(feature = "csr")]
pub fn draw_image_fitted(canvas: &web_sys::HtmlCanvasElement, image: &web_sys::HtmlImageElement) {
    let Some(ctx_value) = canvas.get_context("2d").ok().flatten() else {
        return;
    };
    let Ok(ctx) = ctx_value.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        return;
    };

    ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));

    let max_width = canvas
        .parent_element()
        .map_or(f64::from(canvas.width()), |parent| f64::from(parent.client_width()));
    let (width, height) = fit_to_container(
        f64::from(image.natural_width()),
        f64::from(image.natural_height()),
        max_width,
        MAX_CANVAS_HEIGHT,
    );

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }

    if let Err(e) = ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, width, height) {
        leptos::logging::warn!("canvas draw failed: {e:?}");
    }
}

/// Export the canvas as a JPEG data URL at the configured quality.
#[cfg(feature = "csr")]
pub fn canvas_to_jpeg(canvas: &web_sys::HtmlCanvasElement) -> Option<String> {
    match canvas.to_data_url_with_type_and_encoder_options("image/jpeg", &wasm_bindgen::JsValue::from_f64(JPEG_QUALITY)) {
        Ok(url) => Some(url),
        Err(e) => {
            leptos::logging::warn!("canvas export failed: {e:?}");
            None
        }
    }
}
