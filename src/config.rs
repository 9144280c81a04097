//! Client configuration and fixed interaction constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server embeds a `config` object in the page bootstrap JSON (see
//! `util::page_data`). Every field defaults, so an absent or partial object
//! yields the stock Django routes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

// ── Timing ──────────────────────────────────────────────────────

/// How long a notification stays fully visible, in milliseconds.
pub const NOTIFICATION_DISPLAY_MS: u32 = 5000;

/// Length of the notification hide transition; matches the CSS transition.
pub const NOTIFICATION_HIDE_MS: u32 = 500;

/// Delay between a successful save and the redirect home.
pub const SAVE_REDIRECT_DELAY_MS: u32 = 1500;

// ── Editor ──────────────────────────────────────────────────────

/// Maximum rendered height of the editor canvas, in CSS pixels.
pub const MAX_CANVAS_HEIGHT: f64 = 500.0;

/// JPEG quality used when serializing the canvas for upload.
pub const JPEG_QUALITY: f64 = 0.9;

/// Intensity slider value restored on reset and used when no slider exists.
pub const DEFAULT_INTENSITY: u8 = 50;

/// Upper bound of the intensity slider.
pub const MAX_INTENSITY: u8 = 100;

/// Endpoint and cookie configuration supplied by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub apply_effect_url: String,
    pub save_url: String,
    /// Prefix for `DELETE {prefix}{id}/`.
    pub delete_url_prefix: String,
    /// Prefix for `GET {prefix}{id}/`.
    pub share_url_prefix: String,
    pub home_url: String,
    /// Form action used when the upload form submits natively.
    pub upload_form_action: String,
    pub csrf_cookie_name: String,
    pub csrf_header_name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            apply_effect_url: "/apply-effect/".to_owned(),
            save_url: "/save/".to_owned(),
            delete_url_prefix: "/delete/".to_owned(),
            share_url_prefix: "/share/".to_owned(),
            home_url: "/home/".to_owned(),
            upload_form_action: "/save/".to_owned(),
            csrf_cookie_name: "csrftoken".to_owned(),
            csrf_header_name: "X-CSRFToken".to_owned(),
        }
    }
}

impl ClientConfig {
    /// `DELETE` endpoint for a gallery item.
    #[must_use]
    pub fn delete_endpoint(&self, image_id: i64) -> String {
        format!("{}{image_id}/", self.delete_url_prefix)
    }

    /// `GET` endpoint returning a shareable URL for a gallery item.
    #[must_use]
    pub fn share_endpoint(&self, image_id: i64) -> String {
        format!("{}{image_id}/", self.share_url_prefix)
    }
}
