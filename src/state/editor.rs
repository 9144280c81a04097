//! Editor image state: original/current image, effect selection, and the
//! request tokens that keep late async results from clobbering newer state.
//!
//! DESIGN
//! ======
//! Every async operation that ends by replacing the current image takes a
//! token when it starts and hands it back when it finishes. Only the latest
//! token is honoured, so two effect requests racing each other resolve to the
//! one issued last regardless of which response arrives last. Uploading a new
//! image or resetting invalidates any outstanding effect request.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::config::{DEFAULT_INTENSITY, MAX_INTENSITY};

/// A decoded image the editor can render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorImage {
    /// URL or data URL the browser loads the pixels from.
    pub src: String,
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
}

#[derive(Clone, Debug)]
pub struct EditorState {
    /// Image currently shown on the canvas.
    pub current: Option<EditorImage>,
    /// Unmodified upload, restored by reset.
    pub original: Option<EditorImage>,
    /// Selected effect key; empty when none is selected.
    pub effect: String,
    /// Intensity slider value, `0..=100`.
    pub intensity: u8,
    /// Data URL shown in the upload preview area.
    pub preview: Option<String>,
    /// Whether the editor section has been unlocked by an upload.
    pub editor_enabled: bool,
    /// Set while the editor canvas is mounted.
    pub canvas_attached: bool,
    /// Token of the effect request the loading indicator is waiting on.
    pub effect_in_flight: Option<u64>,
    /// Bumped whenever `current` is replaced so the canvas repaints.
    pub render_seq: u64,
    effect_seq: u64,
    upload_seq: u64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            current: None,
            original: None,
            effect: String::new(),
            intensity: DEFAULT_INTENSITY,
            preview: None,
            editor_enabled: false,
            canvas_attached: false,
            effect_in_flight: None,
            render_seq: 0,
            effect_seq: 0,
            upload_seq: 0,
        }
    }
}

impl EditorState {
    /// Whether the loading indicator should be shown.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.effect_in_flight.is_some()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    /// Store the selected effect key.
    pub fn select_effect(&mut self, effect: &str) {
        effect.clone_into(&mut self.effect);
    }

    /// Store a slider value, clamped to `0..=100`.
    pub fn set_intensity(&mut self, value: u8) {
        self.intensity = value.min(MAX_INTENSITY);
    }

    // ── Effect requests ────────────────────────────────────────

    /// Issue a new effect token; it supersedes any outstanding one.
    pub fn begin_effect_request(&mut self) -> u64 {
        self.effect_seq += 1;
        self.effect_in_flight = Some(self.effect_seq);
        self.effect_seq
    }

    /// Whether `token` is still the request the editor is waiting on.
    #[must_use]
    pub fn is_latest_effect(&self, token: u64) -> bool {
        self.effect_in_flight == Some(token)
    }

    /// Settle an effect request. A `Some` image replaces the current image.
    /// Returns `false` and changes nothing when the token is stale.
    pub fn finish_effect_request(&mut self, token: u64, image: Option<EditorImage>) -> bool {
        if !self.is_latest_effect(token) {
            return false;
        }
        self.effect_in_flight = None;
        if let Some(image) = image {
            self.replace_current(image);
        }
        true
    }

    /// Drop interest in every outstanding effect request.
    pub fn invalidate_effect_requests(&mut self) {
        self.effect_seq += 1;
        self.effect_in_flight = None;
    }

    // ── Uploads ────────────────────────────────────────────────

    /// Issue a new upload token for a file read that is about to start.
    pub fn begin_upload(&mut self) -> u64 {
        self.upload_seq += 1;
        self.upload_seq
    }

    #[must_use]
    pub fn is_latest_upload(&self, token: u64) -> bool {
        token == self.upload_seq
    }

    /// Show a freshly read file in the preview area and unlock the editor.
    pub fn show_preview(&mut self, token: u64, data_url: String) -> bool {
        if !self.is_latest_upload(token) {
            return false;
        }
        self.preview = Some(data_url);
        self.editor_enabled = true;
        true
    }

    /// Install a decoded upload as both original and current image.
    pub fn load_upload(&mut self, token: u64, image: EditorImage) -> bool {
        if !self.is_latest_upload(token) {
            return false;
        }
        self.original = Some(image.clone());
        self.invalidate_effect_requests();
        self.replace_current(image);
        true
    }

    // ── Reset ──────────────────────────────────────────────────

    /// Restore the original image and clear the effect selection.
    /// No-op returning `false` when nothing has been uploaded.
    pub fn reset(&mut self) -> bool {
        let Some(original) = self.original.clone() else {
            return false;
        };
        self.effect.clear();
        self.intensity = DEFAULT_INTENSITY;
        self.invalidate_effect_requests();
        self.replace_current(original);
        true
    }

    fn replace_current(&mut self, image: EditorImage) {
        self.current = Some(image);
        self.render_seq += 1;
    }
}
