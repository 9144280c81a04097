//! Single state-reducing controller for every editor and gallery interaction.
//!
//! ARCHITECTURE
//! ============
//! UI handlers translate DOM events into [`Command`]s and pass them to
//! [`Controller::dispatch`]. The controller updates `EditorState` /
//! `GalleryState` synchronously and returns the [`Task`]s (network calls,
//! file reads, notifications, navigation) the browser runtime must perform.
//! Async tasks report back with completion commands carrying the token they
//! were started with.
//!
//! Keeping all decisions here makes the interaction rules testable without a
//! DOM; `util::tasks` is the only place that touches the browser.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use super::editor::{EditorImage, EditorState};
use super::gallery::{GalleryItem, GalleryState};
use super::notifications::Severity;
use crate::config::SAVE_REDIRECT_DELAY_MS;
use crate::net::api::ApiError;

pub const NOT_AN_IMAGE_MESSAGE: &str = "Please select an image file (JPEG, PNG, GIF)";
pub const UPLOAD_READ_FAILED_MESSAGE: &str = "Could not read the selected file.";
pub const SAVE_SUCCESS_MESSAGE: &str = "Image saved successfully";
pub const DELETE_SUCCESS_MESSAGE: &str = "Image deleted successfully";
pub const SHARE_SUCCESS_MESSAGE: &str = "Share link copied to clipboard";
/// Shown with the URL appended when the browser refuses the clipboard write.
pub const SHARE_COPY_FAILED_PREFIX: &str = "Copy this share link";
pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this image?";

const APPLY_EFFECT_ERROR_PREFIX: &str = "Error applying effect";
const SAVE_ERROR_PREFIX: &str = "Error saving image";
const DELETE_ERROR_PREFIX: &str = "Error deleting image";
const SHARE_ERROR_PREFIX: &str = "Error sharing image";

/// User intents plus the completions async tasks feed back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// A local file was picked in the upload input.
    Upload { mime: String },
    /// The file reader finished.
    UploadRead { token: u64, data_url: String },
    UploadReadFailed { token: u64 },
    /// The uploaded data URL finished decoding into an image.
    UploadDecoded { token: u64, image: EditorImage },
    SelectEffect(String),
    AdjustIntensity(u8),
    /// The processed image finished loading.
    EffectApplied { token: u64, image: EditorImage },
    EffectFailed { token: u64, error: ApiError },
    Reset,
    /// The upload form is being submitted (after validation passed).
    Save,
    SaveSucceeded,
    SaveFailed(ApiError),
    /// Delete a gallery item; the confirmation prompt has already been accepted.
    Delete(i64),
    Deleted(i64),
    DeleteFailed { id: i64, error: ApiError },
    Share(i64),
    Shared { id: i64, url: String },
    ShareFailed { id: i64, error: ApiError },
    /// Outcome of the clipboard write that follows a share.
    Copied,
    CopyFailed(String),
    /// The editor canvas mounted or unmounted.
    CanvasAttached(bool),
}

/// Side effects requested by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Task {
    /// Read the pending file as a data URL.
    ReadUpload { token: u64 },
    /// Decode an uploaded data URL to learn its natural size.
    DecodeUpload { token: u64, data_url: String },
    /// Serialize the canvas and POST it to the apply-effect endpoint.
    ApplyEffect { token: u64, effect: String, intensity: u8 },
    /// Serialize the canvas and POST it with the upload form to the save endpoint.
    SaveImage { effect: String },
    DeleteImage(i64),
    ShareImage(i64),
    CopyToClipboard(String),
    NavigateHome { delay_ms: u32 },
    Notify { message: String, severity: Severity },
}

impl Task {
    fn notify(message: impl Into<String>, severity: Severity) -> Self {
        Self::Notify { message: message.into(), severity }
    }
}

/// Whether a `Save` dispatch took over the form submission.
#[must_use]
pub fn intercepts_submission(tasks: &[Task]) -> bool {
    tasks.iter().any(|task| matches!(task, Task::SaveImage { .. }))
}

/// Accept `image/*` MIME types only.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Owner of all editor and gallery state.
#[derive(Clone, Debug, Default)]
pub struct Controller {
    pub editor: EditorState,
    pub gallery: GalleryState,
}

impl Controller {
    #[must_use]
    pub fn new(gallery: Vec<GalleryItem>) -> Self {
        Self {
            editor: EditorState::default(),
            gallery: GalleryState::new(gallery),
        }
    }

    /// Apply one command and return the side effects to run, in order.
    pub fn dispatch(&mut self, command: Command) -> Vec<Task> {
        match command {
            Command::Upload { mime } => self.on_upload(&mime),
            Command::UploadRead { token, data_url } => {
                if self.editor.show_preview(token, data_url.clone()) && self.editor.canvas_attached {
                    vec![Task::DecodeUpload { token, data_url }]
                } else {
                    Vec::new()
                }
            }
            Command::UploadReadFailed { token } => {
                if self.editor.is_latest_upload(token) {
                    vec![Task::notify(UPLOAD_READ_FAILED_MESSAGE, Severity::Error)]
                } else {
                    Vec::new()
                }
            }
            Command::UploadDecoded { token, image } => {
                self.editor.load_upload(token, image);
                Vec::new()
            }
            Command::SelectEffect(effect) => self.on_select_effect(&effect),
            Command::AdjustIntensity(value) => {
                self.editor.set_intensity(value);
                if self.editor.effect.is_empty() {
                    Vec::new()
                } else {
                    self.request_effect()
                }
            }
            Command::EffectApplied { token, image } => {
                self.editor.finish_effect_request(token, Some(image));
                Vec::new()
            }
            Command::EffectFailed { token, error } => {
                if self.editor.finish_effect_request(token, None) {
                    vec![Task::notify(error.user_message(APPLY_EFFECT_ERROR_PREFIX), Severity::Error)]
                } else {
                    Vec::new()
                }
            }
            Command::Reset => {
                self.editor.reset();
                Vec::new()
            }
            Command::Save => {
                if self.editor.canvas_attached && !self.editor.effect.is_empty() {
                    vec![Task::SaveImage { effect: self.editor.effect.clone() }]
                } else {
                    Vec::new()
                }
            }
            Command::SaveSucceeded => vec![
                Task::notify(SAVE_SUCCESS_MESSAGE, Severity::Success),
                Task::NavigateHome { delay_ms: SAVE_REDIRECT_DELAY_MS },
            ],
            Command::SaveFailed(error) => {
                vec![Task::notify(error.user_message(SAVE_ERROR_PREFIX), Severity::Error)]
            }
            Command::Delete(id) => {
                if self.gallery.begin_request(id) {
                    vec![Task::DeleteImage(id)]
                } else {
                    Vec::new()
                }
            }
            Command::Deleted(id) => {
                self.gallery.finish_request(id);
                self.gallery.remove(id);
                vec![Task::notify(DELETE_SUCCESS_MESSAGE, Severity::Success)]
            }
            Command::DeleteFailed { id, error } => {
                self.gallery.finish_request(id);
                vec![Task::notify(error.user_message(DELETE_ERROR_PREFIX), Severity::Error)]
            }
            Command::Share(id) => {
                if self.gallery.begin_request(id) {
                    vec![Task::ShareImage(id)]
                } else {
                    Vec::new()
                }
            }
            Command::Shared { id, url } => {
                self.gallery.finish_request(id);
                vec![Task::CopyToClipboard(url)]
            }
            Command::Copied => vec![Task::notify(SHARE_SUCCESS_MESSAGE, Severity::Success)],
            Command::CopyFailed(url) => {
                vec![Task::notify(format!("{SHARE_COPY_FAILED_PREFIX}: {url}"), Severity::Info)]
            }
            Command::ShareFailed { id, error } => {
                self.gallery.finish_request(id);
                vec![Task::notify(error.user_message(SHARE_ERROR_PREFIX), Severity::Error)]
            }
            Command::CanvasAttached(attached) => {
                self.editor.canvas_attached = attached;
                Vec::new()
            }
        }
    }

    fn on_upload(&mut self, mime: &str) -> Vec<Task> {
        if !is_image_mime(mime) {
            return vec![Task::notify(NOT_AN_IMAGE_MESSAGE, Severity::Error)];
        }
        let token = self.editor.begin_upload();
        vec![Task::ReadUpload { token }]
    }

    fn on_select_effect(&mut self, effect: &str) -> Vec<Task> {
        let effect = effect.trim();
        if effect.is_empty() {
            return Vec::new();
        }
        self.editor.select_effect(effect);
        self.request_effect()
    }

    fn request_effect(&mut self) -> Vec<Task> {
        if !self.editor.has_image() {
            return Vec::new();
        }
        let token = self.editor.begin_effect_request();
        vec![Task::ApplyEffect {
            token,
            effect: self.editor.effect.clone(),
            intensity: self.editor.intensity,
        }]
    }
}
