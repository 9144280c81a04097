//! Wire DTOs for the editor's JSON endpoints.
//!
//! DESIGN
//! ======
//! The server signals failure in two shapes: `/apply-effect/` uses
//! `status`/`message`, the gallery and save endpoints use `success`/`error`.
//! Each response type folds its shape into `Result` so callers only see
//! `ApiError`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::api::ApiError;

/// Response body of `POST /apply-effect/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyEffectResponse {
    pub status: String,
    /// Processed image reference (usually a base64 data URL).
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub effect: Option<String>,
}

impl ApplyEffectResponse {
    /// Return the processed image reference, or the server's failure reason.
    ///
    /// # Errors
    ///
    /// `Rejected` when `status` is not `"success"`; `Decode` when a success
    /// response carries no image.
    pub fn into_image(self) -> Result<String, ApiError> {
        if self.status != "success" {
            return Err(ApiError::Rejected(self.message.unwrap_or_default()));
        }
        self.image
            .filter(|image| !image.is_empty())
            .ok_or_else(|| ApiError::Decode("success response without image".to_owned()))
    }
}

/// Response body shared by `/save/`, `/delete/{id}/` and `/share/{id}/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    /// Only present on `/share/{id}/`.
    #[serde(default)]
    pub url: Option<String>,
}

impl ActionResponse {
    /// Collapse `success: false` into `ApiError::Rejected`.
    ///
    /// # Errors
    ///
    /// `Rejected` carrying the server's `error` text.
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::Rejected(self.error.unwrap_or_default()))
        }
    }

    /// Extract the shareable URL from a successful share response.
    ///
    /// # Errors
    ///
    /// `Rejected` on `success: false`; `Decode` when the URL is missing.
    pub fn into_share_url(self) -> Result<String, ApiError> {
        self.into_result()?
            .url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ApiError::Decode("share response without url".to_owned()))
    }
}
