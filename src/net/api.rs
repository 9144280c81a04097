//! HTTP helpers for the editor and gallery endpoints.
//!
//! Client-side (csr): real requests via `gloo-net`, carrying the
//! `X-Requested-With` marker the server uses to answer with JSON and, for
//! state-changing calls, the anti-forgery header.
//! Native builds: the request functions are absent; only the pure error and
//! message helpers compile so they can be unit tested.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. The server's own failure flag
//! becomes `Rejected`; anything that keeps us from reading a well-formed body
//! is `Transport` or `Decode`, which the UI reports identically.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
use super::types::{ActionResponse, ApplyEffectResponse};
#[cfg(feature = "csr")]
use crate::config::ClientConfig;

/// Generic user-facing text for transport and decode failures.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Failure of a request to one of the editor endpoints.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered and reported failure.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user: `"{prefix}: {reason}"` for server rejections,
    /// the generic network message otherwise.
    #[must_use]
    pub fn user_message(&self, prefix: &str) -> String {
        match self {
            Self::Rejected(reason) => format!("{prefix}: {reason}"),
            Self::Transport(_) | Self::Decode(_) => NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn http_status_message(status: u16) -> String {
    format!("unexpected HTTP status: {status}")
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
fn with_headers(
    builder: gloo_net::http::RequestBuilder,
    config: &ClientConfig,
    with_csrf: bool,
) -> gloo_net::http::RequestBuilder {
    let builder = builder.header("X-Requested-With", "XMLHttpRequest");
    if !with_csrf {
        return builder;
    }
    let token = crate::util::csrf::document_csrf_token(&config.csrf_cookie_name);
    builder.header(&config.csrf_header_name, &token)
}

/// Decode a JSON body regardless of HTTP status; the server reports most
/// failures in a 200 body. A non-JSON error page counts as transport failure.
#[cfg(feature = "csr")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let ok = resp.ok();
    let status = resp.status();
    match resp.json::<T>().await {
        Ok(body) => Ok(body),
        Err(_) if !ok => Err(ApiError::Transport(http_status_message(status))),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// `POST /apply-effect/` with the serialized image and effect parameters.
///
/// Returns the processed image reference.
///
/// # Errors
///
/// See [`ApiError`].
#[cfg(feature = "csr")]
pub async fn apply_effect(
    config: &ClientConfig,
    effect: &str,
    intensity: u8,
    image_data: &str,
) -> Result<String, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Transport("FormData unavailable".to_owned()))?;
    form.append_with_str("effect", effect)
        .and_then(|()| form.append_with_str("intensity", &intensity.to_string()))
        .and_then(|()| form.append_with_str("image", image_data))
        .map_err(|_| ApiError::Transport("could not build request body".to_owned()))?;

    let request = with_headers(gloo_net::http::Request::post(&config.apply_effect_url), config, true)
        .body(form)
        .map_err(transport)?;
    let resp = request.send().await.map_err(transport)?;
    let body: ApplyEffectResponse = decode(resp).await?;
    body.into_image()
}

/// `POST /save/` with the upload form's fields plus the edited image.
///
/// # Errors
///
/// See [`ApiError`].
#[cfg(feature = "csr")]
pub async fn save_image(
    config: &ClientConfig,
    form: &web_sys::HtmlFormElement,
    image_data: &str,
    effect: &str,
) -> Result<(), ApiError> {
    let data = web_sys::FormData::new_with_form(form)
        .map_err(|_| ApiError::Transport("could not read form fields".to_owned()))?;
    data.append_with_str("image", image_data)
        .and_then(|()| data.append_with_str("effect_applied", effect))
        .map_err(|_| ApiError::Transport("could not build request body".to_owned()))?;

    let request = with_headers(gloo_net::http::Request::post(&config.save_url), config, true)
        .body(data)
        .map_err(transport)?;
    let resp = request.send().await.map_err(transport)?;
    let body: ActionResponse = decode(resp).await?;
    body.into_result().map(|_| ())
}

/// `DELETE /delete/{id}/`.
///
/// # Errors
///
/// See [`ApiError`].
#[cfg(feature = "csr")]
pub async fn delete_image(config: &ClientConfig, image_id: i64) -> Result<(), ApiError> {
    let url = config.delete_endpoint(image_id);
    let resp = with_headers(gloo_net::http::Request::delete(&url), config, true)
        .send()
        .await
        .map_err(transport)?;
    let body: ActionResponse = decode(resp).await?;
    body.into_result().map(|_| ())
}

/// `GET /share/{id}/`, returning the absolute shareable URL.
///
/// # Errors
///
/// See [`ApiError`].
#[cfg(feature = "csr")]
pub async fn share_image(config: &ClientConfig, image_id: i64) -> Result<String, ApiError> {
    let url = config.share_endpoint(image_id);
    let resp = with_headers(gloo_net::http::Request::get(&url), config, false)
        .send()
        .await
        .map_err(transport)?;
    let body: ActionResponse = decode(resp).await?;
    body.into_share_url()
}
