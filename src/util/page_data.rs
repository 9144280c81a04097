//! Page bootstrap data embedded by the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Django template renders
//! `<script id="pycam-data" type="application/json">…</script>` carrying the
//! client configuration, the user's gallery, and pending flash messages.
//! A missing or malformed blob falls back to defaults so the editor still
//! mounts with the stock routes and an empty gallery.

#[cfg(test)]
#[path = "page_data_test.rs"]
mod page_data_test;

use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::state::gallery::GalleryItem;
use crate::state::ui::FlashMessage;

/// Element id of the bootstrap `<script>` tag.
pub const PAGE_DATA_ELEMENT_ID: &str = "pycam-data";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    pub config: ClientConfig,
    pub gallery: Vec<GalleryItem>,
    pub messages: Vec<FlashMessage>,
}

/// Parse the bootstrap JSON. Blank input is treated as an empty object.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed JSON.
pub fn parse_page_data(raw: &str) -> Result<PageData, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(PageData::default());
    }
    serde_json::from_str(raw)
}

/// Read and parse the bootstrap blob from the live document.
pub fn load_page_data() -> PageData {
    #[cfg(feature = "csr")]
    {
        let Some(raw) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(PAGE_DATA_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return PageData::default();
        };
        match parse_page_data(&raw) {
            Ok(data) => data,
            Err(e) => {
                leptos::logging::warn!("page data unreadable, using defaults: {e}");
                PageData::default()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        PageData::default()
    }
}
