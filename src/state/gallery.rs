//! Gallery of the user's saved edits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Items arrive with the page bootstrap data. The only local mutation is
//! removing a card after the server confirmed its deletion. While a delete
//! or share request for a card is in flight its id sits in `pending`, and
//! further requests for that card are refused.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One saved edit as rendered on a gallery card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: i64,
    #[serde(default)]
    pub original_image_url: String,
    #[serde(default)]
    pub edited_image_url: String,
    #[serde(default)]
    pub effect_applied: String,
    #[serde(default)]
    pub created_at: String,
}

impl GalleryItem {
    /// Image shown on the card; falls back to the original when no edit exists.
    #[must_use]
    pub fn display_url(&self) -> &str {
        if self.edited_image_url.is_empty() {
            &self.original_image_url
        } else {
            &self.edited_image_url
        }
    }

    /// Human label for the applied effect.
    #[must_use]
    pub fn effect_label(&self) -> String {
        if self.effect_applied.is_empty() || self.effect_applied == "original" {
            return "Original".to_owned();
        }
        let mut label = self.effect_applied.replace('_', " ");
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        label
    }
}

#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub items: Vec<GalleryItem>,
    /// Ids with a delete or share request in flight.
    pub pending: BTreeSet<i64>,
}

impl GalleryState {
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items, pending: BTreeSet::new() }
    }

    /// Mark `id` busy. Returns `false` when the card is unknown or already
    /// has a request in flight.
    pub fn begin_request(&mut self, id: i64) -> bool {
        self.contains(id) && self.pending.insert(id)
    }

    pub fn finish_request(&mut self, id: i64) {
        self.pending.remove(&id);
    }

    #[must_use]
    pub fn is_pending(&self, id: i64) -> bool {
        self.pending.contains(&id)
    }

    /// Remove exactly the card with `id`. Returns whether it existed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}
