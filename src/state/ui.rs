//! Local UI chrome state (dropdowns, mobile menu, flash alerts).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of editor state so navigation
//! affordances can evolve independently of the image workflow.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::{Deserialize, Serialize};

/// A server-side flash message rendered as a dismissible alert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Django message level tag (`success`, `error`, `info`, `warning`).
    #[serde(default = "default_level")]
    pub level: String,
    pub text: String,
}

fn default_level() -> String {
    "info".to_owned()
}

/// UI state for navigation chrome and alerts.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Key of the dropdown whose menu is shown, if any.
    pub open_dropdown: Option<String>,
    pub mobile_menu_open: bool,
    /// Flash alerts still on screen, in server order.
    pub alerts: Vec<FlashMessage>,
}

impl UiState {
    #[must_use]
    pub fn with_alerts(alerts: Vec<FlashMessage>) -> Self {
        Self { alerts, ..Self::default() }
    }

    /// Flip one dropdown; opening it closes any other.
    pub fn toggle_dropdown(&mut self, key: &str) {
        if self.open_dropdown.as_deref() == Some(key) {
            self.open_dropdown = None;
        } else {
            self.open_dropdown = Some(key.to_owned());
        }
    }

    #[must_use]
    pub fn is_dropdown_open(&self, key: &str) -> bool {
        self.open_dropdown.as_deref() == Some(key)
    }

    /// Whether a click inside `clicked_inside` (or outside every dropdown
    /// when `None`) would close the open dropdown.
    #[must_use]
    pub fn outside_click_closes(&self, clicked_inside: Option<&str>) -> bool {
        self.open_dropdown.is_some() && self.open_dropdown.as_deref() != clicked_inside
    }

    /// Close the open dropdown unless the click landed inside it.
    pub fn close_dropdowns_on_outside_click(&mut self, clicked_inside: Option<&str>) {
        if self.outside_click_closes(clicked_inside) {
            self.open_dropdown = None;
        }
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Remove the alert at `index`; out-of-range indices are ignored.
    pub fn dismiss_alert(&mut self, index: usize) {
        if index < self.alerts.len() {
            self.alerts.remove(index);
        }
    }
}
