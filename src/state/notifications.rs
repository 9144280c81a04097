//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Each notification has a stable id so timer callbacks can address it after
//! the fact. Manual dismissal removes the entry outright without cancelling
//! its timers; the later `begin_hiding`/`remove` calls then find nothing and
//! do nothing.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Visual tone of a notification; doubles as its CSS modifier class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Lifecycle phase driving the hide transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Visible,
    Hiding,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

/// All notifications currently attached to the page, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationsState {
    /// Append a visible notification and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            phase: Phase::Visible,
        });
        id
    }

    /// Start the hide transition. No-op for unknown ids.
    pub fn begin_hiding(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.phase = Phase::Hiding;
        }
    }

    /// Detach a notification. Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }
}
