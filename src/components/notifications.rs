//! Toast notification host and the timer-driven `show_notification` helper.
//!
//! DESIGN
//! ======
//! A notification slides in as soon as it is pushed, starts hiding after
//! `NOTIFICATION_DISPLAY_MS`, and is detached `NOTIFICATION_HIDE_MS` later.
//! The close button detaches immediately; the pending timers then address
//! an id that no longer exists and do nothing.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationsState, Phase, Severity};

/// CSS classes for one toast. `show` drives the slide-in transition.
pub fn notification_class(severity: Severity, phase: Phase) -> String {
    let mut class = format!("notification notification-{}", severity.css_class());
    if phase == Phase::Visible {
        class.push_str(" show");
    }
    class
}

/// Push a notification and schedule its hide and removal.
///
/// Returns the new id, or `None` when the state signal is already disposed.
pub fn show_notification(notifications: RwSignal<NotificationsState>, message: String, severity: Severity) -> Option<u64> {
    let id = notifications.try_update(|state| state.push(message, severity))?;

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use std::time::Duration;

        use crate::config::{NOTIFICATION_DISPLAY_MS, NOTIFICATION_HIDE_MS};

        gloo_timers::future::sleep(Duration::from_millis(u64::from(NOTIFICATION_DISPLAY_MS))).await;
        notifications.try_update(|state| state.begin_hiding(id));
        gloo_timers::future::sleep(Duration::from_millis(u64::from(NOTIFICATION_HIDE_MS))).await;
        notifications.try_update(|state| state.remove(id));
    });

    Some(id)
}

/// Fixed stack of toasts in the page corner.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || notifications.get().items
                key=|n: &Notification| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    let class = move || {
                        notifications.with(|state| {
                            state
                                .get(id)
                                .map(|n| notification_class(n.severity, n.phase))
                                .unwrap_or_default()
                        })
                    };
                    view! {
                        <div class=class role="status">
                            <span class="notification-message">{n.message}</span>
                            <button
                                class="notification-close"
                                title="Close"
                                aria-label="Close notification"
                                on:click=move |_| {
                                    notifications.update(|state| {
                                        state.remove(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
