//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor, gallery, and navigation chrome while
//! reading shared state from Leptos context providers. Editor and gallery
//! changes go through `util::tasks::dispatch`; chrome state is updated in
//! place.

pub mod alert;
pub mod dropdown;
pub mod editor_canvas;
pub mod effect_panel;
pub mod gallery_card;
pub mod nav_menu;
pub mod notifications;
pub mod tooltip;
pub mod upload_panel;
