//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `controller` owns the editor and gallery models and is the only writer of
//! them; `notifications` and `ui` are presentation state mutated directly by
//! their components.

pub mod controller;
pub mod editor;
pub mod gallery;
pub mod notifications;
pub mod ui;
