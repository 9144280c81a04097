//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (cookies, canvas, clipboard,
//! file reading, form markup) from page and component logic so the pure
//! parts stay testable off the browser.

pub mod canvas_render;
pub mod clipboard;
pub mod csrf;
#[cfg(feature = "csr")]
pub mod image_io;
pub mod page_data;
pub mod tasks;
pub mod validation;
