//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, location,
//! timers, dialogs, locale) from component logic to improve reuse and
//! testability.

pub mod alert;
pub mod auth;
pub mod dialog;
pub mod format;
