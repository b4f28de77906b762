//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by region (`emails`, `breaches`, `schedule`) plus the
//! cross-cutting `session` and `alert`, so each component depends on a small
//! focused model. `region` holds the request sequencing shared by all three;
//! `ui` tracks the active tab.

pub mod alert;
pub mod breaches;
pub mod emails;
pub mod region;
pub mod schedule;
pub mod session;
pub mod ui;
