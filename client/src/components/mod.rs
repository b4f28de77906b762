//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each dashboard tab has one component module that also owns the controller
//! functions loading and mutating its region. All of them read the shared
//! `DashboardContext`.

pub mod alert_banner;
pub mod breach_card;
pub mod breach_viewer;
pub mod email_manager;
pub mod schedule_settings;
