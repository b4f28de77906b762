//! Networking modules for the breach backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` describes and executes authenticated REST calls, and `types` defines
//! the shared wire schema.

pub mod api;
pub mod types;
