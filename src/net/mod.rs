//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines their wire schema.

pub mod api;
pub mod types;
