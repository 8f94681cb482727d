//! Networking modules for the server's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls from the browser and `types` defines the JSON
//! bodies shared with the server.

pub mod api;
pub mod types;
