//! Networking modules for the marketplace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the admin calls, `envelope` unwraps the backend's response
//! shapes, and `types` defines the wire schema.

pub mod api;
pub mod envelope;
pub mod types;
