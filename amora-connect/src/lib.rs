//! Amora Connect
//!
//! This crate provides the shared wire types for the Amora identity
//! service: request and response payloads for registration, email
//! verification and login.

pub mod api;

// Re-export the api types at crate root for convenience
pub use api::*;
