//! Networking modules for the sign-in HTTP call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs and interprets the login request, and `types` defines the
//! wire schema shared with the auth endpoint.

pub mod api;
pub mod types;
