//! Networking modules for the identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `api` performs the HTTP exchanges, and
//! `authenticator` turns exchange results into an installed credential.

pub mod api;
pub mod authenticator;
pub mod types;
