//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the session value and its single owning context; `session`
//! derives that value from the stored credential.

pub mod auth;
pub mod session;
