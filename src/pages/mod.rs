//! Route-level page components.

pub mod dashboard;
pub mod login;
pub mod register;
