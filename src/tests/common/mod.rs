//! Common Test Utilities
//!
//! Shared fixtures and helpers for the view-level tests:
//! - Campaign rows and services wiring (`fixtures`)

pub mod fixtures;

pub use fixtures::*;
