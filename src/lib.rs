//! campaign-admin - terminal console for an organization's campaigns
//!
//! Filter, sort and search the campaign list, and archive campaigns in bulk
//! through the organizing platform's GraphQL API.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
