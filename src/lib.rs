/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # TalentScope Client
//!
//! A Rust client for the TalentScope API: authentication, resume batch
//! lifecycle, candidate review, CV parsing and webhook configuration.
//!
//! Every operation validates its arguments, sends exactly one HTTP request
//! and returns the decoded JSON body as a [`serde_json::Value`].
//!
//! ```ignore
//! use talentscope_client::prelude::*;
//!
//! let client = TalentScopeClient::new("https://api.talentscope.com", "access", "refresh")?;
//! let batches = client.resume_batch.listing().await?;
//! ```

/// Application layer: configuration, facade and resource services
pub mod application;
/// Constants used across the crate
pub mod constants;
/// Error types
pub mod error;
/// HTTP transport and request models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Validation, configuration and logging helpers
pub mod utils;

pub use application::config;

/// Crate version as declared in `Cargo.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
