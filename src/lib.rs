/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # fiskaly client
//!
//! Rust client for the fiskaly SIGN ES invoicing API and the fiskaly
//! management (dashboard) API.
//!
//! Every operation is a single HTTP round trip routed through one
//! authenticated request façade ([`model::http::HttpClient`]), which attaches
//! the bearer token of the selected API, translates failures into
//! [`error::AppError`] and hands back either JSON or raw bytes.
//!
//! ## Example
//! ```ignore
//! use fiskaly_client::prelude::*;
//!
//! let config = Config::with_credentials("key", "secret");
//! let client = Client::new(config)?;
//! client.auth().login().await?;
//!
//! let device = client.clients().create(None, None).await?;
//! println!("{}", device.content.id);
//! ```

/// Session, configuration, auth flows and resource services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Transport, wire-level request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Resource content types
pub mod presentation;
/// Helpers for configuration, ids and logging
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
