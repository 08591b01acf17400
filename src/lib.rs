/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # recognize-client
//!
//! Asynchronous client for the recognize.im image recognition service.
//!
//! The service exposes two surfaces:
//!
//! - a SOAP endpoint for account and image management (`userGet`, `imageInsert`,
//!   `indexBuild`, ...), gated by a session cookie obtained from the `auth` method;
//! - a binary endpoint for recognition, where the raw JPEG is posted together with
//!   an MD5 hash of the API key and the image bytes.
//!
//! The [`Client`](application::client::Client) authenticates transparently before the
//! first SOAP call, normalizes the `key`/`value` maps returned by the service into
//! JSON objects and reports every terminal outcome both to the caller and to the
//! optional success/error handlers registered on the client.
//!
//! ## Example
//!
//! ```ignore
//! use recognize_client::prelude::*;
//!
//! setup_logger();
//! let client = Client::new(Config::new())?;
//! client.on_error(|err| error!("call failed: {}", err.message()));
//!
//! let status = client.index_status().await?;
//! let result = client
//!     .recognize(&jpeg_bytes, RecognizeOptions::single())
//!     .await?;
//! ```

/// Client, authentication, configuration and service traits
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by the whole crate
pub mod error;
/// Wire models: SOAP codec, result normalizer, requests and responses
pub mod model;
/// Typed views over service payloads
pub mod presentation;
/// Commonly used re-exports
pub mod prelude;
/// Configuration, logging, identifiers and hashing helpers
pub mod utils;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
