/// Module containing environment variable helpers
pub mod config;
/// Module containing the recognition request hash
pub mod hash;
/// Module containing utilities for handling unique identifiers
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use hash::*;
pub use id::*;
pub use logger::*;
