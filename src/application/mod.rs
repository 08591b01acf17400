/// Session handling
pub mod auth;
/// recognize.im client
pub mod client;
/// Application configuration module
pub mod config;
/// Success/error handler registry
pub mod handlers;
/// Service interfaces implemented by the client
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
