/// Standard and management authentication flows, session state
pub mod auth;
/// Top-level client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Service implementations over the shared HTTP client
pub mod services;
