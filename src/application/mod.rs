/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Request and response bodies of the HTTP API
pub mod models;
/// Rate limiter module for model request throttling
pub mod rate_limiter;
/// Service implementations
pub mod services;
