/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Realty Genie
//!
//! Backend that turns the monthly Greater Vancouver stats package (a PDF) into
//! structured market data, and publishes it.
//!
//! ## Pipeline
//!
//! 1. [`source`] downloads `GVR-Stats-Package-{Month}-{Year}.pdf` and caches it.
//! 2. [`gemini`] sends the PDF with a prompt to the Gemini REST API and repairs
//!    the JSON the model answers with.
//! 3. [`storage`] keeps reports and city comparisons in PostgreSQL, or in
//!    memory when no database is configured.
//! 4. [`render`] turns infographic and comparison data into email HTML and PNG
//!    images; [`mail`] delivers it over SMTP.
//! 5. [`server`] exposes everything as a JSON HTTP API.
//!
//! ## Configuration
//!
//! Everything is read from the environment (a `.env` file is loaded first),
//! see [`application::config::Config`].
//!
//! ```rust,no_run
//! use realty_genie::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), AppError> {
//! setup_logger();
//! let config = Arc::new(Config::new());
//! let state = AppState::from_config(config.clone()).await?;
//! serve(&config.server, state).await?;
//! # Ok(())
//! # }
//! ```

/// Configuration, services and HTTP models
pub mod application;
/// Crate wide constants
pub mod constants;
/// Error type
pub mod error;
/// Gemini client, prompts and JSON repair
pub mod gemini;
/// Email delivery
pub mod mail;
/// Wire models of the model API and HTTP plumbing
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain types
pub mod presentation;
/// HTML and image rendering
pub mod render;
/// HTTP server
pub mod server;
/// Stats package download
pub mod source;
/// Report persistence
pub mod storage;
/// Utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
