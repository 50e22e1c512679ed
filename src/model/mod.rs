/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// HTTP request utilities with rate limiting and retry
pub mod http;
/// Request models for the Gemini API
pub mod requests;
/// Response models from the Gemini API
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
