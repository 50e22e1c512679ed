/// Gemini REST client
pub mod client;
/// Prompts sent with the stats package
pub mod prompts;
/// Repair of model JSON
pub mod repair;

pub use client::{GeminiClient, ReportExtractor};
pub use repair::{RepairedJson, parse_model_json, parse_model_object};
