/// City comparison models
pub mod comparison;
/// Infographic models
pub mod infographic;
/// Report period (month and year)
pub mod period;
/// Stored report documents
pub mod report;
/// Serialization utilities for model output
pub mod serialization;
/// Terminal tables
pub mod table;

pub use comparison::*;
pub use infographic::*;
pub use period::*;
pub use report::*;
pub use table::*;
