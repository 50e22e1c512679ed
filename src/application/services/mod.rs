/// Module containing the city comparison service
pub mod comparison_service;
/// Module containing the market report service
pub mod report_service;

pub use crate::application::interfaces::comparison::*;
pub use crate::application::interfaces::report::*;
pub use comparison_service::ComparisonServiceImpl;
pub use report_service::ReportServiceImpl;
