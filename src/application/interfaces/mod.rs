/// City comparison service interface
pub mod comparison;
/// Market report service interface
pub mod report;
