/// Request bodies of the HTTP API
pub mod requests;
/// Response bodies of the HTTP API
pub mod responses;

pub use requests::*;
pub use responses::*;
