// Presentation helpers for callers that expose the service over a
// request/response boundary.

pub mod links;
pub mod response;

pub use links::Links;
pub use response::ApiResponse;
