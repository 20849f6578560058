//! Scanner HTTP adapter module.
//!
//! REST endpoints for the risk scan and the two narrative generators.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{ScannerApiError, ScannerAppState};
pub use routes::scanner_routes;
