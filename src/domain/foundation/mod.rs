//! Foundation module - Shared domain primitives.
//!
//! Error types shared by the risk, project and prompt modules.

mod errors;

pub use errors::{ErrorCode, ValidationError};
