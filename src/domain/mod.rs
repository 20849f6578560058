//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error types
//! - `project` - Project context supplied with each request
//! - `risk` - Keyword tables, scoring and readiness
//! - `prompts` - Prompt pairs for narrative generation

pub mod foundation;
pub mod project;
pub mod prompts;
pub mod risk;
