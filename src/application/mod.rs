//! Application layer - Commands and Handlers.
//!
//! Orchestrates the pure domain services and the LLM gateway port. Each
//! handler serves a single user action and keeps no state between calls.

pub mod handlers;

pub use handlers::{
    GenerateNarrativeCommand, GenerateNarrativeHandler, NarrativeError, NarrativeResult,
    ScanCommunicationsCommand, ScanCommunicationsHandler, ScanError,
};
