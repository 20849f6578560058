//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM gateways (OpenAI, mock)
//! - `http` - Axum REST endpoints

pub mod ai;
pub mod http;

pub use ai::{MockGateway, OpenAIGateway};
pub use http::{build_router, ScannerAppState};
