//! Ports - Interfaces to collaborators outside the core.
//!
//! - `LlmGateway` - Hosted text-generation model

mod llm_gateway;

pub use llm_gateway::{GatewayError, GatewayInfo, GatewayResponse, GenerationOptions, LlmGateway};
