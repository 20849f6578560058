//! LLM Gateway Adapters.
//!
//! Implementations of the LlmGateway port.
//!
//! ## Available Adapters
//!
//! - `OpenAIGateway` - OpenAI chat completions
//! - `MockGateway` - Configurable in-memory gateway for tests and offline runs

mod mock_gateway;
mod openai_gateway;

pub use mock_gateway::{MockGateway, RecordedCall};
pub use openai_gateway::{OpenAIConfig, OpenAIGateway, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};
