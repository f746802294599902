//! OpenAI-compatible chat backend.
//!
//! Works with any endpoint that speaks the OpenAI chat completions API
//! (OpenAI, Azure OpenAI, OpenRouter, vLLM, Ollama in compatibility mode).
//!
//! # Example
//!
//! ```rust,no_run
//! use zyniq_inference::openai::{OpenAIChatBackend, OpenAIConfig};
//! use zyniq_core::ChatBackend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = OpenAIChatBackend::new(OpenAIConfig {
//!         api_key: Some("sk-...".to_string()),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//!     let reply = backend
//!         .send("blueprint-demo", "You are an AI consultant", "Assess my logistics company")
//!         .await
//!         .unwrap();
//!     println!("{}", reply);
//! }
//! ```

mod backend;
mod error;
mod types;

pub use backend::{
    OpenAIChatBackend, OpenAIConfig, DEFAULT_GEN_MODEL, DEFAULT_OPENAI_URL, DEFAULT_TIMEOUT_SECS,
};
pub use error::{to_provider_error, OpenAIErrorCode};
pub use types::*;
