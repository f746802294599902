//! # zyniq-inference
//!
//! LLM chat backend and the blueprint pipeline for the ZYNIQ service.
//!
//! This crate provides:
//! - OpenAI-compatible chat backend
//! - Blueprint generator with two-class fallback
//! - Blueprint refiner with a single fallback answer
//! - Scripted mock backend (feature `mock`)
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use zyniq_core::BlueprintRequest;
//! use zyniq_inference::{BlueprintGenerator, OpenAIChatBackend};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = OpenAIChatBackend::from_env().unwrap();
//!     let generator = BlueprintGenerator::new(Arc::new(backend));
//!     let blueprint = generator
//!         .generate(&BlueprintRequest::new("You are an AI strategist", "Retail chain, 40 stores"))
//!         .await;
//!     println!("{}", blueprint.headline);
//! }
//! ```

pub mod blueprint;
pub mod openai;
pub mod pipeline;
pub mod refinement;

// Mock chat backend for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use blueprint::{BlueprintGenerator, JSON_INSTRUCTION};
pub use openai::{OpenAIChatBackend, OpenAIConfig};
pub use pipeline::{Generated, Outcome};
pub use refinement::{BlueprintRefiner, REFINEMENT_SYSTEM_PROMPT};
