//! # zyniq-core
//!
//! Core types, traits, and abstractions for the ZYNIQ blueprint service.
//!
//! This crate provides the domain records, the error taxonomy, the
//! structured reply parser, and the fallback policy that the inference,
//! database, and API crates build on.

pub mod defaults;
pub mod error;
pub mod fallback;
pub mod logging;
pub mod models;
pub mod structured;
pub mod traits;
pub mod uuid_utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use fallback::{
    blueprint_fallbacks, provider_unavailable_blueprint, refinement_fallbacks,
    unparseable_blueprint, FailureKind, FallbackPolicy, REFINEMENT_FALLBACK_TEXT,
};
pub use models::*;
pub use structured::{parse_object, parse_record, FieldSet, ParseError, StructuredRecord};
pub use traits::*;
pub use uuid_utils::{new_v7, session_token};
