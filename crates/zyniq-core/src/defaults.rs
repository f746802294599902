//! Centralized default constants for the ZYNIQ service.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP port.
pub const SERVER_PORT: u16 = 8001;

/// CORS preflight cache duration in seconds.
pub const CORS_MAX_AGE_SECS: u64 = 3600;

/// Maximum accepted request body size.
pub const MAX_BODY_SIZE_BYTES: usize = 1024 * 1024;

// =============================================================================
// STORE
// =============================================================================

/// Default PostgreSQL connection string.
pub const DATABASE_URL: &str = "postgres://localhost/zyniq";

/// Upper bound on status checks returned by one listing.
pub const STATUS_LIST_LIMIT: i64 = 1000;

// =============================================================================
// INFERENCE
// =============================================================================

/// Fixed downstream model identifier.
pub const GEN_MODEL: &str = "gpt-4o";

/// Provider request timeout in seconds. The provider call is attempted once.
pub const GEN_TIMEOUT_SECS: u64 = 60;

/// Session token prefix for blueprint generation.
pub const BLUEPRINT_SESSION_PREFIX: &str = "blueprint";

/// Session token prefix for blueprint refinement.
pub const REFINEMENT_SESSION_PREFIX: &str = "refinement";
