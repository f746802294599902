//! Structured logging field names shared by every ZYNIQ crate.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Store write failed, request answered with 500 |
//! | WARN  | Model call failed, fallback content substituted |
//! | INFO  | Lifecycle events (startup, shutdown), records created |
//! | DEBUG | Provider calls, pool metrics, config choices |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID of the HTTP request (UUIDv7).
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "api", "db", "inference"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "openai", "generator", "refiner", "pool", "contacts"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "send", "generate", "refine", "save"
pub const OPERATION: &str = "op";

/// Provider correlation token for one generate/refine call.
pub const SESSION_ID: &str = "session_id";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Contact record UUID.
pub const CONTACT_ID: &str = "contact_id";

/// Database table affected.
pub const DB_TABLE: &str = "db_table";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Byte length of a prompt.
pub const PROMPT_LEN: &str = "prompt_len";

/// Byte length of a model response.
pub const RESPONSE_LEN: &str = "response_len";

/// Number of active connections in the pool.
pub const POOL_SIZE: &str = "pool_size";

/// Number of idle connections in the pool.
pub const POOL_IDLE: &str = "pool_idle";

// ─── Inference fields ──────────────────────────────────────────────────────

/// Model name used for inference.
pub const MODEL: &str = "model";

/// Failure class that triggered a fallback ("provider_unavailable", "unparseable").
pub const FAILURE_KIND: &str = "failure_kind";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
