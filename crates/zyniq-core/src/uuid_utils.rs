//! Identifier helpers.
//!
//! Record ids are UUIDv7, which embed a millisecond timestamp and sort by
//! creation time. Provider session tokens are prefixed random UUIDv4s, fresh
//! for every generate/refine call.

use uuid::Uuid;

/// Generate a new UUIDv7 identifier.
///
/// # Example
///
/// ```
/// use zyniq_core::uuid_utils::new_v7;
///
/// let id = new_v7();
/// assert_eq!(id.get_version_num(), 7);
/// ```
#[inline]
pub fn new_v7() -> Uuid {
    Uuid::now_v7()
}

/// Build a provider session token: `{prefix}-{uuid v4}`.
///
/// ```
/// use zyniq_core::uuid_utils::session_token;
///
/// let token = session_token("blueprint");
/// assert!(token.starts_with("blueprint-"));
/// ```
pub fn session_token(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}
