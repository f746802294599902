//! One model call, decoded into a record, with fallback on failure.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use zyniq_core::{
    parse_record, ChatBackend, FailureKind, FallbackPolicy, StructuredRecord,
};

/// Where a returned value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "source", content = "failure")]
pub enum Outcome {
    /// Decoded from the model reply.
    Model,
    /// Substituted from the fallback table.
    Fallback(FailureKind),
}

impl Outcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Outcome::Model => None,
            Outcome::Fallback(kind) => Some(*kind),
        }
    }
}

/// A value together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated<T> {
    pub value: T,
    pub outcome: Outcome,
}

impl<T> Generated<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// A single prompt exchange.
pub(crate) struct Exchange<'a> {
    pub component: &'static str,
    pub session_id: &'a str,
    pub system_prompt: &'a str,
    pub user_text: &'a str,
}

/// Send one exchange and decode the reply into `T`.
///
/// Never fails: provider failures and undecodable replies resolve through
/// `fallbacks`. The provider is called exactly once.
pub(crate) async fn request_record<T>(
    backend: &dyn ChatBackend,
    exchange: Exchange<'_>,
    fallbacks: &FallbackPolicy<T>,
) -> Generated<T>
where
    T: StructuredRecord + Clone,
{
    let start = Instant::now();

    let raw = match backend
        .send(exchange.session_id, exchange.system_prompt, exchange.user_text)
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            warn!(
                subsystem = "inference",
                component = exchange.component,
                session_id = exchange.session_id,
                model = backend.model_name(),
                failure_kind = %FailureKind::ProviderUnavailable,
                error = %e,
                duration_ms = start.elapsed().as_millis() as u64,
                "Model call failed, using fallback"
            );
            return fallback(fallbacks, FailureKind::ProviderUnavailable);
        }
    };

    match parse_record::<T>(&raw) {
        Ok(value) => {
            debug!(
                subsystem = "inference",
                component = exchange.component,
                session_id = exchange.session_id,
                response_len = raw.len(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Model reply decoded"
            );
            Generated {
                value,
                outcome: Outcome::Model,
            }
        }
        Err(e) => {
            warn!(
                subsystem = "inference",
                component = exchange.component,
                session_id = exchange.session_id,
                model = backend.model_name(),
                failure_kind = %FailureKind::Unparseable,
                error = %e,
                response_len = raw.len(),
                "Model reply not decodable, using fallback"
            );
            fallback(fallbacks, FailureKind::Unparseable)
        }
    }
}

fn fallback<T: Clone>(fallbacks: &FallbackPolicy<T>, kind: FailureKind) -> Generated<T> {
    Generated {
        value: fallbacks.resolve(kind),
        outcome: Outcome::Fallback(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        assert!(!Outcome::Model.is_fallback());
        assert_eq!(Outcome::Model.failure_kind(), None);

        let fb = Outcome::Fallback(FailureKind::Unparseable);
        assert!(fb.is_fallback());
        assert_eq!(fb.failure_kind(), Some(FailureKind::Unparseable));
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(
            serde_json::to_value(Outcome::Model).unwrap(),
            serde_json::json!({"source": "model"})
        );
        assert_eq!(
            serde_json::to_value(Outcome::Fallback(FailureKind::ProviderUnavailable)).unwrap(),
            serde_json::json!({"source": "fallback", "failure": "provider_unavailable"})
        );
    }
}
