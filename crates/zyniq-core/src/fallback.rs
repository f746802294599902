//! Deterministic fallback content for failed model calls.
//!
//! Failures on the generation path never reach the HTTP caller. Each
//! failure class maps to fixed content through a [`FallbackPolicy`] table.
//! Blueprint generation distinguishes the two classes; refinement answers
//! both with the same text.

use std::fmt;

use serde::Serialize;

use crate::models::{Blueprint, Refinement};

/// Why a model call did not yield a usable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport, timeout, provider error, or empty reply.
    ProviderUnavailable,
    /// The provider replied but the text did not decode into the record.
    Unparseable,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::ProviderUnavailable => "provider_unavailable",
            FailureKind::Unparseable => "unparseable",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table from failure class to substitute content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy<T> {
    on_provider_unavailable: T,
    on_unparseable: T,
}

impl<T: Clone> FallbackPolicy<T> {
    pub fn new(on_provider_unavailable: T, on_unparseable: T) -> Self {
        Self {
            on_provider_unavailable,
            on_unparseable,
        }
    }

    /// Same content for every failure class.
    pub fn uniform(content: T) -> Self {
        Self::new(content.clone(), content)
    }

    pub fn resolve(&self, kind: FailureKind) -> T {
        match kind {
            FailureKind::ProviderUnavailable => self.on_provider_unavailable.clone(),
            FailureKind::Unparseable => self.on_unparseable.clone(),
        }
    }
}

// =============================================================================
// BLUEPRINT FALLBACKS
// =============================================================================

/// Headline of the blueprint returned when the provider is unreachable.
pub const PROVIDER_UNAVAILABLE_HEADLINE: &str = "Strategic AI Assessment Complete";

pub const PROVIDER_UNAVAILABLE_KEY_POINTS: [&str; 4] = [
    "Your organization shows strong potential for AI integration",
    "Custom AI solutions can address your specific operational needs",
    "Data analytics capabilities will enhance decision-making processes",
    "Intelligent automation can optimize workflow efficiency",
];

pub const PROVIDER_UNAVAILABLE_RECOMMENDATION: &str = "Based on your assessment, we recommend starting with a comprehensive AI strategy consultation to identify the highest-impact opportunities for your organization.";

/// Headline of the blueprint returned when the reply cannot be decoded.
pub const UNPARSEABLE_HEADLINE: &str = "AI Strategy Consultation Recommended";

pub const UNPARSEABLE_KEY_POINTS: [&str; 3] = [
    "Assessment indicates readiness for AI implementation",
    "Multiple integration opportunities have been identified",
    "Strategic planning will maximize technology investments",
];

pub const UNPARSEABLE_RECOMMENDATION: &str = "We recommend scheduling a detailed consultation to explore your AI transformation potential further.";

/// Fallback blueprint for transport/provider failure.
pub fn provider_unavailable_blueprint() -> Blueprint {
    Blueprint::new(
        PROVIDER_UNAVAILABLE_HEADLINE,
        PROVIDER_UNAVAILABLE_KEY_POINTS,
        PROVIDER_UNAVAILABLE_RECOMMENDATION,
    )
}

/// Fallback blueprint for a reply that did not decode.
pub fn unparseable_blueprint() -> Blueprint {
    Blueprint::new(
        UNPARSEABLE_HEADLINE,
        UNPARSEABLE_KEY_POINTS,
        UNPARSEABLE_RECOMMENDATION,
    )
}

pub fn blueprint_fallbacks() -> FallbackPolicy<Blueprint> {
    FallbackPolicy::new(provider_unavailable_blueprint(), unparseable_blueprint())
}

// =============================================================================
// REFINEMENT FALLBACK
// =============================================================================

pub const REFINEMENT_FALLBACK_TEXT: &str = "I apologize, but I'm having trouble processing that question right now. Please try rephrasing it, or feel free to contact our team directly for personalized assistance.";

pub fn refinement_fallbacks() -> FallbackPolicy<Refinement> {
    FallbackPolicy::uniform(Refinement::new(REFINEMENT_FALLBACK_TEXT))
}
