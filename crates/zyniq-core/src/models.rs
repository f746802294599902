//! Domain models for blueprint generation, refinement, and contact capture.
//!
//! Wire names are snake_case. Request types also accept the camelCase
//! spelling of every multi-word field; model reply records do not.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{Error, Result};

/// A JSON object carried through the service without inspection.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// BLUEPRINT
// =============================================================================

/// Structured strategic assessment produced by the model or by a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Blueprint {
    /// Short, impactful title for the strategy.
    pub headline: String,
    /// Ordered, actionable bullet points.
    pub key_points: Vec<String>,
    /// Concluding paragraph suggesting next steps.
    pub recommendation: String,
}

impl Blueprint {
    pub fn new(
        headline: impl Into<String>,
        key_points: impl IntoIterator<Item = impl Into<String>>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            headline: headline.into(),
            key_points: key_points.into_iter().map(Into::into).collect(),
            recommendation: recommendation.into(),
        }
    }

    /// A blueprint is complete when every field carries content.
    pub fn is_complete(&self) -> bool {
        !self.headline.trim().is_empty()
            && !self.key_points.is_empty()
            && !self.recommendation.trim().is_empty()
    }
}

/// Input to the blueprint generator.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlueprintRequest {
    /// Persona and formatting instructions for the model.
    #[serde(alias = "systemPrompt")]
    pub system_prompt: String,
    /// The client's self-assessment or question.
    #[serde(alias = "userQuery")]
    pub user_query: String,
}

impl BlueprintRequest {
    pub fn new(system_prompt: impl Into<String>, user_query: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_query: user_query.into(),
        }
    }

    /// Both fields are required and must be non-blank.
    pub fn validate(&self) -> Result<()> {
        require_non_blank("system_prompt", &self.system_prompt)?;
        require_non_blank("user_query", &self.user_query)
    }
}

// =============================================================================
// REFINEMENT
// =============================================================================

/// A follow-up question about a previously generated blueprint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefinementRequest {
    /// The client's follow-up question, embedded verbatim in the prompt.
    pub query: String,
    /// The blueprint the client received earlier. Opaque context.
    #[serde(alias = "initialBlueprint")]
    #[schema(value_type = Object)]
    pub initial_blueprint: JsonObject,
}

impl RefinementRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("query", &self.query)
    }
}

/// Free-text answer to a follow-up question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Refinement {
    pub refinement_text: String,
}

impl Refinement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            refinement_text: text.into(),
        }
    }
}

// =============================================================================
// CONTACT
// =============================================================================

/// A contact form submission together with the blueprint the visitor saw.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmission {
    /// Free-form contact fields (name, email, company, ...).
    pub contact: BTreeMap<String, String>,
    /// The blueprint shown to the visitor. Stored as given.
    #[schema(value_type = Object)]
    pub blueprint: JsonObject,
    /// Client-side timestamp, stored verbatim without format validation.
    pub timestamp: String,
}

/// Persisted form of a [`ContactSubmission`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactRecord {
    /// Server-assigned identifier (UUIDv7), never reused.
    pub id: Uuid,
    pub contact: BTreeMap<String, String>,
    #[schema(value_type = Object)]
    pub blueprint: JsonObject,
    /// Caller-supplied timestamp, verbatim.
    pub timestamp: String,
    /// Server-side creation time.
    pub created_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Stamp a submission with a fresh id and creation time.
    pub fn from_submission(submission: ContactSubmission) -> Self {
        Self {
            id: crate::uuid_utils::new_v7(),
            contact: submission.contact,
            blueprint: submission.blueprint,
            timestamp: submission.timestamp,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// STATUS CHECK
// =============================================================================

/// Append-only liveness log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusCheck {
    pub id: Uuid,
    #[serde(alias = "clientName")]
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /status`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStatusCheckRequest {
    #[serde(alias = "clientName")]
    pub client_name: String,
}

fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blueprint_serializes_snake_case() {
        let bp = Blueprint::new("H", ["a", "b"], "R");
        let json = serde_json::to_value(&bp).unwrap();
        assert_eq!(json["headline"], "H");
        assert_eq!(json["key_points"], serde_json::json!(["a", "b"]));
        assert_eq!(json["recommendation"], "R");
        assert!(json.get("keyPoints").is_none());
    }

    #[test]
    fn test_blueprint_ignores_camel_case_duplicate() {
        let bp: Blueprint = serde_json::from_str(
            r#"{"headline":"H","key_points":["a"],"keyPoints":["b"],"recommendation":"R"}"#,
        )
        .unwrap();
        assert_eq!(bp.key_points, vec!["a".to_string()]);
    }

    #[test]
    fn test_blueprint_completeness() {
        assert!(Blueprint::new("H", ["a"], "R").is_complete());
        assert!(!Blueprint::new(" ", ["a"], "R").is_complete());
        assert!(!Blueprint::new("H", Vec::<String>::new(), "R").is_complete());
        assert!(!Blueprint::new("H", ["a"], "").is_complete());
    }

    #[test]
    fn test_blueprint_request_accepts_both_spellings() {
        let snake: BlueprintRequest =
            serde_json::from_str(r#"{"system_prompt":"S","user_query":"Q"}"#).unwrap();
        let camel: BlueprintRequest =
            serde_json::from_str(r#"{"systemPrompt":"S","userQuery":"Q"}"#).unwrap();
        assert_eq!(snake.system_prompt, camel.system_prompt);
        assert_eq!(snake.user_query, camel.user_query);
    }

    #[test]
    fn test_blueprint_request_validation() {
        assert!(BlueprintRequest::new("S", "Q").validate().is_ok());

        let err = BlueprintRequest::new("", "Q").validate().unwrap_err();
        assert!(err.to_string().contains("system_prompt"));

        let err = BlueprintRequest::new("S", "   ").validate().unwrap_err();
        assert!(err.to_string().contains("user_query"));
    }

    #[test]
    fn test_refinement_request_keeps_blueprint_opaque() {
        let req: RefinementRequest = serde_json::from_str(
            r#"{"query":"How?","initialBlueprint":{"anything":[1,2,3],"nested":{"k":true}}}"#,
        )
        .unwrap();
        assert_eq!(req.initial_blueprint["anything"], serde_json::json!([1, 2, 3]));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_refinement_request_rejects_blank_query() {
        let req = RefinementRequest {
            query: "  ".to_string(),
            initial_blueprint: JsonObject::new(),
        };
        assert!(matches!(req.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_contact_record_from_submission_preserves_fields() {
        let mut contact = BTreeMap::new();
        contact.insert("email".to_string(), "a@b.com".to_string());
        let submission = ContactSubmission {
            contact,
            blueprint: JsonObject::new(),
            timestamp: "not-a-date".to_string(),
        };

        let record = ContactRecord::from_submission(submission);
        assert_eq!(record.contact["email"], "a@b.com");
        assert_eq!(record.timestamp, "not-a-date");
        assert_eq!(record.id.get_version_num(), 7);
    }

    #[test]
    fn test_status_check_request_accepts_camel_case() {
        let req: CreateStatusCheckRequest =
            serde_json::from_str(r#"{"clientName":"monitor"}"#).unwrap();
        assert_eq!(req.client_name, "monitor");
    }
}
