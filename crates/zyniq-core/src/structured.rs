//! Strict decoding of model replies into typed records.
//!
//! Language models do not always honour formatting instructions, so a reply
//! that cannot be decoded is an expected outcome and is reported as a
//! [`ParseError`], distinct from transport failures. There is no partial
//! recovery: either every required field decodes or the whole parse fails.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Blueprint, JsonObject, Refinement};

/// Reasons a model reply could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not valid JSON at all.
    #[error("malformed JSON: {0}")]
    Malformed(String),

    /// Valid JSON, but the top level is not an object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// A required key is absent.
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// A required key is present but has the wrong shape or no content.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: String, reason: String },
}

/// The set of top-level keys a record requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet(&'static [&'static str]);

impl FieldSet {
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.0
    }
}

/// A record that can be decoded from a model reply.
pub trait StructuredRecord: DeserializeOwned {
    /// Required top-level keys.
    const FIELDS: FieldSet;

    /// Shape constraints beyond key presence.
    fn check(&self) -> Result<(), ParseError> {
        Ok(())
    }
}

impl StructuredRecord for Blueprint {
    const FIELDS: FieldSet = FieldSet::new(&["headline", "key_points", "recommendation"]);

    fn check(&self) -> Result<(), ParseError> {
        if self.headline.trim().is_empty() {
            return Err(invalid("headline", "must not be empty"));
        }
        if self.key_points.is_empty() {
            return Err(invalid("key_points", "must contain at least one entry"));
        }
        if self.recommendation.trim().is_empty() {
            return Err(invalid("recommendation", "must not be empty"));
        }
        Ok(())
    }
}

impl StructuredRecord for Refinement {
    const FIELDS: FieldSet = FieldSet::new(&["refinement_text"]);

    fn check(&self) -> Result<(), ParseError> {
        if self.refinement_text.trim().is_empty() {
            return Err(invalid("refinement_text", "must not be empty"));
        }
        Ok(())
    }
}

/// Decode `raw` as a JSON object containing every key in `schema`.
///
/// Surrounding whitespace is ignored; nothing else is stripped.
pub fn parse_object(raw: &str, schema: &FieldSet) -> Result<JsonObject, ParseError> {
    let value: Value =
        serde_json::from_str(raw.trim()).map_err(|e| ParseError::Malformed(e.to_string()))?;

    let object = match value {
        Value::Object(map) => map,
        other => return Err(ParseError::NotAnObject(json_kind(&other))),
    };

    if let Some(missing) = schema.fields().iter().find(|f| !object.contains_key(**f)) {
        return Err(ParseError::MissingField((*missing).to_string()));
    }

    Ok(object)
}

/// Decode `raw` into `T`, enforcing its field set and shape check.
pub fn parse_record<T: StructuredRecord>(raw: &str) -> Result<T, ParseError> {
    let object = parse_object(raw, &T::FIELDS)?;
    let record: T = serde_json::from_value(Value::Object(object)).map_err(|e| {
        ParseError::InvalidField {
            field: field_from_serde_message(&e.to_string(), &T::FIELDS),
            reason: e.to_string(),
        }
    })?;
    record.check()?;
    Ok(record)
}

fn invalid(field: &str, reason: &str) -> ParseError {
    ParseError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// serde_json type errors do not carry the field path; name the first schema
// field mentioned in the message, if any.
fn field_from_serde_message(message: &str, schema: &FieldSet) -> String {
    schema
        .fields()
        .iter()
        .find(|f| message.contains(*f))
        .map(|f| (*f).to_string())
        .unwrap_or_else(|| "<record>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blueprint_success() {
        let raw = r#"{"headline":"H","key_points":["a","b"],"recommendation":"R"}"#;
        let bp: Blueprint = parse_record(raw).unwrap();
        assert_eq!(bp, Blueprint::new("H", ["a", "b"], "R"));
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let raw = "\n\n  {\"refinement_text\": \"Start small.\"}  \n";
        let r: Refinement = parse_record(raw).unwrap();
        assert_eq!(r.refinement_text, "Start small.");
    }

    #[test]
    fn test_parse_ignores_extra_keys() {
        let raw = r#"{"headline":"H","key_points":["a"],"recommendation":"R","confidence":0.9}"#;
        let bp: Blueprint = parse_record(raw).unwrap();
        assert_eq!(bp.headline, "H");
    }

    #[test]
    fn test_parse_not_json() {
        let err = parse_record::<Blueprint>("not json").unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn test_parse_markdown_fenced_json_is_rejected() {
        let raw = "```json\n{\"refinement_text\":\"x\"}\n```";
        let err = parse_record::<Refinement>(raw).unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn test_parse_top_level_array() {
        let err = parse_object("[1,2]", &Blueprint::FIELDS).unwrap_err();
        assert_eq!(err, ParseError::NotAnObject("an array"));
    }

    #[test]
    fn test_parse_missing_key() {
        let raw = r#"{"headline":"H","recommendation":"R"}"#;
        let err = parse_record::<Blueprint>(raw).unwrap_err();
        assert_eq!(err, ParseError::MissingField("key_points".to_string()));
    }

    #[test]
    fn test_parse_camel_case_key_is_not_the_schema_key() {
        let raw = r#"{"headline":"H","keyPoints":["a"],"recommendation":"R"}"#;
        let err = parse_record::<Blueprint>(raw).unwrap_err();
        assert_eq!(err, ParseError::MissingField("key_points".to_string()));
    }

    #[test]
    fn test_parse_camel_case_extra_key_is_ignored() {
        let raw = r#"{"headline":"H","key_points":["a"],"keyPoints":["b"],"recommendation":"R"}"#;
        let bp: Blueprint = parse_record(raw).unwrap();
        assert_eq!(bp, Blueprint::new("H", ["a"], "R"));

        let raw = r#"{"refinement_text":"x","refinementText":"y"}"#;
        let r: Refinement = parse_record(raw).unwrap();
        assert_eq!(r.refinement_text, "x");
    }

    #[test]
    fn test_parse_wrong_type() {
        let raw = r#"{"headline":"H","key_points":"a, b","recommendation":"R"}"#;
        let err = parse_record::<Blueprint>(raw).unwrap_err();
        assert!(matches!(err, ParseError::InvalidField { .. }));
    }

    #[test]
    fn test_parse_empty_content_fails_shape_check() {
        let raw = r#"{"headline":"H","key_points":[],"recommendation":"R"}"#;
        let err = parse_record::<Blueprint>(raw).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidField {
                field: "key_points".to_string(),
                reason: "must contain at least one entry".to_string(),
            }
        );

        let err = parse_record::<Refinement>(r#"{"refinement_text":""}"#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidField { .. }));
    }

    #[test]
    fn test_roundtrip_through_encoder() {
        let original = Blueprint::new(
            "Automate the warehouse",
            ["Route optimisation", "Demand forecasting", "Vision QA"],
            "Begin with a two-week data audit.",
        );
        let raw = serde_json::to_string(&original).unwrap();
        let decoded: Blueprint = parse_record(&raw).unwrap();
        assert_eq!(decoded, original);
    }
}
