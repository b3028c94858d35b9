//! Request shape validation.
//!
//! A request body must be a JSON object with a `dna` field holding an array
//! of strings. Only the shape is checked here; row lengths and symbols are
//! left to the scanner, which tolerates anything.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Message for a missing `dna` field.
pub const DNA_REQUIRED: &str = "DNA is required";

/// Message for a `dna` field that is not an array.
pub const DNA_NOT_ARRAY: &str = "DNA must be an array of strings";

/// A validated request: the grid rows to scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaRequest {
    pub dna: Vec<String>,
}

impl DnaRequest {
    /// Validate an already-parsed JSON value.
    ///
    /// Non-string array elements are each reported as
    /// `"Expected string, received <type>"`, joined with `", "`.
    pub fn from_value(value: &Value) -> Result<Self, ApiError> {
        let object = value.as_object().ok_or_else(|| {
            ApiError::Validation(format!("Expected object, received {}", json_type(value)))
        })?;

        let items = match object.get("dna") {
            None => return Err(ApiError::Validation(DNA_REQUIRED.into())),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(ApiError::Validation(DNA_NOT_ARRAY.into())),
        };

        let mut dna = Vec::with_capacity(items.len());
        let mut issues = Vec::new();
        for item in items {
            match item {
                Value::String(row) => dna.push(row.clone()),
                other => issues.push(format!("Expected string, received {}", json_type(other))),
            }
        }
        if !issues.is_empty() {
            return Err(ApiError::Validation(issues.join(", ")));
        }
        Ok(Self { dna })
    }
}

/// Parse and validate a raw JSON request body.
pub fn parse_request(body: &str) -> Result<DnaRequest, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    DnaRequest::from_value(&value)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_message(body: &str) -> String {
        match parse_request(body) {
            Err(ApiError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_array_of_strings() {
        let req = parse_request(r#"{"dna": ["ATGC", "CAGT"]}"#).unwrap();
        assert_eq!(req.dna, vec!["ATGC", "CAGT"]);
    }

    #[test]
    fn accepts_empty_array_and_extra_fields() {
        let req = parse_request(r#"{"dna": [], "id": 7}"#).unwrap();
        assert!(req.dna.is_empty());
    }

    #[test]
    fn rows_are_not_validated_here() {
        let req = parse_request(r#"{"dna": ["xyz", "", "ACGTACGT"]}"#).unwrap();
        assert_eq!(req.dna.len(), 3);
    }

    #[test]
    fn missing_field() {
        assert_eq!(validation_message("{}"), DNA_REQUIRED);
    }

    #[test]
    fn wrong_field_type() {
        assert_eq!(validation_message(r#"{"dna": "ATGC"}"#), DNA_NOT_ARRAY);
        assert_eq!(validation_message(r#"{"dna": null}"#), DNA_NOT_ARRAY);
        assert_eq!(validation_message(r#"{"dna": {"0": "A"}}"#), DNA_NOT_ARRAY);
    }

    #[test]
    fn non_string_elements_are_listed() {
        assert_eq!(
            validation_message(r#"{"dna": ["ATGC", 1, null]}"#),
            "Expected string, received number, Expected string, received null"
        );
    }

    #[test]
    fn body_must_be_object() {
        assert_eq!(
            validation_message(r#"["ATGC"]"#),
            "Expected object, received array"
        );
        assert_eq!(validation_message("42"), "Expected object, received number");
    }

    #[test]
    fn malformed_json() {
        assert!(validation_message("{\"dna\": [").starts_with("invalid JSON body: "));
        assert!(validation_message("").starts_with("invalid JSON body: "));
    }

    #[test]
    fn deserializes_directly() {
        let req: DnaRequest = serde_json::from_str(r#"{"dna": ["AC"]}"#).unwrap();
        assert_eq!(req, DnaRequest { dna: vec!["AC".into()] });
    }
}
