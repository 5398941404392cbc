use jsonschema::Validator;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

const SCHEMA_JSON: &str = include_str!("../../../assets/termlaunch.schema.json");

/// A validation error with path and message.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Result of config validation.
#[derive(Debug)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<ValidationError>),
}

/// Error type for config parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("validation failed: {}", format_validation_errors(.0))]
    ValidationFailed(Vec<ValidationError>),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Returns the embedded JSON schema as a string.
pub fn schema() -> &'static str {
    SCHEMA_JSON
}

/// Validate a JSON value against the config schema.
pub fn validate(value: &Value) -> ValidationResult {
    let schema: Value =
        serde_json::from_str(SCHEMA_JSON).expect("embedded schema should be valid JSON");

    let validator = Validator::new(&schema).expect("embedded schema should be a valid JSON Schema");

    let errors: Vec<ValidationError> = validator
        .iter_errors(value)
        .map(|e| ValidationError {
            path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(config: &str) -> ValidationResult {
        let value: Value = serde_json::from_str(config).unwrap();
        validate(&value)
    }

    #[test]
    fn test_schema_is_valid_json() {
        let schema: Value = serde_json::from_str(schema()).unwrap();
        assert!(schema.is_object());
        assert!(schema.get("$schema").is_some());
    }

    #[test]
    fn test_validate_full_config() {
        let config = r#"{
            "terminal": "xterm",
            "keep_open": true,
            "env": {"PYTHONUNBUFFERED": "1"},
            "path": ["/opt/python/bin"]
        }"#;
        assert!(matches!(check(config), ValidationResult::Valid));
    }

    #[test]
    fn test_validate_unknown_terminal_rejected() {
        assert!(matches!(
            check(r#"{"terminal": "konsole"}"#),
            ValidationResult::Invalid(_)
        ));
    }

    #[test]
    fn test_validate_invalid_type() {
        assert!(matches!(
            check(r#"{"keep_open": "yes"}"#),
            ValidationResult::Invalid(_)
        ));
    }

    #[test]
    fn test_validate_env_values_must_be_strings() {
        match check(r#"{"env": {"DEBUG": 1}}"#) {
            ValidationResult::Invalid(errors) => {
                assert!(errors.iter().any(|e| e.path.contains("DEBUG")));
            }
            ValidationResult::Valid => panic!("Expected validation error"),
        }
    }

    #[test]
    fn test_validate_empty_path_entry_rejected() {
        assert!(matches!(
            check(r#"{"path": [""]}"#),
            ValidationResult::Invalid(_)
        ));
    }

    #[test]
    fn test_validate_unknown_field_rejected() {
        assert!(matches!(
            check(r#"{"unknown_field": "value"}"#),
            ValidationResult::Invalid(_)
        ));
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError {
            path: "/terminal".into(),
            message: "not allowed".into(),
        };
        assert_eq!(error.to_string(), "/terminal: not allowed");
    }
}
