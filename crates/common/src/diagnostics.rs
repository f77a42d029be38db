//! Validation diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of error codes reported by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required field is missing or empty.
    RequiredField,
    /// A value does not match its expected format.
    InvalidFormat,
    /// `baseURL` is not an absolute URL.
    InvalidUrl,
    /// Two endpoints share an `id`.
    DuplicateId,
    /// Two endpoints share a `(method, path)` pair.
    DuplicateEndpoint,
    /// A `{name}` path token has no matching path parameter.
    MissingPathParam,
    /// A value is outside its enumeration or otherwise unusable.
    InvalidValue,
    /// A lower bound exceeds its upper bound.
    InvalidRange,
    /// Two responses of one endpoint share a status code.
    DuplicateStatus,
    /// A status code lies outside `[100, 599]`.
    InvalidStatusCode,
}

impl ErrorCode {
    /// Wire representation, e.g. `MISSING_PATH_PARAM`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::RequiredField => "REQUIRED_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidUrl => "INVALID_URL",
            ErrorCode::DuplicateId => "DUPLICATE_ID",
            ErrorCode::DuplicateEndpoint => "DUPLICATE_ENDPOINT",
            ErrorCode::MissingPathParam => "MISSING_PATH_PARAM",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::InvalidRange => "INVALID_RANGE",
            ErrorCode::DuplicateStatus => "DUPLICATE_STATUS",
            ErrorCode::InvalidStatusCode => "INVALID_STATUS_CODE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity carried by every validation error. Warnings are a separate type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks generation.
    #[default]
    Error,
}

/// A structural error: the schema violates an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `endpoints[0].path`.
    pub field: String,
    /// Human readable description of the problem.
    pub message: String,
    /// Machine readable code.
    pub code: ErrorCode,
    /// Always [`Severity::Error`].
    pub severity: Severity,
    /// Optional hint for fixing the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Create a new error without a suggestion.
    pub fn new(field: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
            code,
            severity: Severity::Error,
            suggestion: None,
        }
    }

    /// Attach a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.field, self.message)
    }
}

/// A structural warning: the schema is usable but incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Dotted path of the field the warning is about.
    pub field: String,
    /// Human readable description.
    pub message: String,
    /// Optional hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationWarning {
    /// Create a new warning without a suggestion.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationWarning {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of one validation run.
///
/// `is_valid` always equals `errors.is_empty()`; build it through
/// [`ValidationResult::new`] to keep that true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether generation may proceed.
    pub is_valid: bool,
    /// Errors in traversal order.
    pub errors: Vec<ValidationError>,
    /// Warnings in traversal order.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Assemble a result from collected diagnostics.
    pub fn new(errors: Vec<ValidationError>, warnings: Vec<ValidationWarning>) -> Self {
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Error codes in report order.
    pub fn error_codes(&self) -> Vec<ErrorCode> {
        self.errors.iter().map(|e| e.code).collect()
    }

    /// Errors carrying the given code.
    pub fn errors_with_code(&self, code: ErrorCode) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.code == code).collect()
    }
}
