//! Errors of the generation entry points.

use apigen_common::ValidationResult;
use thiserror::Error;

/// Deepest property-schema nesting the type mapper follows before giving up.
pub const MAX_SCHEMA_DEPTH: usize = 32;

/// Errors returned by the code generators.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The document failed validation, so no code was generated.
    #[error("generation blocked: document has {} validation error(s)", result.errors.len())]
    Blocked {
        /// The full diagnostic set of the failed validation.
        result: ValidationResult,
    },
    /// A property schema nests deeper than [`MAX_SCHEMA_DEPTH`].
    #[error("schema at `{field}` nests deeper than {max_depth} levels")]
    SchemaTooDeep {
        /// Dotted path of the node where the limit was hit.
        field: String,
        /// The limit that was exceeded.
        max_depth: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_common::{ErrorCode, ValidationError};

    #[test]
    fn test_blocked_message_counts_errors() {
        let err = GenerateError::Blocked {
            result: ValidationResult::new(
                vec![
                    ValidationError::new("title", ErrorCode::RequiredField, "Title is required"),
                    ValidationError::new("version", ErrorCode::InvalidFormat, "bad"),
                ],
                vec![],
            ),
        };
        assert_eq!(
            err.to_string(),
            "generation blocked: document has 2 validation error(s)"
        );
    }

    #[test]
    fn test_too_deep_message() {
        let err = GenerateError::SchemaTooDeep {
            field: "models.Node".into(),
            max_depth: MAX_SCHEMA_DEPTH,
        };
        assert_eq!(
            err.to_string(),
            "schema at `models.Node` nests deeper than 32 levels"
        );
    }
}
