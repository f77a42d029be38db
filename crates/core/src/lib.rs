//! Validation and TypeScript code generation for API documentation.
//!
//! The pipeline runs in a fixed order:
//! validate -> types -> services -> hooks -> index.
//! Generation only proceeds on a document that validated without errors;
//! [`generate`] enforces that, [`generate_services`] assumes it.
//!
//! ```no_run
//! use apigen_common::ApiDocumentation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = ApiDocumentation::from_json(&std::fs::read_to_string("api.json")?)?;
//! let result = apigen_core::generate(&doc, &apigen_core::CodegenConfig::default())?;
//! println!("{}", result.services_source());
//! # Ok(())
//! # }
//! ```

pub mod codegen;
pub mod error;
pub mod naming;
pub mod validator;

use apigen_common::ApiDocumentation;
use tracing::debug;

pub use codegen::{
    CodegenConfig, GeneratedService, ServiceGenerationResult, generate_services_with,
    generate_types, render_type,
};
pub use error::{GenerateError, MAX_SCHEMA_DEPTH};
pub use validator::validate;

/// Generate every artifact with the default config.
///
/// The document is assumed valid. Use [`generate`] to validate first.
pub fn generate_services(doc: &ApiDocumentation) -> Result<ServiceGenerationResult, GenerateError> {
    generate_services_with(doc, &CodegenConfig::default())
}

/// Validate `doc`, then generate every artifact.
///
/// Returns [`GenerateError::Blocked`] carrying the full diagnostic set when
/// validation reports any error. Warnings never block generation.
pub fn generate(
    doc: &ApiDocumentation,
    config: &CodegenConfig,
) -> Result<ServiceGenerationResult, GenerateError> {
    let result = validate(doc);
    if !result.is_valid {
        debug!(
            errors = result.errors.len(),
            "Generation blocked by validation errors"
        );
        return Err(GenerateError::Blocked { result });
    }
    generate_services_with(doc, config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use apigen_common::ErrorCode;

    #[test]
    fn test_generate_is_blocked_by_errors() {
        let doc = ApiDocumentation::default();
        let err = generate(&doc, &CodegenConfig::default()).unwrap_err();
        let GenerateError::Blocked { result } = err else {
            panic!("expected a blocked generation, got {err:?}");
        };
        assert!(!result.is_valid);
        assert_eq!(result.errors[0].code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_generate_proceeds_with_warnings() {
        let doc = ApiDocumentation::from_json(
            r#"{
              "title": "Ping", "version": "0.1.0", "baseURL": "http://localhost:8080",
              "endpoints": [{
                "id": "ping", "name": "ping", "method": "GET", "path": "/ping",
                "responses": [{"statusCode": 200, "description": "", "contentType": "text/plain"}]
              }]
            }"#,
        )
        .unwrap();
        assert!(!validate(&doc).warnings.is_empty());
        let result = generate(&doc, &CodegenConfig::default()).unwrap();
        assert_eq!(result.total_functions, 1);
        assert_eq!(result.services[0].function_name, "getPing");
    }
}
