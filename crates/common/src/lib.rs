//! Shared schema model for the apigen pipeline
//!
//! This crate holds the value types every other crate reads: the API
//! documentation schema supplied by the caller and the diagnostics the
//! validator hands back. It carries no validation or generation logic.

pub mod diagnostics;
pub mod schema;

// Re-export commonly used types
pub use diagnostics::{ErrorCode, Severity, ValidationError, ValidationResult, ValidationWarning};
pub use schema::{
    ApiDocumentation, AuthType, Authentication, Endpoint, HttpMethod, Parameter,
    ParameterLocation, PropertySchema, RequestBodySchema, ResponseSchema, SchemaType,
};
