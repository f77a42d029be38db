//! # Document Validator
//!
//! Checks an [`ApiDocumentation`] against the structural rules the code
//! generators rely on.
//!
//! ## Checks Performed
//!
//! 1. **Basic info** - `title`, semver `version`, absolute `baseURL`, non-empty `endpoints`
//! 2. **Authentication** - known `type`, `headerName` for `apiKey`, bearer prefix
//! 3. **Endpoints** - identity, method, path, uniqueness, path template tokens
//! 4. **Parameters** - name, location, type, ranges, duplicates
//! 5. **Request bodies** - content type and schema
//! 6. **Responses** - status codes, uniqueness, a 2xx response
//! 7. **Models** - object schemas with properties, declarable and unique type names
//!
//! Diagnostics are reported in traversal order: document level first, then
//! each endpoint in array order with its parameters and responses, then
//! models. Validation never stops at the first problem.
//!
//! All state lives in a [`Report`] created per call, so one validator may
//! run on any number of threads at once.

use std::collections::{HashMap, HashSet};

use apigen_common::{
    ApiDocumentation, AuthType, Endpoint, ErrorCode, HttpMethod, Parameter, ParameterLocation,
    PropertySchema, RequestBodySchema, ResponseSchema, SchemaType, ValidationError,
    ValidationResult, ValidationWarning,
};
use semver::Version;
use tracing::debug;
use url::Url;

use crate::codegen::ir::utils::is_type_identifier;
use crate::codegen::{declared_type_names, model_type_name};
use crate::error::MAX_SCHEMA_DEPTH;
use crate::naming::{function_name, is_usable_name, to_pascal_case};

/// Content types accepted for request bodies.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/json",
    "multipart/form-data",
    "application/x-www-form-urlencoded",
];

/// Diagnostics collected during one validation run.
#[derive(Debug, Default)]
struct Report {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl Report {
    fn error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    fn warn(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    fn required(&mut self, field: impl Into<String>, what: &str) {
        self.error(ValidationError::new(
            field,
            ErrorCode::RequiredField,
            format!("{what} is required"),
        ));
    }

    /// Report an unknown value of a closed enumeration, or a missing one.
    fn check_enum(&mut self, field: String, what: &str, value: &str, missing: bool, known: &[&str]) {
        if missing {
            self.required(field, what);
        } else {
            self.error(
                ValidationError::new(
                    field,
                    ErrorCode::InvalidValue,
                    format!("Invalid {} '{value}'", what.to_lowercase()),
                )
                .with_suggestion(format!("Use one of: {}", known.join(", "))),
            );
        }
    }

    fn finish(self) -> ValidationResult {
        ValidationResult::new(self.errors, self.warnings)
    }
}

/// Validate a document. Never fails and never modifies the document.
pub fn validate(doc: &ApiDocumentation) -> ValidationResult {
    let mut report = Report::default();

    validate_basic_info(doc, &mut report);
    validate_authentication(doc, &mut report);

    let mut seen = SeenEndpoints::default();
    for (index, endpoint) in doc.endpoints.iter().enumerate() {
        validate_endpoint(endpoint, &format!("endpoints[{index}]"), &mut seen, &mut report);
    }

    if let Some(models) = &doc.models {
        let endpoint_types: HashSet<String> =
            doc.endpoints.iter().flat_map(declared_type_names).collect();
        let mut model_names = HashMap::new();
        for (key, model) in models {
            let field = format!("models.{key}");
            validate_model_name(key, &field, &endpoint_types, &mut model_names, &mut report);
            validate_model(model, &field, &mut report);
        }
    }

    let result = report.finish();
    debug!(
        endpoints = doc.endpoints.len(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        valid = result.is_valid,
        "Validated API documentation"
    );
    result
}

/// `MAJOR.MINOR.PATCH` with optional pre-release and build metadata.
fn is_semver(version: &str) -> bool {
    Version::parse(version).is_ok()
}

fn validate_basic_info(doc: &ApiDocumentation, report: &mut Report) {
    if doc.title.trim().is_empty() {
        report.required("title", "Title");
    }

    if doc.version.trim().is_empty() {
        report.required("version", "Version");
    } else if !is_semver(doc.version.trim()) {
        report.error(
            ValidationError::new(
                "version",
                ErrorCode::InvalidFormat,
                format!("Version '{}' is not a semantic version", doc.version),
            )
            .with_suggestion("Use MAJOR.MINOR.PATCH, e.g. 1.0.0 or 1.0.0-beta.1"),
        );
    }

    if doc.description.trim().is_empty() {
        report.warn(
            ValidationWarning::new("description", "API description is missing")
                .with_suggestion("Describe what the API does"),
        );
    }

    if doc.base_url.trim().is_empty() {
        report.required("baseURL", "Base URL");
    } else if let Err(e) = Url::parse(doc.base_url.trim()) {
        report.error(
            ValidationError::new(
                "baseURL",
                ErrorCode::InvalidUrl,
                format!("Base URL '{}' is not a valid URL: {e}", doc.base_url),
            )
            .with_suggestion("Use an absolute URL, e.g. https://api.example.com"),
        );
    }

    if doc.endpoints.is_empty() {
        report.error(
            ValidationError::new(
                "endpoints",
                ErrorCode::RequiredField,
                "At least one endpoint is required",
            )
            .with_suggestion("Document at least one endpoint"),
        );
    }
}

fn validate_authentication(doc: &ApiDocumentation, report: &mut Report) {
    let Some(auth) = &doc.authentication else {
        report.warn(
            ValidationWarning::new("authentication", "No authentication configured")
                .with_suggestion("Add an authentication section unless the API is public"),
        );
        return;
    };

    if !auth.auth_type.is_known() {
        report.check_enum(
            "authentication.type".into(),
            "Authentication type",
            auth.auth_type.as_str(),
            auth.auth_type.is_missing(),
            AuthType::KNOWN,
        );
    }

    match auth.auth_type {
        AuthType::ApiKey => {
            if auth.header_name.as_deref().is_none_or(|h| h.trim().is_empty()) {
                report.error(
                    ValidationError::new(
                        "authentication.headerName",
                        ErrorCode::RequiredField,
                        "Header name is required for API key authentication",
                    )
                    .with_suggestion("Set headerName, e.g. X-API-Key"),
                );
            }
        }
        AuthType::Bearer => {
            if let Some(prefix) = &auth.prefix
                && prefix != "Bearer"
            {
                report.warn(
                    ValidationWarning::new(
                        "authentication.prefix",
                        format!("Bearer token prefix '{prefix}' is unusual"),
                    )
                    .with_suggestion("Most servers expect the prefix 'Bearer'"),
                );
            }
        }
        _ => {}
    }
}

/// Identities of the endpoints validated so far.
#[derive(Debug, Default)]
struct SeenEndpoints {
    ids: HashSet<String>,
    routes: HashSet<(String, String)>,
    function_names: HashSet<String>,
    name_stems: HashSet<String>,
}

fn validate_endpoint(
    endpoint: &Endpoint,
    field: &str,
    seen: &mut SeenEndpoints,
    report: &mut Report,
) {
    if endpoint.id.trim().is_empty() {
        report.required(format!("{field}.id"), "Endpoint id");
    } else if !seen.ids.insert(endpoint.id.clone()) {
        report.error(ValidationError::new(
            format!("{field}.id"),
            ErrorCode::DuplicateId,
            format!("Duplicate endpoint id '{}'", endpoint.id),
        ));
    }

    if endpoint.name.trim().is_empty() {
        report.required(format!("{field}.name"), "Endpoint name");
    } else if !is_usable_name(&endpoint.name) {
        report.error(
            ValidationError::new(
                format!("{field}.name"),
                ErrorCode::InvalidFormat,
                format!(
                    "Endpoint name '{}' does not produce a valid identifier",
                    endpoint.name
                ),
            )
            .with_suggestion("Start the name with a letter"),
        );
    }

    if !endpoint.method.is_known() {
        report.check_enum(
            format!("{field}.method"),
            "HTTP method",
            endpoint.method.as_str(),
            endpoint.method.is_missing(),
            HttpMethod::KNOWN,
        );
    }

    if endpoint.path.is_empty() {
        report.required(format!("{field}.path"), "Endpoint path");
    } else if !endpoint.path.starts_with('/') {
        report.error(
            ValidationError::new(
                format!("{field}.path"),
                ErrorCode::InvalidFormat,
                format!("Path '{}' must start with '/'", endpoint.path),
            )
            .with_suggestion(format!("Use '/{}'", endpoint.path)),
        );
    }

    if !endpoint.method.is_missing()
        && !endpoint.path.is_empty()
        && !seen
            .routes
            .insert((endpoint.method.to_string(), endpoint.path.clone()))
    {
        report.error(ValidationError::new(
            field,
            ErrorCode::DuplicateEndpoint,
            format!("Duplicate endpoint {} {}", endpoint.method, endpoint.path),
        ));
    }

    if endpoint.method.is_known() && is_usable_name(&endpoint.name) {
        let name = function_name(endpoint);
        let stem = to_pascal_case(&endpoint.name);
        if !seen.function_names.insert(name.clone()) {
            report.warn(
                ValidationWarning::new(
                    format!("{field}.name"),
                    format!("Function name '{name}' is already generated for another endpoint"),
                )
                .with_suggestion("Rename one of the endpoints"),
            );
        } else if !seen.name_stems.insert(stem.clone()) {
            report.warn(
                ValidationWarning::new(
                    format!("{field}.name"),
                    format!(
                        "Type and hook names derived from '{stem}' are already generated for another endpoint"
                    ),
                )
                .with_suggestion("Rename one of the endpoints"),
            );
        }
    }

    validate_path_template(endpoint, field, report);

    if endpoint.summary.as_deref().is_none_or(|s| s.trim().is_empty()) {
        report.warn(ValidationWarning::new(
            format!("{field}.summary"),
            "Endpoint summary is missing",
        ));
    }
    if endpoint
        .description
        .as_deref()
        .is_none_or(|s| s.trim().is_empty())
    {
        report.warn(ValidationWarning::new(
            format!("{field}.description"),
            "Endpoint description is missing",
        ));
    }

    let mut seen_params = HashSet::new();
    for (index, param) in endpoint.parameters.iter().enumerate() {
        let param_field = format!("{field}.parameters[{index}]");
        validate_parameter(param, &param_field, report);
        if !param.name.is_empty()
            && !seen_params.insert((param.name.as_str(), param.location.as_str()))
        {
            report.error(ValidationError::new(
                param_field,
                ErrorCode::InvalidValue,
                format!(
                    "Parameter '{}' in {} is declared more than once",
                    param.name, param.location
                ),
            ));
        }
    }

    if let Some(body) = &endpoint.request_body {
        if matches!(endpoint.method, HttpMethod::Get | HttpMethod::Head) {
            report.warn(ValidationWarning::new(
                format!("{field}.requestBody"),
                format!("{} requests usually have no body", endpoint.method),
            ));
        }
        validate_request_body(body, &format!("{field}.requestBody"), report);
    }

    validate_responses(&endpoint.responses, &format!("{field}.responses"), report);
}

/// Every `{token}` needs a declared path parameter, and every declared path
/// parameter should appear in the template.
fn validate_path_template(endpoint: &Endpoint, field: &str, report: &mut Report) {
    let tokens = endpoint.path_tokens();
    let mut reported = HashSet::new();
    for token in &tokens {
        if endpoint.path_parameter(token).is_none() && reported.insert(*token) {
            report.error(
                ValidationError::new(
                    format!("{field}.path"),
                    ErrorCode::MissingPathParam,
                    format!("Path parameter '{{{token}}}' has no matching parameter"),
                )
                .with_suggestion(format!(
                    "Add a parameter with name '{token}' and in 'path'"
                )),
            );
        }
    }

    for param in endpoint.parameters_in(&ParameterLocation::Path) {
        if !param.name.is_empty() && !tokens.contains(&param.name.as_str()) {
            report.warn(ValidationWarning::new(
                format!("{field}.parameters"),
                format!(
                    "Path parameter '{}' does not appear in path '{}'",
                    param.name, endpoint.path
                ),
            ));
        }
    }
}

fn validate_parameter(param: &Parameter, field: &str, report: &mut Report) {
    if param.name.trim().is_empty() {
        report.required(format!("{field}.name"), "Parameter name");
    }

    if !param.location.is_known() {
        report.check_enum(
            format!("{field}.in"),
            "Parameter location",
            param.location.as_str(),
            param.location.is_missing(),
            ParameterLocation::KNOWN,
        );
    }

    if !param.param_type.is_known() {
        report.check_enum(
            format!("{field}.type"),
            "Parameter type",
            param.param_type.as_str(),
            param.param_type.is_missing(),
            SchemaType::KNOWN,
        );
    }

    if let (Some(min), Some(max)) = (param.minimum, param.maximum)
        && min > max
    {
        report.error(ValidationError::new(
            format!("{field}.minimum"),
            ErrorCode::InvalidRange,
            format!("Minimum {min} is greater than maximum {max}"),
        ));
    }

    if let (Some(min), Some(max)) = (param.min_length, param.max_length)
        && min > max
    {
        report.error(ValidationError::new(
            format!("{field}.minLength"),
            ErrorCode::InvalidRange,
            format!("Minimum length {min} is greater than maximum length {max}"),
        ));
    }

    if param.location == ParameterLocation::Path && !param.required {
        report.warn(
            ValidationWarning::new(
                format!("{field}.required"),
                format!("Path parameter '{}' should be required", param.name),
            )
            .with_suggestion("Set required: true"),
        );
    }

    if param.description.as_deref().is_none_or(|d| d.trim().is_empty()) {
        report.warn(ValidationWarning::new(
            format!("{field}.description"),
            format!("Parameter '{}' has no description", param.name),
        ));
    }
}

fn validate_request_body(body: &RequestBodySchema, field: &str, report: &mut Report) {
    if body.content_type.trim().is_empty() {
        report.required(format!("{field}.contentType"), "Content type");
    } else if !ALLOWED_CONTENT_TYPES.contains(&body.content_type.as_str()) {
        report.error(
            ValidationError::new(
                format!("{field}.contentType"),
                ErrorCode::InvalidValue,
                format!("Unsupported request content type '{}'", body.content_type),
            )
            .with_suggestion(format!("Use one of: {}", ALLOWED_CONTENT_TYPES.join(", "))),
        );
    }

    match &body.schema {
        Some(schema) => validate_schema(schema, &format!("{field}.schema"), 0, report),
        None => report.required(format!("{field}.schema"), "Request body schema"),
    }
}

fn validate_responses(responses: &[ResponseSchema], field: &str, report: &mut Report) {
    if responses.is_empty() {
        report.error(
            ValidationError::new(field, ErrorCode::RequiredField, "At least one response is required")
                .with_suggestion("Document the success response, e.g. 200"),
        );
        return;
    }

    let mut seen = HashSet::new();
    for (index, response) in responses.iter().enumerate() {
        let response_field = format!("{field}[{index}]");

        if !(100..=599).contains(&response.status_code) {
            report.error(
                ValidationError::new(
                    format!("{response_field}.statusCode"),
                    ErrorCode::InvalidStatusCode,
                    format!("Status code {} is not a valid HTTP status", response.status_code),
                )
                .with_suggestion("Use a status code between 100 and 599"),
            );
        }

        if !seen.insert(response.status_code) {
            report.error(ValidationError::new(
                format!("{response_field}.statusCode"),
                ErrorCode::DuplicateStatus,
                format!("Status code {} is documented more than once", response.status_code),
            ));
        }

        if response.description.trim().is_empty() {
            report.warn(ValidationWarning::new(
                format!("{response_field}.description"),
                format!("Response {} has no description", response.status_code),
            ));
        }

        if let Some(schema) = &response.schema {
            validate_schema(schema, &format!("{response_field}.schema"), 0, report);
        }
    }

    if !responses.iter().any(ResponseSchema::is_success) {
        report.warn(
            ValidationWarning::new(field, "No success (2xx) response documented")
                .with_suggestion("Add a 2xx response so the generated function has a result type"),
        );
    }
}

/// A model key must become a declarable type name that no other model and no
/// endpoint declaration already takes.
fn validate_model_name<'a>(
    key: &'a str,
    field: &str,
    endpoint_types: &HashSet<String>,
    seen: &mut HashMap<String, &'a str>,
    report: &mut Report,
) {
    let name = model_type_name(key);
    if !is_type_identifier(&name) {
        report.error(
            ValidationError::new(
                field,
                ErrorCode::InvalidFormat,
                format!("Model name '{key}' does not produce a valid type name"),
            )
            .with_suggestion("Start the name with a letter and avoid reserved words"),
        );
        return;
    }

    if let Some(other) = seen.get(&name) {
        report.error(
            ValidationError::new(
                field,
                ErrorCode::InvalidValue,
                format!("Models '{other}' and '{key}' both generate the type '{name}'"),
            )
            .with_suggestion("Rename one of the models"),
        );
    } else {
        seen.insert(name.clone(), key);
    }

    if endpoint_types.contains(&name) {
        report.error(
            ValidationError::new(
                field,
                ErrorCode::InvalidValue,
                format!("Model type '{name}' is already generated for an endpoint"),
            )
            .with_suggestion("Rename the model or the endpoint"),
        );
    }
}

fn validate_model(model: &PropertySchema, field: &str, report: &mut Report) {
    if model.schema_type != SchemaType::Object {
        report.error(ValidationError::new(
            format!("{field}.type"),
            ErrorCode::InvalidValue,
            format!("Model type must be 'object', found '{}'", model.schema_type),
        ));
    }
    if model.properties.is_none() {
        report.required(format!("{field}.properties"), "Model properties");
    }
    validate_members(model, field, 0, report);
}

/// Check one schema node and everything below it. `depth` counts nesting from
/// the root schema.
fn validate_schema(schema: &PropertySchema, field: &str, depth: usize, report: &mut Report) {
    if depth > MAX_SCHEMA_DEPTH {
        report.error(ValidationError::new(
            field,
            ErrorCode::InvalidValue,
            format!("Schema nests deeper than {MAX_SCHEMA_DEPTH} levels"),
        ));
        return;
    }

    if !schema.schema_type.is_known() {
        report.check_enum(
            format!("{field}.type"),
            "Schema type",
            schema.schema_type.as_str(),
            schema.schema_type.is_missing(),
            SchemaType::KNOWN,
        );
    }

    match &schema.schema_type {
        SchemaType::Array => match &schema.items {
            Some(items) => validate_schema(items, &format!("{field}.items"), depth + 1, report),
            None => report.required(format!("{field}.items"), "Array items schema"),
        },
        SchemaType::Object => validate_members(schema, field, depth, report),
        _ => {}
    }
}

fn validate_members(schema: &PropertySchema, field: &str, depth: usize, report: &mut Report) {
    if let Some(properties) = &schema.properties {
        for (name, child) in properties {
            validate_schema(
                child,
                &format!("{field}.properties.{name}"),
                depth + 1,
                report,
            );
        }
    }

    for name in schema.required.iter().flatten() {
        let declared = schema
            .properties
            .as_ref()
            .is_some_and(|p| p.contains_key(name));
        if !declared {
            report.warn(ValidationWarning::new(
                format!("{field}.required"),
                format!("Required property '{name}' is not declared"),
            ));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn doc(endpoints: Value) -> ApiDocumentation {
        serde_json::from_value(json!({
            "title": "Users API",
            "version": "1.0.0",
            "description": "Manage users",
            "baseURL": "https://api.example.com",
            "authentication": {"type": "bearer"},
            "endpoints": endpoints
        }))
        .unwrap()
    }

    fn endpoint(id: &str, method: &str, path: &str) -> Value {
        json!({
            "id": id, "name": id, "method": method, "path": path,
            "summary": "s", "description": "d",
            "responses": [{"statusCode": 200, "description": "OK", "contentType": "application/json"}]
        })
    }

    #[test]
    fn test_clean_document_has_no_diagnostics() {
        let result = validate(&doc(json!([endpoint("list", "GET", "/users")])));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_semver() {
        assert!(is_semver("1.0.0"));
        assert!(is_semver("10.20.30-beta.1"));
        assert!(is_semver("1.0.0+build.5"));
        assert!(!is_semver("01.0.0"));
        assert!(!is_semver("1.0"));
        assert!(!is_semver("1.0.0-"));
        assert!(!is_semver("v1.0.0"));
        assert!(!is_semver("1.0.x"));
    }

    #[test]
    fn test_basic_info_errors_in_order() {
        let doc: ApiDocumentation = serde_json::from_value(json!({
            "version": "one", "baseURL": "not a url", "endpoints": []
        }))
        .unwrap();
        let result = validate(&doc);
        assert_eq!(
            result.error_codes(),
            vec![
                ErrorCode::RequiredField,
                ErrorCode::InvalidFormat,
                ErrorCode::InvalidUrl,
                ErrorCode::RequiredField,
            ]
        );
        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "version", "baseURL", "endpoints"]);
        let warned: Vec<&str> = result.warnings.iter().map(|w| w.field.as_str()).collect();
        assert_eq!(warned, vec!["description", "authentication"]);
    }

    #[test]
    fn test_authentication_rules() {
        let mut d = doc(json!([endpoint("a", "GET", "/a")]));
        d.authentication = serde_json::from_value(json!({"type": "apiKey"})).unwrap();
        let result = validate(&d);
        assert_eq!(result.errors[0].field, "authentication.headerName");

        d.authentication = serde_json::from_value(json!({"type": "bearer", "prefix": "Token"})).unwrap();
        let result = validate(&d);
        assert!(result.is_valid);
        assert_eq!(result.warnings[0].field, "authentication.prefix");

        d.authentication = serde_json::from_value(json!({"type": "saml"})).unwrap();
        let result = validate(&d);
        assert_eq!(result.error_codes(), vec![ErrorCode::InvalidValue]);
    }

    #[test]
    fn test_endpoint_identity_errors() {
        let result = validate(&doc(json!([
            endpoint("a", "GET", "/a"),
            endpoint("a", "FETCH", "b"),
        ])));
        assert_eq!(
            result.error_codes(),
            vec![ErrorCode::DuplicateId, ErrorCode::InvalidValue, ErrorCode::InvalidFormat]
        );
        assert_eq!(result.errors[1].field, "endpoints[1].method");
    }

    #[test]
    fn test_missing_path_param_reported_once_per_token() {
        let result = validate(&doc(json!([endpoint("a", "GET", "/a/{id}/b/{id}")])));
        assert_eq!(result.error_codes(), vec![ErrorCode::MissingPathParam]);
        assert_eq!(result.errors[0].field, "endpoints[0].path");
    }

    #[test]
    fn test_parameter_checks() {
        let mut ep = endpoint("a", "GET", "/a/{id}");
        ep["parameters"] = json!([
            {"name": "id", "in": "path", "type": "string", "description": "x"},
            {"name": "n", "in": "query", "type": "number", "minimum": 5, "maximum": 1, "description": "x"},
            {"name": "s", "in": "query", "type": "string", "minLength": 9, "maxLength": 2, "description": "x"},
            {"name": "n", "in": "query", "type": "number", "description": "x"},
            {"name": "", "in": "cookie", "type": "integer"}
        ]);
        let result = validate(&doc(json!([ep])));
        assert_eq!(
            result.error_codes(),
            vec![
                ErrorCode::InvalidRange,
                ErrorCode::InvalidRange,
                ErrorCode::InvalidValue,
                ErrorCode::RequiredField,
                ErrorCode::InvalidValue,
                ErrorCode::InvalidValue,
            ]
        );
        assert_eq!(result.errors[2].field, "endpoints[0].parameters[3]");
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.field == "endpoints[0].parameters[0].required")
        );
    }

    #[test]
    fn test_request_body_checks() {
        let mut ep = endpoint("a", "GET", "/a");
        ep["requestBody"] = json!({"contentType": "text/plain",
            "schema": {"type": "object", "properties": {"tags": {"type": "array"}},
                       "required": ["name"]}});
        let result = validate(&doc(json!([ep])));
        assert_eq!(
            result.error_codes(),
            vec![ErrorCode::InvalidValue, ErrorCode::RequiredField]
        );
        assert_eq!(
            result.errors[1].field,
            "endpoints[0].requestBody.schema.properties.tags.items"
        );
        let warned: Vec<&str> = result.warnings.iter().map(|w| w.field.as_str()).collect();
        assert!(warned.contains(&"endpoints[0].requestBody"));
        assert!(warned.contains(&"endpoints[0].requestBody.schema.required"));
    }

    #[test]
    fn test_response_checks() {
        let mut ep = endpoint("a", "POST", "/a");
        ep["responses"] = json!([
            {"statusCode": 202, "description": "Accepted", "contentType": ""},
            {"statusCode": 202, "description": "Again", "contentType": ""},
            {"statusCode": 42, "description": "", "contentType": ""}
        ]);
        let result = validate(&doc(json!([ep])));
        assert_eq!(
            result.error_codes(),
            vec![ErrorCode::DuplicateStatus, ErrorCode::InvalidStatusCode]
        );

        let mut empty = endpoint("b", "GET", "/b");
        empty["responses"] = json!([]);
        let result = validate(&doc(json!([empty])));
        assert_eq!(result.errors[0].field, "endpoints[0].responses");
    }

    #[test]
    fn test_non_success_responses_only_warn() {
        let mut ep = endpoint("a", "GET", "/a");
        ep["responses"] = json!([{"statusCode": 404, "description": "Missing", "contentType": ""}]);
        let result = validate(&doc(json!([ep])));
        assert!(result.is_valid);
        assert_eq!(result.warnings[0].field, "endpoints[0].responses");
    }

    #[test]
    fn test_model_checks() {
        let mut d = doc(json!([endpoint("a", "GET", "/a")]));
        d.models = serde_json::from_value(json!({
            "Tag": {"type": "string"},
            "User": {"type": "object", "properties": {"name": {"type": "text"}}}
        }))
        .unwrap();
        let result = validate(&d);
        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["models.Tag.type", "models.Tag.properties", "models.User.properties.name.type"]
        );
    }

    #[test]
    fn test_deep_schema_is_rejected() {
        let mut node = json!({"type": "string"});
        for _ in 0..=MAX_SCHEMA_DEPTH {
            node = json!({"type": "array", "items": node});
        }
        let mut ep = endpoint("a", "POST", "/a");
        ep["requestBody"] = json!({"contentType": "application/json", "schema": node});
        let result = validate(&doc(json!([ep])));
        assert_eq!(result.error_codes(), vec![ErrorCode::InvalidValue]);
    }

    #[test]
    fn test_duplicate_function_name_is_a_warning() {
        let mut first = endpoint("a", "GET", "/users");
        first["name"] = json!("users");
        let mut second = endpoint("b", "GET", "/people");
        second["name"] = json!("Users");
        let result = validate(&doc(json!([first, second])));
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].field, "endpoints[1].name");
    }

    #[test]
    fn test_shared_name_across_methods_is_a_warning() {
        let mut first = endpoint("a", "GET", "/users/{id}");
        first["name"] = json!("user");
        first["parameters"] = json!([{"name": "id", "in": "path", "type": "string",
            "required": true, "description": "x"}]);
        let mut second = endpoint("b", "POST", "/users");
        second["name"] = json!("user");
        let result = validate(&doc(json!([first, second])));
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("'User'"));
    }

    #[test]
    fn test_incomplete_endpoint_warnings_in_order() {
        let mut ep = endpoint("a", "GET", "/a");
        let fields = ep.as_object_mut().unwrap();
        fields.remove("summary");
        fields.remove("description");
        ep["parameters"] = json!([{"name": "id", "in": "path", "type": "string",
            "required": true, "description": "x"}]);
        ep["responses"][0]["description"] = json!("  ");

        let result = validate(&doc(json!([ep])));
        assert!(result.is_valid);
        let warned: Vec<&str> = result.warnings.iter().map(|w| w.field.as_str()).collect();
        assert_eq!(
            warned,
            vec![
                "endpoints[0].parameters",
                "endpoints[0].summary",
                "endpoints[0].description",
                "endpoints[0].responses[0].description",
            ]
        );
        assert!(result.warnings[0].message.contains("'id'"));
        assert!(result.warnings[3].message.contains("200"));
    }

    #[test]
    fn test_model_names_must_become_unique_type_names() {
        let mut ep = endpoint("users", "GET", "/users");
        ep["name"] = json!("Get Users");
        ep["responses"][0]["schema"] = json!({"type": "array", "items": {"type": "object",
            "properties": {"id": {"type": "number"}}}});
        let mut d = doc(json!([ep]));
        let model = json!({"type": "object", "properties": {"id": {"type": "number"}}});
        d.models = serde_json::from_value(json!({
            "2fa": model.clone(),
            "pet-owner": model.clone(),
            "PetOwner": model.clone(),
            "GetUsersItem": model.clone(),
            "GetUsersResponse": model.clone(),
            "class": model,
        }))
        .unwrap();

        let result = validate(&d);
        assert_eq!(
            result.error_codes(),
            vec![
                ErrorCode::InvalidFormat,
                ErrorCode::InvalidValue,
                ErrorCode::InvalidValue,
                ErrorCode::InvalidFormat,
                ErrorCode::InvalidValue,
            ]
        );
        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "models.2fa",
                "models.GetUsersItem",
                "models.GetUsersResponse",
                "models.class",
                "models.pet-owner",
            ]
        );
        assert!(result.errors[4].message.contains("'PetOwner'"));
    }

    #[test]
    fn test_model_may_reuse_a_name_the_endpoint_does_not_declare() {
        let mut d = doc(json!([endpoint("users", "GET", "/users")]));
        d.models = serde_json::from_value(json!({
            "UsersResponse": {"type": "object", "properties": {"id": {"type": "number"}}}
        }))
        .unwrap();
        assert!(validate(&d).is_valid);
    }
}
