//! API documentation schema structs for serde deserialization.
//!
//! Every closed enumeration in the schema (`method`, parameter `in`, `type`,
//! authentication `type`) accepts any string on the wire. Values outside the
//! known set are kept verbatim in an `Other` variant so that the validator
//! can report them instead of deserialization failing on the first one.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Define a string-backed enumeration that tolerates unknown values.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the known set, kept verbatim (empty when absent).
            Other(String),
        }

        impl $name {
            /// Every known wire value, in declaration order.
            pub const KNOWN: &'static [&'static str] = &[$($text),+];

            /// The wire representation of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $text, )+
                    $name::Other(raw) => raw.as_str(),
                }
            }

            /// Whether this value belongs to the known set.
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }

            /// Whether the value was absent (or given as an empty string).
            pub fn is_missing(&self) -> bool {
                matches!(self, $name::Other(raw) if raw.is_empty())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::Other(String::new())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $( $text => $name::$variant, )+
                    _ => $name::Other(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                $name::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

open_enum! {
    /// HTTP method of an endpoint.
    pub enum HttpMethod {
        /// GET
        Get => "GET",
        /// POST
        Post => "POST",
        /// PUT
        Put => "PUT",
        /// DELETE
        Delete => "DELETE",
        /// PATCH
        Patch => "PATCH",
        /// HEAD
        Head => "HEAD",
        /// OPTIONS
        Options => "OPTIONS",
    }
}

impl HttpMethod {
    /// GET requests are read operations served by query hooks.
    pub fn is_query(&self) -> bool {
        matches!(self, HttpMethod::Get)
    }

    /// POST, PUT, PATCH and DELETE change server state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch | HttpMethod::Delete
        )
    }

    /// Methods whose client call takes a request body argument.
    pub fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

open_enum! {
    /// Where a parameter travels in the request.
    pub enum ParameterLocation {
        /// `?name=value`
        Query => "query",
        /// `{name}` segment of the path template
        Path => "path",
        /// Request header
        Header => "header",
        /// Field of the request body
        Body => "body",
    }
}

open_enum! {
    /// Type of a parameter or property schema node.
    pub enum SchemaType {
        /// string
        String => "string",
        /// number
        Number => "number",
        /// boolean
        Boolean => "boolean",
        /// array (requires `items`)
        Array => "array",
        /// object (usually with `properties`)
        Object => "object",
    }
}

open_enum! {
    /// Authentication scheme of the documented API.
    pub enum AuthType {
        /// API key sent in a header
        ApiKey => "apiKey",
        /// Bearer token
        Bearer => "bearer",
        /// HTTP basic auth
        Basic => "basic",
        /// OAuth 2.0
        OAuth2 => "oauth2",
    }
}

/// Root API documentation schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocumentation {
    /// Human readable API title.
    #[serde(default)]
    pub title: String,
    /// Semantic version, e.g. `1.2.0` or `1.2.0-beta`.
    #[serde(default)]
    pub version: String,
    /// Free text description.
    #[serde(default)]
    pub description: String,
    /// Absolute base URL of the API.
    #[serde(default, rename = "baseURL")]
    pub base_url: String,
    /// Authentication scheme, absent for public APIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
    /// Documented endpoints, in declaration order.
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
    /// Reusable named models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<BTreeMap<String, PropertySchema>>,
}

impl ApiDocumentation {
    /// Parse a documentation schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse API documentation: {e}"))
    }

    /// Parse a documentation schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse API documentation: {e}"))
    }
}

/// Authentication settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    /// Scheme kind.
    #[serde(default, rename = "type")]
    pub auth_type: AuthType,
    /// Header carrying the key (required for `apiKey`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_name: Option<String>,
    /// Token prefix for `bearer`, conventionally `Bearer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Free text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single documented endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Unique identifier within the document.
    #[serde(default)]
    pub id: String,
    /// Free text name, the source of every synthesized identifier.
    #[serde(default)]
    pub name: String,
    /// HTTP method.
    #[serde(default)]
    pub method: HttpMethod,
    /// Path template, e.g. `/users/{id}`.
    #[serde(default)]
    pub path: String,
    /// One line summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Request body, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBodySchema>,
    /// Possible responses.
    #[serde(default)]
    pub responses: Vec<ResponseSchema>,
    /// Whether the endpoint is deprecated.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

impl Endpoint {
    /// Names of the `{name}` tokens in the path template, in order of
    /// appearance. A token that is never closed is ignored.
    pub fn path_tokens(&self) -> Vec<&str> {
        let mut tokens = Vec::new();
        let mut rest = self.path.as_str();
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            tokens.push(&after[..close]);
            rest = &after[close + 1..];
        }
        tokens
    }

    /// Parameters declared at the given location, in declaration order.
    pub fn parameters_in(&self, location: &ParameterLocation) -> Vec<&Parameter> {
        self.parameters
            .iter()
            .filter(|p| &p.location == location)
            .collect()
    }

    /// The declared path parameter with the given name.
    pub fn path_parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| p.location == ParameterLocation::Path && p.name == name)
    }

    /// The first 2xx response in declaration order that carries a schema.
    pub fn success_response(&self) -> Option<&ResponseSchema> {
        self.responses
            .iter()
            .find(|r| r.is_success() && r.schema.is_some())
    }
}

/// A declared request parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name as it appears on the wire.
    #[serde(default)]
    pub name: String,
    /// Location of the parameter.
    #[serde(default, rename = "in")]
    pub location: ParameterLocation,
    /// Whether callers must supply it.
    #[serde(default)]
    pub required: bool,
    /// Value type.
    #[serde(default, rename = "type")]
    pub param_type: SchemaType,
    /// Free text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allowed values.
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// Format hint, e.g. `date-time`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Regex pattern for strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Lower bound for numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Upper bound for numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Minimum string length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum string length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
}

impl Parameter {
    /// View this parameter as a property schema node, for type mapping.
    pub fn to_property_schema(&self) -> PropertySchema {
        PropertySchema {
            schema_type: self.param_type.clone(),
            description: self.description.clone(),
            enum_values: self.enum_values.clone(),
            format: self.format.clone(),
            ..PropertySchema::default()
        }
    }
}

/// Request body definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBodySchema {
    /// MIME type of the body.
    #[serde(default)]
    pub content_type: String,
    /// Body schema, expected to be an object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<PropertySchema>,
}

/// Response definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSchema {
    /// HTTP status code.
    #[serde(default)]
    pub status_code: i64,
    /// Free text description.
    #[serde(default)]
    pub description: String,
    /// MIME type of the response body.
    #[serde(default)]
    pub content_type: String,
    /// Body schema, if the response has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<PropertySchema>,
}

impl ResponseSchema {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Recursive schema node describing a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    /// Value type.
    #[serde(default, rename = "type")]
    pub schema_type: SchemaType,
    /// Free text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Example value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Allowed values.
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// Format hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Element schema (arrays).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertySchema>>,
    /// Member schemas (objects).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, PropertySchema>>,
    /// Names of required members (objects).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl PropertySchema {
    /// Whether `name` is listed in this node's `required` array.
    pub fn is_required(&self, name: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|r| r.iter().any(|n| n == name))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_open_enum_keeps_unknown_values() {
        assert_eq!(HttpMethod::from("GET"), HttpMethod::Get);
        assert_eq!(HttpMethod::from("FETCH"), HttpMethod::Other("FETCH".into()));
        assert!(HttpMethod::default().is_missing());
        assert!(!HttpMethod::from("FETCH").is_missing());
        assert_eq!(String::from(SchemaType::Array), "array");
        assert_eq!(ParameterLocation::from("cookie").as_str(), "cookie");
    }

    #[test]
    fn test_deserialize_document() {
        let doc = ApiDocumentation::from_json(
            r#"{
              "title": "Pets",
              "version": "1.0.0",
              "baseURL": "https://api.example.com",
              "authentication": { "type": "apiKey", "headerName": "X-Key" },
              "endpoints": [{
                "id": "list", "name": "List Pets", "method": "GET", "path": "/pets/{owner}",
                "parameters": [{ "name": "owner", "in": "path", "required": true, "type": "string" }],
                "responses": [{ "statusCode": 200, "description": "OK", "contentType": "application/json" }]
              }]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.base_url, "https://api.example.com");
        let auth = doc.authentication.as_ref().unwrap();
        assert_eq!(auth.auth_type, AuthType::ApiKey);
        assert_eq!(auth.header_name.as_deref(), Some("X-Key"));
        let endpoint = &doc.endpoints[0];
        assert_eq!(endpoint.method, HttpMethod::Get);
        assert_eq!(endpoint.parameters[0].location, ParameterLocation::Path);
        assert_eq!(endpoint.responses[0].status_code, 200);
        assert!(!endpoint.deprecated);
    }

    #[test]
    fn test_deserialize_unknown_enum_values() {
        let endpoint: Endpoint = serde_json::from_str(
            r#"{ "id": "x", "name": "x", "method": "TRACE", "path": "/x",
                 "parameters": [{ "name": "q", "in": "cookie", "type": "integer" }],
                 "responses": [] }"#,
        )
        .unwrap();
        assert_eq!(endpoint.method, HttpMethod::Other("TRACE".into()));
        assert_eq!(endpoint.parameters[0].location.as_str(), "cookie");
        assert!(!endpoint.parameters[0].param_type.is_known());
    }

    #[test]
    fn test_serialize_round_trips_wire_names() {
        let param = Parameter {
            name: "page".into(),
            location: ParameterLocation::Query,
            param_type: SchemaType::Number,
            min_length: Some(1),
            ..Parameter::default()
        };
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["in"], "query");
        assert_eq!(json["type"], "number");
        assert_eq!(json["minLength"], 1);
    }

    #[test]
    fn test_path_tokens() {
        let endpoint = Endpoint {
            path: "/users/{userId}/posts/{postId}/{unclosed".into(),
            ..Endpoint::default()
        };
        assert_eq!(endpoint.path_tokens(), vec!["userId", "postId"]);
    }

    #[test]
    fn test_success_response_skips_schemaless() {
        let endpoint = Endpoint {
            responses: vec![
                ResponseSchema {
                    status_code: 204,
                    ..ResponseSchema::default()
                },
                ResponseSchema {
                    status_code: 200,
                    schema: Some(PropertySchema {
                        schema_type: SchemaType::String,
                        ..PropertySchema::default()
                    }),
                    ..ResponseSchema::default()
                },
            ],
            ..Endpoint::default()
        };
        assert_eq!(endpoint.success_response().unwrap().status_code, 200);
    }

    #[test]
    fn test_yaml_input() {
        let doc = ApiDocumentation::from_yaml(
            "title: T\nversion: 1.0.0\nbaseURL: https://x.dev\nendpoints: []\n",
        )
        .unwrap();
        assert_eq!(doc.title, "T");
        assert!(doc.endpoints.is_empty());
    }
}
