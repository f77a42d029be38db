//! Type declarations for models and endpoints.
//!
//! Per endpoint, three declarations may exist, each only when its input does:
//! - `XParams`: interface of the query parameters
//! - `XRequest`: request body schema, or the `in: "body"` parameters when the
//!   endpoint has no `requestBody`
//! - `XResponse`: schema of the first 2xx response that has one. Arrays of
//!   objects additionally produce an `XItem` interface and `XResponse` becomes
//!   `XItem[]`.

use apigen_common::{ApiDocumentation, Endpoint, ParameterLocation, PropertySchema, SchemaType};
use tracing::debug;

use super::CodegenConfig;
use super::ir::utils::needs_quoting;
use super::ir::{Emit, TsModule, TsProp, TsType, TsTypeDef, TypeDefKind};
use super::type_mapper::{map_node, object_properties};
use crate::error::GenerateError;
use crate::naming::{to_pascal_case, type_name};

/// Type names synthesized for one endpoint, plus their declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct EndpointTypes {
    pub params: Option<String>,
    pub request: Option<String>,
    pub response: Option<String>,
    pub defs: Vec<TsTypeDef>,
}

impl EndpointTypes {
    /// Every declared type name, in declaration order.
    pub fn names(&self) -> Vec<String> {
        self.defs.iter().map(|d| d.name.clone()).collect()
    }
}

/// Name of the interface generated for a model key.
pub(crate) fn model_type_name(key: &str) -> String {
    if needs_quoting(key) {
        to_pascal_case(key)
    } else {
        key.to_string()
    }
}

/// Names [`endpoint_types`] declares for `endpoint`, in the same order,
/// without mapping any schema.
pub(crate) fn declared_type_names(endpoint: &Endpoint) -> Vec<String> {
    let mut names = Vec::new();
    if !endpoint.parameters_in(&ParameterLocation::Query).is_empty() {
        names.push(type_name(endpoint, "Params"));
    }

    let has_request = match &endpoint.request_body {
        Some(body) => body.schema.is_some(),
        None => !endpoint.parameters_in(&ParameterLocation::Body).is_empty(),
    };
    if has_request {
        names.push(type_name(endpoint, "Request"));
    }

    if let Some(response) = endpoint.success_response()
        && let Some(schema) = &response.schema
    {
        if schema.schema_type == SchemaType::Array
            && schema.items.as_deref().is_some_and(has_properties)
        {
            names.push(type_name(endpoint, "Item"));
        }
        names.push(type_name(endpoint, "Response"));
    }
    names
}

/// Build the declarations of one endpoint.
pub(crate) fn endpoint_types(
    endpoint: &Endpoint,
    field: &str,
) -> Result<EndpointTypes, GenerateError> {
    let mut types = EndpointTypes::default();

    let query = parameter_props(endpoint, &ParameterLocation::Query, field)?;
    if !query.is_empty() {
        let name = type_name(endpoint, "Params");
        types.defs.push(interface(&name, None, query));
        types.params = Some(name);
    }

    if let Some(def) = request_type(endpoint, field)? {
        types.request = Some(def.name.clone());
        types.defs.push(def);
    }

    if let Some(response) = endpoint.success_response()
        && let Some(schema) = &response.schema
    {
        let name = type_name(endpoint, "Response");
        let doc = Some(response.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        let schema_field = format!("{field}.responses.{}.schema", response.status_code);
        types
            .defs
            .extend(shape_defs(endpoint, &name, doc, schema, &schema_field)?);
        types.response = Some(name);
    }

    Ok(types)
}

fn request_type(endpoint: &Endpoint, field: &str) -> Result<Option<TsTypeDef>, GenerateError> {
    let name = type_name(endpoint, "Request");
    match &endpoint.request_body {
        Some(body) => match &body.schema {
            Some(schema) => {
                let schema_field = format!("{field}.requestBody.schema");
                Ok(Some(single_def(&name, None, schema, &schema_field)?))
            }
            None => Ok(None),
        },
        None => {
            let props = parameter_props(endpoint, &ParameterLocation::Body, field)?;
            if props.is_empty() {
                Ok(None)
            } else {
                Ok(Some(interface(&name, None, props)))
            }
        }
    }
}

/// Declarations for a named schema: `XItem` + alias for arrays of objects,
/// otherwise a single interface or alias.
fn shape_defs(
    endpoint: &Endpoint,
    name: &str,
    doc: Option<String>,
    schema: &PropertySchema,
    field: &str,
) -> Result<Vec<TsTypeDef>, GenerateError> {
    if schema.schema_type == SchemaType::Array
        && let Some(items) = &schema.items
        && has_properties(items)
    {
        let item_name = type_name(endpoint, "Item");
        let item_props = object_properties(items, &format!("{field}.items"), 1)?;
        return Ok(vec![
            interface(&item_name, None, item_props),
            TsTypeDef {
                name: name.to_string(),
                doc,
                kind: TypeDefKind::TypeAlias {
                    ty: TsType::Array(Box::new(TsType::named(item_name))),
                },
            },
        ]);
    }
    Ok(vec![single_def(name, doc, schema, field)?])
}

fn single_def(
    name: &str,
    doc: Option<String>,
    schema: &PropertySchema,
    field: &str,
) -> Result<TsTypeDef, GenerateError> {
    if has_properties(schema) {
        return Ok(interface(name, doc, object_properties(schema, field, 0)?));
    }
    Ok(TsTypeDef {
        name: name.to_string(),
        doc,
        kind: TypeDefKind::TypeAlias {
            ty: map_node(schema, field, 0)?,
        },
    })
}

fn has_properties(schema: &PropertySchema) -> bool {
    schema.schema_type == SchemaType::Object && schema.properties.is_some()
}

fn interface(name: &str, doc: Option<String>, properties: Vec<TsProp>) -> TsTypeDef {
    TsTypeDef {
        name: name.to_string(),
        doc,
        kind: TypeDefKind::Interface { properties },
    }
}

/// Properties for the parameters declared at `location`, in declaration
/// order. The first declaration of a name wins.
fn parameter_props(
    endpoint: &Endpoint,
    location: &ParameterLocation,
    field: &str,
) -> Result<Vec<TsProp>, GenerateError> {
    let mut props: Vec<TsProp> = Vec::new();
    for (index, param) in endpoint.parameters.iter().enumerate() {
        if &param.location != location || props.iter().any(|p| p.name == param.name) {
            continue;
        }
        let schema = param.to_property_schema();
        props.push(TsProp {
            name: param.name.clone(),
            ty: map_node(&schema, &format!("{field}.parameters[{index}]"), 0)?,
            optional: !param.required,
            doc: param.description.clone(),
        });
    }
    Ok(props)
}

/// Interfaces for `models`, sorted by name.
fn model_defs(doc: &ApiDocumentation) -> Result<Vec<TsTypeDef>, GenerateError> {
    let Some(models) = &doc.models else {
        return Ok(Vec::new());
    };
    models
        .iter()
        .map(|(key, schema)| {
            single_def(
                &model_type_name(key),
                schema.description.clone(),
                schema,
                &format!("models.{key}"),
            )
        })
        .collect()
}

/// Generate the types artifact: model interfaces, then every endpoint's
/// declarations in endpoint order.
pub fn generate_types(
    doc: &ApiDocumentation,
    config: &CodegenConfig,
) -> Result<String, GenerateError> {
    let mut module = TsModule {
        header: config.banner(doc, "Type definitions"),
        types: model_defs(doc)?,
        ..TsModule::default()
    };
    let model_count = module.types.len();

    for (index, endpoint) in doc.endpoints.iter().enumerate() {
        let types = endpoint_types(endpoint, &format!("endpoints[{index}]"))?;
        module.types.extend(types.defs);
    }

    debug!(
        models = model_count,
        declarations = module.types.len(),
        "Generated type declarations"
    );
    Ok(module.emit())
}
