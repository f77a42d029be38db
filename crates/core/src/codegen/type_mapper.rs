//! Property schema to TypeScript type mapping.
//!
//! Mapping never fails on unexpected input: unknown types fall back to `any`,
//! arrays without `items` become `any[]` and objects without `properties`
//! become `Record<string, any>`. The only failure is nesting deeper than
//! [`MAX_SCHEMA_DEPTH`], which stops runaway recursion on malformed input.

use apigen_common::{PropertySchema, SchemaType};
use serde_json::Value;

use super::ir::{Emit, TsLiteral, TsPrimitive, TsProp, TsType};
use crate::error::{GenerateError, MAX_SCHEMA_DEPTH};

/// The TypeScript type of a schema node, as source text.
pub fn render_type(schema: &PropertySchema) -> Result<String, GenerateError> {
    Ok(map_type(schema)?.emit())
}

/// Map a schema node to a TypeScript type.
pub(crate) fn map_type(schema: &PropertySchema) -> Result<TsType, GenerateError> {
    map_node(schema, "schema", 0)
}

pub(crate) fn map_node(
    schema: &PropertySchema,
    field: &str,
    depth: usize,
) -> Result<TsType, GenerateError> {
    if depth > MAX_SCHEMA_DEPTH {
        return Err(GenerateError::SchemaTooDeep {
            field: field.to_string(),
            max_depth: MAX_SCHEMA_DEPTH,
        });
    }

    let ty = match &schema.schema_type {
        SchemaType::String => match schema.enum_values.as_deref() {
            Some(values) => enum_union(values),
            None => TsType::string(),
        },
        SchemaType::Number => TsType::Primitive(TsPrimitive::Number),
        SchemaType::Boolean => TsType::Primitive(TsPrimitive::Boolean),
        SchemaType::Array => match &schema.items {
            Some(items) => TsType::Array(Box::new(map_node(
                items,
                &format!("{field}.items"),
                depth + 1,
            )?)),
            None => TsType::Array(Box::new(TsType::any())),
        },
        SchemaType::Object => {
            if schema.properties.is_some() {
                TsType::Object(object_properties(schema, field, depth)?)
            } else {
                TsType::any_record()
            }
        }
        SchemaType::Other(_) => TsType::any(),
    };
    Ok(ty)
}

/// Members of an object node, in key order. A member is optional unless the
/// node's `required` array names it. `depth` is the depth of `schema` itself.
pub(crate) fn object_properties(
    schema: &PropertySchema,
    field: &str,
    depth: usize,
) -> Result<Vec<TsProp>, GenerateError> {
    let Some(properties) = &schema.properties else {
        return Ok(Vec::new());
    };
    properties
        .iter()
        .map(|(name, child)| {
            let child_field = format!("{field}.properties.{name}");
            Ok(TsProp {
                name: name.clone(),
                ty: map_node(child, &child_field, depth + 1)?,
                optional: !schema.is_required(name),
                doc: child.description.clone(),
            })
        })
        .collect()
}

/// `enum: ["a", "b"]` -> `'a' | 'b'`. Values that have no literal type are
/// skipped; an enum with none left widens to `string`.
fn enum_union(values: &[Value]) -> TsType {
    let mut members: Vec<TsType> = values
        .iter()
        .filter_map(|value| {
            let literal = match value {
                Value::String(s) => TsLiteral::String(s.clone()),
                Value::Bool(b) => TsLiteral::Bool(*b),
                Value::Null => TsLiteral::Null,
                Value::Number(n) => match n.as_i64() {
                    Some(i) => TsLiteral::Int(i),
                    None => TsLiteral::Number(n.as_f64()?),
                },
                Value::Array(_) | Value::Object(_) => return None,
            };
            Some(TsType::Literal(literal))
        })
        .collect();
    members.dedup();

    match members.len() {
        0 => TsType::string(),
        1 => members.remove(0),
        _ => TsType::Union(members),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(value: Value) -> PropertySchema {
        serde_json::from_value(value).unwrap()
    }

    fn render(value: Value) -> String {
        render_type(&schema(value)).unwrap()
    }

    #[test]
    fn test_primitives() {
        assert_eq!(render(json!({"type": "string"})), "string");
        assert_eq!(render(json!({"type": "number"})), "number");
        assert_eq!(render(json!({"type": "boolean"})), "boolean");
    }

    #[test]
    fn test_string_enum_becomes_union() {
        assert_eq!(
            render(json!({"type": "string", "enum": ["active", "banned"]})),
            "'active' | 'banned'"
        );
        assert_eq!(render(json!({"type": "string", "enum": ["only"]})), "'only'");
        assert_eq!(render(json!({"type": "string", "enum": []})), "string");
    }

    #[test]
    fn test_number_enum_is_still_number() {
        assert_eq!(render(json!({"type": "number", "enum": [1, 2]})), "number");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            render(json!({"type": "array", "items": {"type": "string"}})),
            "string[]"
        );
        assert_eq!(render(json!({"type": "array"})), "any[]");
        assert_eq!(
            render(json!({"type": "array", "items": {"type": "string", "enum": ["a", "b"]}})),
            "('a' | 'b')[]"
        );
    }

    #[test]
    fn test_objects() {
        assert_eq!(render(json!({"type": "object"})), "Record<string, any>");
        assert_eq!(
            render(json!({
                "type": "object",
                "properties": {"name": {"type": "string"}, "id": {"type": "number"}},
                "required": ["id"]
            })),
            "{ id: number; name?: string }"
        );
    }

    #[test]
    fn test_unknown_type_falls_back_to_any() {
        assert_eq!(render(json!({"type": "integer"})), "any");
        assert_eq!(render(json!({})), "any");
    }

    #[test]
    fn test_depth_guard() {
        let mut node = PropertySchema {
            schema_type: SchemaType::String,
            ..PropertySchema::default()
        };
        for _ in 0..=MAX_SCHEMA_DEPTH {
            node = PropertySchema {
                schema_type: SchemaType::Array,
                items: Some(Box::new(node)),
                ..PropertySchema::default()
            };
        }
        let err = map_node(&node, "models.Deep", 0).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::SchemaTooDeep { ref field, max_depth }
                if max_depth == MAX_SCHEMA_DEPTH && field.starts_with("models.Deep.items")
        ));

        let shallow = *node.items.unwrap();
        assert!(map_type(&shallow).is_ok());
    }
}
