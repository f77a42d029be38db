//! TypeScript code emission via the Emit trait.
//!
//! This module provides a trait-based approach to converting TypeScript AST nodes
//! to string representations. Each AST type implements `Emit` for clean, composable
//! code generation. Emission is purely mechanical: identical trees always print
//! identical text.

use super::types::{
    ObjectEntry, TemplatePart, TsExport, TsExpr, TsFunction, TsImport, TsLiteral, TsModule,
    TsParam, TsPrimitive, TsProp, TsStmt, TsType, TsTypeDef, TypeDefKind,
};
use super::utils::{escape_single_quoted, escape_template, jsdoc_text, quote_if_needed};

/// Trait for emitting TypeScript code from AST nodes.
pub trait Emit {
    /// Convert the AST node to its TypeScript string representation.
    fn emit(&self) -> String;
}

fn join<T: Emit>(items: &[T], sep: &str) -> String {
    items.iter().map(Emit::emit).collect::<Vec<_>>().join(sep)
}

/// Render JSDoc lines as a comment block at the given indentation.
fn emit_jsdoc(lines: &[String], prefix: &str) -> String {
    match lines {
        [] => String::new(),
        [single] => format!("{prefix}/** {} */\n", jsdoc_text(single)),
        _ => {
            let mut output = format!("{prefix}/**\n");
            for line in lines {
                let text = jsdoc_text(line);
                if text.is_empty() {
                    output.push_str(&format!("{prefix} *\n"));
                } else {
                    output.push_str(&format!("{prefix} * {text}\n"));
                }
            }
            output.push_str(&format!("{prefix} */\n"));
            output
        }
    }
}

// =============================================================================
// Primitive Types
// =============================================================================

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::String => "string".to_string(),
            TsPrimitive::Number => "number".to_string(),
            TsPrimitive::Boolean => "boolean".to_string(),
            TsPrimitive::Void => "void".to_string(),
            TsPrimitive::Any => "any".to_string(),
        }
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            TsLiteral::String(s) => format!("'{}'", escape_single_quoted(s)),
            TsLiteral::Number(n) => n.to_string(),
            TsLiteral::Int(i) => i.to_string(),
            TsLiteral::Bool(b) => b.to_string(),
            TsLiteral::Null => "null".to_string(),
        }
    }
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Array(inner) => {
                let inner_str = inner.emit();
                // Wrap unions in parentheses
                if matches!(**inner, TsType::Union(_)) {
                    format!("({inner_str})[]")
                } else {
                    format!("{inner_str}[]")
                }
            }
            TsType::Union(types) => join(types, " | "),
            TsType::Object(props) => {
                if props.is_empty() {
                    "{}".to_string()
                } else {
                    format!("{{ {} }}", join(props, "; "))
                }
            }
            TsType::Record { key, value } => {
                format!("Record<{}, {}>", key.emit(), value.emit())
            }
            TsType::Literal(lit) => lit.emit(),
            TsType::Ref(name) => name.clone(),
            TsType::Generic { name, args } => format!("{name}<{}>", join(args, ", ")),
        }
    }
}

impl Emit for TsProp {
    fn emit(&self) -> String {
        let key = quote_if_needed(&self.name);
        let opt = if self.optional { "?" } else { "" };
        format!("{key}{opt}: {}", self.ty.emit())
    }
}

// =============================================================================
// Type Definitions
// =============================================================================

impl Emit for TsTypeDef {
    fn emit(&self) -> String {
        let mut output = self
            .doc
            .as_ref()
            .map(|d| emit_jsdoc(std::slice::from_ref(d), ""))
            .unwrap_or_default();
        match &self.kind {
            TypeDefKind::Interface { properties } => {
                output.push_str(&format!("export interface {} {{\n", self.name));
                for prop in properties {
                    if let Some(doc) = &prop.doc {
                        output.push_str(&emit_jsdoc(std::slice::from_ref(doc), "  "));
                    }
                    output.push_str(&format!("  {};\n", prop.emit()));
                }
                output.push_str("}\n");
            }
            TypeDefKind::TypeAlias { ty } => {
                output.push_str(&format!("export type {} = {};\n", self.name, ty.emit()));
            }
        }
        output
    }
}

// =============================================================================
// Expressions
// =============================================================================

impl Emit for ObjectEntry {
    fn emit(&self) -> String {
        match self {
            ObjectEntry::KeyValue(key, value) => {
                format!("{}: {}", quote_if_needed(key), value.emit())
            }
            ObjectEntry::Shorthand(key) => key.clone(),
            ObjectEntry::Spread(expr) => format!("...{}", expr.emit()),
        }
    }
}

impl Emit for TsExpr {
    fn emit(&self) -> String {
        match self {
            TsExpr::Ident(name) => name.clone(),
            TsExpr::Literal(lit) => lit.emit(),
            TsExpr::Call {
                callee,
                type_args,
                args,
            } => {
                let type_args_str = if type_args.is_empty() {
                    String::new()
                } else {
                    format!("<{}>", join(type_args, ", "))
                };
                format!("{}{type_args_str}({})", callee.emit(), join(args, ", "))
            }
            TsExpr::Arrow { params, body } => {
                format!("({}) => {}", join(params, ", "), body.emit())
            }
            TsExpr::Object(entries) => {
                if entries.is_empty() {
                    "{}".to_string()
                } else {
                    format!("{{ {} }}", join(entries, ", "))
                }
            }
            TsExpr::Member { object, prop } => {
                format!("{}.{prop}", object.emit())
            }
            TsExpr::Template(parts) => {
                let content: String = parts
                    .iter()
                    .map(|p| match p {
                        TemplatePart::Static(s) => escape_template(s),
                        TemplatePart::Dynamic(e) => format!("${{{}}}", e.emit()),
                    })
                    .collect();
                format!("`{content}`")
            }
            TsExpr::Await(expr) => format!("await {}", expr.emit()),
            TsExpr::Array(items) => format!("[{}]", join(items, ", ")),
            TsExpr::Cast { expr, ty } => format!("{} as {}", expr.emit(), ty.emit()),
            TsExpr::Raw(code) => code.clone(),
        }
    }
}

impl Emit for TsParam {
    fn emit(&self) -> String {
        let opt = if self.optional { "?" } else { "" };
        match &self.ty {
            Some(ty) => format!("{}{opt}: {}", self.name, ty.emit()),
            None => format!("{}{opt}", self.name),
        }
    }
}

// =============================================================================
// Statements
// =============================================================================

impl Emit for TsStmt {
    fn emit(&self) -> String {
        self.emit_indented(1)
    }
}

impl TsStmt {
    /// Emit with specified indentation level (2 spaces per level)
    pub fn emit_indented(&self, indent: usize) -> String {
        let prefix = "  ".repeat(indent);
        match self {
            TsStmt::Const { name, ty, init } => {
                let ty_str = ty
                    .as_ref()
                    .map(|t| format!(": {}", t.emit()))
                    .unwrap_or_default();
                format!("{prefix}const {name}{ty_str} = {};\n", init.emit())
            }
            TsStmt::Return(expr) => match expr {
                Some(e) => format!("{prefix}return {};\n", e.emit()),
                None => format!("{prefix}return;\n"),
            },
            TsStmt::TryCatch {
                body,
                catch_param,
                catch_body,
            } => {
                let mut output = format!("{prefix}try {{\n");
                for stmt in body {
                    output.push_str(&stmt.emit_indented(indent + 1));
                }
                output.push_str(&format!("{prefix}}} catch ({catch_param}) {{\n"));
                for stmt in catch_body {
                    output.push_str(&stmt.emit_indented(indent + 1));
                }
                output.push_str(&format!("{prefix}}}\n"));
                output
            }
            TsStmt::Throw(expr) => format!("{prefix}throw {};\n", expr.emit()),
        }
    }
}

// =============================================================================
// Functions
// =============================================================================

impl Emit for TsFunction {
    fn emit(&self) -> String {
        let mut output = emit_jsdoc(&self.docs, "");

        if self.is_export {
            output.push_str("export ");
        }
        if self.is_async {
            output.push_str("async ");
        }

        let return_type_str = self
            .return_type
            .as_ref()
            .map(|t| format!(": {}", t.emit()))
            .unwrap_or_default();

        output.push_str(&format!(
            "function {}({}){return_type_str}",
            self.name,
            join(&self.params, ", ")
        ));

        if self.body.is_empty() {
            output.push_str(" {}\n");
        } else {
            output.push_str(" {\n");
            for stmt in &self.body {
                output.push_str(&stmt.emit_indented(1));
            }
            output.push_str("}\n");
        }

        output
    }
}

// =============================================================================
// Imports / Exports
// =============================================================================

impl Emit for TsImport {
    fn emit(&self) -> String {
        let type_keyword = if self.type_only { "type " } else { "" };
        format!(
            "import {type_keyword}{{ {} }} from '{}';\n",
            self.items.join(", "),
            escape_single_quoted(&self.from)
        )
    }
}

impl Emit for TsExport {
    fn emit(&self) -> String {
        let type_keyword = if self.type_only { "type " } else { "" };
        if self.items.len() <= 3 {
            return format!(
                "export {type_keyword}{{ {} }} from '{}';\n",
                self.items.join(", "),
                escape_single_quoted(&self.from)
            );
        }
        let mut output = format!("export {type_keyword}{{\n");
        for item in &self.items {
            output.push_str(&format!("  {item},\n"));
        }
        output.push_str(&format!("}} from '{}';\n", escape_single_quoted(&self.from)));
        output
    }
}

// =============================================================================
// Module
// =============================================================================

impl Emit for TsModule {
    fn emit(&self) -> String {
        let mut output = String::new();

        for line in &self.header {
            output.push_str(&format!("// {line}\n"));
        }
        if !self.header.is_empty() {
            output.push('\n');
        }

        for import in &self.imports {
            output.push_str(&import.emit());
        }
        if !self.imports.is_empty() {
            output.push('\n');
        }

        for type_def in &self.types {
            output.push_str(&type_def.emit());
            output.push('\n');
        }

        for func in &self.functions {
            output.push_str(&func.emit());
            output.push('\n');
        }

        for (i, export) in self.exports.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&export.emit());
        }

        output
    }
}

// =============================================================================
// Tests
// =============================================================================
