//! TypeScript IR types for code generation.
//!
//! This module defines the TypeScript representation the generators build:
//! - TsType: Types (primitives, arrays, unions, objects, etc.)
//! - TsExpr / TsStmt: Expressions and statements of generated functions
//! - TsTypeDef / TsFunction / TsModule: Top-level declarations

/// TypeScript type representation
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// Primitive types: string, number, boolean, void, any
    Primitive(TsPrimitive),
    /// Array type: T[]
    Array(Box<TsType>),
    /// Union type: A | B | C
    Union(Vec<TsType>),
    /// Object type: { foo: string; bar?: number }
    Object(Vec<TsProp>),
    /// Record type: Record<K, V>
    Record {
        key: Box<TsType>,
        value: Box<TsType>,
    },
    /// Literal type: 'foo', 42, true
    Literal(TsLiteral),
    /// Named type reference: User
    Ref(String),
    /// Generic instantiation: APIResponse<User>
    Generic { name: String, args: Vec<TsType> },
}

impl TsType {
    /// `string`
    pub const fn string() -> Self {
        TsType::Primitive(TsPrimitive::String)
    }

    /// `any`
    pub const fn any() -> Self {
        TsType::Primitive(TsPrimitive::Any)
    }

    /// `Record<string, any>`, the type of an object without declared properties
    pub fn any_record() -> Self {
        TsType::Record {
            key: Box::new(TsType::string()),
            value: Box::new(TsType::any()),
        }
    }

    /// Generic instantiation with a single argument, e.g. `Promise<T>`
    pub fn generic(name: &str, arg: TsType) -> Self {
        TsType::Generic {
            name: name.to_string(),
            args: vec![arg],
        }
    }

    /// Named reference
    pub fn named(name: impl Into<String>) -> Self {
        TsType::Ref(name.into())
    }
}

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    String,
    Number,
    Boolean,
    Void,
    Any,
}

/// Object property definition
#[derive(Debug, Clone, PartialEq)]
pub struct TsProp {
    pub name: String,
    pub ty: TsType,
    pub optional: bool,
    /// Rendered as a JSDoc comment above the property inside interfaces
    pub doc: Option<String>,
}

/// TypeScript literal values
#[derive(Debug, Clone, PartialEq)]
pub enum TsLiteral {
    String(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    Null,
}

/// TypeScript expression
#[derive(Debug, Clone, PartialEq)]
pub enum TsExpr {
    /// Identifier: foo
    Ident(String),
    /// Literal value: 'bar', 42
    Literal(TsLiteral),
    /// Function call: foo<T>(a, b)
    Call {
        callee: Box<TsExpr>,
        type_args: Vec<TsType>,
        args: Vec<TsExpr>,
    },
    /// Arrow function with an expression body: (x) => x.foo
    Arrow {
        params: Vec<TsParam>,
        body: Box<TsExpr>,
    },
    /// Object literal: { a: 1, b, ...c }
    Object(Vec<ObjectEntry>),
    /// Member access: foo.bar
    Member { object: Box<TsExpr>, prop: String },
    /// Template literal: `${foo}/bar`
    Template(Vec<TemplatePart>),
    /// Await expression: await fetch()
    Await(Box<TsExpr>),
    /// Array literal: [a, b, c]
    Array(Vec<TsExpr>),
    /// Type cast: expr as Type
    Cast { expr: Box<TsExpr>, ty: TsType },
    /// Raw code that doesn't fit the AST
    Raw(String),
}

impl TsExpr {
    /// Identifier expression
    pub fn ident(name: impl Into<String>) -> Self {
        TsExpr::Ident(name.into())
    }

    /// `object.prop`
    pub fn member(object: TsExpr, prop: impl Into<String>) -> Self {
        TsExpr::Member {
            object: Box::new(object),
            prop: prop.into(),
        }
    }

    /// Plain call without type arguments
    pub fn call(callee: TsExpr, args: Vec<TsExpr>) -> Self {
        TsExpr::Call {
            callee: Box::new(callee),
            type_args: Vec::new(),
            args,
        }
    }
}

/// Entry of an object literal
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectEntry {
    /// key: value
    KeyValue(String, TsExpr),
    /// key (shorthand for key: key)
    Shorthand(String),
    /// ...expr
    Spread(TsExpr),
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct TsParam {
    pub name: String,
    pub ty: Option<TsType>,
    pub optional: bool,
}

/// Template literal part
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    /// Static string part
    Static(String),
    /// Dynamic expression part: ${expr}
    Dynamic(TsExpr),
}

// =============================================================================
// Module-Level IR
// =============================================================================

/// Import statement: import { a, b } from "mod";
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsImport {
    pub items: Vec<String>,
    pub from: String,
    /// Whether this is a type-only import
    pub type_only: bool,
}

/// Re-export statement: export { a, b } from "mod";
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsExport {
    pub items: Vec<String>,
    pub from: String,
    /// Whether this is a type-only export
    pub type_only: bool,
}

/// Type definition kind
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefKind {
    /// interface Foo { ... }
    Interface { properties: Vec<TsProp> },
    /// type Foo = ...
    TypeAlias { ty: TsType },
}

/// Type definition
#[derive(Debug, Clone, PartialEq)]
pub struct TsTypeDef {
    pub name: String,
    pub doc: Option<String>,
    pub kind: TypeDefKind,
}

/// Statement in a function body
#[derive(Debug, Clone, PartialEq)]
pub enum TsStmt {
    /// const declaration
    Const {
        name: String,
        ty: Option<TsType>,
        init: TsExpr,
    },
    /// Return statement
    Return(Option<TsExpr>),
    /// try { ... } catch (param) { ... }
    TryCatch {
        body: Vec<TsStmt>,
        catch_param: String,
        catch_body: Vec<TsStmt>,
    },
    /// Throw statement
    Throw(TsExpr),
}

/// Function definition
#[derive(Debug, Clone, PartialEq)]
pub struct TsFunction {
    pub name: String,
    /// JSDoc lines (tags included verbatim, e.g. `@deprecated`)
    pub docs: Vec<String>,
    pub params: Vec<TsParam>,
    pub return_type: Option<TsType>,
    pub body: Vec<TsStmt>,
    pub is_async: bool,
    pub is_export: bool,
}

/// Complete TypeScript module
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TsModule {
    /// Banner comment lines
    pub header: Vec<String>,
    pub imports: Vec<TsImport>,
    pub types: Vec<TsTypeDef>,
    pub functions: Vec<TsFunction>,
    pub exports: Vec<TsExport>,
}
