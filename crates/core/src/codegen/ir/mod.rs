//! TypeScript AST used by every generator.
//!
//! The generators never concatenate TypeScript by hand. They build these
//! nodes and let emission turn them into text:
//!
//! - `types`: TypeScript AST (TsType, TsExpr, TsStmt, TsFunction, TsModule)
//! - `emit`: AST to code strings via the `Emit` trait
//! - `utils`: quoting, escaping and identifier helpers shared by both

mod emit;
mod types;
pub mod utils;

pub use emit::Emit;
pub use types::{
    ObjectEntry, TemplatePart, TsExport, TsExpr, TsFunction, TsImport, TsLiteral, TsModule,
    TsParam, TsPrimitive, TsProp, TsStmt, TsType, TsTypeDef, TypeDefKind,
};
