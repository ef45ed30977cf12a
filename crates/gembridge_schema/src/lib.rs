//! Tool schema translation from the Claude dialect to the Gemini dialect.
//!
//! Claude tool parameters are permissive JSON Schema. Gemini accepts a
//! narrower vocabulary: one uppercase type per node, no `const`, no
//! combinators, no `default`. [`normalize`] bridges the two, trading exact
//! semantics for a schema the upstream will accept.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod merge;
mod normalize;
mod tool;

pub use merge::{EnumUnion, merge_enum_any_of};
pub use normalize::normalize;
pub use tool::{GeminiFunctionDeclaration, ToolSchema, ToolSchemaConverter, function_declarations};
