//! SDL codec for Blockboard.
//!
//! Parses schema-document text into a typed AST and prints an AST back to
//! text. The codec owns two contracts the sync engine depends on:
//! - **Round-trip stability**: printing a parsed, printed document is
//!   byte-stable, so reconciliation never churns text it did not change.
//! - **Content preservation**: hand-written types, fields, directives, and
//!   leading `#` comments survive parse/print untouched.
//!
//! The `identity` module reads and writes the `@binding` directive that ties
//! a schema type to the canvas block it mirrors.
//!
//! # Components
//!
//! - **ast**: tagged-variant document tree (types, fields, directives)
//! - **lexer**: tokenizer with line/column tracking and comment trivia
//! - **parser**: recursive-descent parser, strict and fail-safe variants
//! - **printer**: deterministic serializer
//! - **identity**: `@binding` directive codec with legacy-encoding support

pub mod ast;
mod error;
pub mod identity;
mod lexer;
mod parser;
mod printer;

pub use ast::{
    Argument, Definition, Directive, Document, EnumDefinition, FieldDefinition, ScalarDefinition,
    TypeDefinition, TypeKeyword, TypeRef, Value,
};
pub use error::{SdlError, SdlResult};
pub use identity::{read_binding, write_binding, EntityRole, IdentityBinding, BINDING_DIRECTIVE};
pub use parser::{parse, parse_or_empty};
pub use printer::print;
