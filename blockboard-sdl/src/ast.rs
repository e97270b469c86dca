//! Typed AST for schema documents.
//!
//! Each node kind is its own struct or tagged enum rather than a nested
//! heterogeneous record, so traversal and mutation are checked by the
//! compiler. Nodes are ephemeral: the sync engine reconstructs the tree on
//! every parse and never holds one across cycles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed schema document: an ordered list of definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
    /// `#` comment lines after the last definition, reprinted verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trailing_comments: Vec<String>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the type definition with the given name, if any.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.type_definitions().find(|t| t.name == name)
    }

    /// Returns a mutable reference to the type definition with the given name.
    pub fn get_type_mut(&mut self, name: &str) -> Option<&mut TypeDefinition> {
        self.type_definitions_mut().find(|t| t.name == name)
    }

    /// Whether a type definition with the given name exists.
    #[must_use]
    pub fn contains_type(&self, name: &str) -> bool {
        self.get_type(name).is_some()
    }

    /// Iterates over object/input type definitions, skipping passthrough
    /// definitions (scalars, enums).
    pub fn type_definitions(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Type(t) => Some(t),
            _ => None,
        })
    }

    /// Mutable variant of [`Document::type_definitions`].
    pub fn type_definitions_mut(&mut self) -> impl Iterator<Item = &mut TypeDefinition> {
        self.definitions.iter_mut().filter_map(|d| match d {
            Definition::Type(t) => Some(t),
            _ => None,
        })
    }

    /// Appends a type definition.
    pub fn push_type(&mut self, ty: TypeDefinition) {
        self.definitions.push(Definition::Type(ty));
    }

    /// Whether the document has no definitions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// A top-level definition.
///
/// Scalar and enum definitions are hand-written content: the codec parses
/// and reprints them but the sync engine never creates or removes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Definition {
    Type(TypeDefinition),
    Scalar(ScalarDefinition),
    Enum(EnumDefinition),
}

/// Which keyword introduced a type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKeyword {
    /// `type Name { ... }` — an object type.
    Type,
    /// `input Name { ... }` — an input type.
    Input,
}

impl fmt::Display for TypeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeKeyword::Type => "type",
            TypeKeyword::Input => "input",
        })
    }
}

/// An object or input type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub keyword: TypeKeyword,
    pub name: String,
    /// Leading `#` comment lines (without the `#`), reprinted verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    /// Comment lines between the last field and the closing brace.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trailing_comments: Vec<String>,
}

impl TypeDefinition {
    /// Creates a type definition with no fields or directives.
    #[must_use]
    pub fn new(keyword: TypeKeyword, name: impl Into<String>) -> Self {
        Self {
            keyword,
            name: name.into(),
            comments: Vec::new(),
            directives: Vec::new(),
            fields: Vec::new(),
            trailing_comments: Vec::new(),
        }
    }

    /// Builder-style field append.
    #[must_use]
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Builder-style directive append.
    #[must_use]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Returns the first directive with the given name, if any.
    #[must_use]
    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|d| d.name == name)
    }
}

/// A field inside a type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub ty: TypeRef,
    /// Leading `#` comment lines, reprinted verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

impl FieldDefinition {
    /// Creates a field with no directives.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            comments: Vec::new(),
            directives: Vec::new(),
        }
    }
}

/// A reference to a type in field position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "camelCase")]
pub enum TypeRef {
    Named(String),
    NonNull(Box<TypeRef>),
    List(Box<TypeRef>),
}

impl TypeRef {
    /// A bare named reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wraps this reference in non-null.
    #[must_use]
    pub fn non_null(self) -> Self {
        TypeRef::NonNull(Box::new(self))
    }

    /// Wraps this reference in a list.
    #[must_use]
    pub fn list(self) -> Self {
        TypeRef::List(Box::new(self))
    }

    /// The innermost named type.
    #[must_use]
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(n) => n,
            TypeRef::NonNull(inner) | TypeRef::List(inner) => inner.base_name(),
        }
    }

    /// Replaces the innermost named type when it equals `old`. Returns
    /// whether a replacement happened.
    pub fn rename_base(&mut self, old: &str, new: &str) -> bool {
        match self {
            TypeRef::Named(n) if n == old => {
                *n = new.to_string();
                true
            }
            TypeRef::Named(_) => false,
            TypeRef::NonNull(inner) | TypeRef::List(inner) => inner.rename_base(old, new),
        }
    }
}

/// A directive application, e.g. `@binding(block: "b1", role: "input")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
}

impl Directive {
    /// Creates a directive with no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Builder-style argument append.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.push(Argument {
            name: name.into(),
            value,
        });
        self
    }

    /// Returns the value of the argument with the given name, if any.
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }
}

/// A named argument inside a directive application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

/// A literal value in argument position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
    /// A bare name (enum value in SDL terms).
    Enum(String),
}

impl Value {
    /// The string content, if this is a string literal.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer content, if this is an int literal.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

/// A hand-written scalar declaration, e.g. `scalar DateTime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

/// A hand-written enum declaration with bare-name values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    pub values: Vec<String>,
    /// Comment lines between the last value and the closing brace.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trailing_comments: Vec<String>,
}
