//! Deterministic serializer for schema documents.
//!
//! Output layout: one blank line between definitions, two-space field
//! indent, trailing newline. Printing a parsed copy of printed output
//! reproduces it byte for byte.

use crate::ast::{
    Definition, Directive, Document, EnumDefinition, FieldDefinition, ScalarDefinition,
    TypeDefinition, TypeRef, Value,
};
use crate::error::{SdlError, SdlResult};
use std::collections::HashSet;
use std::fmt::Write;

/// Serializes a document to schema text.
///
/// Fails with [`SdlError::Serialize`] when two definitions share a name —
/// the one state this subsystem can produce (via a block title collision)
/// that has no valid textual form.
pub fn print(doc: &Document) -> SdlResult<String> {
    check_duplicate_names(doc)?;
    let mut out = String::new();
    for (i, definition) in doc.definitions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match definition {
            Definition::Type(t) => print_type(&mut out, t),
            Definition::Scalar(s) => print_scalar(&mut out, s),
            Definition::Enum(e) => print_enum(&mut out, e),
        }
    }
    if !doc.trailing_comments.is_empty() {
        if !doc.definitions.is_empty() {
            out.push('\n');
        }
        print_comments(&mut out, &doc.trailing_comments, "");
    }
    Ok(out)
}

fn check_duplicate_names(doc: &Document) -> SdlResult<()> {
    let mut seen = HashSet::new();
    for definition in &doc.definitions {
        let name = match definition {
            Definition::Type(t) => &t.name,
            Definition::Scalar(s) => &s.name,
            Definition::Enum(e) => &e.name,
        };
        if !seen.insert(name.as_str()) {
            return Err(SdlError::Serialize(format!(
                "duplicate type name `{name}` in document"
            )));
        }
    }
    Ok(())
}

fn print_comments(out: &mut String, comments: &[String], indent: &str) {
    for comment in comments {
        if comment.is_empty() {
            let _ = writeln!(out, "{indent}#");
        } else {
            let _ = writeln!(out, "{indent}# {comment}");
        }
    }
}

fn print_type(out: &mut String, ty: &TypeDefinition) {
    print_comments(out, &ty.comments, "");
    let _ = write!(out, "{} {}", ty.keyword, ty.name);
    print_directives(out, &ty.directives);
    out.push_str(" {\n");
    for field in &ty.fields {
        print_field(out, field);
    }
    print_comments(out, &ty.trailing_comments, "  ");
    out.push_str("}\n");
}

fn print_field(out: &mut String, field: &FieldDefinition) {
    print_comments(out, &field.comments, "  ");
    let _ = write!(out, "  {}: {}", field.name, type_ref(&field.ty));
    print_directives(out, &field.directives);
    out.push('\n');
}

fn print_scalar(out: &mut String, scalar: &ScalarDefinition) {
    print_comments(out, &scalar.comments, "");
    let _ = write!(out, "scalar {}", scalar.name);
    print_directives(out, &scalar.directives);
    out.push('\n');
}

fn print_enum(out: &mut String, def: &EnumDefinition) {
    print_comments(out, &def.comments, "");
    let _ = write!(out, "enum {}", def.name);
    print_directives(out, &def.directives);
    out.push_str(" {\n");
    for value in &def.values {
        let _ = writeln!(out, "  {value}");
    }
    print_comments(out, &def.trailing_comments, "  ");
    out.push_str("}\n");
}

fn print_directives(out: &mut String, directives: &[Directive]) {
    for directive in directives {
        let _ = write!(out, " @{}", directive.name);
        if !directive.arguments.is_empty() {
            out.push('(');
            for (i, arg) in directive.arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{}: {}", arg.name, value(&arg.value));
            }
            out.push(')');
        }
    }
}

fn type_ref(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(name) => name.clone(),
        TypeRef::NonNull(inner) => format!("{}!", type_ref(inner)),
        TypeRef::List(inner) => format!("[{}]", type_ref(inner)),
    }
}

/// Formats a literal value using the codec's quoting rules.
pub(crate) fn value(v: &Value) -> String {
    match v {
        Value::Str(s) => quote(s),
        Value::Int(i) => i.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Enum(name) => name.clone(),
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TypeKeyword;

    #[test]
    fn duplicate_names_fail() {
        let mut doc = Document::new();
        doc.push_type(TypeDefinition::new(TypeKeyword::Type, "Order"));
        doc.push_type(TypeDefinition::new(TypeKeyword::Input, "Order"));
        let err = print(&doc).unwrap_err();
        assert!(matches!(err, SdlError::Serialize(_)));
    }

    #[test]
    fn quotes_special_characters() {
        assert_eq!(value(&Value::Str("a \"b\"\n".into())), r#""a \"b\"\n""#);
    }
}
