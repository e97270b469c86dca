//! Property-based tests for the SDL codec.
//!
//! The invariant the sync engine leans on: any document the engine can
//! construct prints to text that parses back to the identical document,
//! and printing is byte-stable across that round trip.

use blockboard_sdl::{
    parse, print, Directive, Document, FieldDefinition, TypeDefinition, TypeKeyword, TypeRef,
    Value,
};
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,8}").unwrap()
}

fn field_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9]{0,8}").unwrap()
}

fn type_ref_strategy() -> impl Strategy<Value = TypeRef> {
    (name_strategy(), 0u8..4).prop_map(|(name, wrapping)| {
        let mut ty = TypeRef::named(name);
        // alternate list/non-null wrapping up to two deep
        if wrapping & 1 != 0 {
            ty = ty.non_null();
        }
        if wrapping & 2 != 0 {
            ty = ty.list().non_null();
        }
        ty
    })
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::string::string_regex("[ -~]{0,20}").unwrap().prop_map(Value::Str),
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
    ]
}

fn directive_strategy() -> impl Strategy<Value = Directive> {
    (
        field_name_strategy(),
        prop::collection::vec((field_name_strategy(), value_strategy()), 0..3),
    )
        .prop_map(|(name, args)| {
            let mut directive = Directive::new(name);
            let mut seen = std::collections::HashSet::new();
            for (arg_name, value) in args {
                // duplicate argument names are not meaningful
                if seen.insert(arg_name.clone()) {
                    directive = directive.with_arg(arg_name, value);
                }
            }
            directive
        })
}

fn field_strategy() -> impl Strategy<Value = FieldDefinition> {
    (
        field_name_strategy(),
        type_ref_strategy(),
        prop::collection::vec(directive_strategy(), 0..2),
    )
        .prop_map(|(name, ty, directives)| {
            let mut field = FieldDefinition::new(name, ty);
            field.directives = directives;
            field
        })
}

fn document_strategy() -> impl Strategy<Value = Document> {
    prop::collection::vec(
        (
            any::<bool>(),
            prop::collection::vec(field_strategy(), 0..5),
            prop::collection::vec(directive_strategy(), 0..2),
        ),
        0..6,
    )
    .prop_map(|types| {
        let mut doc = Document::new();
        for (i, (is_input, fields, directives)) in types.into_iter().enumerate() {
            let keyword = if is_input {
                TypeKeyword::Input
            } else {
                TypeKeyword::Type
            };
            // index-suffixed names keep the document free of duplicates
            let mut ty = TypeDefinition::new(keyword, format!("Gen{i}"));
            ty.fields = fields;
            ty.directives = directives;
            doc.push_type(ty);
        }
        doc
    })
}

// =============================================================================
// ROUND-TRIP PROPERTIES
// =============================================================================

proptest! {
    /// parse(print(doc)) reconstructs the exact document.
    #[test]
    fn print_then_parse_is_identity(doc in document_strategy()) {
        let text = print(&doc).unwrap();
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed, doc);
    }

    /// Printing is byte-stable across a round trip.
    #[test]
    fn reprint_is_byte_stable(doc in document_strategy()) {
        let first = print(&doc).unwrap();
        let second = print(&parse(&first).unwrap()).unwrap();
        prop_assert_eq!(second, first);
    }

    /// Any string survives quoting and re-lexing.
    #[test]
    fn string_values_round_trip(s in "\\PC*") {
        let mut doc = Document::new();
        doc.push_type(
            TypeDefinition::new(TypeKeyword::Type, "Holder")
                .with_directive(Directive::new("note").with_arg("text", Value::Str(s.clone()))),
        );
        let text = print(&doc).unwrap();
        let reparsed = parse(&text).unwrap();
        let value = reparsed
            .get_type("Holder")
            .unwrap()
            .directive("note")
            .unwrap()
            .argument("text")
            .cloned();
        prop_assert_eq!(value, Some(Value::Str(s)));
    }
}
