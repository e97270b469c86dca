use blockboard_sdl::{parse, EntityRole};
use blockboard_sync::{compute_plan, find_orphans};
use blockboard_types::{Block, BlockKind};
use pretty_assertions::assert_eq;

fn doc(text: &str) -> blockboard_sdl::Document {
    parse(text).unwrap()
}

// ── Additions ────────────────────────────────────────────────────

#[test]
fn empty_document_adds_one_type_per_non_command_block() {
    let plan = compute_plan(
        &doc(""),
        &[
            Block::new("b1", "Checkout", BlockKind::Event),
            Block::new("b2", "Cart Summary", BlockKind::View),
        ],
    );
    let names: Vec<_> = plan.additions.iter().map(|a| a.type_name.as_str()).collect();
    assert_eq!(names, vec!["Checkout", "CartSummary"]);
    assert!(plan.renames.is_empty());
    assert!(plan.removals.is_empty());
}

#[test]
fn command_block_requires_input_and_result_pair() {
    let plan = compute_plan(
        &doc(""),
        &[Block::new("b1", "User Registration", BlockKind::Command)],
    );
    assert_eq!(plan.additions.len(), 2);
    assert_eq!(plan.additions[0].type_name, "UserRegistrationInput");
    assert_eq!(plan.additions[0].role, EntityRole::Input);
    assert_eq!(plan.additions[1].type_name, "UserRegistrationCommandResult");
    assert_eq!(plan.additions[1].role, EntityRole::Result);
    assert_eq!(plan.additions[0].block_id, plan.additions[1].block_id);
}

// ── No-ops and renames ───────────────────────────────────────────

#[test]
fn matching_type_is_a_no_op() {
    let plan = compute_plan(
        &doc("type Checkout @binding(block: \"b1\", role: \"block\", version: 1) {\n  id: ID!\n}\n"),
        &[Block::new("b1", "Checkout", BlockKind::Event)],
    );
    assert!(plan.is_empty());
}

#[test]
fn title_change_is_a_rename_keyed_on_identity() {
    let plan = compute_plan(
        &doc("type Checkout @binding(block: \"b1\", role: \"block\", version: 1) {\n  id: ID!\n}\n"),
        &[Block::new("b1", "Express Checkout", BlockKind::Event)],
    );
    assert_eq!(plan.additions, vec![]);
    assert_eq!(plan.renames.len(), 1);
    assert_eq!(plan.renames[0].old_name, "Checkout");
    assert_eq!(plan.renames[0].new_name, "ExpressCheckout");
    assert_eq!(plan.renames[0].block_id.as_str(), "b1");
}

#[test]
fn legacy_encoded_types_are_matched_not_duplicated() {
    let plan = compute_plan(
        &doc("input SignUpInput @binding(id: \"b1-input\") {\n  id: ID!\n}\n\
              type SignUpCommandResult @binding(id: \"b1-result\") {\n  id: ID!\n}\n"),
        &[Block::new("b1", "Sign Up", BlockKind::Command)],
    );
    assert!(plan.is_empty());
}

// ── Title collisions ─────────────────────────────────────────────

#[test]
fn colliding_titles_are_both_tracked() {
    // Two distinct blocks projecting to the same name: the plan carries
    // both additions; the printer is the component that rejects the result.
    let plan = compute_plan(
        &doc(""),
        &[
            Block::new("b1", "Checkout", BlockKind::Event),
            Block::new("b2", "check-out", BlockKind::View),
        ],
    );
    assert_eq!(plan.additions.len(), 2);
    assert_eq!(plan.additions[0].type_name, "Checkout");
    assert_eq!(plan.additions[1].type_name, "CheckOut");
    assert_ne!(plan.additions[0].block_id, plan.additions[1].block_id);
}

// ── Orphans ──────────────────────────────────────────────────────

const MIXED_DOC: &str = "\
type Checkout @binding(block: \"b1\", role: \"block\", version: 1) {
  id: ID!
}

type Glossary {
  term: String!
}
";

#[test]
fn managed_type_without_active_block_is_orphaned() {
    let parsed = doc(MIXED_DOC);
    let orphans = find_orphans(&parsed, &[]);
    let names: Vec<_> = orphans.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Checkout"]);
}

#[test]
fn unmanaged_types_are_never_orphaned() {
    let parsed = doc(MIXED_DOC);
    let orphans = find_orphans(&parsed, &[Block::new("b1", "Checkout", BlockKind::Event)]);
    assert!(orphans.is_empty());
}

#[test]
fn orphans_land_in_removals_with_their_identity() {
    let plan = compute_plan(&doc(MIXED_DOC), &[Block::new("b9", "Refund", BlockKind::Command)]);
    assert_eq!(plan.removals.len(), 1);
    assert_eq!(plan.removals[0].type_name, "Checkout");
    assert_eq!(plan.removals[0].block_id.as_str(), "b1");
    assert_eq!(plan.removals[0].role, EntityRole::Block);
    assert_eq!(plan.additions.len(), 2);
}
