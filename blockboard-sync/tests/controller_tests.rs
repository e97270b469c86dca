use blockboard_sync::{ControllerConfig, SyncController, SyncError};
use blockboard_types::{Block, BlockKind, ProjectSnapshot, Provenance, SchemaDocument};
use pretty_assertions::assert_eq;

fn controller() -> SyncController {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    SyncController::new(ControllerConfig::default())
}

// ── End-to-end scenario ──────────────────────────────────────────

#[test]
fn checkout_event_from_empty_document() {
    let mut ctl = controller();
    ctl.sync(&[Block::new("b1", "Checkout", BlockKind::Event)]);

    let expected = "\
type Checkout @binding(block: \"b1\", role: \"block\", version: 1) {
  id: ID!
  occurredAt: String!
}
";
    assert_eq!(ctl.schema_text(), expected);
    assert_eq!(ctl.document().provenance, Provenance::System);
}

// ── Idempotence ──────────────────────────────────────────────────

#[test]
fn second_sync_with_same_blocks_changes_nothing() {
    let blocks = [Block::new("b1", "Checkout", BlockKind::Event)];
    let mut ctl = controller();
    ctl.sync(&blocks);
    let first = ctl.document().clone();

    ctl.sync(&blocks);
    assert_eq!(ctl.document(), &first);
}

// ── Identity stability under rename ──────────────────────────────

#[test]
fn renaming_a_command_block_keeps_its_identity() {
    let mut ctl = controller();
    ctl.sync(&[Block::new("b1", "User Registration", BlockKind::Command)]);
    assert!(ctl.schema_text().contains("input UserRegistrationInput"));
    assert!(ctl.schema_text().contains("type UserRegistrationCommandResult"));

    ctl.sync(&[Block::new("b1", "User Signup", BlockKind::Command)]);
    let text = ctl.schema_text();
    assert!(text.contains("input UserSignupInput @binding(block: \"b1\", role: \"input\", version: 1)"));
    assert!(text.contains("type UserSignupCommandResult @binding(block: \"b1\", role: \"result\", version: 1)"));
    assert!(!text.contains("UserRegistration"));
}

#[test]
fn rename_reusing_an_orphans_name_preserves_hand_edits() {
    let mut ctl = controller();
    let mut doc = SchemaDocument::new(
        "type Order @binding(block: \"b1\", role: \"block\", version: 1) {\n  id: ID!\n  note: String\n}\n\n\
         type Purchase @binding(block: \"b2\", role: \"block\", version: 1) {\n  id: ID!\n}\n",
    );
    doc.provenance = Provenance::ExternalTextEdit;
    ctl.update_document(doc);

    // b2 is gone and b1 takes over the "Purchase" title in the same cycle
    ctl.sync(&[Block::new("b1", "Purchase", BlockKind::Event)]);
    let text = ctl.schema_text();
    assert!(text.contains("type Purchase @binding(block: \"b1\", role: \"block\", version: 1)"));
    assert!(text.contains("note: String"));
    assert!(!text.contains("b2"));
}

// ── Orphan cleanup ───────────────────────────────────────────────

#[test]
fn removing_a_block_removes_only_its_types() {
    let mut ctl = controller();
    ctl.update_document(SchemaDocument::new(
        "type Glossary {\n  term: String!\n}\n",
    ));
    ctl.sync(&[Block::new("b1", "Sign Up", BlockKind::Command)]);
    assert!(ctl.schema_text().contains("SignUpInput"));

    ctl.sync(&[]);
    let text = ctl.schema_text();
    assert!(!text.contains("SignUp"));
    assert!(text.contains("type Glossary"));
    assert!(text.contains("term: String!"));
}

// ── Non-destructive addition ─────────────────────────────────────

#[test]
fn adding_a_block_preserves_hand_customized_fields() {
    let mut ctl = controller();
    ctl.sync(&[Block::new("b1", "Checkout", BlockKind::Event)]);

    // hand-customize the managed type through the editor widget path
    let customized = ctl.document().with_text(
        "\
type Checkout @binding(block: \"b1\", role: \"block\", version: 1) {
  id: ID!
  occurredAt: String!
  # needed by the fraud review screen
  riskScore: Int!
}
",
        Provenance::ExternalTextEdit,
    );
    ctl.update_document(customized);

    ctl.sync(&[
        Block::new("b1", "Checkout", BlockKind::Event),
        Block::new("b2", "Cart Summary", BlockKind::View),
    ]);
    let text = ctl.schema_text();
    assert!(text.contains("riskScore: Int!"));
    assert!(text.contains("# needed by the fraud review screen"));
    assert!(text.contains("type CartSummary @binding(block: \"b2\", role: \"block\", version: 1)"));
}

// ── Provenance ───────────────────────────────────────────────────

#[test]
fn external_provenance_is_preserved() {
    let mut ctl = controller();
    let mut doc = SchemaDocument::new("type A {\n  id: ID!\n}\n");
    doc.provenance = Provenance::ExternalTextEdit;
    ctl.update_document(doc);
    assert_eq!(ctl.document().provenance, Provenance::ExternalTextEdit);

    let mut doc = SchemaDocument::new("type A {\n  id: ID!\n}\n");
    doc.provenance = Provenance::ExternalTreeEdit;
    ctl.update_document(doc);
    assert_eq!(ctl.document().provenance, Provenance::ExternalTreeEdit);
}

#[test]
fn non_external_provenance_defaults_to_system() {
    let mut ctl = controller();
    ctl.update_document(SchemaDocument::new("type A {\n  id: ID!\n}\n"));
    assert_eq!(ctl.document().provenance, Provenance::System);
}

#[test]
fn sync_tags_system_provenance() {
    let mut ctl = controller();
    let mut doc = SchemaDocument::new("");
    doc.provenance = Provenance::ExternalTextEdit;
    ctl.update_document(doc);

    ctl.sync(&[Block::new("b1", "Checkout", BlockKind::Event)]);
    assert_eq!(ctl.document().provenance, Provenance::System);
}

#[test]
fn empty_plan_does_not_retag_provenance() {
    let mut ctl = controller();
    ctl.sync(&[Block::new("b1", "Checkout", BlockKind::Event)]);

    let edited = ctl
        .document()
        .with_text(ctl.schema_text().to_string(), Provenance::ExternalTextEdit);
    ctl.update_document(edited);

    // same blocks, nothing to reconcile: the external tag must survive
    ctl.sync(&[Block::new("b1", "Checkout", BlockKind::Event)]);
    assert_eq!(ctl.document().provenance, Provenance::ExternalTextEdit);
}

// ── External edits are never diffed stale ────────────────────────

#[test]
fn sync_sees_the_latest_external_edit() {
    let mut ctl = controller();
    ctl.sync(&[Block::new("b1", "Checkout", BlockKind::Event)]);

    let edited = ctl.document().with_text(
        format!("{}\ntype Coupon {{\n  code: String!\n}}\n", ctl.schema_text()),
        Provenance::ExternalTreeEdit,
    );
    ctl.update_document(edited);

    ctl.sync(&[
        Block::new("b1", "Checkout", BlockKind::Event),
        Block::new("b2", "Refund", BlockKind::Event),
    ]);
    let text = ctl.schema_text();
    assert!(text.contains("type Coupon"));
    assert!(text.contains("type Refund"));
}

// ── Failure semantics ────────────────────────────────────────────

#[test]
fn automatic_sync_retains_document_on_parse_failure() {
    let mut ctl = controller();
    let mut doc = SchemaDocument::new("type Broken {{{");
    doc.provenance = Provenance::ExternalTextEdit;
    ctl.update_document(doc);

    ctl.sync(&[Block::new("b1", "Checkout", BlockKind::Event)]);
    assert_eq!(ctl.schema_text(), "type Broken {{{");
    assert_eq!(ctl.document().provenance, Provenance::ExternalTextEdit);
}

#[test]
fn try_sync_propagates_parse_errors() {
    let mut ctl = SyncController::with_document(
        ControllerConfig::default(),
        SchemaDocument::new("not a schema"),
    );
    let err = ctl
        .try_sync(&[Block::new("b1", "Checkout", BlockKind::Event)])
        .unwrap_err();
    assert!(matches!(err, SyncError::Sdl(_)));
}

// ── Import / export ──────────────────────────────────────────────

#[test]
fn import_restores_state_and_syncs_once() {
    let mut ctl = controller();
    let snapshot = ProjectSnapshot::new(
        "type Glossary {\n  term: String!\n}\n",
        vec![Block::new("b1", "Checkout", BlockKind::Event)],
    );
    ctl.import(snapshot).unwrap();

    let text = ctl.schema_text();
    assert!(text.contains("type Glossary"));
    assert!(text.contains("type Checkout"));
}

#[test]
fn failed_import_leaves_prior_state_untouched() {
    let mut ctl = controller();
    ctl.sync(&[Block::new("b1", "Checkout", BlockKind::Event)]);
    let before = ctl.document().clone();

    let bad = ProjectSnapshot::new("type {{{", vec![]);
    assert!(ctl.import(bad).is_err());
    assert_eq!(ctl.document(), &before);
    assert_eq!(ctl.export().blocks.len(), 1);
}

#[test]
fn failed_sync_does_not_update_exported_blocks() {
    let mut ctl = controller();
    let blocks = vec![Block::new("b1", "Checkout", BlockKind::Event)];
    ctl.sync(&blocks);

    let mut broken = SchemaDocument::new("type Broken {{{");
    broken.provenance = Provenance::ExternalTextEdit;
    ctl.update_document(broken);

    ctl.sync(&[
        Block::new("b1", "Checkout", BlockKind::Event),
        Block::new("b2", "Refund", BlockKind::Event),
    ]);
    // the failed cycle must not pair the retained text with blocks that
    // never reconciled against it
    assert_eq!(ctl.export().blocks, blocks);
}

#[test]
fn export_pairs_text_with_last_synced_blocks() {
    let mut ctl = controller();
    let blocks = vec![Block::new("b1", "Checkout", BlockKind::Event)];
    ctl.sync(&blocks);

    let snapshot = ctl.export();
    assert_eq!(snapshot.schema, ctl.schema_text());
    assert_eq!(snapshot.blocks, blocks);
}
