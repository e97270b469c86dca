//! Change-plan application.
//!
//! Pure document-to-document transform. Order matters: renames run before
//! additions (so an addition never collides with a stale name), and
//! additions before removals (a removal target name can never be one the
//! plan also adds, since orphans and required types are disjoint by key).

use crate::config::ControllerConfig;
use crate::plan::{ChangePlan, PlannedAddition, PlannedRemoval, PlannedRename};
use blockboard_sdl::{
    read_binding, write_binding, Definition, Document, EntityRole, FieldDefinition,
    IdentityBinding, TypeDefinition, TypeKeyword, TypeRef,
};
use blockboard_types::BlockKind;

/// Applies `plan` to `doc`, returning the reconciled document.
#[must_use]
pub fn apply_plan(mut doc: Document, plan: &ChangePlan, config: &ControllerConfig) -> Document {
    for rename in &plan.renames {
        apply_rename(&mut doc, rename);
    }
    for addition in &plan.additions {
        doc.push_type(synthesize_type(addition, config));
    }
    for removal in &plan.removals {
        apply_removal(&mut doc, removal);
    }
    doc
}

/// Deletes the type whose binding matches the orphan's identity key.
///
/// Keyed on `(block_id, role)` rather than name: an earlier rename in the
/// same plan may have reused the orphan's old name for an active type, and
/// that one must survive.
fn apply_removal(doc: &mut Document, removal: &PlannedRemoval) {
    doc.definitions.retain(|definition| match definition {
        Definition::Type(ty) => read_binding(ty).map_or(true, |binding| {
            binding.block_id != removal.block_id || binding.role != removal.role
        }),
        _ => true,
    });
}

/// Renames the type and rewrites every field-type reference to the old
/// name anywhere in the document, keeping reference integrity.
fn apply_rename(doc: &mut Document, rename: &PlannedRename) {
    let Some(ty) = doc.get_type_mut(&rename.old_name) else {
        return;
    };
    ty.name = rename.new_name.clone();
    // A legacy-encoded binding gets normalized to the explicit form here,
    // the one moment the type is being rewritten anyway.
    if let Some(binding) = read_binding(ty) {
        write_binding(ty, &binding);
    }

    for referrer in doc.type_definitions_mut() {
        for field in &mut referrer.fields {
            field.ty.rename_base(&rename.old_name, &rename.new_name);
        }
    }
}

/// Builds the minimal default type for a newly placed block: an identifier
/// field for every kind, a timestamp field for events, and a version-1
/// binding. Command inputs are SDL `input` definitions; everything else is
/// an object type.
fn synthesize_type(addition: &PlannedAddition, config: &ControllerConfig) -> TypeDefinition {
    let keyword = match addition.role {
        EntityRole::Input => TypeKeyword::Input,
        _ => TypeKeyword::Type,
    };

    let mut ty = TypeDefinition::new(keyword, addition.type_name.clone()).with_field(
        FieldDefinition::new(
            config.id_field_name.clone(),
            TypeRef::named(config.id_field_type.clone()).non_null(),
        ),
    );
    if addition.kind == BlockKind::Event {
        ty = ty.with_field(FieldDefinition::new(
            config.event_timestamp_field.clone(),
            TypeRef::named(config.event_timestamp_type.clone()).non_null(),
        ));
    }

    write_binding(
        &mut ty,
        &IdentityBinding::new(addition.block_id.clone(), addition.role),
    );
    ty
}
