//! Change-plan computation.
//!
//! Diffs the types a block list requires against the managed types a parsed
//! document already contains. Managed types are keyed by `(block_id, role)`
//! read from their binding directive — never by name — so a renamed block
//! keeps its types (and their hand-edited fields) across the diff.

use crate::naming;
use blockboard_sdl::{read_binding, Document, EntityRole, TypeDefinition};
use blockboard_types::{Block, BlockId, BlockKind};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A type to synthesize for a block that has none yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAddition {
    pub type_name: String,
    pub kind: BlockKind,
    pub block_id: BlockId,
    pub role: EntityRole,
}

/// A managed type whose block title no longer matches its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub old_name: String,
    pub new_name: String,
    /// The identity key the rename is pinned to.
    pub block_id: BlockId,
    pub role: EntityRole,
}

/// An orphaned managed type to delete.
///
/// Carries the orphan's identity key, not just its name: a rename in the
/// same plan may hand the orphan's old name to an active type, and the
/// applier must never delete that one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRemoval {
    /// Name at plan time, for log output.
    pub type_name: String,
    pub block_id: BlockId,
    pub role: EntityRole,
}

/// The reconciling edits one sync cycle needs, consumed immediately by the
/// applier. Application order is renames, then additions, then removals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePlan {
    pub additions: Vec<PlannedAddition>,
    pub renames: Vec<PlannedRename>,
    /// Orphaned managed types to delete.
    pub removals: Vec<PlannedRemoval>,
}

impl ChangePlan {
    /// Whether applying this plan would be a no-op.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.renames.is_empty() && self.removals.is_empty()
    }
}

/// Summary line for log output, e.g. `2 added, 1 renamed, 0 removed`.
impl fmt::Display for ChangePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} renamed, {} removed",
            self.additions.len(),
            self.renames.len(),
            self.removals.len()
        )
    }
}

/// The types a single block requires: one `block`-role type for every kind
/// except command, which requires an `input`/`result` pair.
fn required_roles(kind: BlockKind) -> &'static [EntityRole] {
    match kind {
        BlockKind::Command => &[EntityRole::Input, EntityRole::Result],
        _ => &[EntityRole::Block],
    }
}

/// Computes the plan that reconciles `doc`'s managed types with `blocks`.
///
/// Title collisions are deliberately not resolved here: identity is keyed
/// on `(block_id, role)`, so two blocks whose titles project to the same
/// name are both tracked, and the printer surfaces the duplicate.
#[must_use]
pub fn compute_plan(doc: &Document, blocks: &[Block]) -> ChangePlan {
    // Index existing managed types by identity key. On a (corrupt) document
    // where two types claim the same key, the first claim wins and the rest
    // are left alone.
    let mut managed: HashMap<(BlockId, EntityRole), &TypeDefinition> = HashMap::new();
    for ty in doc.type_definitions() {
        if let Some(binding) = read_binding(ty) {
            managed.entry(binding.key()).or_insert(ty);
        }
    }

    let mut plan = ChangePlan::default();
    for block in blocks {
        for &role in required_roles(block.kind) {
            let required_name = naming::type_name(&block.title, role);
            match managed.get(&(block.id.clone(), role)) {
                Some(existing) if existing.name == required_name => {}
                Some(existing) => plan.renames.push(PlannedRename {
                    old_name: existing.name.clone(),
                    new_name: required_name,
                    block_id: block.id.clone(),
                    role,
                }),
                None => plan.additions.push(PlannedAddition {
                    type_name: required_name,
                    kind: block.kind,
                    block_id: block.id.clone(),
                    role,
                }),
            }
        }
    }

    plan.removals = find_orphans(doc, blocks)
        .into_iter()
        .filter_map(|ty| {
            read_binding(ty).map(|binding| PlannedRemoval {
                type_name: ty.name.clone(),
                block_id: binding.block_id,
                role: binding.role,
            })
        })
        .collect();
    plan
}

/// Returns the managed types whose block no longer exists.
///
/// Types without a readable binding are user-owned content outside this
/// engine's authority and are never reported.
#[must_use]
pub fn find_orphans<'a>(doc: &'a Document, active_blocks: &[Block]) -> Vec<&'a TypeDefinition> {
    let active: HashSet<&BlockId> = active_blocks.iter().map(|b| &b.id).collect();
    doc.type_definitions()
        .filter(|ty| {
            read_binding(ty).is_some_and(|binding| !active.contains(&binding.block_id))
        })
        .collect()
}
