//! Identity directive codec.
//!
//! Each managed type carries a `@binding` directive tying it to the canvas
//! block it mirrors. Two encodings exist in the wild:
//!
//! - explicit fields (current): `@binding(block: "b1", role: "input", version: 1)`
//! - composite token (legacy):  `@binding(id: "b1-input")`
//!
//! Reads tolerate both, with explicit fields taking precedence; writes
//! always emit the explicit form. Legacy directives are left as-is until
//! the type is next rewritten, so old documents stay diffable without a
//! forced migration.

use crate::ast::{Directive, TypeDefinition, Value};
use blockboard_types::BlockId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Directive name recognized on managed types. Directives with any other
/// name are user content and pass through untouched.
pub const BINDING_DIRECTIVE: &str = "binding";

const ARG_BLOCK: &str = "block";
const ARG_ROLE: &str = "role";
const ARG_VERSION: &str = "version";
const ARG_LEGACY_ID: &str = "id";

/// Which schema type a block maps this type to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityRole {
    /// The single type of a non-command block.
    Block,
    /// The input type of a command block.
    Input,
    /// The result type of a command block.
    Result,
}

impl EntityRole {
    /// Returns the lowercase wire name of this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityRole::Block => "block",
            EntityRole::Input => "input",
            EntityRole::Result => "result",
        }
    }

    fn from_wire(s: &str) -> Option<Self> {
        match s {
            "block" => Some(EntityRole::Block),
            "input" => Some(EntityRole::Input),
            "result" => Some(EntityRole::Result),
            _ => None,
        }
    }
}

impl fmt::Display for EntityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identity carried by a managed type's `@binding` directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityBinding {
    pub block_id: BlockId,
    pub role: EntityRole,
    pub version: u32,
}

impl IdentityBinding {
    /// Creates a version-1 binding.
    #[must_use]
    pub fn new(block_id: impl Into<BlockId>, role: EntityRole) -> Self {
        Self {
            block_id: block_id.into(),
            role,
            version: 1,
        }
    }

    /// The `(block, role)` pair that keys this binding within a document.
    #[must_use]
    pub fn key(&self) -> (BlockId, EntityRole) {
        (self.block_id.clone(), self.role)
    }
}

/// Reads the identity binding from a type definition, if it carries a
/// readable one. Types without a readable binding are unmanaged: the sync
/// engine never adds, renames, or removes them.
#[must_use]
pub fn read_binding(ty: &TypeDefinition) -> Option<IdentityBinding> {
    let directive = ty.directive(BINDING_DIRECTIVE)?;

    // Explicit fields win over the legacy composite token.
    if let Some(block_id) = directive.argument(ARG_BLOCK).and_then(Value::as_str) {
        let role = directive
            .argument(ARG_ROLE)
            .and_then(Value::as_str)
            .and_then(EntityRole::from_wire)
            .unwrap_or(EntityRole::Block);
        return Some(IdentityBinding {
            block_id: BlockId::new(block_id),
            role,
            version: read_version(directive),
        });
    }

    let composite = directive.argument(ARG_LEGACY_ID).and_then(Value::as_str)?;
    let (block_id, role) = split_composite(composite);
    Some(IdentityBinding {
        block_id: BlockId::new(block_id),
        role,
        version: read_version(directive),
    })
}

/// Writes `binding` onto the type, replacing any existing `@binding`
/// directive. Never appends a second one.
pub fn write_binding(ty: &mut TypeDefinition, binding: &IdentityBinding) {
    ty.directives.retain(|d| d.name != BINDING_DIRECTIVE);
    ty.directives.push(
        Directive::new(BINDING_DIRECTIVE)
            .with_arg(ARG_BLOCK, Value::Str(binding.block_id.as_str().to_string()))
            .with_arg(ARG_ROLE, Value::Str(binding.role.as_str().to_string()))
            .with_arg(ARG_VERSION, Value::Int(i64::from(binding.version))),
    );
}

fn read_version(directive: &Directive) -> u32 {
    directive
        .argument(ARG_VERSION)
        .and_then(Value::as_int)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(1)
}

/// Splits a legacy composite token into `(block_id, role)` by stripping the
/// known role suffixes. A token without a suffix is a non-command binding.
fn split_composite(token: &str) -> (&str, EntityRole) {
    if let Some(id) = token.strip_suffix("-input") {
        (id, EntityRole::Input)
    } else if let Some(id) = token.strip_suffix("-result") {
        (id, EntityRole::Result)
    } else {
        (token, EntityRole::Block)
    }
}
