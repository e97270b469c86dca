//! Derives schema type names from block display titles.
//!
//! The projection is deterministic and total: any title maps to a valid
//! SDL name. Identity is *not* carried by the name (that is the binding
//! directive's job), so a title collision producing two equal names is
//! tolerated here and surfaced later by the printer.

use blockboard_sdl::EntityRole;

/// Suffix appended to a command's input type name.
pub const INPUT_SUFFIX: &str = "Input";
/// Suffix appended to a command's result type name.
pub const RESULT_SUFFIX: &str = "CommandResult";

/// Fallback for titles with no usable characters.
const UNNAMED: &str = "Unnamed";

/// Projects a display title to a camel-case type name.
///
/// Splits on non-alphanumeric runs, uppercases each word's first letter,
/// and joins: `"User Registration"` becomes `"UserRegistration"`,
/// `"add to cart!"` becomes `"AddToCart"`. A leading digit gets a `_`
/// prefix so the result stays a valid SDL name.
#[must_use]
pub fn project_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for word in title.split(|c: char| !c.is_alphanumeric()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars);
        }
    }
    if out.is_empty() {
        return UNNAMED.to_string();
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// The full type name for a block title in the given role.
#[must_use]
pub fn type_name(title: &str, role: EntityRole) -> String {
    let base = project_title(title);
    match role {
        EntityRole::Block => base,
        EntityRole::Input => format!("{base}{INPUT_SUFFIX}"),
        EntityRole::Result => format!("{base}{RESULT_SUFFIX}"),
    }
}
