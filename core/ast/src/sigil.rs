//! Sigil identifiers.
//!
//! `@name` and `#name` are not valid ECMAScript identifiers on their own
//! (`#name` is only valid as a private class member name), but this core
//! treats both as identifiers everywhere an identifier is syntactically
//! valid, so that higher-level tooling can embed deferred references that
//! get rewritten by a later, external pass. The printer rejects any sigil
//! that survives to a `print()` call.

/// The two sigil characters a caller may prefix an identifier with.
pub const SIGIL_CHARS: [char; 2] = ['@', '#'];

/// Returns `true` if `name` begins with a sigil character.
#[must_use]
pub fn is_sigil_name(name: &str) -> bool {
    name.starts_with(SIGIL_CHARS)
}
