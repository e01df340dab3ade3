//! Identifier nodes.

use boa_interner::Sym;

/// An `Identifier` node.
///
/// May be a sigil identifier — a name beginning with `@` or `#` — which
/// this core's extended grammar accepts anywhere an identifier is
/// syntactically valid (including the `#name` private-class-member
/// position, which real ECMAScript also restricts to an identifier-shaped
/// name). See [`crate::sigil::is_sigil_name`]; the printer is responsible
/// for rejecting any sigil identifier still present at print time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    /// The interned name, including any leading sigil character.
    pub sym: Sym,
}

impl Identifier {
    /// Creates a new [`Identifier`] referencing an interned name.
    #[must_use]
    pub const fn new(sym: Sym) -> Self {
        Self { sym }
    }
}
