//! Template substitution errors.

use thiserror::Error;

/// Raised when a hole's value cannot be coerced to what its position in
/// the stitched tree requires.
#[derive(Debug, Clone, Error)]
pub enum TemplateError {
    /// The stitched input did not parse. Wraps the parser's own message;
    /// hole positions are not exposed, since by the time this fires each
    /// hole is already an opaque placeholder identifier.
    #[error(transparent)]
    Parse(#[from] redast_parser::ParseError),

    /// A hole landed in a position that cannot accept its kind, e.g. a
    /// statement-shaped hole used as a binary operand.
    #[error("hole {index} ({kind}) cannot be used in {position} position")]
    WrongKind {
        /// The hole's index in the template's argument list.
        index: usize,
        /// A human-readable name for the hole value's kind.
        kind: &'static str,
        /// A human-readable name for the position the hole landed in.
        position: &'static str,
    },

    /// A placeholder produced by the stitcher was consumed twice by the
    /// substitution walk — either the same token appears twice in the
    /// parsed tree (impossible for the current stitcher) or a bug
    /// elsewhere double-visited a node.
    #[error("hole {index} was already substituted")]
    HoleReused {
        /// The hole's index.
        index: usize,
    },

    /// The parsed tree did not contain every placeholder passed in.
    #[error("hole {index} was never substituted into the tree")]
    HoleUnused {
        /// The hole's index.
        index: usize,
    },

    /// `statements` mode produced no body when one was required
    /// (currently unused by any entry point, reserved for a future
    /// non-empty-block contract).
    #[error("expected exactly one {0}, found none")]
    Empty(&'static str),
}
