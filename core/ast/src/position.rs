//! Source positions and spans.
//!
//! These carry the original location of a node that was produced by the
//! parser adapter, so the printer can later emit a source-map segment for
//! it. Positions are 1-indexed lines and 0-indexed columns, matching the
//! ESTree/source-map convention.

/// A single point in source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// 1-indexed line number.
    pub line: u32,
    /// 0-indexed column number.
    pub column: u32,
}

impl Position {
    /// Creates a new [`Position`].
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// The `start`/`end` location pair a node carries when it came from parsed
/// source, mirroring ESTree's `loc` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    /// Start of the node, inclusive.
    pub start: Position,
    /// End of the node, exclusive.
    pub end: Position,
}

impl SourceLocation {
    /// Creates a new [`SourceLocation`] from a start/end position pair.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A byte offset span into the original source string, mirroring ESTree's
/// `range`/`start`/`end` fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: u32,
    /// Exclusive end byte offset.
    pub end: u32,
}

impl Span {
    /// Creates a new [`Span`].
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}
