//! Comment trivia attached to nodes.

/// The two ECMAScript comment shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentKind {
    /// `// line comment`, terminated by a newline.
    Line,
    /// `/* block comment */`, possibly spanning multiple lines.
    Block,
}

/// A comment attached to a node as leading or trailing trivia.
///
/// Leading comments are printed on their own line(s) above the node they
/// are attached to; trailing line comments share the node's line. A block
/// comment is reproduced verbatim, including internal newlines.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    /// The comment's text, excluding the `//`/`/*`/`*/` delimiters.
    pub text: String,
    /// Whether this was a line or block comment.
    pub kind: CommentKind,
}

impl Comment {
    /// Creates a new [`Comment`].
    #[must_use]
    pub fn new(text: impl Into<String>, kind: CommentKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}
