//! Literal and template-literal nodes.

use super::Node;

/// A `Literal` node's value, before the `raw` text is taken into account.
///
/// The printer emits `raw` verbatim when present (spec: "if the node
/// carries `raw`, emit `raw` verbatim"); `value` is retained so that
/// template substitution and any future analysis can inspect the literal
/// without re-parsing `raw`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralValue {
    /// A string literal's decoded value.
    String(String),
    /// A numeric literal's value.
    Number(f64),
    /// `true` / `false`.
    Boolean(bool),
    /// `null`.
    Null,
    /// A `/body/flags` regular-expression literal. Stored, not
    /// interpreted — the printer re-emits `pattern`/`flags` verbatim.
    RegExp {
        /// The pattern between the slashes.
        pattern: String,
        /// The flags following the closing slash.
        flags: String,
    },
}

/// A `Literal` node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    /// The literal's value.
    pub value: LiteralValue,
    /// The exact source text the literal was written with, when known.
    /// When `Some`, the printer emits this instead of reconstructing a
    /// canonical form from `value`.
    pub raw: Option<String>,
}

impl Literal {
    /// Creates a new [`Literal`] with no `raw` text (the printer will
    /// canonicalize it).
    #[must_use]
    pub const fn new(value: LiteralValue) -> Self {
        Self { value, raw: None }
    }

    /// Creates a new [`Literal`] carrying its exact original source text.
    #[must_use]
    pub fn with_raw(value: LiteralValue, raw: impl Into<String>) -> Self {
        Self {
            value,
            raw: Some(raw.into()),
        }
    }
}

/// One `quasis` segment of a [`TemplateLiteral`] — the literal text
/// between two `${...}` holes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateElement {
    /// The segment's raw source text (undecoded, as ESTree's
    /// `TemplateElement.value.raw`).
    pub raw: String,
    /// Whether this is the final segment of the template.
    pub tail: bool,
}

/// `` `...${...}...` ``. `quasis.len() == expressions.len() + 1`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateLiteral {
    /// The literal text segments.
    pub quasis: Vec<TemplateElement>,
    /// The interpolated expressions between segments.
    pub expressions: Vec<Node>,
}

/// `` tag`...` `` — a template literal preceded by a call-like tag
/// expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedTemplateExpression {
    /// The tag expression.
    pub tag: Box<Node>,
    /// The tagged template literal.
    pub quasi: Box<Node>,
}
