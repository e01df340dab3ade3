//! Binding pattern nodes (function parameters, destructuring targets).

use super::Node;

/// `[a, , b] = c` — an array destructuring pattern. A `None` element is an
/// elision.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayPattern {
    /// The pattern's elements.
    pub elements: Vec<Option<Node>>,
}

/// `{ a, b: c } = d` — an object destructuring pattern. Elements are
/// [`crate::node::NodeKind::Property`] (value is the binding target) or a
/// trailing [`crate::node::NodeKind::RestElement`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectPattern {
    /// The pattern's properties.
    pub properties: Vec<Node>,
}

/// `a = b` as a parameter or destructuring default, e.g. `function f(a = 1)`
/// or `const { a = 1 } = obj`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentPattern {
    /// The binding target.
    pub left: Box<Node>,
    /// The default value.
    pub right: Box<Node>,
}
