//! Class nodes.

use super::expression::PropertyKey;
use super::function::Function;
use super::Node;

/// `class A extends B { ... }`. Backs both `ClassDeclaration` and
/// `ClassExpression`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Class {
    /// The class's name, absent for an anonymous `class { ... }`
    /// expression.
    pub id: Option<super::identifier::Identifier>,
    /// The `extends` clause's expression, if any.
    pub super_class: Option<Box<Node>>,
    /// The class body: [`crate::node::NodeKind::MethodDefinition`] and
    /// [`crate::node::NodeKind::PropertyDefinition`] nodes.
    pub body: Vec<Node>,
}

/// How a [`MethodDefinition`] was introduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MethodKind {
    /// A plain `method() {}`.
    Method,
    /// `constructor() {}`.
    Constructor,
    /// `get method() {}`.
    Get,
    /// `set method(v) {}`.
    Set,
}

/// A method (including accessors and the constructor) inside a class body.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDefinition {
    /// The method's key.
    pub key: PropertyKey,
    /// The method's function value. Always block-bodied, non-arrow.
    pub value: Function,
    /// Which kind of method this is.
    pub kind: MethodKind,
    /// `true` for `static method() {}`.
    pub is_static: bool,
    /// `true` for `[key]() {}`.
    pub computed: bool,
}

/// A class field: `key = value;` or just `key;`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyDefinition {
    /// The field's key.
    pub key: PropertyKey,
    /// The field's initializer, if any.
    pub value: Option<Box<Node>>,
    /// `true` for `static key = value;`.
    pub is_static: bool,
    /// `true` for `[key] = value;`.
    pub computed: bool,
}
