//! Expression nodes other than identifiers, literals, and functions.

use super::operators::{AssignOp, BinaryOp, LogicalOp, UnaryOp, UpdateOp};
use super::Node;

/// `[a, b, ...c]`. A `None` element is an elision (`[a, , b]`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayExpression {
    /// The array's elements, in source order.
    pub elements: Vec<Option<Node>>,
}

/// The key of a [`Property`] or [`crate::node::class::PropertyDefinition`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyKey {
    /// A non-computed identifier-shaped key, e.g. `a` in `{ a: 1 }`.
    Identifier(super::identifier::Identifier),
    /// A non-computed literal key, e.g. `"a"` or `1` in `{ "a": 1 }`.
    Literal(super::literal::Literal),
    /// A computed key, e.g. `[a]` in `{ [a]: 1 }`.
    Computed(Box<Node>),
}

/// How a [`Property`] binds its key to its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyKind {
    /// `key: value`.
    Init,
    /// `get key() { ... }`.
    Get,
    /// `set key(v) { ... }`.
    Set,
}

/// One `ObjectExpression`/`ObjectPattern` property.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    /// The property's key.
    pub key: PropertyKey,
    /// The property's value. In an `ObjectPattern`, this is the binding
    /// target (itself possibly an `AssignmentPattern` for a default).
    pub value: Box<Node>,
    /// `true` for `{ a }`, where `key` and `value` are the same
    /// identifier written once in the source.
    pub shorthand: bool,
    /// `get`/`set`/plain.
    pub kind: PropertyKind,
}

/// `{ a: 1, ...rest }`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectExpression {
    /// The object's properties. A `SpreadElement` may also appear here.
    pub properties: Vec<Node>,
}

/// `!a`, `-a`, `typeof a`, ...
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryExpression {
    /// The operator.
    pub operator: UnaryOp,
    /// The operand.
    pub argument: Box<Node>,
}

/// `a++`, `--a`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateExpression {
    /// The operator.
    pub operator: UpdateOp,
    /// The operand (always a simple reference).
    pub argument: Box<Node>,
    /// `true` for `++a`, `false` for `a++`.
    pub prefix: bool,
}

/// `a + b`, `a instanceof b`, ...
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExpression {
    /// The operator.
    pub operator: BinaryOp,
    /// The left operand.
    pub left: Box<Node>,
    /// The right operand.
    pub right: Box<Node>,
}

/// `a && b`, `a || b`, `a ?? b`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicalExpression {
    /// The operator.
    pub operator: LogicalOp,
    /// The left operand.
    pub left: Box<Node>,
    /// The right operand.
    pub right: Box<Node>,
}

/// `a = b`, `a += b`, ...
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentExpression {
    /// The operator.
    pub operator: AssignOp,
    /// The assignment target. May be any pattern node, or a plain
    /// expression for simple `=` assignment to a reference.
    pub left: Box<Node>,
    /// The assigned value.
    pub right: Box<Node>,
}

/// `a ? b : c`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalExpression {
    /// The test expression.
    pub test: Box<Node>,
    /// The value when `test` is truthy.
    pub consequent: Box<Node>,
    /// The value when `test` is falsy.
    pub alternate: Box<Node>,
}

/// One element of a call/new argument list: either a plain expression or
/// `...expr` (a [`crate::node::NodeKind::SpreadElement`]).
pub type Argument = Node;

/// `f(a, b)` / `new F(a, b)`. The two ESTree node types share this shape;
/// [`crate::node::NodeKind::CallExpression`] and
/// [`crate::node::NodeKind::NewExpression`] each wrap one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallExpression {
    /// The callee (or constructor, for `new`).
    pub callee: Box<Node>,
    /// The call arguments, in source order.
    pub arguments: Vec<Argument>,
    /// `true` for `a?.(b)`.
    pub optional: bool,
}

/// `a.b`, `a[b]`, `a?.b`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberExpression {
    /// The object being accessed.
    pub object: Box<Node>,
    /// The property. An [`super::identifier::Identifier`] node when
    /// `computed` is `false`, any expression when `true`.
    pub property: Box<Node>,
    /// `true` for `a[b]`, `false` for `a.b`.
    pub computed: bool,
    /// `true` for `a?.b` / `a?.[b]`.
    pub optional: bool,
}

/// `yield a`, `yield* a`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YieldExpression {
    /// The yielded value, if any.
    pub argument: Option<Box<Node>>,
    /// `true` for `yield*`.
    pub delegate: bool,
}
