//! Function and arrow-function nodes.
//!
//! `FunctionDeclaration`, `FunctionExpression`, and
//! `ArrowFunctionExpression` share this shape in ESTree modulo the
//! presence of an `id` and the concise-body form arrows allow; one
//! [`Function`] backs all three
//! [`crate::node::NodeKind`] variants.

use super::Node;

/// The body of a function: a block, or — for an arrow function's concise
/// form, `a => a + 1` — a single expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionBody {
    /// `{ ... }`.
    Block(Vec<Node>),
    /// The concise arrow body, printed without braces or a `return`.
    Expression(Box<Node>),
}

/// A function declaration, function expression, method, or arrow function.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    /// The function's name, for declarations and named expressions.
    /// Always `None` for arrow functions.
    pub id: Option<super::identifier::Identifier>,
    /// The parameter list. Elements may be plain identifiers,
    /// `AssignmentPattern`s (defaults), destructuring patterns, or a
    /// trailing `RestElement`.
    pub params: Vec<Node>,
    /// The function's body.
    pub body: FunctionBody,
    /// `true` for `async function`/`async () => {}`.
    pub is_async: bool,
    /// `true` for `function*`. Always `false` for arrow functions.
    pub is_generator: bool,
    /// `true` for arrow functions, distinguishing
    /// `ArrowFunctionExpression` from `FunctionExpression` without a
    /// separate struct.
    pub is_arrow: bool,
}

impl Function {
    /// Returns the parameter list as a block-bodied, non-arrow function —
    /// the common case used when lowering a parsed `function` form.
    #[must_use]
    pub const fn new(
        id: Option<super::identifier::Identifier>,
        params: Vec<Node>,
        body: FunctionBody,
        is_async: bool,
        is_generator: bool,
        is_arrow: bool,
    ) -> Self {
        Self {
            id,
            params,
            body,
            is_async,
            is_generator,
            is_arrow,
        }
    }
}
