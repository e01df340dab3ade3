//! The post-parse substitution walk, which treats falsy elision as a
//! tree edit. The walk addresses
//! children by `(parent, key, index)` rather than by node identity, so
//! that array splicing, element removal, and whole-statement removal all
//! fall out of the same list-handling code path.

use boa_interner::Interner;

use redast_ast::node::{
    Class, Function, FunctionBody, Identifier, Literal, LiteralValue, Property, PropertyKey,
};
use redast_ast::{Node, NodeKind};

use crate::hole::HoleValue;
use crate::stitch::placeholder_index;
use crate::TemplateError;

/// What an identifier-shaped hole coerces to when it is a scalar
/// (string/number/boolean), chosen by where in the grammar it landed.
#[derive(Clone, Copy)]
enum Slot {
    /// A value is expected: strings and numbers become `Literal`s.
    Expression,
    /// A binding target is expected: strings become `Identifier`s.
    Pattern,
}

impl Slot {
    const fn name(self) -> &'static str {
        match self {
            Self::Expression => "expression",
            Self::Pattern => "pattern",
        }
    }
}

/// What kind of list a [`substitute_list`] call is walking, which decides
/// how a placeholder found in one of its elements is coerced.
enum ListKind {
    /// A statement list: a placeholder appears wrapped in an
    /// `ExpressionStatement`, one level below the list element itself.
    Body,
    /// A plain list of expressions or patterns (call arguments, array
    /// elements, parameters): the placeholder is the list element.
    Plain(Slot),
    /// An object's (or object pattern's) property list.
    Properties(Slot),
}

// ---- Public entry points ------------------------------------------------

/// Substitutes `holes` into a parsed statement list, consuming every hole
/// exactly once.
pub(crate) fn substitute_block_root(
    body: &mut Vec<Node>,
    holes: Vec<HoleValue>,
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    let mut holes = into_slots(holes);
    substitute_list(body, &ListKind::Body, &mut holes, interner)?;
    check_all_consumed(&holes)
}

/// Substitutes `holes` into a parsed expression root.
pub(crate) fn substitute_expression_root(
    node: &mut Node,
    holes: Vec<HoleValue>,
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    let mut holes = into_slots(holes);
    if let Some(index) = is_placeholder_node(node, interner) {
        let value = take_hole(&mut holes, index)?;
        if value.is_falsy_elision() {
            return Err(TemplateError::WrongKind {
                index,
                kind: value.kind_name(),
                position: "expression",
            });
        }
        *node = coerce_scalar(value, Slot::Expression, index, interner)?;
    } else {
        substitute_in_node(node, &mut holes, interner)?;
    }
    check_all_consumed(&holes)
}

/// Substitutes `holes` into a parsed single-property root.
pub(crate) fn substitute_property_root(
    node: &mut Node,
    holes: Vec<HoleValue>,
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    let mut holes = into_slots(holes);
    substitute_in_node(node, &mut holes, interner)?;
    check_all_consumed(&holes)
}

fn into_slots(holes: Vec<HoleValue>) -> Vec<Option<HoleValue>> {
    holes.into_iter().map(Some).collect()
}

fn check_all_consumed(holes: &[Option<HoleValue>]) -> Result<(), TemplateError> {
    for (index, h) in holes.iter().enumerate() {
        if h.is_some() {
            return Err(TemplateError::HoleUnused { index });
        }
    }
    Ok(())
}

fn take_hole(holes: &mut [Option<HoleValue>], index: usize) -> Result<HoleValue, TemplateError> {
    holes
        .get_mut(index)
        .and_then(Option::take)
        .ok_or(TemplateError::HoleReused { index })
}

/// Returns the hole index if `node` is a placeholder identifier.
fn is_placeholder_node(node: &Node, interner: &Interner) -> Option<usize> {
    let NodeKind::Identifier(id) = &node.kind else {
        return None;
    };
    placeholder_index(&interner.resolve_expect(id.sym).to_string())
}

fn placeholder_index_of(id: &Identifier, interner: &Interner) -> Option<usize> {
    placeholder_index(&interner.resolve_expect(id.sym).to_string())
}

/// Coerces a non-elided, non-list hole value to a node fit for `slot`.
fn coerce_scalar(
    value: HoleValue,
    slot: Slot,
    index: usize,
    interner: &mut Interner,
) -> Result<Node, TemplateError> {
    match value {
        HoleValue::Node(n) => Ok(n),
        HoleValue::Nodes(_) => Err(TemplateError::WrongKind {
            index,
            kind: "a node list",
            position: slot.name(),
        }),
        HoleValue::String(s) => Ok(match slot {
            Slot::Pattern => Node::new(NodeKind::Identifier(Identifier::new(
                interner.get_or_intern(s),
            ))),
            Slot::Expression => Node::new(NodeKind::Literal(Literal::new(LiteralValue::String(s)))),
        }),
        HoleValue::Number(n) => Ok(Node::new(NodeKind::Literal(Literal::new(
            LiteralValue::Number(n),
        )))),
        HoleValue::Boolean(b) => Ok(Node::new(NodeKind::Literal(Literal::new(
            LiteralValue::Boolean(b),
        )))),
        HoleValue::Null | HoleValue::Undefined => {
            unreachable!("falsy elision is handled by the caller before coerce_scalar")
        }
    }
}

/// A statement-list placeholder is always one level below the list
/// element: `${0};` parses as `ExpressionStatement(Identifier(ph))`.
fn body_placeholder(node: &Node, interner: &Interner) -> Option<usize> {
    if let NodeKind::ExpressionStatement(inner) = &node.kind {
        return is_placeholder_node(inner, interner);
    }
    None
}

enum BodyReplacement {
    Splice(Vec<Node>),
    One(Node),
}

fn splice_body_hole(value: HoleValue) -> Result<Option<BodyReplacement>, TemplateError> {
    if value.is_falsy_elision() {
        return Ok(None);
    }
    let wrap = |expr: Node| Node::new(NodeKind::ExpressionStatement(Box::new(expr)));
    Ok(Some(match value {
        HoleValue::Nodes(nodes) => BodyReplacement::Splice(nodes),
        HoleValue::Node(n) => {
            if is_statement_kind(&n.kind) {
                BodyReplacement::One(n)
            } else {
                BodyReplacement::One(wrap(n))
            }
        }
        HoleValue::String(s) => {
            BodyReplacement::One(wrap(Node::new(NodeKind::Literal(Literal::new(
                LiteralValue::String(s),
            )))))
        }
        HoleValue::Number(n) => BodyReplacement::One(wrap(Node::new(NodeKind::Literal(
            Literal::new(LiteralValue::Number(n)),
        )))),
        HoleValue::Boolean(b) => BodyReplacement::One(wrap(Node::new(NodeKind::Literal(
            Literal::new(LiteralValue::Boolean(b)),
        )))),
        HoleValue::Null | HoleValue::Undefined => unreachable!(),
    }))
}

fn is_statement_kind(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::ExpressionStatement(_)
            | NodeKind::BlockStatement(_)
            | NodeKind::EmptyStatement
            | NodeKind::VariableDeclaration(_)
            | NodeKind::FunctionDeclaration(_)
            | NodeKind::ClassDeclaration(_)
            | NodeKind::ReturnStatement(_)
            | NodeKind::IfStatement(_)
            | NodeKind::ForStatement(_)
            | NodeKind::ForInStatement(_)
            | NodeKind::ForOfStatement(_)
            | NodeKind::WhileStatement(_)
            | NodeKind::DoWhileStatement(_)
            | NodeKind::BreakStatement(_)
            | NodeKind::ContinueStatement(_)
            | NodeKind::ThrowStatement(_)
            | NodeKind::TryStatement(_)
            | NodeKind::SwitchStatement(_)
            | NodeKind::LabeledStatement(_)
            | NodeKind::ImportDeclaration(_)
            | NodeKind::ExportNamedDeclaration(_)
            | NodeKind::ExportDefaultDeclaration(_)
    )
}

/// A single required statement field (`if`/`for`/`while`/labeled bodies):
/// same placeholder shape as a body-list element, but there is only one
/// slot, so a multi-node hole collapses into a `BlockStatement`.
fn substitute_single_statement(
    node: &mut Box<Node>,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    if let Some(index) = body_placeholder(node, interner) {
        let value = take_hole(holes, index)?;
        match splice_body_hole(value)? {
            None => {
                return Err(TemplateError::WrongKind {
                    index,
                    kind: "a falsy value",
                    position: "statement",
                })
            }
            Some(BodyReplacement::One(n)) => **node = n,
            Some(BodyReplacement::Splice(mut nodes)) => {
                **node = if nodes.len() == 1 {
                    nodes.remove(0)
                } else {
                    Node::new(NodeKind::BlockStatement(nodes))
                };
            }
        }
        return Ok(());
    }
    substitute_in_node(node, holes, interner)
}

fn substitute_optional_statement(
    opt: &mut Option<Box<Node>>,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    let Some(node) = opt.as_mut() else {
        return Ok(());
    };
    if let Some(index) = body_placeholder(node, interner) {
        let value = take_hole(holes, index)?;
        match splice_body_hole(value)? {
            None => *opt = None,
            Some(BodyReplacement::One(n)) => **node = n,
            Some(BodyReplacement::Splice(mut nodes)) => {
                **node = if nodes.len() == 1 {
                    nodes.remove(0)
                } else {
                    Node::new(NodeKind::BlockStatement(nodes))
                };
            }
        }
        return Ok(());
    }
    substitute_in_node(node, holes, interner)
}

/// A required single node field, e.g. a binary operand.
fn substitute_single_box(
    node: &mut Box<Node>,
    slot: Slot,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    if let Some(index) = is_placeholder_node(node, interner) {
        let value = take_hole(holes, index)?;
        if value.is_falsy_elision() {
            return Err(TemplateError::WrongKind {
                index,
                kind: value.kind_name(),
                position: slot.name(),
            });
        }
        **node = coerce_scalar(value, slot, index, interner)?;
        return Ok(());
    }
    substitute_in_node(node, holes, interner)
}

/// An optional single node field; a falsy hole clears it.
fn substitute_optional_box(
    opt: &mut Option<Box<Node>>,
    slot: Slot,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    let Some(node) = opt.as_mut() else {
        return Ok(());
    };
    if let Some(index) = is_placeholder_node(node, interner) {
        let value = take_hole(holes, index)?;
        if value.is_falsy_elision() {
            *opt = None;
            return Ok(());
        }
        **node = coerce_scalar(value, slot, index, interner)?;
        return Ok(());
    }
    substitute_in_node(node, holes, interner)
}

/// A field that must stay identifier-shaped (non-computed member
/// property, a bound name): strings mint a new identifier; a node hole
/// must itself already be an `Identifier`.
fn substitute_identifier_node(
    node: &mut Box<Node>,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    let Some(index) = is_placeholder_node(node, interner) else {
        return Ok(());
    };
    let value = take_hole(holes, index)?;
    match value {
        HoleValue::String(s) => {
            **node = Node::new(NodeKind::Identifier(Identifier::new(
                interner.get_or_intern(s),
            )));
            Ok(())
        }
        HoleValue::Node(n) if matches!(n.kind, NodeKind::Identifier(_)) => {
            **node = n;
            Ok(())
        }
        other => Err(TemplateError::WrongKind {
            index,
            kind: other.kind_name(),
            position: "identifier",
        }),
    }
}

/// `Function.id`/`Class.id`: an `Option<Identifier>`, not a `Node`.
fn substitute_opt_identifier(
    opt: &mut Option<Identifier>,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    let Some(id) = opt.as_mut() else {
        return Ok(());
    };
    let Some(index) = placeholder_index_of(id, interner) else {
        return Ok(());
    };
    let value = take_hole(holes, index)?;
    if value.is_falsy_elision() {
        *opt = None;
        return Ok(());
    }
    match value {
        HoleValue::String(s) => id.sym = interner.get_or_intern(s),
        HoleValue::Node(n) => match n.kind {
            NodeKind::Identifier(other) => id.sym = other.sym,
            _ => {
                return Err(TemplateError::WrongKind {
                    index,
                    kind: "a node",
                    position: "identifier",
                })
            }
        },
        other => {
            return Err(TemplateError::WrongKind {
                index,
                kind: other.kind_name(),
                position: "identifier",
            })
        }
    }
    Ok(())
}

/// A bare, non-optional `Identifier` field (an import/export local or
/// imported/exported name).
fn substitute_identifier_field(
    id: &mut Identifier,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    let Some(index) = placeholder_index_of(id, interner) else {
        return Ok(());
    };
    let value = take_hole(holes, index)?;
    match value {
        HoleValue::String(s) => {
            id.sym = interner.get_or_intern(s);
            Ok(())
        }
        HoleValue::Node(n) => match n.kind {
            NodeKind::Identifier(other) => {
                id.sym = other.sym;
                Ok(())
            }
            _ => Err(TemplateError::WrongKind {
                index,
                kind: "a node",
                position: "identifier",
            }),
        },
        other => Err(TemplateError::WrongKind {
            index,
            kind: other.kind_name(),
            position: "identifier",
        }),
    }
}

fn substitute_property_key(
    key: &mut PropertyKey,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    match key {
        PropertyKey::Identifier(id) => {
            let Some(index) = placeholder_index_of(id, interner) else {
                return Ok(());
            };
            let value = take_hole(holes, index)?;
            match value {
                HoleValue::String(s) => {
                    id.sym = interner.get_or_intern(s);
                    Ok(())
                }
                HoleValue::Node(n) => match n.kind {
                    NodeKind::Identifier(other) => {
                        id.sym = other.sym;
                        Ok(())
                    }
                    _ => {
                        *key = PropertyKey::Computed(Box::new(n));
                        Ok(())
                    }
                },
                other => Err(TemplateError::WrongKind {
                    index,
                    kind: other.kind_name(),
                    position: "property key",
                }),
            }
        }
        PropertyKey::Computed(node) => substitute_single_box(node, Slot::Expression, holes, interner),
        PropertyKey::Literal(_) => Ok(()),
    }
}

fn substitute_property_fields(
    prop: &mut Property,
    value_slot: Slot,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    substitute_property_key(&mut prop.key, holes, interner)?;
    substitute_single_box(&mut prop.value, value_slot, holes, interner)
}

enum PropertyAction {
    Keep,
    Remove,
    Splice(Vec<Node>),
}

/// One element of an object (or object-pattern) property list. Handles
/// both the whole-property shorthand hole (`{ ${0} }`, typically an array
/// from `p!` fragments) and a hole landing as just the property's value
/// (`{ a: ${0} }`, where falsy removes the whole property).
fn substitute_property_element(
    node: &mut Node,
    value_slot: Slot,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<PropertyAction, TemplateError> {
    if let NodeKind::SpreadElement(inner) = &mut node.kind {
        substitute_single_box(inner, Slot::Expression, holes, interner)?;
        return Ok(PropertyAction::Keep);
    }

    let NodeKind::Property(prop) = &mut node.kind else {
        substitute_in_node(node, holes, interner)?;
        return Ok(PropertyAction::Keep);
    };

    if prop.shorthand {
        let shorthand_index = if let PropertyKey::Identifier(key_id) = &prop.key {
            is_placeholder_node(&prop.value, interner)
                .filter(|index| placeholder_index_of(key_id, interner) == Some(*index))
        } else {
            None
        };
        if let Some(index) = shorthand_index {
            let value = take_hole(holes, index)?;
            if value.is_falsy_elision() {
                return Ok(PropertyAction::Remove);
            }
            return match value {
                HoleValue::Nodes(nodes) => Ok(PropertyAction::Splice(nodes)),
                HoleValue::Node(n) => {
                    if matches!(n.kind, NodeKind::Property(_)) {
                        *node = n;
                        Ok(PropertyAction::Keep)
                    } else {
                        Err(TemplateError::WrongKind {
                            index,
                            kind: "a node",
                            position: "property",
                        })
                    }
                }
                HoleValue::String(s) => {
                    let sym = interner.get_or_intern(s);
                    let NodeKind::Property(prop) = &mut node.kind else {
                        unreachable!()
                    };
                    prop.key = PropertyKey::Identifier(Identifier::new(sym));
                    *prop.value = Node::new(NodeKind::Identifier(Identifier::new(sym)));
                    Ok(PropertyAction::Keep)
                }
                other => Err(TemplateError::WrongKind {
                    index,
                    kind: other.kind_name(),
                    position: "property",
                }),
            };
        }
    }

    if let Some(index) = is_placeholder_node(&prop.value, interner) {
        let value = take_hole(holes, index)?;
        if value.is_falsy_elision() {
            return Ok(PropertyAction::Remove);
        }
        match value {
            HoleValue::Nodes(_) => {
                return Err(TemplateError::WrongKind {
                    index,
                    kind: "a node list",
                    position: "property value",
                })
            }
            other => *prop.value = coerce_scalar(other, value_slot, index, interner)?,
        }
    } else {
        substitute_in_node(&mut prop.value, holes, interner)?;
    }
    substitute_property_key(&mut prop.key, holes, interner)?;
    Ok(PropertyAction::Keep)
}

fn substitute_array_elements(
    elements: &mut Vec<Option<Node>>,
    slot: Slot,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    let mut i = 0;
    while i < elements.len() {
        let placeholder = elements[i]
            .as_ref()
            .and_then(|n| is_placeholder_node(n, interner));
        if let Some(index) = placeholder {
            let value = take_hole(holes, index)?;
            if value.is_falsy_elision() {
                elements.remove(i);
                continue;
            }
            match value {
                HoleValue::Nodes(nodes) => {
                    let n = nodes.len();
                    elements.splice(i..=i, nodes.into_iter().map(Some));
                    i += n;
                    continue;
                }
                other => elements[i] = Some(coerce_scalar(other, slot, index, interner)?),
            }
        } else if let Some(node) = elements[i].as_mut() {
            substitute_in_node(node, holes, interner)?;
        }
        i += 1;
    }
    Ok(())
}

fn substitute_list(
    list: &mut Vec<Node>,
    kind: &ListKind,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    let mut i = 0;
    while i < list.len() {
        match kind {
            ListKind::Body => {
                if let Some(index) = body_placeholder(&list[i], interner) {
                    let value = take_hole(holes, index)?;
                    match splice_body_hole(value)? {
                        None => {
                            list.remove(i);
                            continue;
                        }
                        Some(BodyReplacement::Splice(nodes)) => {
                            let n = nodes.len();
                            list.splice(i..=i, nodes);
                            i += n;
                            continue;
                        }
                        Some(BodyReplacement::One(node)) => list[i] = node,
                    }
                } else {
                    substitute_in_node(&mut list[i], holes, interner)?;
                }
            }
            ListKind::Plain(slot) => {
                if let Some(index) = is_placeholder_node(&list[i], interner) {
                    let value = take_hole(holes, index)?;
                    if value.is_falsy_elision() {
                        list.remove(i);
                        continue;
                    }
                    match value {
                        HoleValue::Nodes(nodes) => {
                            let n = nodes.len();
                            list.splice(i..=i, nodes);
                            i += n;
                            continue;
                        }
                        other => list[i] = coerce_scalar(other, *slot, index, interner)?,
                    }
                } else {
                    substitute_in_node(&mut list[i], holes, interner)?;
                }
            }
            ListKind::Properties(value_slot) => {
                match substitute_property_element(&mut list[i], *value_slot, holes, interner)? {
                    PropertyAction::Keep => {}
                    PropertyAction::Remove => {
                        list.remove(i);
                        continue;
                    }
                    PropertyAction::Splice(nodes) => {
                        let n = nodes.len();
                        list.splice(i..=i, nodes);
                        i += n;
                        continue;
                    }
                }
            }
        }
        i += 1;
    }
    Ok(())
}

fn substitute_function(
    f: &mut Function,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    substitute_opt_identifier(&mut f.id, holes, interner)?;
    substitute_list(&mut f.params, &ListKind::Plain(Slot::Pattern), holes, interner)?;
    match &mut f.body {
        FunctionBody::Block(body) => substitute_list(body, &ListKind::Body, holes, interner),
        FunctionBody::Expression(expr) => substitute_single_box(expr, Slot::Expression, holes, interner),
    }
}

fn substitute_class(
    c: &mut Class,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    substitute_opt_identifier(&mut c.id, holes, interner)?;
    if let Some(sup) = &mut c.super_class {
        substitute_single_box(sup, Slot::Expression, holes, interner)?;
    }
    for member in &mut c.body {
        substitute_in_node(member, holes, interner)?;
    }
    Ok(())
}

/// The generic recursive-descent dispatch: for a node not itself a
/// consumed placeholder, walks its children with the right [`Slot`]/list
/// semantics for each field.
fn substitute_in_node(
    node: &mut Node,
    holes: &mut [Option<HoleValue>],
    interner: &mut Interner,
) -> Result<(), TemplateError> {
    match &mut node.kind {
        NodeKind::Program(body) => substitute_list(body, &ListKind::Body, holes, interner),
        NodeKind::Identifier(_) | NodeKind::Literal(_) | NodeKind::ThisExpression | NodeKind::Super => Ok(()),
        NodeKind::TemplateLiteral(t) => {
            substitute_list(&mut t.expressions, &ListKind::Plain(Slot::Expression), holes, interner)
        }
        NodeKind::TaggedTemplateExpression(t) => {
            substitute_single_box(&mut t.tag, Slot::Expression, holes, interner)?;
            substitute_in_node(&mut t.quasi, holes, interner)
        }
        NodeKind::ArrayExpression(a) => {
            substitute_array_elements(&mut a.elements, Slot::Expression, holes, interner)
        }
        NodeKind::ObjectExpression(o) => {
            substitute_list(&mut o.properties, &ListKind::Properties(Slot::Expression), holes, interner)
        }
        NodeKind::Property(prop) => substitute_property_fields(prop, Slot::Expression, holes, interner),
        NodeKind::FunctionExpression(f) | NodeKind::ArrowFunctionExpression(f) | NodeKind::FunctionDeclaration(f) => {
            substitute_function(f, holes, interner)
        }
        NodeKind::ClassExpression(c) | NodeKind::ClassDeclaration(c) => substitute_class(c, holes, interner),
        NodeKind::UnaryExpression(u) => substitute_single_box(&mut u.argument, Slot::Expression, holes, interner),
        NodeKind::UpdateExpression(u) => substitute_single_box(&mut u.argument, Slot::Expression, holes, interner),
        NodeKind::BinaryExpression(b) => {
            substitute_single_box(&mut b.left, Slot::Expression, holes, interner)?;
            substitute_single_box(&mut b.right, Slot::Expression, holes, interner)
        }
        NodeKind::LogicalExpression(l) => {
            substitute_single_box(&mut l.left, Slot::Expression, holes, interner)?;
            substitute_single_box(&mut l.right, Slot::Expression, holes, interner)
        }
        NodeKind::AssignmentExpression(a) => {
            substitute_single_box(&mut a.left, Slot::Pattern, holes, interner)?;
            substitute_single_box(&mut a.right, Slot::Expression, holes, interner)
        }
        NodeKind::ConditionalExpression(c) => {
            substitute_single_box(&mut c.test, Slot::Expression, holes, interner)?;
            substitute_single_box(&mut c.consequent, Slot::Expression, holes, interner)?;
            substitute_single_box(&mut c.alternate, Slot::Expression, holes, interner)
        }
        NodeKind::CallExpression(c) | NodeKind::NewExpression(c) => {
            substitute_single_box(&mut c.callee, Slot::Expression, holes, interner)?;
            substitute_list(&mut c.arguments, &ListKind::Plain(Slot::Expression), holes, interner)
        }
        NodeKind::MemberExpression(m) => {
            substitute_single_box(&mut m.object, Slot::Expression, holes, interner)?;
            if m.computed {
                substitute_single_box(&mut m.property, Slot::Expression, holes, interner)
            } else {
                substitute_identifier_node(&mut m.property, holes, interner)
            }
        }
        NodeKind::SequenceExpression(exprs) => {
            substitute_list(exprs, &ListKind::Plain(Slot::Expression), holes, interner)
        }
        NodeKind::SpreadElement(inner) => substitute_single_box(inner, Slot::Expression, holes, interner),
        NodeKind::AwaitExpression(inner) => substitute_single_box(inner, Slot::Expression, holes, interner),
        NodeKind::YieldExpression(y) => match &mut y.argument {
            Some(arg) => substitute_single_box(arg, Slot::Expression, holes, interner),
            None => Ok(()),
        },
        NodeKind::ArrayPattern(p) => substitute_array_elements(&mut p.elements, Slot::Pattern, holes, interner),
        NodeKind::ObjectPattern(p) => {
            substitute_list(&mut p.properties, &ListKind::Properties(Slot::Pattern), holes, interner)
        }
        NodeKind::AssignmentPattern(a) => {
            substitute_single_box(&mut a.left, Slot::Pattern, holes, interner)?;
            substitute_single_box(&mut a.right, Slot::Expression, holes, interner)
        }
        NodeKind::RestElement(inner) => substitute_single_box(inner, Slot::Pattern, holes, interner),
        NodeKind::ExpressionStatement(inner) => substitute_single_box(inner, Slot::Expression, holes, interner),
        NodeKind::BlockStatement(body) => substitute_list(body, &ListKind::Body, holes, interner),
        NodeKind::EmptyStatement => Ok(()),
        NodeKind::VariableDeclaration(v) => {
            for decl in &mut v.declarations {
                substitute_in_node(decl, holes, interner)?;
            }
            Ok(())
        }
        NodeKind::VariableDeclarator(v) => {
            substitute_single_box(&mut v.id, Slot::Pattern, holes, interner)?;
            match &mut v.init {
                Some(init) => substitute_single_box(init, Slot::Expression, holes, interner),
                None => Ok(()),
            }
        }
        NodeKind::ReturnStatement(arg) => match arg {
            Some(a) => substitute_single_box(a, Slot::Expression, holes, interner),
            None => Ok(()),
        },
        NodeKind::IfStatement(s) => {
            substitute_single_box(&mut s.test, Slot::Expression, holes, interner)?;
            substitute_single_statement(&mut s.consequent, holes, interner)?;
            substitute_optional_statement(&mut s.alternate, holes, interner)
        }
        NodeKind::ForStatement(s) => {
            if let Some(init) = &mut s.init {
                substitute_in_node(init, holes, interner)?;
            }
            if let Some(test) = &mut s.test {
                substitute_single_box(test, Slot::Expression, holes, interner)?;
            }
            if let Some(update) = &mut s.update {
                substitute_single_box(update, Slot::Expression, holes, interner)?;
            }
            substitute_single_statement(&mut s.body, holes, interner)
        }
        NodeKind::ForInStatement(s) | NodeKind::ForOfStatement(s) => {
            substitute_in_node(&mut s.left, holes, interner)?;
            substitute_single_box(&mut s.right, Slot::Expression, holes, interner)?;
            substitute_single_statement(&mut s.body, holes, interner)
        }
        NodeKind::WhileStatement(s) | NodeKind::DoWhileStatement(s) => {
            substitute_single_box(&mut s.test, Slot::Expression, holes, interner)?;
            substitute_single_statement(&mut s.body, holes, interner)
        }
        NodeKind::BreakStatement(_) | NodeKind::ContinueStatement(_) => Ok(()),
        NodeKind::ThrowStatement(inner) => substitute_single_box(inner, Slot::Expression, holes, interner),
        NodeKind::TryStatement(t) => {
            substitute_list(&mut t.block, &ListKind::Body, holes, interner)?;
            if let Some(handler) = &mut t.handler {
                if let Some(param) = &mut handler.param {
                    substitute_single_box(param, Slot::Pattern, holes, interner)?;
                }
                substitute_list(&mut handler.body, &ListKind::Body, holes, interner)?;
            }
            if let Some(finalizer) = &mut t.finalizer {
                substitute_list(finalizer, &ListKind::Body, holes, interner)?;
            }
            Ok(())
        }
        NodeKind::SwitchStatement(s) => {
            substitute_single_box(&mut s.discriminant, Slot::Expression, holes, interner)?;
            for case in &mut s.cases {
                substitute_in_node(case, holes, interner)?;
            }
            Ok(())
        }
        NodeKind::SwitchCase(c) => {
            if let Some(test) = &mut c.test {
                substitute_single_box(test, Slot::Expression, holes, interner)?;
            }
            substitute_list(&mut c.consequent, &ListKind::Body, holes, interner)
        }
        NodeKind::LabeledStatement(l) => substitute_single_statement(&mut l.body, holes, interner),
        NodeKind::MethodDefinition(m) => {
            substitute_property_key(&mut m.key, holes, interner)?;
            substitute_function(&mut m.value, holes, interner)
        }
        NodeKind::PropertyDefinition(p) => {
            substitute_property_key(&mut p.key, holes, interner)?;
            match &mut p.value {
                Some(value) => substitute_single_box(value, Slot::Expression, holes, interner),
                None => Ok(()),
            }
        }
        NodeKind::ImportDeclaration(i) => {
            use redast_ast::node::ImportSpecifier;
            for spec in &mut i.specifiers {
                match spec {
                    ImportSpecifier::Named { imported, local } => {
                        substitute_identifier_field(imported, holes, interner)?;
                        substitute_identifier_field(local, holes, interner)?;
                    }
                    ImportSpecifier::Default { local } | ImportSpecifier::Namespace { local } => {
                        substitute_identifier_field(local, holes, interner)?;
                    }
                }
            }
            Ok(())
        }
        NodeKind::ExportNamedDeclaration(e) => {
            if let Some(decl) = &mut e.declaration {
                substitute_in_node(decl, holes, interner)?;
            }
            for spec in &mut e.specifiers {
                substitute_identifier_field(&mut spec.local, holes, interner)?;
                substitute_identifier_field(&mut spec.exported, holes, interner)?;
            }
            Ok(())
        }
        NodeKind::ExportDefaultDeclaration(inner) => {
            substitute_single_box(inner, Slot::Expression, holes, interner)
        }
    }
}
