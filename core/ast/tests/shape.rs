//! Tests for basic node construction and the sigil-identifier convention.

use redast_ast::node::{BinaryExpression, BinaryOp, Literal, LiteralValue, NodeKind};
use redast_ast::sigil::is_sigil_name;
use redast_ast::{Interner, Node};

#[test]
fn identifier_node_round_trips_its_symbol() {
    let mut interner = Interner::default();
    let sym = interner.get_or_intern("total");
    let node = Node::identifier(sym);
    match node.kind {
        NodeKind::Identifier(id) => assert_eq!(id.sym, interner.get_or_intern("total")),
        other => panic!("expected Identifier, got {other:?}"),
    }
}

#[test]
fn fresh_nodes_carry_no_location() {
    let node = Node::new(NodeKind::Literal(Literal::new(LiteralValue::Number(42.0))));
    assert!(node.loc.is_none());
    assert!(node.range.is_none());
    assert!(node.leading_comments.is_empty());
}

#[test]
fn sigil_detection_covers_both_characters() {
    assert!(is_sigil_name("@hoisted"));
    assert!(is_sigil_name("#private"));
    assert!(!is_sigil_name("plain"));
    assert!(!is_sigil_name(""));
}

#[test]
fn binary_expression_wraps_its_operands() {
    let left = Box::new(Node::new(NodeKind::Literal(Literal::new(LiteralValue::Number(1.0)))));
    let right = Box::new(Node::new(NodeKind::Literal(Literal::new(LiteralValue::Number(2.0)))));
    let node = Node::new(NodeKind::BinaryExpression(BinaryExpression {
        operator: BinaryOp::Add,
        left,
        right,
    }));
    match node.kind {
        NodeKind::BinaryExpression(bin) => assert_eq!(bin.operator, BinaryOp::Add),
        other => panic!("expected BinaryExpression, got {other:?}"),
    }
}
