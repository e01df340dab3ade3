//! Template-driven AST construction: turns a sequence of source-text
//! chunks and interpolated hole values into a [`redast_ast`] tree,
//! without exposing the caller to the stitched-source/placeholder
//! mechanics underneath. [`core::macros`] is the only intended caller —
//! this crate's public functions take already-split chunks and already
//! coerced [`HoleValue`]s rather than a template-literal-like macro
//! surface of their own.

mod entry;
mod error;
mod hole;
mod skeleton;
mod stitch;
mod substitute;

pub use entry::{build_block, build_expr, build_prop};
pub use error::TemplateError;
pub use hole::HoleValue;

#[cfg(test)]
mod tests {
    use boa_interner::Interner;
    use redast_ast::{Node, NodeKind};

    use super::*;

    fn ident_name(node: &Node, interner: &Interner) -> String {
        let NodeKind::Identifier(id) = &node.kind else {
            panic!("expected an identifier, got {node:?}");
        };
        interner.resolve_expect(id.sym).to_string()
    }

    #[test]
    fn bare_string_hole_in_expression_position_is_a_literal() {
        // A string hole standing alone is a *value*, not a reference —
        // matching plain JS semantics for a string substituted into an
        // expression position. Build a reference with a `Node` hole
        // instead (see the next test).
        let mut interner = Interner::default();
        let node = build_expr(&["", ""], vec![HoleValue::from("foo")], &mut interner).unwrap();
        let NodeKind::Literal(lit) = &node.kind else {
            panic!("expected a string literal, got {node:?}");
        };
        assert_eq!(lit.value, redast_ast::node::LiteralValue::String("foo".into()));
    }

    #[test]
    fn string_hole_in_pattern_position_is_an_identifier() {
        let mut interner = Interner::default();
        let body = build_block(
            &["let ", " = 1;"],
            vec![HoleValue::from("x")],
            &mut interner,
        )
        .unwrap();
        let NodeKind::VariableDeclaration(decl) = &body[0].kind else {
            panic!("expected a variable declaration, got {:?}", body[0]);
        };
        let NodeKind::VariableDeclarator(declarator) = &decl.declarations[0].kind else {
            panic!("expected a variable declarator");
        };
        assert_eq!(ident_name(&declarator.id, &interner), "x");
    }

    #[test]
    fn node_hole_used_verbatim_in_member_position() {
        let mut interner = Interner::default();
        let inner = Node::new(NodeKind::Identifier(redast_ast::node::Identifier::new(
            interner.get_or_intern("a"),
        )));
        let node = build_expr(
            &["", ".bar"],
            vec![HoleValue::from(inner)],
            &mut interner,
        )
        .unwrap();
        let NodeKind::MemberExpression(m) = &node.kind else {
            panic!("expected a member expression, got {node:?}");
        };
        assert_eq!(ident_name(&m.object, &interner), "a");
        assert_eq!(ident_name(&m.property, &interner), "bar");
        assert!(!m.computed);
    }

    #[test]
    fn falsy_hole_removes_a_statement() {
        let mut interner = Interner::default();
        let body = build_block(
            &["a++; ", "; b++;"],
            vec![HoleValue::from(false)],
            &mut interner,
        )
        .unwrap();
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn array_hole_flattens_into_elements() {
        let mut interner = Interner::default();
        let ident = |interner: &mut Interner, name: &str| {
            Node::new(NodeKind::Identifier(redast_ast::node::Identifier::new(
                interner.get_or_intern(name),
            )))
        };
        let a = ident(&mut interner, "a");
        let b = ident(&mut interner, "b");
        let c = ident(&mut interner, "c");
        let node = build_expr(
            &["[", "]"],
            vec![HoleValue::from(vec![a, b, c])],
            &mut interner,
        )
        .unwrap();
        let NodeKind::ArrayExpression(arr) = &node.kind else {
            panic!("expected an array expression, got {node:?}");
        };
        assert_eq!(arr.elements.len(), 3);
        for (element, name) in arr.elements.iter().zip(["a", "b", "c"]) {
            let element = element.as_ref().unwrap();
            assert_eq!(ident_name(element, &interner), name);
        }
    }

    #[test]
    fn falsy_property_value_removes_the_property() {
        let mut interner = Interner::default();
        let node = build_expr(
            &["({ a: 1, b: ", " })"],
            vec![HoleValue::from(false)],
            &mut interner,
        )
        .unwrap();
        let NodeKind::ObjectExpression(obj) = &node.kind else {
            panic!("expected an object expression, got {node:?}");
        };
        assert_eq!(obj.properties.len(), 1);
    }

    #[test]
    fn unused_hole_is_an_error() {
        let mut interner = Interner::default();
        let err = build_expr(
            &["", ""],
            vec![HoleValue::from(1.0), HoleValue::from(2.0)],
            &mut interner,
        )
        .unwrap_err();
        assert!(matches!(err, TemplateError::HoleUnused { index: 1 }));
    }
}
