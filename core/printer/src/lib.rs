//! Pretty printer and source-map emitter for `redast_ast` trees.
//!
//! [`print`] walks a [`redast_ast::Fragment`] and renders it to source
//! text plus a Source Map Revision 3 document, using a precedence-table
//! and indented-block rendering technique generalized to cover every
//! node kind this core builds or parses.

mod error;
mod options;
mod precedence;
mod printer;
mod source_map;

pub use error::PrintError;
pub use options::PrinterOptions;
pub use printer::{print, PrintOutput};
pub use source_map::{Mappings, SourceMap};

#[cfg(test)]
mod tests {
    use super::*;
    use boa_interner::Interner;
    use redast_ast::{Fragment, Node, NodeKind, Position, SourceLocation, Span};
    use redast_macros::x;
    use redast_parser::{ParseMode, Parsed};

    fn parse_print(source: &str) -> (String, Interner) {
        let mut interner = Interner::default();
        let body = match redast_parser::parse(source, ParseMode::Statements, &mut interner)
            .expect("valid source")
        {
            Parsed::Statements(body) => body,
            other => panic!("expected a statement list, got {other:?}"),
        };
        let fragment = Fragment::Block(body);
        let out = print(&fragment, &interner, &PrinterOptions::default()).expect("prints");
        (out.code, interner)
    }

    #[test]
    fn maps_only_the_caller_supplied_hole_node_not_the_template_skeleton() {
        let mut interner = Interner::default();
        let loc = SourceLocation::new(Position::new(10, 5), Position::new(10, 7));
        let answer = Node::new(NodeKind::Literal(redast_ast::node::Literal::new(
            redast_ast::node::LiteralValue::Number(42.0),
        )))
        .with_loc(loc, Span::new(0, 0));
        let fragment = Fragment::Node(
            x!(&mut interner; "console.log(", answer, ")").expect("builds"),
        );
        let options = PrinterOptions::default().with_source_map_source("input.js");
        let out = print(&fragment, &interner, &options).expect("prints");

        assert_eq!(out.code, "console.log(42)");
        let Mappings::Encoded(mappings) = &out.map.mappings else {
            panic!("expected encoded mappings");
        };
        // One segment, for `42` alone: the `console`/`log`/call skeleton
        // nodes came from the synthetic stitched source and carry no
        // location, so only the caller-supplied hole node gets mapped.
        assert_eq!(mappings, "YASK");
    }

    #[test]
    fn rejects_a_sigil_identifier() {
        let mut interner = Interner::default();
        let sym = interner.get_or_intern("@bar");
        let fragment = Fragment::Node(Node::identifier(sym));
        let err = print(&fragment, &interner, &PrinterOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Unhandled sigil @bar");
    }

    #[test]
    fn parenthesizes_lower_precedence_operands() {
        let (code, _) = parse_print("(a + b) * c;");
        assert_eq!(code, "(a + b) * c;");
    }

    #[test]
    fn drops_redundant_parens_around_higher_precedence_operands() {
        let (code, _) = parse_print("a * b + c;");
        assert_eq!(code, "a * b + c;");
    }

    #[test]
    fn exponent_right_associativity_keeps_parens_on_the_left_operand() {
        let (code, _) = parse_print("(a ** b) ** c;");
        assert_eq!(code, "(a ** b) ** c;");
    }

    #[test]
    fn prints_a_block_body_with_a_single_tab_per_level() {
        let (code, _) = parse_print("if (a) { b; }");
        assert!(code.contains("{\n\tb;\n}"), "got: {code:?}");
    }

    #[test]
    fn wraps_an_object_expression_statement_in_parens() {
        let interner = Interner::default();
        let obj = Node::new(NodeKind::ObjectExpression(redast_ast::node::ObjectExpression {
            properties: Vec::new(),
        }));
        let stmt = Node::new(NodeKind::ExpressionStatement(Box::new(obj)));
        let fragment = Fragment::Block(vec![stmt]);
        let out = print(&fragment, &interner, &PrinterOptions::default()).expect("prints");
        assert_eq!(out.code, "({});\n");
    }

    #[test]
    fn applies_get_name_only_to_binding_identifiers_not_member_properties() {
        let mut interner = Interner::default();
        let x_ref = Node::identifier(interner.get_or_intern("x"));
        let field = redast_ast::node::Identifier::new(interner.get_or_intern("field"));
        let member = Node::new(NodeKind::MemberExpression(redast_ast::node::MemberExpression {
            object: Box::new(x_ref),
            property: Box::new(Node::new(NodeKind::Identifier(field))),
            computed: false,
            optional: false,
        }));
        let fragment = Fragment::Node(member);
        let options = PrinterOptions::default().with_get_name(|name| format!("_{name}"));
        let out = print(&fragment, &interner, &options).expect("prints");
        assert_eq!(out.code, "_x.field");
    }

    #[test]
    fn escapes_single_quotes_in_string_literals() {
        let (code, _) = parse_print("'it\\'s';");
        assert_eq!(code, "'it\\'s';");
    }
}
