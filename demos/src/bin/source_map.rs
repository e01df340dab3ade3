// This example shows `print`'s source-map output: pass `sourceMapSource`
// and a hole node carrying its own original `loc` gets a segment in the
// returned `SourceMap`. Nodes from the template's own stitched skeleton
// (the surrounding `console.log(...)` here) carry no location and never
// get mapped — only positions the caller actually supplies are.

use boa_interner::Interner;
use redast_ast::node::{Literal, LiteralValue};
use redast_ast::{Fragment, Node, NodeKind, Position, SourceLocation, Span};
use redast_macros::x;
use redast_printer::{print, Mappings, PrinterOptions};

fn main() {
    simple_logger::init_with_level(log::Level::Info).unwrap();

    let mut interner = Interner::default();

    // Pretend `answer` came from source at line 10, columns 5-7.
    let loc = SourceLocation::new(Position::new(10, 5), Position::new(10, 7));
    let answer = Node::new(NodeKind::Literal(Literal::new(LiteralValue::Number(42.0))))
        .with_loc(loc, Span::new(0, 0));

    let expr = x!(&mut interner; "console.log(", answer, ")").expect("expression builds");
    let fragment = Fragment::Node(expr);

    let options = PrinterOptions::default().with_source_map_source("input.js");
    let out = print(&fragment, &interner, &options).expect("prints");

    println!("code: {}", out.code);
    match &out.map.mappings {
        Mappings::Encoded(mappings) => println!("mappings: {mappings}"),
        Mappings::Decoded(segments) => println!("mappings: {segments:?}"),
    }
}
