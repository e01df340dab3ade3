// This example shows the basic build/print round trip: splice values into
// `x!`/`b!` template chunks, then hand the result to `redast_printer::print`
// to get source text back out.

use boa_interner::Interner;
use redast_ast::{Fragment, Node};
use redast_macros::{b, x};
use redast_printer::{print, PrinterOptions};

fn main() {
    simple_logger::init_with_level(log::Level::Info).unwrap();

    // Every template call needs an interner to resolve the identifiers it
    // creates or looks up; one `Interner` is shared across a whole build.
    let mut interner = Interner::default();
    let name_sym = interner.get_or_intern("name");

    // `x!` builds a single expression from a `(strings, values)` split, the
    // same shape a JS tagged template literal hands its tag function. A
    // `Node` hole is spliced in verbatim wherever it lands.
    let greeting = x!(
        &mut interner;
        "'Hello, ' + ", Node::identifier(name_sym), " + '!'"
    )
    .expect("greeting builds");

    // `b!` builds a whole statement list the same way. A bare string hole
    // in a binding position (here, the parameter) becomes an `Identifier`;
    // the same hole in an expression position becomes a string `Literal`
    // instead — see `redast_template`'s own tests for the full table.
    let body = b!(
        &mut interner;
        "function greet(", Node::identifier(name_sym), ") {\n  return ", greeting,
        ";\n}\nconsole.log(greet(", "Boa dev", "));"
    )
    .expect("program builds");

    let fragment = Fragment::Block(body);
    let out = print(&fragment, &interner, &PrinterOptions::default()).expect("prints");

    println!("{}", out.code);
}
