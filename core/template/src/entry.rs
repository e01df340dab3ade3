//! The three public entry points behind the `b`/`x`/`p` macros.
//! Each stitches its chunks into one source string, parses it in the
//! matching [`ParseMode`], then runs the substitution walk over the
//! result.

use boa_interner::Interner;
use redast_ast::Node;
use redast_parser::adapter::{parse, ParseMode, Parsed};

use crate::hole::HoleValue;
use crate::skeleton;
use crate::stitch::stitch;
use crate::substitute;
use crate::TemplateError;

/// Builds a statement list from template chunks and hole values.
///
/// A hole that lands alone at statement level is unwrapped from its
/// `ExpressionStatement` when its value is itself statement-shaped (an
/// `if`, a block, another template's statements, ...); a `Nodes` hole
/// there splices every node into the list in place.
pub fn build_block(
    chunks: &[&str],
    holes: Vec<HoleValue>,
    interner: &mut Interner,
) -> Result<Vec<Node>, TemplateError> {
    let src = stitch(chunks);
    log::trace!("build_block: stitched {src:?}");
    let Parsed::Statements(mut body) = parse(&src, ParseMode::Statements, interner)? else {
        unreachable!("ParseMode::Statements always yields Parsed::Statements")
    };
    skeleton::clear_list(&mut body);
    substitute::substitute_block_root(&mut body, holes, interner)?;
    Ok(body)
}

/// Builds a single expression from template chunks and hole values.
pub fn build_expr(
    chunks: &[&str],
    holes: Vec<HoleValue>,
    interner: &mut Interner,
) -> Result<Node, TemplateError> {
    let src = stitch(chunks);
    log::trace!("build_expr: stitched {src:?}");
    let Parsed::Expression(mut node) = parse(&src, ParseMode::Expression, interner)? else {
        unreachable!("ParseMode::Expression always yields Parsed::Expression")
    };
    skeleton::clear_locations(&mut node);
    substitute::substitute_expression_root(&mut node, holes, interner)?;
    Ok(node)
}

/// Builds a single object property (suitable for splicing into an object
/// literal or object pattern) from template chunks and hole values.
pub fn build_prop(
    chunks: &[&str],
    holes: Vec<HoleValue>,
    interner: &mut Interner,
) -> Result<Node, TemplateError> {
    let src = stitch(chunks);
    log::trace!("build_prop: stitched {src:?}");
    let Parsed::Property(mut node) = parse(&src, ParseMode::Property, interner)? else {
        unreachable!("ParseMode::Property always yields Parsed::Property")
    };
    skeleton::clear_locations(&mut node);
    substitute::substitute_property_root(&mut node, holes, interner)?;
    Ok(node)
}
