//! Stand-ins for the `` b`...` ``/`` x`...` ``/`` p`...` `` tagged
//! templates: JS hands its tag function a `(strings, ...values)` pair
//! built straight from the source text, but Rust has no literal syntax
//! for that, so these macros reconstruct the shape by hand.
//!
//! Rust also has no implicit per-thread [`boa_interner::Interner`], so
//! every invocation names one explicitly, followed by `;`, then
//! alternating string-literal chunks and hole expressions — exactly the
//! `(strings, values)` split a tagged template would have received:
//!
//! ```ignore
//! let stmts = b!(interner; "let ", name, " = ", init, ";");
//! let expr = x!(interner; "this.", field, "()");
//! let prop = p!(interner; "", key, ": ", value);
//! ```
//!
//! A chunk with no hole before the closing chunk is written with a
//! single literal, matching the one-argument tagged-template call.

#[doc(hidden)]
pub use boa_interner::Interner;
#[doc(hidden)]
pub use redast_ast::Node;
#[doc(hidden)]
pub use redast_template::{build_block, build_expr, build_prop, HoleValue, TemplateError};

/// Builds a statement list. Expands to a `Result<Vec<Node>, TemplateError>`.
#[macro_export]
macro_rules! b {
    ($interner:expr; $first:literal $(, $val:expr, $chunk:literal)* $(,)?) => {
        $crate::build_block(
            &[$first $(, $chunk)*],
            ::std::vec![$($crate::HoleValue::from($val)),*],
            $interner,
        )
    };
}

/// Builds a single expression. Expands to a `Result<Node, TemplateError>`.
#[macro_export]
macro_rules! x {
    ($interner:expr; $first:literal $(, $val:expr, $chunk:literal)* $(,)?) => {
        $crate::build_expr(
            &[$first $(, $chunk)*],
            ::std::vec![$($crate::HoleValue::from($val)),*],
            $interner,
        )
    };
}

/// Builds a single object property. Expands to a `Result<Node, TemplateError>`.
#[macro_export]
macro_rules! p {
    ($interner:expr; $first:literal $(, $val:expr, $chunk:literal)* $(,)?) => {
        $crate::build_prop(
            &[$first $(, $chunk)*],
            ::std::vec![$($crate::HoleValue::from($val)),*],
            $interner,
        )
    };
}

#[cfg(test)]
mod tests {
    use boa_interner::Interner;
    use redast_ast::NodeKind;

    #[test]
    fn x_builds_a_member_call() {
        let mut interner = Interner::default();
        let node = x!(&mut interner; "this.", "field", ".bar(", 1.0, ")").unwrap();
        assert!(matches!(node.kind, NodeKind::CallExpression(_)));
    }

    #[test]
    fn b_builds_a_statement_list() {
        let mut interner = Interner::default();
        let body = b!(&mut interner; "let x = ", 1.0, ";").unwrap();
        assert_eq!(body.len(), 1);
        assert!(matches!(body[0].kind, NodeKind::VariableDeclaration(_)));
    }

    #[test]
    fn p_builds_a_property() {
        let mut interner = Interner::default();
        let node = p!(&mut interner; "", "key", ": ", 1.0, "").unwrap();
        assert!(matches!(node.kind, NodeKind::Property(_)));
    }

    #[test]
    fn no_hole_template_needs_only_one_chunk() {
        let mut interner = Interner::default();
        let node = x!(&mut interner; "1 + 1").unwrap();
        assert!(matches!(node.kind, NodeKind::BinaryExpression(_)));
    }
}
