//! Build, print, and source-map JavaScript-family ASTs from Rust.
//!
//! This crate re-exports the pieces split across its component crates:
//! [`redast_ast`] for the tree itself, [`redast_template`] (via the
//! [`b!`]/[`x!`]/[`p!`] macros) for building it from tagged-template-style
//! chunks, and [`redast_printer`] for turning it back into source text and
//! a source map.
//!
//! ```
//! use boa_interner::Interner;
//! use redast::{b, print, PrinterOptions};
//!
//! let mut interner = Interner::default();
//! let body = b!(&mut interner; "let x = ", 1.0, ";").unwrap();
//! let fragment = redast::Fragment::Block(body);
//! let out = print(&fragment, &interner, &PrinterOptions::default()).unwrap();
//! assert_eq!(out.code, "let x = 1;\n");
//! ```

pub use redast_ast::{Comment, CommentKind, Fragment, Node, NodeKind, Position, SourceLocation, Span};
pub use redast_macros::{b, p, x};
pub use redast_parser::{parse, LexError, ParseError, ParseMode, Parsed};
pub use redast_printer::{print, Mappings, PrintError, PrintOutput, PrinterOptions, SourceMap};
pub use redast_template::{build_block, build_expr, build_prop, HoleValue, TemplateError};

use thiserror::Error;

/// The union of errors any operation in this crate can raise.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// See [`TemplateError`].
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// See [`PrintError`].
    #[error(transparent)]
    Print(#[from] PrintError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use boa_interner::Interner;

    #[test]
    fn builds_prints_and_round_trips_a_statement() {
        let mut interner = Interner::default();
        let body = b!(&mut interner; "let x = ", 1.0, ";").expect("builds");
        let fragment = Fragment::Block(body);
        let out = print(&fragment, &interner, &PrinterOptions::default()).expect("prints");
        assert_eq!(out.code, "let x = 1;\n");
    }

    #[test]
    fn error_wraps_each_component_error() {
        let mut interner = Interner::default();
        let err: Error = x!(&mut interner; "1 +").unwrap_err().into();
        assert!(matches!(err, Error::Template(_)));
    }
}
