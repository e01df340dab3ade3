//! Printer errors.

use thiserror::Error;

/// Raised when `print` cannot render the tree it was given.
///
/// Both variants are raised synchronously at the node that
/// triggers them; there is no partial/recoverable output.
#[derive(Debug, Clone, Error)]
pub enum PrintError {
    /// A `@name`/`#name` sigil identifier survived to print time. Sigils
    /// are an extension point for tooling outside this core; by the time
    /// `print` runs, an external pass was supposed to have rewritten
    /// every one of them away.
    #[error("Unhandled sigil {name}")]
    UnhandledSigil {
        /// The sigil identifier's full name, including its leading `@`/`#`.
        name: String,
    },

    /// A node variant this printer does not know how to render, e.g. a
    /// future ESTree addition this core's [`redast_ast::NodeKind`]
    /// doesn't model.
    #[error("unhandled node type {kind}")]
    UnhandledType {
        /// A human-readable name for the unhandled variant.
        kind: &'static str,
    },
}
