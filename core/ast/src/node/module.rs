//! Module nodes — a plain named/default import-export subset: no dynamic
//! `import()`, no namespace re-exports.

use super::identifier::Identifier;
use super::Node;

/// One binding introduced by an [`ImportDeclaration`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImportSpecifier {
    /// `import { a as b } from ...`.
    Named {
        /// The exported name on the module being imported from.
        imported: Identifier,
        /// The local binding name.
        local: Identifier,
    },
    /// `import a from ...`.
    Default {
        /// The local binding name.
        local: Identifier,
    },
    /// `import * as a from ...`.
    Namespace {
        /// The local binding name.
        local: Identifier,
    },
}

/// `import a, { b as c } from "mod";`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportDeclaration {
    /// The imported bindings, in source order.
    pub specifiers: Vec<ImportSpecifier>,
    /// The module specifier text (without quotes).
    pub source: String,
}

/// One binding re-exported by an [`ExportNamedDeclaration`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExportSpecifier {
    /// The local binding name.
    pub local: Identifier,
    /// The name it is exported as.
    pub exported: Identifier,
}

/// `export { a as b };` or `export const a = 1;`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExportNamedDeclaration {
    /// An inline declaration, for `export const a = 1;`. Mutually
    /// exclusive with a non-empty `specifiers`.
    pub declaration: Option<Box<Node>>,
    /// The re-exported bindings, for `export { a, b };`.
    pub specifiers: Vec<ExportSpecifier>,
}
