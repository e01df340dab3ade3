//! Abstract syntax tree definitions for the redast template/printer
//! toolkit.
//!
//! This crate only defines data: the [`Node`]/[`NodeKind`] tagged union,
//! source location metadata, comment trivia, and the sigil-identifier
//! convention. Building nodes from templates lives in `redast_template`;
//! turning them back into source text lives in `redast_printer`.

pub mod comment;
pub mod fragment;
pub mod node;
pub mod position;
pub mod sigil;

pub use boa_interner::{Interner, Sym};
pub use comment::{Comment, CommentKind};
pub use fragment::Fragment;
pub use node::{Node, NodeKind};
pub use position::{Position, SourceLocation, Span};
