//! The public parsing entry point: lexing/parsing plus the two passes a
//! caller external to this crate needs but a bare grammar doesn't give
//! for free — wrapping a parsed fragment to the shape its caller asked
//! for, and reattaching comment trivia the lexer drops.

use boa_interner::Interner;

use redast_ast::node::{Function, FunctionBody};
use redast_ast::{Comment, CommentKind, Node, NodeKind, Span};

use crate::error::ParseError;
use crate::parser::Parser;

/// What shape of fragment [`parse`] should produce from `src`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseMode {
    /// Parse `src` as a full statement list (a program or block body).
    Statements,
    /// Parse `src` as a single expression.
    Expression,
    /// Parse `src` as one object-literal property (`key: value` or a
    /// shorthand name), for a hole landing in property position.
    Property,
}

/// The result of [`parse`], one variant per [`ParseMode`].
#[derive(Clone, Debug, PartialEq)]
pub enum Parsed {
    /// See [`ParseMode::Statements`].
    Statements(Vec<Node>),
    /// See [`ParseMode::Expression`].
    Expression(Node),
    /// See [`ParseMode::Property`].
    Property(Node),
}

/// Parses `src` in the given mode, attaching comment trivia and
/// surfacing any [`ParseError`].
pub fn parse(src: &str, mode: ParseMode, interner: &mut Interner) -> Result<Parsed, ParseError> {
    let comments = scan_comments(src);
    match mode {
        ParseMode::Statements => {
            let mut body = Parser::new(src, interner)?.parse_program()?;
            attach_comments(&mut body, &comments);
            Ok(Parsed::Statements(body))
        }
        ParseMode::Expression => {
            let mut node = Parser::parse_expression_source(src, interner)?;
            attach_comments(std::slice::from_mut(&mut node), &comments);
            Ok(Parsed::Expression(node))
        }
        ParseMode::Property => {
            let wrapped = format!("({{{src}}})");
            let object = Parser::parse_expression_source(&wrapped, interner)?;
            let NodeKind::ObjectExpression(mut object) = object.kind else {
                return Err(ParseError::unexpected(
                    "expected a single object property",
                    redast_ast::Position::new(1, 0),
                ));
            };
            if object.properties.len() != 1 {
                return Err(ParseError::unexpected(
                    format!(
                        "expected exactly one property, found {}",
                        object.properties.len()
                    ),
                    redast_ast::Position::new(1, 0),
                ));
            }
            Ok(Parsed::Property(object.properties.remove(0)))
        }
    }
}

// ---- Comment scanning and attachment -----------------------------------

/// A lightweight comment scan independent of the lexer: it only needs to
/// skip past string/template content without decoding it, so that a `//`
/// or `/*` inside a string literal is not mistaken for a comment.
fn scan_comments(src: &str) -> Vec<(Comment, Span)> {
    let mut comments = Vec::new();
    let mut chars = src.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' | '\'' | '`' => {
                for (_, q) in chars.by_ref() {
                    if q == '\\' {
                        chars.next();
                    } else if q == c {
                        break;
                    }
                }
            }
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                chars.next();
                let text_start = i + 2;
                let mut end = src.len();
                for (j, nc) in chars.by_ref() {
                    if nc == '\n' {
                        end = j;
                        break;
                    }
                }
                comments.push((
                    Comment::new(src[text_start..end].to_string(), CommentKind::Line),
                    Span::new(i as u32, end as u32),
                ));
            }
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                let text_start = i + 2;
                let mut end = src.len();
                while let Some((j, nc)) = chars.next() {
                    if nc == '*' && matches!(chars.peek(), Some((_, '/'))) {
                        chars.next();
                        end = j;
                        break;
                    }
                }
                comments.push((
                    Comment::new(src[text_start..end].to_string(), CommentKind::Block),
                    Span::new(i as u32, (end + 2).min(src.len()) as u32),
                ));
            }
            _ => {}
        }
    }
    comments
}

/// Attaches each comment in `comments` to the nearest statement in
/// `nodes` that follows it (as a leading comment) or precedes it on the
/// same source line (as a trailing comment), then recurses into each
/// node's own statement-list children. Comments inside expressions
/// (inside a call's arguments, say) are not attached — attachment only
/// happens at the statement level.
fn attach_comments(nodes: &mut [Node], comments: &[(Comment, Span)]) {
    let mut next_comment = 0;
    for i in 0..nodes.len() {
        let Some(range) = nodes[i].range else { continue };
        while next_comment < comments.len() && comments[next_comment].1.end <= range.start {
            nodes[i].leading_comments.push(comments[next_comment].0.clone());
            next_comment += 1;
        }
    }
    // Trailing: a comment starting after a node's end but before the next
    // node's first leading comment (or before the next node, if it has
    // none) attaches to the node it follows, as long as no other
    // statement's range falls between them.
    let mut c = 0;
    for i in 0..nodes.len() {
        let Some(range) = nodes[i].range else { continue };
        let next_start = nodes
            .get(i + 1)
            .and_then(|n| n.range)
            .map_or(u32::MAX, |r| r.start);
        while c < comments.len() && comments[c].1.start < range.end {
            c += 1;
        }
        while c < comments.len() && comments[c].1.end <= next_start {
            if comments[c].1.start >= range.end {
                nodes[i].trailing_comments.push(comments[c].0.clone());
                c += 1;
            } else {
                break;
            }
        }
    }

    for node in nodes.iter_mut() {
        for body in statement_list_children_mut(node) {
            attach_comments(body, comments);
        }
    }
}

/// Returns every statement-list-shaped field reachable directly from
/// `node`, for [`attach_comments`] to recurse into.
fn statement_list_children_mut(node: &mut Node) -> Vec<&mut Vec<Node>> {
    match &mut node.kind {
        NodeKind::BlockStatement(body) => vec![body],
        NodeKind::FunctionDeclaration(f) | NodeKind::FunctionExpression(f) | NodeKind::ArrowFunctionExpression(f) => {
            function_body_children(f)
        }
        NodeKind::TryStatement(t) => {
            let mut out = vec![&mut t.block];
            if let Some(h) = &mut t.handler {
                out.push(&mut h.body);
            }
            if let Some(f) = &mut t.finalizer {
                out.push(f);
            }
            out
        }
        NodeKind::SwitchStatement(s) => s.cases.iter_mut().filter_map(|c| match &mut c.kind {
            NodeKind::SwitchCase(case) => Some(&mut case.consequent),
            _ => None,
        }).collect(),
        NodeKind::ClassDeclaration(c) | NodeKind::ClassExpression(c) => c
            .body
            .iter_mut()
            .flat_map(|member| match &mut member.kind {
                NodeKind::MethodDefinition(m) => function_body_children(&mut m.value),
                _ => Vec::new(),
            })
            .collect(),
        NodeKind::IfStatement(s) => {
            let mut out = Vec::new();
            if let NodeKind::BlockStatement(body) = &mut s.consequent.kind {
                out.push(body);
            }
            if let Some(alt) = &mut s.alternate {
                if let NodeKind::BlockStatement(body) = &mut alt.kind {
                    out.push(body);
                }
            }
            out
        }
        NodeKind::ForStatement(s) => block_body(&mut s.body),
        NodeKind::ForInStatement(s) | NodeKind::ForOfStatement(s) => block_body(&mut s.body),
        NodeKind::WhileStatement(s) | NodeKind::DoWhileStatement(s) => block_body(&mut s.body),
        NodeKind::LabeledStatement(s) => block_body(&mut s.body),
        _ => Vec::new(),
    }
}

fn function_body_children(f: &mut Function) -> Vec<&mut Vec<Node>> {
    match &mut f.body {
        FunctionBody::Block(body) => vec![body],
        FunctionBody::Expression(_) => Vec::new(),
    }
}

fn block_body(node: &mut Node) -> Vec<&mut Vec<Node>> {
    match &mut node.kind {
        NodeKind::BlockStatement(body) => vec![body],
        _ => Vec::new(),
    }
}
