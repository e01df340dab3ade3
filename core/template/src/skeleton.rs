//! Clears parser-assigned `loc`/`range` metadata from a freshly parsed
//! template skeleton, before hole substitution runs.
//!
//! A skeleton is parsed from synthetic stitched source text (placeholder
//! tokens standing in for holes), so its positions describe offsets into
//! that throwaway string, not anything meaningful to a caller's real
//! source. Left in place, every `b!`/`x!`/`p!` call would make the
//! printer emit source-map segments for its own scaffolding instead of
//! for the caller's actual code. Substitution runs after this pass, so a
//! `Node` hole spliced in verbatim keeps whatever `loc` the caller gave
//! it untouched.

use redast_ast::node::{Function, FunctionBody, PropertyKey};
use redast_ast::{Node, NodeKind};

pub(crate) fn clear_list(nodes: &mut [Node]) {
    for node in nodes {
        clear_locations(node);
    }
}

fn clear_opt_list(nodes: &mut [Option<Node>]) {
    for node in nodes.iter_mut().flatten() {
        clear_locations(node);
    }
}

fn clear_property_key(key: &mut PropertyKey) {
    if let PropertyKey::Computed(node) = key {
        clear_locations(node);
    }
}

fn clear_function(function: &mut Function) {
    clear_list(&mut function.params);
    match &mut function.body {
        FunctionBody::Block(body) => clear_list(body),
        FunctionBody::Expression(expr) => clear_locations(expr),
    }
}

pub(crate) fn clear_locations(node: &mut Node) {
    node.loc = None;
    node.range = None;
    match &mut node.kind {
        NodeKind::Program(body)
        | NodeKind::BlockStatement(body)
        | NodeKind::SequenceExpression(body) => clear_list(body),

        NodeKind::Identifier(_)
        | NodeKind::Literal(_)
        | NodeKind::ThisExpression
        | NodeKind::Super
        | NodeKind::EmptyStatement
        | NodeKind::BreakStatement(_)
        | NodeKind::ContinueStatement(_)
        | NodeKind::ImportDeclaration(_) => {}

        NodeKind::TemplateLiteral(lit) => clear_list(&mut lit.expressions),

        NodeKind::TaggedTemplateExpression(t) => {
            clear_locations(&mut t.tag);
            clear_locations(&mut t.quasi);
        }

        NodeKind::ArrayExpression(a) => clear_opt_list(&mut a.elements),
        NodeKind::ArrayPattern(a) => clear_opt_list(&mut a.elements),

        NodeKind::ObjectExpression(o) => clear_list(&mut o.properties),
        NodeKind::ObjectPattern(o) => clear_list(&mut o.properties),

        NodeKind::Property(p) => {
            clear_property_key(&mut p.key);
            clear_locations(&mut p.value);
        }

        NodeKind::FunctionExpression(f)
        | NodeKind::ArrowFunctionExpression(f)
        | NodeKind::FunctionDeclaration(f) => clear_function(f),

        NodeKind::ClassExpression(c) | NodeKind::ClassDeclaration(c) => {
            if let Some(super_class) = &mut c.super_class {
                clear_locations(super_class);
            }
            clear_list(&mut c.body);
        }

        NodeKind::UnaryExpression(u) => clear_locations(&mut u.argument),
        NodeKind::UpdateExpression(u) => clear_locations(&mut u.argument),
        NodeKind::BinaryExpression(b) => {
            clear_locations(&mut b.left);
            clear_locations(&mut b.right);
        }
        NodeKind::LogicalExpression(l) => {
            clear_locations(&mut l.left);
            clear_locations(&mut l.right);
        }
        NodeKind::AssignmentExpression(a) => {
            clear_locations(&mut a.left);
            clear_locations(&mut a.right);
        }
        NodeKind::ConditionalExpression(c) => {
            clear_locations(&mut c.test);
            clear_locations(&mut c.consequent);
            clear_locations(&mut c.alternate);
        }
        NodeKind::CallExpression(c) | NodeKind::NewExpression(c) => {
            clear_locations(&mut c.callee);
            clear_list(&mut c.arguments);
        }
        NodeKind::MemberExpression(m) => {
            clear_locations(&mut m.object);
            clear_locations(&mut m.property);
        }
        NodeKind::SpreadElement(inner)
        | NodeKind::AwaitExpression(inner)
        | NodeKind::RestElement(inner)
        | NodeKind::ExpressionStatement(inner)
        | NodeKind::ThrowStatement(inner)
        | NodeKind::ExportDefaultDeclaration(inner) => clear_locations(inner),

        NodeKind::YieldExpression(y) => {
            if let Some(argument) = &mut y.argument {
                clear_locations(argument);
            }
        }

        NodeKind::AssignmentPattern(a) => {
            clear_locations(&mut a.left);
            clear_locations(&mut a.right);
        }

        NodeKind::VariableDeclaration(v) => clear_list(&mut v.declarations),
        NodeKind::VariableDeclarator(v) => {
            clear_locations(&mut v.id);
            if let Some(init) = &mut v.init {
                clear_locations(init);
            }
        }
        NodeKind::ReturnStatement(value) => {
            if let Some(value) = value {
                clear_locations(value);
            }
        }
        NodeKind::IfStatement(s) => {
            clear_locations(&mut s.test);
            clear_locations(&mut s.consequent);
            if let Some(alternate) = &mut s.alternate {
                clear_locations(alternate);
            }
        }
        NodeKind::ForStatement(s) => {
            if let Some(init) = &mut s.init {
                clear_locations(init);
            }
            if let Some(test) = &mut s.test {
                clear_locations(test);
            }
            if let Some(update) = &mut s.update {
                clear_locations(update);
            }
            clear_locations(&mut s.body);
        }
        NodeKind::ForInStatement(s) | NodeKind::ForOfStatement(s) => {
            clear_locations(&mut s.left);
            clear_locations(&mut s.right);
            clear_locations(&mut s.body);
        }
        NodeKind::WhileStatement(s) | NodeKind::DoWhileStatement(s) => {
            clear_locations(&mut s.test);
            clear_locations(&mut s.body);
        }
        NodeKind::TryStatement(s) => {
            clear_list(&mut s.block);
            if let Some(handler) = &mut s.handler {
                if let Some(param) = &mut handler.param {
                    clear_locations(param);
                }
                clear_list(&mut handler.body);
            }
            if let Some(finalizer) = &mut s.finalizer {
                clear_list(finalizer);
            }
        }
        NodeKind::SwitchStatement(s) => {
            clear_locations(&mut s.discriminant);
            clear_list(&mut s.cases);
        }
        NodeKind::SwitchCase(c) => {
            if let Some(test) = &mut c.test {
                clear_locations(test);
            }
            clear_list(&mut c.consequent);
        }
        NodeKind::LabeledStatement(l) => clear_locations(&mut l.body),

        NodeKind::MethodDefinition(m) => {
            clear_property_key(&mut m.key);
            clear_function(&mut m.value);
        }
        NodeKind::PropertyDefinition(p) => {
            clear_property_key(&mut p.key);
            if let Some(value) = &mut p.value {
                clear_locations(value);
            }
        }

        NodeKind::ExportNamedDeclaration(e) => {
            if let Some(declaration) = &mut e.declaration {
                clear_locations(declaration);
            }
        }
    }
}
