//! The pretty printer: a recursive-descent visitor dispatching on
//! `node.kind`.

use boa_interner::Interner;
use redast_ast::node::{
    Class, Function, FunctionBody, Identifier, LiteralValue, MethodKind, Property, PropertyKey,
    PropertyKind, VarKind,
};
use redast_ast::{Comment, CommentKind, Fragment, Node, NodeKind, SourceLocation};

use crate::error::PrintError;
use crate::options::PrinterOptions;
use crate::precedence::{self, Assoc, PRIMARY};
use crate::source_map::{Emitter, SourceMap};

/// The `{ code, map }` pair `print` returns.
#[derive(Clone, Debug, PartialEq)]
pub struct PrintOutput {
    /// The generated JavaScript-family source text.
    pub code: String,
    /// The Source Map Revision 3 document describing it.
    pub map: SourceMap,
}

/// Renders `fragment` to source text and a source map.
///
/// # Errors
///
/// Returns [`PrintError::UnhandledSigil`] if a `@`/`#` sigil identifier
/// survives to print time, or [`PrintError::UnhandledType`] if the tree
/// contains a node variant this printer does not know how to render.
pub fn print(
    fragment: &Fragment,
    interner: &Interner,
    options: &PrinterOptions,
) -> Result<PrintOutput, PrintError> {
    let mut printer = Printer::new(interner, options);
    match fragment {
        Fragment::Block(body) => printer.print_statement_list(body)?,
        Fragment::Node(node) => printer.print_root_node(node)?,
    }
    Ok(printer.finish())
}

struct Printer<'a> {
    interner: &'a Interner,
    options: &'a PrinterOptions,
    out: String,
    indent: usize,
    emitter: Emitter,
}

impl<'a> Printer<'a> {
    fn new(interner: &'a Interner, options: &'a PrinterOptions) -> Self {
        Self {
            interner,
            options,
            out: String::new(),
            indent: 0,
            emitter: Emitter::new(options.has_source()),
        }
    }

    fn finish(self) -> PrintOutput {
        let map = self.emitter.into_source_map(
            self.options.source_map_source.clone(),
            self.options.source_map_content.clone(),
            self.options.source_map_encode_mappings,
            self.interner,
        );
        PrintOutput {
            code: self.out,
            map,
        }
    }

    fn write(&mut self, text: &str) {
        self.emitter.advance(text);
        self.out.push_str(text);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.write("\t");
        }
    }

    fn mark(&mut self, node: &Node) {
        if let Some(loc) = node.loc {
            self.emitter.push(loc, None);
        }
    }

    fn mark_binding(&mut self, loc: Option<SourceLocation>, sym: boa_interner::Sym, renamed: bool) {
        if let Some(loc) = loc {
            self.emitter.push(loc, renamed.then_some(sym));
        }
    }

    /// A root `x`/`p` result isn't wrapped in a statement; it prints as a
    /// bare expression (or the single `Property` a `p!` template built).
    fn print_root_node(&mut self, node: &Node) -> Result<(), PrintError> {
        if matches!(node.kind, NodeKind::Property(_)) {
            self.print_property(node)
        } else {
            self.print_expr(node, 0)
        }
    }

    // -- Comments --------------------------------------------------------

    fn render_comment(comment: &Comment) -> String {
        match comment.kind {
            CommentKind::Line => format!("//{}", comment.text),
            CommentKind::Block => format!("/*{}*/", comment.text),
        }
    }

    fn write_leading_comments(&mut self, node: &Node) {
        for comment in &node.leading_comments {
            self.write_indent();
            self.write(&Self::render_comment(comment));
            self.write("\n");
        }
    }

    fn write_trailing_comments(&mut self, node: &Node) {
        for comment in &node.trailing_comments {
            self.write(" ");
            self.write(&Self::render_comment(comment));
        }
    }

    // -- Statements --------------------------------------------------------

    fn print_statement_list(&mut self, body: &[Node]) -> Result<(), PrintError> {
        for stmt in body {
            self.write_leading_comments(stmt);
            self.write_indent();
            self.print_statement(stmt)?;
            if needs_semicolon(stmt) {
                self.write(";");
            }
            self.write_trailing_comments(stmt);
            self.write("\n");
        }
        Ok(())
    }

    /// Prints `node`'s body as a block `{ ... }` when it already is one,
    /// otherwise indents a single statement on the following line.
    fn print_body(&mut self, node: &Node) -> Result<(), PrintError> {
        if let NodeKind::BlockStatement(body) = &node.kind {
            self.write(" {\n");
            self.indent += 1;
            self.print_statement_list(body)?;
            self.indent -= 1;
            self.write_indent();
            self.write("}");
        } else {
            self.write("\n");
            self.indent += 1;
            self.write_indent();
            self.print_statement(node)?;
            if needs_semicolon(node) {
                self.write(";");
            }
            self.indent -= 1;
        }
        Ok(())
    }

    #[allow(clippy::too_many_lines)]
    fn print_statement(&mut self, node: &Node) -> Result<(), PrintError> {
        self.mark(node);
        match &node.kind {
            NodeKind::ExpressionStatement(expr) => {
                let min_prec = if starts_with_ambiguous_token(expr) {
                    PRIMARY
                } else {
                    0
                };
                if min_prec == PRIMARY {
                    self.write("(");
                    self.print_expr(expr, 0)?;
                    self.write(")");
                } else {
                    self.print_expr(expr, 0)?;
                }
            }
            NodeKind::BlockStatement(body) => {
                self.write("{\n");
                self.indent += 1;
                self.print_statement_list(body)?;
                self.indent -= 1;
                self.write_indent();
                self.write("}");
            }
            NodeKind::EmptyStatement => self.write(";"),
            NodeKind::VariableDeclaration(decl) => {
                self.write(match decl.kind {
                    VarKind::Var => "var ",
                    VarKind::Let => "let ",
                    VarKind::Const => "const ",
                });
                for (i, declarator) in decl.declarations.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.print_variable_declarator(declarator)?;
                }
            }
            NodeKind::FunctionDeclaration(f) => self.print_function(f, "function")?,
            NodeKind::ClassDeclaration(c) => self.print_class(c, "class")?,
            NodeKind::ReturnStatement(arg) => {
                self.write("return");
                if let Some(arg) = arg {
                    self.write(" ");
                    self.print_expr(arg, 0)?;
                }
            }
            NodeKind::IfStatement(s) => {
                self.write("if (");
                self.print_expr(&s.test, 0)?;
                self.write(")");
                self.print_body(&s.consequent)?;
                if let Some(alternate) = &s.alternate {
                    if matches!(s.consequent.kind, NodeKind::BlockStatement(_)) {
                        self.write(" else");
                    } else {
                        self.write("\n");
                        self.write_indent();
                        self.write("else");
                    }
                    if matches!(alternate.kind, NodeKind::IfStatement(_)) {
                        self.write(" ");
                        self.print_statement(alternate)?;
                    } else {
                        self.print_body(alternate)?;
                    }
                }
            }
            NodeKind::ForStatement(s) => {
                self.write("for (");
                if let Some(init) = &s.init {
                    self.print_for_head(init)?;
                }
                self.write("; ");
                if let Some(test) = &s.test {
                    self.print_expr(test, 0)?;
                }
                self.write("; ");
                if let Some(update) = &s.update {
                    self.print_expr(update, 0)?;
                }
                self.write(")");
                self.print_body(&s.body)?;
            }
            NodeKind::ForInStatement(s) => self.print_for_in_of(s, "in")?,
            NodeKind::ForOfStatement(s) => self.print_for_in_of(s, "of")?,
            NodeKind::WhileStatement(s) => {
                self.write("while (");
                self.print_expr(&s.test, 0)?;
                self.write(")");
                self.print_body(&s.body)?;
            }
            NodeKind::DoWhileStatement(s) => {
                self.write("do");
                self.print_body(&s.body)?;
                self.write(" while (");
                self.print_expr(&s.test, 0)?;
                self.write(")");
            }
            NodeKind::BreakStatement(label) => {
                self.write("break");
                self.write_label(*label);
            }
            NodeKind::ContinueStatement(label) => {
                self.write("continue");
                self.write_label(*label);
            }
            NodeKind::ThrowStatement(arg) => {
                self.write("throw ");
                self.print_expr(arg, 0)?;
            }
            NodeKind::TryStatement(s) => {
                self.write("try {\n");
                self.indent += 1;
                self.print_statement_list(&s.block)?;
                self.indent -= 1;
                self.write_indent();
                self.write("}");
                if let Some(handler) = &s.handler {
                    self.write(" catch ");
                    if let Some(param) = &handler.param {
                        self.write("(");
                        self.print_expr(param, 0)?;
                        self.write(") ");
                    }
                    self.write("{\n");
                    self.indent += 1;
                    self.print_statement_list(&handler.body)?;
                    self.indent -= 1;
                    self.write_indent();
                    self.write("}");
                }
                if let Some(finalizer) = &s.finalizer {
                    self.write(" finally {\n");
                    self.indent += 1;
                    self.print_statement_list(finalizer)?;
                    self.indent -= 1;
                    self.write_indent();
                    self.write("}");
                }
            }
            NodeKind::SwitchStatement(s) => {
                self.write("switch (");
                self.print_expr(&s.discriminant, 0)?;
                self.write(") {\n");
                self.indent += 1;
                for case in &s.cases {
                    self.write_leading_comments(case);
                    self.write_indent();
                    let NodeKind::SwitchCase(case_data) = &case.kind else {
                        return Err(PrintError::UnhandledType {
                            kind: "expected SwitchCase in SwitchStatement.cases",
                        });
                    };
                    if let Some(test) = &case_data.test {
                        self.write("case ");
                        self.print_expr(test, 0)?;
                        self.write(":\n");
                    } else {
                        self.write("default:\n");
                    }
                    self.indent += 1;
                    self.print_statement_list(&case_data.consequent)?;
                    self.indent -= 1;
                }
                self.indent -= 1;
                self.write_indent();
                self.write("}");
            }
            NodeKind::LabeledStatement(s) => {
                self.write(self.interner.resolve_expect(s.label).to_string().as_str());
                self.write(": ");
                self.print_statement(&s.body)?;
            }
            NodeKind::ImportDeclaration(decl) => {
                self.write("import ");
                self.print_import_specifiers(&decl.specifiers);
                self.write(" from '");
                self.write(&decl.source);
                self.write("'");
            }
            NodeKind::ExportNamedDeclaration(decl) => {
                self.write("export ");
                if let Some(declaration) = &decl.declaration {
                    self.print_statement(declaration)?;
                } else {
                    self.write("{ ");
                    for (i, spec) in decl.specifiers.iter().enumerate() {
                        if i > 0 {
                            self.write(", ");
                        }
                        self.write(self.interner.resolve_expect(spec.local.sym));
                        if spec.exported.sym != spec.local.sym {
                            self.write(" as ");
                            self.write(self.interner.resolve_expect(spec.exported.sym));
                        }
                    }
                    self.write(" }");
                }
            }
            NodeKind::ExportDefaultDeclaration(inner) => {
                self.write("export default ");
                if is_statement_kind(&inner.kind) {
                    self.print_statement(inner)?;
                } else {
                    self.print_expr(inner, 0)?;
                }
            }
            other => {
                return Err(PrintError::UnhandledType {
                    kind: node_kind_name(other),
                })
            }
        }
        self.write_trailing_comments(node);
        Ok(())
    }

    fn write_label(&mut self, label: Option<boa_interner::Sym>) {
        if let Some(label) = label {
            self.write(" ");
            let name = self.interner.resolve_expect(label).to_string();
            self.write(&name);
        }
    }

    fn print_for_head(&mut self, init: &Node) -> Result<(), PrintError> {
        if let NodeKind::VariableDeclaration(_) = &init.kind {
            self.print_statement(init)
        } else {
            self.print_expr(init, 0)
        }
    }

    fn print_for_in_of(
        &mut self,
        s: &redast_ast::node::ForInOfStatement,
        keyword: &str,
    ) -> Result<(), PrintError> {
        self.write("for ");
        if s.is_await {
            self.write("await ");
        }
        self.write("(");
        self.print_for_head(&s.left)?;
        self.write(" ");
        self.write(keyword);
        self.write(" ");
        self.print_expr(&s.right, 0)?;
        self.write(")");
        self.print_body(&s.body)
    }

    fn print_variable_declarator(
        &mut self,
        declarator: &Node,
    ) -> Result<(), PrintError> {
        let NodeKind::VariableDeclarator(d) = &declarator.kind else {
            return Err(PrintError::UnhandledType {
                kind: "expected VariableDeclarator",
            });
        };
        self.print_expr(&d.id, 0)?;
        if let Some(init) = &d.init {
            self.write(" = ");
            self.print_expr(init, precedence::ASSIGNMENT + 1)?;
        }
        Ok(())
    }

    fn print_import_specifiers(&mut self, specifiers: &[redast_ast::node::ImportSpecifier]) {
        use redast_ast::node::ImportSpecifier as Spec;

        let mut parts: Vec<String> = Vec::new();
        let mut named: Vec<String> = Vec::new();
        for spec in specifiers {
            match spec {
                Spec::Default { local } => {
                    parts.push(self.interner.resolve_expect(local.sym).to_string());
                }
                Spec::Namespace { local } => {
                    parts.push(format!("* as {}", self.interner.resolve_expect(local.sym)));
                }
                Spec::Named { imported, local } => {
                    let imported_name = self.interner.resolve_expect(imported.sym).to_string();
                    let local_name = self.interner.resolve_expect(local.sym).to_string();
                    if imported_name == local_name {
                        named.push(imported_name);
                    } else {
                        named.push(format!("{imported_name} as {local_name}"));
                    }
                }
            }
        }
        if !named.is_empty() {
            parts.push(format!("{{ {} }}", named.join(", ")));
        }
        self.write(&parts.join(", "));
    }

    // -- Expressions -------------------------------------------------------

    #[allow(clippy::too_many_lines)]
    fn print_expr(&mut self, node: &Node, min_prec: u8) -> Result<(), PrintError> {
        let parens = precedence::needs_parens(node, min_prec);
        if parens {
            self.write("(");
        }
        // Identifiers mark themselves (with a name, when renamed) inside
        // print_identifier_binding; marking here too would double-push.
        if !matches!(node.kind, NodeKind::Identifier(_)) {
            self.mark(node);
        }
        match &node.kind {
            NodeKind::Identifier(id) => self.print_identifier_binding(node.loc, id)?,
            NodeKind::Literal(lit) => self.write(&print_literal(lit)),
            NodeKind::TemplateLiteral(t) => self.print_template_literal(t)?,
            NodeKind::TaggedTemplateExpression(t) => {
                self.print_expr(&t.tag, precedence::CALL)?;
                let NodeKind::TemplateLiteral(quasi) = &t.quasi.kind else {
                    return Err(PrintError::UnhandledType {
                        kind: "expected TemplateLiteral in TaggedTemplateExpression.quasi",
                    });
                };
                self.print_template_literal(quasi)?;
            }
            NodeKind::ThisExpression => self.write("this"),
            NodeKind::Super => self.write("super"),
            NodeKind::ArrayExpression(a) => self.print_elements(&a.elements)?,
            NodeKind::ArrayPattern(a) => self.print_elements(&a.elements)?,
            NodeKind::ObjectExpression(o) => self.print_properties(&o.properties)?,
            NodeKind::ObjectPattern(o) => self.print_properties(&o.properties)?,
            NodeKind::Property(_) => self.print_property(node)?,
            NodeKind::FunctionExpression(f) => self.print_function(f, "function")?,
            NodeKind::ArrowFunctionExpression(f) => self.print_arrow(f)?,
            NodeKind::ClassExpression(c) => self.print_class(c, "class")?,
            NodeKind::UnaryExpression(u) => {
                let op = u.operator.to_string();
                self.write(&op);
                if op.chars().next().is_some_and(char::is_alphabetic) {
                    self.write(" ");
                }
                self.print_expr(&u.argument, precedence::UNARY)?;
            }
            NodeKind::UpdateExpression(u) => {
                if u.prefix {
                    self.write(&u.operator.to_string());
                    self.print_expr(&u.argument, precedence::UPDATE)?;
                } else {
                    self.print_expr(&u.argument, precedence::UPDATE)?;
                    self.write(&u.operator.to_string());
                }
            }
            NodeKind::BinaryExpression(b) => {
                let prec = precedence::binary_op_precedence(b.operator);
                let assoc = precedence::binary_op_assoc(b.operator);
                self.print_binary(&b.left, &b.right, &b.operator.to_string(), prec, assoc)?;
            }
            NodeKind::LogicalExpression(l) => {
                let prec = precedence::logical_op_precedence(l.operator);
                self.print_binary(&l.left, &l.right, &l.operator.to_string(), prec, Assoc::Left)?;
            }
            NodeKind::AssignmentExpression(a) => {
                self.print_expr(&a.left, precedence::ASSIGNMENT + 1)?;
                self.write(" ");
                self.write(&a.operator.to_string());
                self.write(" ");
                self.print_expr(&a.right, precedence::ASSIGNMENT)?;
            }
            NodeKind::ConditionalExpression(c) => {
                self.print_expr(&c.test, precedence::CONDITIONAL + 1)?;
                self.write(" ? ");
                self.print_expr(&c.consequent, precedence::CONDITIONAL + 1)?;
                self.write(" : ");
                self.print_expr(&c.alternate, precedence::CONDITIONAL)?;
            }
            NodeKind::CallExpression(c) => {
                self.print_expr(&c.callee, precedence::CALL)?;
                if c.optional {
                    self.write("?.");
                }
                self.write("(");
                self.print_arguments(&c.arguments)?;
                self.write(")");
            }
            NodeKind::NewExpression(c) => {
                self.write("new ");
                self.print_expr(&c.callee, precedence::CALL)?;
                self.write("(");
                self.print_arguments(&c.arguments)?;
                self.write(")");
            }
            NodeKind::MemberExpression(m) => {
                self.print_expr(&m.object, precedence::CALL)?;
                if m.computed {
                    self.write(if m.optional { "?.[" } else { "[" });
                    self.print_expr(&m.property, 0)?;
                    self.write("]");
                } else {
                    self.write(if m.optional { "?." } else { "." });
                    let NodeKind::Identifier(id) = &m.property.kind else {
                        return Err(PrintError::UnhandledType {
                            kind: "expected Identifier in non-computed MemberExpression.property",
                        });
                    };
                    self.print_identifier_raw(m.property.loc, id)?;
                }
            }
            NodeKind::SequenceExpression(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.print_expr(item, precedence::SEQUENCE + 1)?;
                }
            }
            NodeKind::SpreadElement(arg) => {
                self.write("...");
                self.print_expr(arg, precedence::ASSIGNMENT)?;
            }
            NodeKind::RestElement(arg) => {
                self.write("...");
                self.print_expr(arg, precedence::ASSIGNMENT)?;
            }
            NodeKind::AwaitExpression(arg) => {
                self.write("await ");
                self.print_expr(arg, precedence::UNARY)?;
            }
            NodeKind::YieldExpression(y) => {
                self.write("yield");
                if y.delegate {
                    self.write("*");
                }
                if let Some(arg) = &y.argument {
                    self.write(" ");
                    self.print_expr(arg, precedence::ASSIGNMENT)?;
                }
            }
            NodeKind::AssignmentPattern(p) => {
                self.print_expr(&p.left, 0)?;
                self.write(" = ");
                self.print_expr(&p.right, precedence::ASSIGNMENT)?;
            }
            other => {
                return Err(PrintError::UnhandledType {
                    kind: node_kind_name(other),
                })
            }
        }
        self.write_trailing_comments(node);
        if parens {
            self.write(")");
        }
        Ok(())
    }

    fn print_binary(
        &mut self,
        left: &Node,
        right: &Node,
        op: &str,
        prec: u8,
        assoc: Assoc,
    ) -> Result<(), PrintError> {
        let (left_min, right_min) = match assoc {
            Assoc::Left => (prec, prec + 1),
            Assoc::Right => (prec + 1, prec),
        };
        self.print_expr(left, left_min)?;
        self.write(" ");
        self.write(op);
        self.write(" ");
        self.print_expr(right, right_min)
    }

    fn print_arguments(&mut self, arguments: &[Node]) -> Result<(), PrintError> {
        for (i, arg) in arguments.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_expr(arg, precedence::ASSIGNMENT)?;
        }
        Ok(())
    }

    fn print_elements(&mut self, elements: &[Option<Node>]) -> Result<(), PrintError> {
        self.write("[");
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if let Some(node) = element {
                self.print_expr(node, precedence::ASSIGNMENT)?;
            }
        }
        if matches!(elements.last(), Some(None)) {
            self.write(",");
        }
        self.write("]");
        Ok(())
    }

    fn print_properties(&mut self, properties: &[Node]) -> Result<(), PrintError> {
        if properties.is_empty() {
            self.write("{}");
            return Ok(());
        }
        self.write("{ ");
        for (i, prop) in properties.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            match &prop.kind {
                NodeKind::Property(_) => self.print_property(prop)?,
                NodeKind::SpreadElement(_) | NodeKind::RestElement(_) => {
                    self.print_expr(prop, 0)?;
                }
                other => {
                    return Err(PrintError::UnhandledType {
                        kind: node_kind_name(other),
                    })
                }
            }
        }
        self.write(" }");
        Ok(())
    }

    fn print_property(&mut self, node: &Node) -> Result<(), PrintError> {
        self.mark(node);
        let NodeKind::Property(prop) = &node.kind else {
            return Err(PrintError::UnhandledType {
                kind: "expected Property",
            });
        };
        match prop.kind {
            PropertyKind::Get | PropertyKind::Set => {
                self.write(if prop.kind == PropertyKind::Get {
                    "get "
                } else {
                    "set "
                });
                self.print_property_key(&prop.key)?;
                let NodeKind::FunctionExpression(f) | NodeKind::ArrowFunctionExpression(f) =
                    &prop.value.kind
                else {
                    return Err(PrintError::UnhandledType {
                        kind: "expected a function value for a get/set property",
                    });
                };
                self.print_params_and_body(f)?;
            }
            PropertyKind::Init if prop.shorthand => {
                let NodeKind::Identifier(id) = &prop.value.kind else {
                    return Err(PrintError::UnhandledType {
                        kind: "expected Identifier for a shorthand property",
                    });
                };
                self.print_identifier_binding(prop.value.loc, id)?;
            }
            PropertyKind::Init => {
                self.print_property_key(&prop.key)?;
                self.write(": ");
                self.print_expr(&prop.value, precedence::ASSIGNMENT)?;
            }
        }
        self.write_trailing_comments(node);
        Ok(())
    }

    fn print_property_key(&mut self, key: &PropertyKey) -> Result<(), PrintError> {
        match key {
            PropertyKey::Identifier(id) => self.print_identifier_raw(None, id),
            PropertyKey::Literal(lit) => {
                self.write(&print_literal(lit));
                Ok(())
            }
            PropertyKey::Computed(node) => {
                self.write("[");
                self.print_expr(node, precedence::ASSIGNMENT)?;
                self.write("]");
                Ok(())
            }
        }
    }

    fn print_template_literal(
        &mut self,
        t: &redast_ast::node::TemplateLiteral,
    ) -> Result<(), PrintError> {
        self.write("`");
        for (i, quasi) in t.quasis.iter().enumerate() {
            self.write(&escape_quasi(&quasi.raw));
            if let Some(expr) = t.expressions.get(i) {
                self.write("${");
                self.print_expr(expr, 0)?;
                self.write("}");
            }
        }
        self.write("`");
        Ok(())
    }

    fn print_identifier_binding(
        &mut self,
        loc: Option<SourceLocation>,
        id: &Identifier,
    ) -> Result<(), PrintError> {
        let original = self.interner.resolve_expect(id.sym).to_string();
        if redast_ast::sigil::is_sigil_name(&original) {
            return Err(PrintError::UnhandledSigil { name: original });
        }
        let emitted = self.options.rename(&original);
        self.mark_binding(loc, id.sym, emitted != original);
        self.write(&emitted);
        Ok(())
    }

    /// Prints an identifier that is never a binding — a property key or a
    /// non-computed member property — so `getName` never applies to it.
    fn print_identifier_raw(
        &mut self,
        loc: Option<SourceLocation>,
        id: &Identifier,
    ) -> Result<(), PrintError> {
        let name = self.interner.resolve_expect(id.sym).to_string();
        if redast_ast::sigil::is_sigil_name(&name) {
            return Err(PrintError::UnhandledSigil { name });
        }
        if let Some(loc) = loc {
            self.emitter.push(loc, None);
        }
        self.write(&name);
        Ok(())
    }

    // -- Functions and classes ----------------------------------------------

    fn print_function(&mut self, f: &Function, keyword: &str) -> Result<(), PrintError> {
        if f.is_async {
            self.write("async ");
        }
        self.write(keyword);
        if f.is_generator {
            self.write("*");
        }
        if let Some(id) = &f.id {
            self.write(" ");
            self.print_identifier_raw(None, id)?;
        } else {
            self.write(" ");
        }
        self.print_params_and_body(f)
    }

    fn print_arrow(&mut self, f: &Function) -> Result<(), PrintError> {
        if f.is_async {
            self.write("async ");
        }
        self.write("(");
        self.print_param_list(&f.params)?;
        self.write(") => ");
        match &f.body {
            FunctionBody::Block(body) => {
                self.write("{\n");
                self.indent += 1;
                self.print_statement_list(body)?;
                self.indent -= 1;
                self.write_indent();
                self.write("}");
            }
            FunctionBody::Expression(expr) => {
                if starts_with_ambiguous_token(expr) {
                    self.write("(");
                    self.print_expr(expr, 0)?;
                    self.write(")");
                } else {
                    self.print_expr(expr, precedence::ASSIGNMENT)?;
                }
            }
        }
        Ok(())
    }

    fn print_param_list(&mut self, params: &[Node]) -> Result<(), PrintError> {
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_expr(param, 0)?;
        }
        Ok(())
    }

    fn print_params_and_body(&mut self, f: &Function) -> Result<(), PrintError> {
        self.write("(");
        self.print_param_list(&f.params)?;
        self.write(") ");
        match &f.body {
            FunctionBody::Block(body) => {
                self.write("{\n");
                self.indent += 1;
                self.print_statement_list(body)?;
                self.indent -= 1;
                self.write_indent();
                self.write("}");
            }
            FunctionBody::Expression(expr) => {
                // Only arrows may have a concise body; a parsed/built
                // Function in a non-arrow position is always block-bodied.
                self.print_expr(expr, 0)?;
            }
        }
        Ok(())
    }

    fn print_class(&mut self, c: &Class, keyword: &str) -> Result<(), PrintError> {
        self.write(keyword);
        if let Some(id) = &c.id {
            self.write(" ");
            self.print_identifier_raw(None, id)?;
        }
        if let Some(super_class) = &c.super_class {
            self.write(" extends ");
            self.print_expr(super_class, precedence::CALL)?;
        }
        self.write(" {\n");
        self.indent += 1;
        for member in &c.body {
            self.write_leading_comments(member);
            self.write_indent();
            self.print_class_member(member)?;
            self.write_trailing_comments(member);
            self.write("\n");
        }
        self.indent -= 1;
        self.write_indent();
        self.write("}");
        Ok(())
    }

    fn print_class_member(&mut self, node: &Node) -> Result<(), PrintError> {
        self.mark(node);
        match &node.kind {
            NodeKind::MethodDefinition(m) => {
                if m.is_static {
                    self.write("static ");
                }
                match m.kind {
                    MethodKind::Get => self.write("get "),
                    MethodKind::Set => self.write("set "),
                    MethodKind::Method | MethodKind::Constructor => {}
                }
                if m.value.is_async {
                    self.write("async ");
                }
                if m.value.is_generator {
                    self.write("*");
                }
                if m.computed {
                    self.write("[");
                    let PropertyKey::Computed(key) = &m.key else {
                        return Err(PrintError::UnhandledType {
                            kind: "expected a computed key on a computed MethodDefinition",
                        });
                    };
                    self.print_expr(key, precedence::ASSIGNMENT)?;
                    self.write("]");
                } else {
                    self.print_property_key(&m.key)?;
                }
                self.print_params_and_body(&m.value)
            }
            NodeKind::PropertyDefinition(p) => {
                if p.is_static {
                    self.write("static ");
                }
                if p.computed {
                    self.write("[");
                    let PropertyKey::Computed(key) = &p.key else {
                        return Err(PrintError::UnhandledType {
                            kind: "expected a computed key on a computed PropertyDefinition",
                        });
                    };
                    self.print_expr(key, precedence::ASSIGNMENT)?;
                    self.write("]");
                } else {
                    self.print_property_key(&p.key)?;
                }
                if let Some(value) = &p.value {
                    self.write(" = ");
                    self.print_expr(value, precedence::ASSIGNMENT)?;
                }
                self.write(";");
                Ok(())
            }
            other => Err(PrintError::UnhandledType {
                kind: node_kind_name(other),
            }),
        }
    }
}

fn print_literal(lit: &redast_ast::node::Literal) -> String {
    if let Some(raw) = &lit.raw {
        return raw.clone();
    }
    match &lit.value {
        LiteralValue::String(s) => escape_string(s),
        LiteralValue::Number(n) => format_number(*n),
        LiteralValue::Boolean(b) => b.to_string(),
        LiteralValue::Null => "null".to_string(),
        LiteralValue::RegExp { pattern, flags } => format!("/{pattern}/{flags}"),
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

fn escape_quasi(raw: &str) -> String {
    raw.replace('`', "\\`").replace("${", "\\${")
}

/// Statements and declarations never need `getName`/precedence handling;
/// `ExportDefaultDeclaration`'s payload is printed as a statement when it
/// is one (`export default function f() {}`), as an expression otherwise.
fn is_statement_kind(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::FunctionDeclaration(_) | NodeKind::ClassDeclaration(_)
    )
}

fn block_bodied(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::IfStatement(_)
            | NodeKind::ForStatement(_)
            | NodeKind::ForInStatement(_)
            | NodeKind::ForOfStatement(_)
            | NodeKind::WhileStatement(_)
            | NodeKind::FunctionDeclaration(_)
            | NodeKind::ClassDeclaration(_)
            | NodeKind::BlockStatement(_)
            | NodeKind::TryStatement(_)
            | NodeKind::SwitchStatement(_)
    )
}

fn needs_semicolon(node: &Node) -> bool {
    match &node.kind {
        NodeKind::EmptyStatement => false,
        NodeKind::LabeledStatement(l) => needs_semicolon(&l.body),
        NodeKind::ExportDefaultDeclaration(inner) => needs_semicolon(inner),
        kind if block_bodied(kind) => false,
        _ => true,
    }
}

/// Whether printing `node` at the start of a statement (or an arrow's
/// concise body) would be misread by the grammar as starting a block,
/// function, or class, requiring a wrapping parenthesis instead.
fn starts_with_ambiguous_token(node: &Node) -> bool {
    match &node.kind {
        NodeKind::ObjectExpression(_) | NodeKind::FunctionExpression(_) | NodeKind::ClassExpression(_) => {
            true
        }
        NodeKind::AssignmentExpression(e) => starts_with_ambiguous_token(&e.left),
        NodeKind::BinaryExpression(e) => starts_with_ambiguous_token(&e.left),
        NodeKind::LogicalExpression(e) => starts_with_ambiguous_token(&e.left),
        NodeKind::ConditionalExpression(e) => starts_with_ambiguous_token(&e.test),
        NodeKind::SequenceExpression(items) => {
            items.first().is_some_and(starts_with_ambiguous_token)
        }
        NodeKind::MemberExpression(e) => starts_with_ambiguous_token(&e.object),
        NodeKind::CallExpression(e) => starts_with_ambiguous_token(&e.callee),
        NodeKind::TaggedTemplateExpression(e) => starts_with_ambiguous_token(&e.tag),
        NodeKind::UpdateExpression(e) if !e.prefix => starts_with_ambiguous_token(&e.argument),
        _ => false,
    }
}

const fn node_kind_name(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Program(_) => "Program",
        NodeKind::Identifier(_) => "Identifier",
        NodeKind::Literal(_) => "Literal",
        NodeKind::TemplateLiteral(_) => "TemplateLiteral",
        NodeKind::TaggedTemplateExpression(_) => "TaggedTemplateExpression",
        NodeKind::ThisExpression => "ThisExpression",
        NodeKind::Super => "Super",
        NodeKind::ArrayExpression(_) => "ArrayExpression",
        NodeKind::ObjectExpression(_) => "ObjectExpression",
        NodeKind::Property(_) => "Property",
        NodeKind::FunctionExpression(_) => "FunctionExpression",
        NodeKind::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
        NodeKind::ClassExpression(_) => "ClassExpression",
        NodeKind::UnaryExpression(_) => "UnaryExpression",
        NodeKind::UpdateExpression(_) => "UpdateExpression",
        NodeKind::BinaryExpression(_) => "BinaryExpression",
        NodeKind::LogicalExpression(_) => "LogicalExpression",
        NodeKind::AssignmentExpression(_) => "AssignmentExpression",
        NodeKind::ConditionalExpression(_) => "ConditionalExpression",
        NodeKind::CallExpression(_) => "CallExpression",
        NodeKind::NewExpression(_) => "NewExpression",
        NodeKind::MemberExpression(_) => "MemberExpression",
        NodeKind::SequenceExpression(_) => "SequenceExpression",
        NodeKind::SpreadElement(_) => "SpreadElement",
        NodeKind::AwaitExpression(_) => "AwaitExpression",
        NodeKind::YieldExpression(_) => "YieldExpression",
        NodeKind::ArrayPattern(_) => "ArrayPattern",
        NodeKind::ObjectPattern(_) => "ObjectPattern",
        NodeKind::AssignmentPattern(_) => "AssignmentPattern",
        NodeKind::RestElement(_) => "RestElement",
        NodeKind::ExpressionStatement(_) => "ExpressionStatement",
        NodeKind::BlockStatement(_) => "BlockStatement",
        NodeKind::EmptyStatement => "EmptyStatement",
        NodeKind::VariableDeclaration(_) => "VariableDeclaration",
        NodeKind::VariableDeclarator(_) => "VariableDeclarator",
        NodeKind::FunctionDeclaration(_) => "FunctionDeclaration",
        NodeKind::ClassDeclaration(_) => "ClassDeclaration",
        NodeKind::ReturnStatement(_) => "ReturnStatement",
        NodeKind::IfStatement(_) => "IfStatement",
        NodeKind::ForStatement(_) => "ForStatement",
        NodeKind::ForInStatement(_) => "ForInStatement",
        NodeKind::ForOfStatement(_) => "ForOfStatement",
        NodeKind::WhileStatement(_) => "WhileStatement",
        NodeKind::DoWhileStatement(_) => "DoWhileStatement",
        NodeKind::BreakStatement(_) => "BreakStatement",
        NodeKind::ContinueStatement(_) => "ContinueStatement",
        NodeKind::ThrowStatement(_) => "ThrowStatement",
        NodeKind::TryStatement(_) => "TryStatement",
        NodeKind::SwitchStatement(_) => "SwitchStatement",
        NodeKind::SwitchCase(_) => "SwitchCase",
        NodeKind::LabeledStatement(_) => "LabeledStatement",
        NodeKind::MethodDefinition(_) => "MethodDefinition",
        NodeKind::PropertyDefinition(_) => "PropertyDefinition",
        NodeKind::ImportDeclaration(_) => "ImportDeclaration",
        NodeKind::ExportNamedDeclaration(_) => "ExportNamedDeclaration",
        NodeKind::ExportDefaultDeclaration(_) => "ExportDefaultDeclaration",
    }
}
