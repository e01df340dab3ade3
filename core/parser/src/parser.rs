//! The recursive-descent parser.
//!
//! One method per grammar production: a cursor-driven `Parser` with a
//! method per nonterminal, precedence climbing for expressions via a
//! chain of `parse_*` calls from loosest to tightest binding. Object and array
//! literals are always parsed as `ObjectExpression`/`ArrayExpression` and
//! converted to their pattern form on demand (see [`Self::expr_to_pattern`])
//! when a binding position turns out to need one — this avoids a second,
//! near-identical grammar path for destructuring.

use boa_interner::{Interner, Sym};

use redast_ast::node::*;
use redast_ast::{Node, NodeKind, Position, SourceLocation, Span};

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::lexer;
use crate::token::{Keyword, Punctuator, TemplatePart, TokenKind};

pub struct Parser<'a> {
    cursor: Cursor,
    interner: &'a mut Interner,
    src: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str, interner: &'a mut Interner) -> Result<Self, ParseError> {
        let tokens = lexer::tokenize(src)?;
        Ok(Self {
            cursor: Cursor::new(tokens),
            interner,
            src,
        })
    }

    /// Parses a complete program: a statement list up to end of input.
    pub fn parse_program(&mut self) -> Result<Vec<Node>, ParseError> {
        let body = self.parse_statement_list(&[])?;
        if !self.cursor.is_eof() {
            let found = crate::cursor::describe(&self.cursor.peek().kind);
            return Err(ParseError::unexpected(
                format!("unexpected token '{found}'"),
                self.cursor.position(),
            ));
        }
        Ok(body)
    }

    /// Parses a single expression (the comma-sequence production), for
    /// re-parsing a template literal hole's captured source text in
    /// isolation.
    pub fn parse_expression_source(
        src: &str,
        interner: &'a mut Interner,
    ) -> Result<Node, ParseError> {
        let mut parser = Self::new(src, interner)?;
        let node = parser.parse_expression()?;
        if !parser.cursor.is_eof() {
            let found = crate::cursor::describe(&parser.cursor.peek().kind);
            return Err(ParseError::unexpected(
                format!("unexpected token '{found}' after expression"),
                parser.cursor.position(),
            ));
        }
        Ok(node)
    }

    fn intern(&mut self, name: &str) -> Sym {
        self.interner.get_or_intern(name)
    }

    fn span_from(&self, start: Position, start_byte: u32) -> (SourceLocation, Span) {
        let last = self.cursor.tokens_back(1);
        (SourceLocation::new(start, last.loc.1), Span::new(start_byte, last.span.end))
    }

    fn finish(&self, kind: NodeKind, start: Position, start_byte: u32) -> Node {
        let (loc, range) = self.span_from(start, start_byte);
        Node::new(kind).with_loc(loc, range)
    }

    // ---- Statements ----------------------------------------------------

    /// Parses statements until a token in `terminators` or end of input is
    /// reached (the terminator itself is not consumed).
    fn parse_statement_list(&mut self, terminators: &[Punctuator]) -> Result<Vec<Node>, ParseError> {
        let mut statements = Vec::new();
        loop {
            if self.cursor.is_eof() {
                break;
            }
            if let TokenKind::Punctuator(p) = self.cursor.peek().kind {
                if terminators.contains(&p) {
                    break;
                }
            }
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_block(&mut self) -> Result<Vec<Node>, ParseError> {
        self.cursor.expect_punctuator(Punctuator::OpenBlock)?;
        let body = self.parse_statement_list(&[Punctuator::CloseBlock])?;
        self.cursor.expect_punctuator(Punctuator::CloseBlock)?;
        Ok(body)
    }

    fn consume_semicolon(&mut self) {
        // Minimal automatic semicolon insertion: an explicit `;` is always
        // consumed; otherwise a line break, `}`, or end of input is
        // accepted as the implicit terminator.
        if self.cursor.eat_punctuator(Punctuator::Semicolon) {
            return;
        }
        if self.cursor.is_eof() || self.cursor.at_punctuator(Punctuator::CloseBlock) {
            return;
        }
        if self.cursor.peek().newline_before {
            return;
        }
    }

    fn parse_statement(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;

        match &self.cursor.peek().kind {
            TokenKind::Punctuator(Punctuator::OpenBlock) => {
                let body = self.parse_block()?;
                Ok(self.finish(NodeKind::BlockStatement(body), start, start_byte))
            }
            TokenKind::Punctuator(Punctuator::Semicolon) => {
                self.cursor.advance();
                Ok(self.finish(NodeKind::EmptyStatement, start, start_byte))
            }
            TokenKind::Keyword(Keyword::Var | Keyword::Let | Keyword::Const) => {
                let decl = self.parse_variable_declaration()?;
                self.consume_semicolon();
                Ok(decl)
            }
            TokenKind::Keyword(Keyword::Function) => self.parse_function(true, start, start_byte),
            TokenKind::Keyword(Keyword::Async)
                if matches!(self.cursor.peek_at(1).kind, TokenKind::Keyword(Keyword::Function)) =>
            {
                self.cursor.advance();
                self.parse_function(true, start, start_byte)
            }
            TokenKind::Keyword(Keyword::Class) => self.parse_class(true, start, start_byte),
            TokenKind::Keyword(Keyword::Return) => {
                self.cursor.advance();
                let argument = if self.at_statement_end() {
                    None
                } else {
                    Some(Box::new(self.parse_expression()?))
                };
                self.consume_semicolon();
                Ok(self.finish(NodeKind::ReturnStatement(argument), start, start_byte))
            }
            TokenKind::Keyword(Keyword::If) => self.parse_if(start, start_byte),
            TokenKind::Keyword(Keyword::For) => self.parse_for(start, start_byte),
            TokenKind::Keyword(Keyword::While) => self.parse_while(start, start_byte),
            TokenKind::Keyword(Keyword::Do) => self.parse_do_while(start, start_byte),
            TokenKind::Keyword(Keyword::Break) => {
                self.cursor.advance();
                let label = self.parse_optional_label()?;
                self.consume_semicolon();
                Ok(self.finish(NodeKind::BreakStatement(label), start, start_byte))
            }
            TokenKind::Keyword(Keyword::Continue) => {
                self.cursor.advance();
                let label = self.parse_optional_label()?;
                self.consume_semicolon();
                Ok(self.finish(NodeKind::ContinueStatement(label), start, start_byte))
            }
            TokenKind::Keyword(Keyword::Throw) => {
                self.cursor.advance();
                let argument = Box::new(self.parse_expression()?);
                self.consume_semicolon();
                Ok(self.finish(NodeKind::ThrowStatement(argument), start, start_byte))
            }
            TokenKind::Keyword(Keyword::Try) => self.parse_try(start, start_byte),
            TokenKind::Keyword(Keyword::Switch) => self.parse_switch(start, start_byte),
            TokenKind::Keyword(Keyword::Import) => self.parse_import(start, start_byte),
            TokenKind::Keyword(Keyword::Export) => self.parse_export(start, start_byte),
            TokenKind::Identifier(_)
                if matches!(self.cursor.peek_at(1).kind, TokenKind::Punctuator(Punctuator::Colon)) =>
            {
                let name = self.cursor.expect_identifier()?;
                self.cursor.advance();
                let label = self.intern(&name);
                let body = Box::new(self.parse_statement()?);
                Ok(self.finish(NodeKind::LabeledStatement(LabeledStatement { label, body }), start, start_byte))
            }
            _ => {
                let expr = Box::new(self.parse_expression()?);
                self.consume_semicolon();
                Ok(self.finish(NodeKind::ExpressionStatement(expr), start, start_byte))
            }
        }
    }

    fn at_statement_end(&self) -> bool {
        self.cursor.is_eof()
            || self.cursor.at_punctuator(Punctuator::Semicolon)
            || self.cursor.at_punctuator(Punctuator::CloseBlock)
            || self.cursor.peek().newline_before
    }

    fn parse_optional_label(&mut self) -> Result<Option<Sym>, ParseError> {
        if let TokenKind::Identifier(_) = &self.cursor.peek().kind {
            if !self.cursor.peek().newline_before {
                let name = self.cursor.expect_identifier()?;
                return Ok(Some(self.intern(&name)));
            }
        }
        Ok(None)
    }

    fn parse_variable_declaration(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;
        let kind = match self.cursor.advance().kind {
            TokenKind::Keyword(Keyword::Var) => VarKind::Var,
            TokenKind::Keyword(Keyword::Let) => VarKind::Let,
            TokenKind::Keyword(Keyword::Const) => VarKind::Const,
            other => {
                return Err(ParseError::expected(
                    ["var", "let", "const"],
                    crate::cursor::describe(&other),
                    start,
                ))
            }
        };
        let mut declarations = Vec::new();
        loop {
            declarations.push(self.parse_variable_declarator()?);
            if !self.cursor.eat_punctuator(Punctuator::Comma) {
                break;
            }
        }
        Ok(self.finish(
            NodeKind::VariableDeclaration(VariableDeclaration { kind, declarations }),
            start,
            start_byte,
        ))
    }

    fn parse_variable_declarator(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;
        let target = self.parse_assignment_expression()?;
        let id = Box::new(self.expr_to_pattern(target)?);
        let init = if self.cursor.eat_punctuator(Punctuator::Assign) {
            Some(Box::new(self.parse_assignment_expression()?))
        } else {
            None
        };
        Ok(self.finish(
            NodeKind::VariableDeclarator(VariableDeclarator { id, init }),
            start,
            start_byte,
        ))
    }

    fn parse_if(&mut self, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        self.cursor.advance();
        self.cursor.expect_punctuator(Punctuator::OpenParen)?;
        let test = Box::new(self.parse_expression()?);
        self.cursor.expect_punctuator(Punctuator::CloseParen)?;
        let consequent = Box::new(self.parse_statement()?);
        let alternate = if self.cursor.eat_keyword(Keyword::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(self.finish(
            NodeKind::IfStatement(IfStatement { test, consequent, alternate }),
            start,
            start_byte,
        ))
    }

    fn parse_for(&mut self, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        self.cursor.advance();
        let is_await = self.cursor.eat_keyword(Keyword::Await);
        self.cursor.expect_punctuator(Punctuator::OpenParen)?;

        if self.cursor.at_punctuator(Punctuator::Semicolon) {
            self.cursor.advance();
            return self.parse_for_classic(None, start, start_byte);
        }

        let is_decl = matches!(
            self.cursor.peek().kind,
            TokenKind::Keyword(Keyword::Var | Keyword::Let | Keyword::Const)
        );

        if is_decl {
            let decl_start = self.cursor.position();
            let decl_start_byte = self.cursor.peek().span.start;
            let kind = match self.cursor.advance().kind {
                TokenKind::Keyword(Keyword::Var) => VarKind::Var,
                TokenKind::Keyword(Keyword::Let) => VarKind::Let,
                _ => VarKind::Const,
            };
            let target = self.parse_assignment_expression()?;
            if self.cursor.eat_keyword(Keyword::In) || self.cursor.eat_keyword(Keyword::Of) {
                let is_of = matches!(
                    self.cursor.tokens_back(1).kind,
                    TokenKind::Keyword(Keyword::Of)
                );
                let id = self.expr_to_pattern(target)?;
                let left = self.finish(
                    NodeKind::VariableDeclaration(VariableDeclaration {
                        kind,
                        declarations: vec![self.finish(
                            NodeKind::VariableDeclarator(VariableDeclarator {
                                id: Box::new(id),
                                init: None,
                            }),
                            decl_start,
                            decl_start_byte,
                        )],
                    }),
                    decl_start,
                    decl_start_byte,
                );
                return self.parse_for_in_of(left, is_of, is_await, start, start_byte);
            }
            let id = Box::new(self.expr_to_pattern(target)?);
            let init = if self.cursor.eat_punctuator(Punctuator::Assign) {
                Some(Box::new(self.parse_assignment_expression()?))
            } else {
                None
            };
            let mut declarations = vec![self.finish(
                NodeKind::VariableDeclarator(VariableDeclarator { id, init }),
                decl_start,
                decl_start_byte,
            )];
            while self.cursor.eat_punctuator(Punctuator::Comma) {
                declarations.push(self.parse_variable_declarator()?);
            }
            let decl = self.finish(
                NodeKind::VariableDeclaration(VariableDeclaration { kind, declarations }),
                decl_start,
                decl_start_byte,
            );
            self.cursor.expect_punctuator(Punctuator::Semicolon)?;
            return self.parse_for_classic(Some(Box::new(decl)), start, start_byte);
        }

        let expr = self.parse_expression()?;
        if self.cursor.eat_keyword(Keyword::In) || self.cursor.eat_keyword(Keyword::Of) {
            let is_of = matches!(
                self.cursor.tokens_back(1).kind,
                TokenKind::Keyword(Keyword::Of)
            );
            let left = self.expr_to_pattern(expr)?;
            return self.parse_for_in_of(left, is_of, is_await, start, start_byte);
        }
        self.cursor.expect_punctuator(Punctuator::Semicolon)?;
        self.parse_for_classic(Some(Box::new(expr)), start, start_byte)
    }

    fn parse_for_classic(
        &mut self,
        init: Option<Box<Node>>,
        start: Position,
        start_byte: u32,
    ) -> Result<Node, ParseError> {
        let test = if self.cursor.at_punctuator(Punctuator::Semicolon) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.cursor.expect_punctuator(Punctuator::Semicolon)?;
        let update = if self.cursor.at_punctuator(Punctuator::CloseParen) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.cursor.expect_punctuator(Punctuator::CloseParen)?;
        let body = Box::new(self.parse_statement()?);
        Ok(self.finish(
            NodeKind::ForStatement(ForStatement { init, test, update, body }),
            start,
            start_byte,
        ))
    }

    fn parse_for_in_of(
        &mut self,
        left: Node,
        is_of: bool,
        is_await: bool,
        start: Position,
        start_byte: u32,
    ) -> Result<Node, ParseError> {
        let right = Box::new(if is_of {
            self.parse_assignment_expression()?
        } else {
            self.parse_expression()?
        });
        self.cursor.expect_punctuator(Punctuator::CloseParen)?;
        let body = Box::new(self.parse_statement()?);
        let node = ForInOfStatement {
            left: Box::new(left),
            right,
            body,
            is_await,
        };
        let kind = if is_of {
            NodeKind::ForOfStatement(node)
        } else {
            NodeKind::ForInStatement(node)
        };
        Ok(self.finish(kind, start, start_byte))
    }

    fn parse_while(&mut self, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        self.cursor.advance();
        self.cursor.expect_punctuator(Punctuator::OpenParen)?;
        let test = Box::new(self.parse_expression()?);
        self.cursor.expect_punctuator(Punctuator::CloseParen)?;
        let body = Box::new(self.parse_statement()?);
        Ok(self.finish(NodeKind::WhileStatement(WhileStatement { test, body }), start, start_byte))
    }

    fn parse_do_while(&mut self, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        self.cursor.advance();
        let body = Box::new(self.parse_statement()?);
        self.cursor.expect_keyword(Keyword::While)?;
        self.cursor.expect_punctuator(Punctuator::OpenParen)?;
        let test = Box::new(self.parse_expression()?);
        self.cursor.expect_punctuator(Punctuator::CloseParen)?;
        self.consume_semicolon();
        Ok(self.finish(NodeKind::DoWhileStatement(WhileStatement { test, body }), start, start_byte))
    }

    fn parse_try(&mut self, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        self.cursor.advance();
        let block = self.parse_block()?;
        let handler = if self.cursor.eat_keyword(Keyword::Catch) {
            let param = if self.cursor.eat_punctuator(Punctuator::OpenParen) {
                let target = self.parse_assignment_expression()?;
                let pattern = self.expr_to_pattern(target)?;
                self.cursor.expect_punctuator(Punctuator::CloseParen)?;
                Some(Box::new(pattern))
            } else {
                None
            };
            let body = self.parse_block()?;
            Some(CatchClause { param, body })
        } else {
            None
        };
        let finalizer = if self.cursor.eat_keyword(Keyword::Finally) {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(self.finish(
            NodeKind::TryStatement(TryStatement { block, handler, finalizer }),
            start,
            start_byte,
        ))
    }

    fn parse_switch(&mut self, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        self.cursor.advance();
        self.cursor.expect_punctuator(Punctuator::OpenParen)?;
        let discriminant = Box::new(self.parse_expression()?);
        self.cursor.expect_punctuator(Punctuator::CloseParen)?;
        self.cursor.expect_punctuator(Punctuator::OpenBlock)?;
        let mut cases = Vec::new();
        while !self.cursor.at_punctuator(Punctuator::CloseBlock) {
            let case_start = self.cursor.position();
            let case_start_byte = self.cursor.peek().span.start;
            let test = if self.cursor.eat_keyword(Keyword::Case) {
                let test = Some(Box::new(self.parse_expression()?));
                self.cursor.expect_punctuator(Punctuator::Colon)?;
                test
            } else {
                self.cursor.expect_keyword(Keyword::Default)?;
                self.cursor.expect_punctuator(Punctuator::Colon)?;
                None
            };
            let consequent = self.parse_statement_list(&[Punctuator::CloseBlock])?;
            cases.push(self.finish(
                NodeKind::SwitchCase(SwitchCase { test, consequent }),
                case_start,
                case_start_byte,
            ));
        }
        self.cursor.expect_punctuator(Punctuator::CloseBlock)?;
        Ok(self.finish(
            NodeKind::SwitchStatement(SwitchStatement { discriminant, cases }),
            start,
            start_byte,
        ))
    }

    fn parse_import(&mut self, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        self.cursor.advance();
        let mut specifiers = Vec::new();
        if let TokenKind::Identifier(_) = &self.cursor.peek().kind {
            let name = self.cursor.expect_identifier()?;
            let local = Identifier::new(self.intern(&name));
            specifiers.push(ImportSpecifier::Default { local });
            if self.cursor.eat_punctuator(Punctuator::Comma) {
                self.parse_named_import_specifiers(&mut specifiers)?;
            }
        } else if self.cursor.eat_punctuator(Punctuator::Mul) {
            self.cursor.expect_keyword(Keyword::As)?;
            let name = self.cursor.expect_identifier()?;
            let local = Identifier::new(self.intern(&name));
            specifiers.push(ImportSpecifier::Namespace { local });
        } else {
            self.parse_named_import_specifiers(&mut specifiers)?;
        }
        self.cursor.expect_keyword(Keyword::From)?;
        let source = self.parse_string_literal_text()?;
        self.consume_semicolon();
        Ok(self.finish(
            NodeKind::ImportDeclaration(ImportDeclaration { specifiers, source }),
            start,
            start_byte,
        ))
    }

    fn parse_named_import_specifiers(
        &mut self,
        out: &mut Vec<ImportSpecifier>,
    ) -> Result<(), ParseError> {
        self.cursor.expect_punctuator(Punctuator::OpenBlock)?;
        while !self.cursor.at_punctuator(Punctuator::CloseBlock) {
            let imported_name = self.cursor.expect_identifier()?;
            let imported = Identifier::new(self.intern(&imported_name));
            let local = if self.cursor.eat_keyword(Keyword::As) {
                let local_name = self.cursor.expect_identifier()?;
                Identifier::new(self.intern(&local_name))
            } else {
                imported
            };
            out.push(ImportSpecifier::Named { imported, local });
            if !self.cursor.eat_punctuator(Punctuator::Comma) {
                break;
            }
        }
        self.cursor.expect_punctuator(Punctuator::CloseBlock)?;
        Ok(())
    }

    fn parse_string_literal_text(&mut self) -> Result<String, ParseError> {
        let token = self.cursor.advance();
        match token.kind {
            TokenKind::StringLiteral(s) => Ok(s),
            other => Err(ParseError::expected(
                ["a string literal"],
                crate::cursor::describe(&other),
                token.loc.0,
            )),
        }
    }

    fn parse_export(&mut self, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        self.cursor.advance();
        if self.cursor.eat_keyword(Keyword::Default) {
            let declaration = Box::new(if matches!(
                self.cursor.peek().kind,
                TokenKind::Keyword(Keyword::Function | Keyword::Class)
            ) {
                self.parse_statement()?
            } else {
                let expr = self.parse_assignment_expression()?;
                self.consume_semicolon();
                expr
            });
            return Ok(self.finish(NodeKind::ExportDefaultDeclaration(declaration), start, start_byte));
        }

        if matches!(
            self.cursor.peek().kind,
            TokenKind::Keyword(Keyword::Var | Keyword::Let | Keyword::Const | Keyword::Function | Keyword::Class)
        ) {
            let declaration = Some(Box::new(self.parse_statement()?));
            return Ok(self.finish(
                NodeKind::ExportNamedDeclaration(ExportNamedDeclaration { declaration, specifiers: Vec::new() }),
                start,
                start_byte,
            ));
        }

        self.cursor.expect_punctuator(Punctuator::OpenBlock)?;
        let mut specifiers = Vec::new();
        while !self.cursor.at_punctuator(Punctuator::CloseBlock) {
            let local_name = self.cursor.expect_identifier()?;
            let local = Identifier::new(self.intern(&local_name));
            let exported = if self.cursor.eat_keyword(Keyword::As) {
                let exported_name = self.cursor.expect_identifier()?;
                Identifier::new(self.intern(&exported_name))
            } else {
                local
            };
            specifiers.push(ExportSpecifier { local, exported });
            if !self.cursor.eat_punctuator(Punctuator::Comma) {
                break;
            }
        }
        self.cursor.expect_punctuator(Punctuator::CloseBlock)?;
        self.consume_semicolon();
        Ok(self.finish(
            NodeKind::ExportNamedDeclaration(ExportNamedDeclaration { declaration: None, specifiers }),
            start,
            start_byte,
        ))
    }

    // ---- Functions and classes ------------------------------------------

    fn parse_function(&mut self, is_decl: bool, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        self.cursor.advance(); // `function`
        let is_generator = self.cursor.eat_punctuator(Punctuator::Mul);
        let id = if let TokenKind::Identifier(_) = &self.cursor.peek().kind {
            let name = self.cursor.expect_identifier()?;
            Some(Identifier::new(self.intern(&name)))
        } else {
            None
        };
        if is_decl && id.is_none() {
            return Err(ParseError::unexpected(
                "function declarations require a name",
                self.cursor.position(),
            ));
        }
        let params = self.parse_params()?;
        let body = FunctionBody::Block(self.parse_block()?);
        let func = Function::new(id, params, body, false, is_generator, false);
        let kind = if is_decl {
            NodeKind::FunctionDeclaration(func)
        } else {
            NodeKind::FunctionExpression(func)
        };
        Ok(self.finish(kind, start, start_byte))
    }

    fn parse_params(&mut self) -> Result<Vec<Node>, ParseError> {
        self.cursor.expect_punctuator(Punctuator::OpenParen)?;
        let mut params = Vec::new();
        while !self.cursor.at_punctuator(Punctuator::CloseParen) {
            let param_start = self.cursor.position();
            let param_start_byte = self.cursor.peek().span.start;
            if self.cursor.eat_punctuator(Punctuator::Spread) {
                let argument = Box::new(self.parse_assignment_expression()?);
                let argument = Box::new(self.expr_to_pattern(*argument)?);
                params.push(self.finish(NodeKind::RestElement(argument), param_start, param_start_byte));
            } else {
                let target = self.parse_assignment_expression()?;
                params.push(self.expr_to_pattern(target)?);
            }
            if !self.cursor.eat_punctuator(Punctuator::Comma) {
                break;
            }
        }
        self.cursor.expect_punctuator(Punctuator::CloseParen)?;
        Ok(params)
    }

    fn parse_class(&mut self, is_decl: bool, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        self.cursor.advance(); // `class`
        let id = if let TokenKind::Identifier(_) = &self.cursor.peek().kind {
            let name = self.cursor.expect_identifier()?;
            Some(Identifier::new(self.intern(&name)))
        } else {
            None
        };
        if is_decl && id.is_none() {
            return Err(ParseError::unexpected(
                "class declarations require a name",
                self.cursor.position(),
            ));
        }
        let super_class = if self.cursor.eat_keyword(Keyword::Extends) {
            Some(Box::new(self.parse_lhs_expression()?))
        } else {
            None
        };
        self.cursor.expect_punctuator(Punctuator::OpenBlock)?;
        let mut body = Vec::new();
        while !self.cursor.at_punctuator(Punctuator::CloseBlock) {
            if self.cursor.eat_punctuator(Punctuator::Semicolon) {
                continue;
            }
            body.push(self.parse_class_member()?);
        }
        self.cursor.expect_punctuator(Punctuator::CloseBlock)?;
        let class = Class { id, super_class, body };
        let kind = if is_decl {
            NodeKind::ClassDeclaration(class)
        } else {
            NodeKind::ClassExpression(class)
        };
        Ok(self.finish(kind, start, start_byte))
    }

    fn parse_class_member(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;

        let is_static = self.cursor.at_keyword(Keyword::Static)
            && !matches!(
                self.cursor.peek_at(1).kind,
                TokenKind::Punctuator(Punctuator::OpenParen | Punctuator::Assign)
            );
        if is_static {
            self.cursor.advance();
        }

        let mut method_kind = MethodKind::Method;
        if self.cursor.at_keyword(Keyword::Get)
            && !matches!(
                self.cursor.peek_at(1).kind,
                TokenKind::Punctuator(Punctuator::OpenParen | Punctuator::Assign)
            )
        {
            self.cursor.advance();
            method_kind = MethodKind::Get;
        } else if self.cursor.at_keyword(Keyword::Set)
            && !matches!(
                self.cursor.peek_at(1).kind,
                TokenKind::Punctuator(Punctuator::OpenParen | Punctuator::Assign)
            )
        {
            self.cursor.advance();
            method_kind = MethodKind::Set;
        }

        let is_async = self.cursor.at_keyword(Keyword::Async)
            && !matches!(
                self.cursor.peek_at(1).kind,
                TokenKind::Punctuator(Punctuator::OpenParen | Punctuator::Assign)
            );
        if is_async {
            self.cursor.advance();
        }
        let is_generator = self.cursor.eat_punctuator(Punctuator::Mul);

        let (key, computed) = self.parse_property_key()?;

        if self.cursor.at_punctuator(Punctuator::OpenParen) {
            let params = self.parse_params()?;
            let body = FunctionBody::Block(self.parse_block()?);
            let is_constructor = matches!(&key, PropertyKey::Identifier(id) if self.interner.resolve_expect(id.sym).to_string() == "constructor");
            let kind = if method_kind == MethodKind::Method && !is_static && !computed && is_constructor {
                MethodKind::Constructor
            } else {
                method_kind
            };
            let value = Function::new(None, params, body, is_async, is_generator, false);
            return Ok(self.finish(
                NodeKind::MethodDefinition(MethodDefinition { key, value, kind, is_static, computed }),
                start,
                start_byte,
            ));
        }

        let value = if self.cursor.eat_punctuator(Punctuator::Assign) {
            Some(Box::new(self.parse_assignment_expression()?))
        } else {
            None
        };
        self.consume_semicolon();
        Ok(self.finish(
            NodeKind::PropertyDefinition(PropertyDefinition { key, value, is_static, computed }),
            start,
            start_byte,
        ))
    }

    fn parse_property_key(&mut self) -> Result<(PropertyKey, bool), ParseError> {
        if self.cursor.eat_punctuator(Punctuator::OpenBracket) {
            let expr = self.parse_assignment_expression()?;
            self.cursor.expect_punctuator(Punctuator::CloseBracket)?;
            return Ok((PropertyKey::Computed(Box::new(expr)), true));
        }
        let token = self.cursor.advance();
        let key = match token.kind {
            TokenKind::Identifier(name) => PropertyKey::Identifier(Identifier::new(self.intern(&name))),
            TokenKind::Keyword(k) => PropertyKey::Identifier(Identifier::new(self.intern(&keyword_text(k)))),
            TokenKind::StringLiteral(s) => PropertyKey::Literal(Literal::new(LiteralValue::String(s))),
            TokenKind::Number(n) => PropertyKey::Literal(Literal::new(LiteralValue::Number(n))),
            other => {
                return Err(ParseError::expected(
                    ["a property name"],
                    crate::cursor::describe(&other),
                    token.loc.0,
                ))
            }
        };
        Ok((key, false))
    }

    // ---- Expressions -----------------------------------------------------

    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;
        let first = self.parse_assignment_expression()?;
        if !self.cursor.at_punctuator(Punctuator::Comma) {
            return Ok(first);
        }
        let mut expressions = vec![first];
        while self.cursor.eat_punctuator(Punctuator::Comma) {
            expressions.push(self.parse_assignment_expression()?);
        }
        Ok(self.finish(NodeKind::SequenceExpression(expressions), start, start_byte))
    }

    fn parse_assignment_expression(&mut self) -> Result<Node, ParseError> {
        if let Some(arrow) = self.try_parse_arrow_function()? {
            return Ok(arrow);
        }

        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;
        let left = self.parse_conditional_expression()?;

        let op = match &self.cursor.peek().kind {
            TokenKind::Punctuator(Punctuator::Assign) => Some(AssignOp::Assign),
            TokenKind::Punctuator(Punctuator::AssignAdd) => Some(AssignOp::Add),
            TokenKind::Punctuator(Punctuator::AssignSub) => Some(AssignOp::Sub),
            TokenKind::Punctuator(Punctuator::AssignMul) => Some(AssignOp::Mul),
            TokenKind::Punctuator(Punctuator::AssignDiv) => Some(AssignOp::Div),
            TokenKind::Punctuator(Punctuator::AssignMod) => Some(AssignOp::Mod),
            TokenKind::Punctuator(Punctuator::AssignExp) => Some(AssignOp::Exp),
            TokenKind::Punctuator(Punctuator::AssignShl) => Some(AssignOp::ShiftLeft),
            TokenKind::Punctuator(Punctuator::AssignShr) => Some(AssignOp::ShiftRight),
            TokenKind::Punctuator(Punctuator::AssignUShr) => Some(AssignOp::UnsignedShiftRight),
            TokenKind::Punctuator(Punctuator::AssignAnd) => Some(AssignOp::BitAnd),
            TokenKind::Punctuator(Punctuator::AssignOr) => Some(AssignOp::BitOr),
            TokenKind::Punctuator(Punctuator::AssignXor) => Some(AssignOp::BitXor),
            TokenKind::Punctuator(Punctuator::AssignBoolAnd) => Some(AssignOp::And),
            TokenKind::Punctuator(Punctuator::AssignBoolOr) => Some(AssignOp::Or),
            TokenKind::Punctuator(Punctuator::AssignCoalesce) => Some(AssignOp::Coalesce),
            _ => None,
        };

        let Some(op) = op else { return Ok(left) };
        self.cursor.advance();
        let left = if op == AssignOp::Assign {
            self.expr_to_pattern(left)?
        } else {
            left
        };
        let right = Box::new(self.parse_assignment_expression()?);
        Ok(self.finish(
            NodeKind::AssignmentExpression(AssignmentExpression { operator: op, left: Box::new(left), right }),
            start,
            start_byte,
        ))
    }

    /// Attempts to parse an arrow function starting at the current
    /// position, returning `None` (consuming nothing) if the lookahead
    /// does not actually commit to one.
    fn try_parse_arrow_function(&mut self) -> Result<Option<Node>, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;

        let is_async = self.cursor.at_keyword(Keyword::Async)
            && !self.cursor.peek_at(1).newline_before
            && matches!(
                self.cursor.peek_at(1).kind,
                TokenKind::Identifier(_) | TokenKind::Punctuator(Punctuator::OpenParen)
            );
        let skip = usize::from(is_async);

        // `x => ...`
        if let TokenKind::Identifier(name) = self.cursor.peek_at(skip).kind.clone() {
            if matches!(self.cursor.peek_at(skip + 1).kind, TokenKind::Punctuator(Punctuator::Arrow)) {
                if is_async {
                    self.cursor.advance();
                }
                self.cursor.advance();
                self.cursor.advance(); // `=>`
                let param_sym = self.intern(&name);
                let params = vec![Node::identifier(param_sym)];
                let body = self.parse_arrow_body()?;
                let func = Function::new(None, params, body, is_async, false, true);
                return Ok(Some(self.finish(NodeKind::ArrowFunctionExpression(func), start, start_byte)));
            }
            return Ok(None);
        }

        // `(...) => ...`
        if matches!(self.cursor.peek_at(skip).kind, TokenKind::Punctuator(Punctuator::OpenParen)) {
            let checkpoint = self.cursor.checkpoint();
            if is_async {
                self.cursor.advance();
            }
            if let Ok(params) = self.parse_params() {
                if self.cursor.at_punctuator(Punctuator::Arrow) {
                    self.cursor.advance();
                    let body = self.parse_arrow_body()?;
                    let func = Function::new(None, params, body, is_async, false, true);
                    return Ok(Some(self.finish(NodeKind::ArrowFunctionExpression(func), start, start_byte)));
                }
            }
            self.cursor.restore(checkpoint);
        }

        Ok(None)
    }

    fn parse_arrow_body(&mut self) -> Result<FunctionBody, ParseError> {
        if self.cursor.at_punctuator(Punctuator::OpenBlock) {
            Ok(FunctionBody::Block(self.parse_block()?))
        } else {
            Ok(FunctionBody::Expression(Box::new(self.parse_assignment_expression()?)))
        }
    }

    fn parse_conditional_expression(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;
        let test = self.parse_nullish_expression()?;
        if !self.cursor.eat_punctuator(Punctuator::Question) {
            return Ok(test);
        }
        let consequent = Box::new(self.parse_assignment_expression()?);
        self.cursor.expect_punctuator(Punctuator::Colon)?;
        let alternate = Box::new(self.parse_assignment_expression()?);
        Ok(self.finish(
            NodeKind::ConditionalExpression(ConditionalExpression { test: Box::new(test), consequent, alternate }),
            start,
            start_byte,
        ))
    }

    fn parse_nullish_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_logical_binary(Self::parse_logical_or_expression, &[(Punctuator::Coalesce, LogicalOp::Coalesce)])
    }

    fn parse_logical_or_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_logical_binary(Self::parse_logical_and_expression, &[(Punctuator::BoolOr, LogicalOp::Or)])
    }

    fn parse_logical_and_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_logical_binary(Self::parse_bitor_expression, &[(Punctuator::BoolAnd, LogicalOp::And)])
    }

    fn parse_logical_binary(
        &mut self,
        mut next: impl FnMut(&mut Self) -> Result<Node, ParseError>,
        ops: &[(Punctuator, LogicalOp)],
    ) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;
        let mut left = next(self)?;
        loop {
            let Some(&(_, op)) = ops.iter().find(|(p, _)| self.cursor.at_punctuator(*p)) else {
                break;
            };
            self.cursor.advance();
            let right = next(self)?;
            left = self.finish(
                NodeKind::LogicalExpression(LogicalExpression { operator: op, left: Box::new(left), right: Box::new(right) }),
                start,
                start_byte,
            );
        }
        Ok(left)
    }

    fn parse_binary(
        &mut self,
        mut next: impl FnMut(&mut Self) -> Result<Node, ParseError>,
        ops: &[(Punctuator, BinaryOp)],
        extra_keywords: &[(Keyword, BinaryOp)],
    ) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;
        let mut left = next(self)?;
        loop {
            let op = ops
                .iter()
                .find(|(p, _)| self.cursor.at_punctuator(*p))
                .map(|&(_, op)| op)
                .or_else(|| {
                    extra_keywords
                        .iter()
                        .find(|(k, _)| self.cursor.at_keyword(*k))
                        .map(|&(_, op)| op)
                });
            let Some(op) = op else { break };
            self.cursor.advance();
            let right = next(self)?;
            left = self.finish(
                NodeKind::BinaryExpression(BinaryExpression { operator: op, left: Box::new(left), right: Box::new(right) }),
                start,
                start_byte,
            );
        }
        Ok(left)
    }

    fn parse_bitor_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_binary(Self::parse_bitxor_expression, &[(Punctuator::Or, BinaryOp::BitOr)], &[])
    }

    fn parse_bitxor_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_binary(Self::parse_bitand_expression, &[(Punctuator::Xor, BinaryOp::BitXor)], &[])
    }

    fn parse_bitand_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_binary(Self::parse_equality_expression, &[(Punctuator::And, BinaryOp::BitAnd)], &[])
    }

    fn parse_equality_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_binary(
            Self::parse_relational_expression,
            &[
                (Punctuator::Eq, BinaryOp::Eq),
                (Punctuator::NotEq, BinaryOp::NotEq),
                (Punctuator::StrictEq, BinaryOp::StrictEq),
                (Punctuator::StrictNotEq, BinaryOp::StrictNotEq),
            ],
            &[],
        )
    }

    fn parse_relational_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_binary(
            Self::parse_shift_expression,
            &[
                (Punctuator::LessThan, BinaryOp::LessThan),
                (Punctuator::LessThanOrEq, BinaryOp::LessThanEq),
                (Punctuator::GreaterThan, BinaryOp::GreaterThan),
                (Punctuator::GreaterThanOrEq, BinaryOp::GreaterThanEq),
            ],
            &[(Keyword::InstanceOf, BinaryOp::InstanceOf), (Keyword::In, BinaryOp::In)],
        )
    }

    fn parse_shift_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_binary(
            Self::parse_additive_expression,
            &[
                (Punctuator::Shl, BinaryOp::ShiftLeft),
                (Punctuator::Shr, BinaryOp::ShiftRight),
                (Punctuator::UShr, BinaryOp::UnsignedShiftRight),
            ],
            &[],
        )
    }

    fn parse_additive_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_binary(
            Self::parse_multiplicative_expression,
            &[(Punctuator::Add, BinaryOp::Add), (Punctuator::Sub, BinaryOp::Sub)],
            &[],
        )
    }

    fn parse_multiplicative_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_binary(
            Self::parse_exponent_expression,
            &[
                (Punctuator::Mul, BinaryOp::Mul),
                (Punctuator::Div, BinaryOp::Div),
                (Punctuator::Mod, BinaryOp::Mod),
            ],
            &[],
        )
    }

    fn parse_exponent_expression(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;
        let base = self.parse_unary_expression()?;
        if !self.cursor.eat_punctuator(Punctuator::Exp) {
            return Ok(base);
        }
        // right-associative
        let exponent = self.parse_exponent_expression()?;
        Ok(self.finish(
            NodeKind::BinaryExpression(BinaryExpression {
                operator: BinaryOp::Exp,
                left: Box::new(base),
                right: Box::new(exponent),
            }),
            start,
            start_byte,
        ))
    }

    fn parse_unary_expression(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;
        let op = match &self.cursor.peek().kind {
            TokenKind::Punctuator(Punctuator::Sub) => Some(UnaryOp::Minus),
            TokenKind::Punctuator(Punctuator::Add) => Some(UnaryOp::Plus),
            TokenKind::Punctuator(Punctuator::Not) => Some(UnaryOp::Not),
            TokenKind::Punctuator(Punctuator::Neg) => Some(UnaryOp::BitNot),
            TokenKind::Keyword(Keyword::TypeOf) => Some(UnaryOp::TypeOf),
            TokenKind::Keyword(Keyword::Void) => Some(UnaryOp::Void),
            TokenKind::Keyword(Keyword::Delete) => Some(UnaryOp::Delete),
            _ => None,
        };
        if let Some(op) = op {
            self.cursor.advance();
            let argument = Box::new(self.parse_unary_expression()?);
            return Ok(self.finish(NodeKind::UnaryExpression(UnaryExpression { operator: op, argument }), start, start_byte));
        }
        if self.cursor.at_keyword(Keyword::Await) {
            self.cursor.advance();
            let argument = Box::new(self.parse_unary_expression()?);
            return Ok(self.finish(NodeKind::AwaitExpression(argument), start, start_byte));
        }
        if matches!(self.cursor.peek().kind, TokenKind::Punctuator(Punctuator::Inc | Punctuator::Dec)) {
            let is_inc = matches!(self.cursor.peek().kind, TokenKind::Punctuator(Punctuator::Inc));
            self.cursor.advance();
            let argument = Box::new(self.parse_unary_expression()?);
            let operator = if is_inc { UpdateOp::Increment } else { UpdateOp::Decrement };
            return Ok(self.finish(
                NodeKind::UpdateExpression(UpdateExpression { operator, argument, prefix: true }),
                start,
                start_byte,
            ));
        }
        self.parse_update_expression()
    }

    fn parse_update_expression(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;
        let argument = self.parse_lhs_expression()?;
        if self.cursor.peek().newline_before {
            return Ok(argument);
        }
        let operator = match self.cursor.peek().kind {
            TokenKind::Punctuator(Punctuator::Inc) => Some(UpdateOp::Increment),
            TokenKind::Punctuator(Punctuator::Dec) => Some(UpdateOp::Decrement),
            _ => None,
        };
        let Some(operator) = operator else { return Ok(argument) };
        self.cursor.advance();
        Ok(self.finish(
            NodeKind::UpdateExpression(UpdateExpression { operator, argument: Box::new(argument), prefix: false }),
            start,
            start_byte,
        ))
    }

    fn parse_lhs_expression(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;
        let mut expr = if self.cursor.eat_keyword(Keyword::New) {
            if self.cursor.eat_punctuator(Punctuator::Dot) {
                // `new.target`-shaped syntax is not modeled; reject explicitly.
                return Err(ParseError::unexpected("new.target is not supported", start));
            }
            let callee = Box::new(self.parse_lhs_no_call(start, start_byte)?);
            let arguments = if self.cursor.at_punctuator(Punctuator::OpenParen) {
                self.parse_arguments()?
            } else {
                Vec::new()
            };
            self.finish(
                NodeKind::NewExpression(CallExpression { callee, arguments, optional: false }),
                start,
                start_byte,
            )
        } else {
            self.parse_primary_expression()?
        };

        loop {
            if self.cursor.eat_punctuator(Punctuator::Dot) {
                let name = self.cursor.expect_identifier()?;
                let sym = self.intern(&name);
                let property = Box::new(self.finish(NodeKind::Identifier(Identifier::new(sym)), start, start_byte));
                expr = self.finish(
                    NodeKind::MemberExpression(MemberExpression { object: Box::new(expr), property, computed: false, optional: false }),
                    start,
                    start_byte,
                );
            } else if self.cursor.eat_punctuator(Punctuator::OpenBracket) {
                let property = Box::new(self.parse_expression()?);
                self.cursor.expect_punctuator(Punctuator::CloseBracket)?;
                expr = self.finish(
                    NodeKind::MemberExpression(MemberExpression { object: Box::new(expr), property, computed: true, optional: false }),
                    start,
                    start_byte,
                );
            } else if self.cursor.eat_punctuator(Punctuator::QuestionDot) {
                if self.cursor.eat_punctuator(Punctuator::OpenParen) {
                    self.cursor.rewind_one();
                    let arguments = self.parse_arguments()?;
                    expr = self.finish(
                        NodeKind::CallExpression(CallExpression { callee: Box::new(expr), arguments, optional: true }),
                        start,
                        start_byte,
                    );
                } else if self.cursor.eat_punctuator(Punctuator::OpenBracket) {
                    let property = Box::new(self.parse_expression()?);
                    self.cursor.expect_punctuator(Punctuator::CloseBracket)?;
                    expr = self.finish(
                        NodeKind::MemberExpression(MemberExpression { object: Box::new(expr), property, computed: true, optional: true }),
                        start,
                        start_byte,
                    );
                } else {
                    let name = self.cursor.expect_identifier()?;
                    let sym = self.intern(&name);
                    let property = Box::new(self.finish(NodeKind::Identifier(Identifier::new(sym)), start, start_byte));
                    expr = self.finish(
                        NodeKind::MemberExpression(MemberExpression { object: Box::new(expr), property, computed: false, optional: true }),
                        start,
                        start_byte,
                    );
                }
            } else if self.cursor.at_punctuator(Punctuator::OpenParen) {
                let arguments = self.parse_arguments()?;
                expr = self.finish(
                    NodeKind::CallExpression(CallExpression { callee: Box::new(expr), arguments, optional: false }),
                    start,
                    start_byte,
                );
            } else if let TokenKind::TemplateLiteral(_) = &self.cursor.peek().kind {
                let quasi = Box::new(self.parse_template_literal()?);
                expr = self.finish(
                    NodeKind::TaggedTemplateExpression(TaggedTemplateExpression { tag: Box::new(expr), quasi }),
                    start,
                    start_byte,
                );
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// Parses the callee position of a `new` expression, which binds
    /// tighter than a call but still allows member access.
    fn parse_lhs_no_call(&mut self, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        let mut expr = if self.cursor.eat_keyword(Keyword::New) {
            let callee = Box::new(self.parse_lhs_no_call(start, start_byte)?);
            let arguments = if self.cursor.at_punctuator(Punctuator::OpenParen) {
                self.parse_arguments()?
            } else {
                Vec::new()
            };
            self.finish(
                NodeKind::NewExpression(CallExpression { callee, arguments, optional: false }),
                start,
                start_byte,
            )
        } else {
            self.parse_primary_expression()?
        };
        loop {
            if self.cursor.eat_punctuator(Punctuator::Dot) {
                let name = self.cursor.expect_identifier()?;
                let sym = self.intern(&name);
                let property = Box::new(self.finish(NodeKind::Identifier(Identifier::new(sym)), start, start_byte));
                expr = self.finish(
                    NodeKind::MemberExpression(MemberExpression { object: Box::new(expr), property, computed: false, optional: false }),
                    start,
                    start_byte,
                );
            } else if self.cursor.eat_punctuator(Punctuator::OpenBracket) {
                let property = Box::new(self.parse_expression()?);
                self.cursor.expect_punctuator(Punctuator::CloseBracket)?;
                expr = self.finish(
                    NodeKind::MemberExpression(MemberExpression { object: Box::new(expr), property, computed: true, optional: false }),
                    start,
                    start_byte,
                );
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn parse_arguments(&mut self) -> Result<Vec<Node>, ParseError> {
        self.cursor.expect_punctuator(Punctuator::OpenParen)?;
        let mut args = Vec::new();
        while !self.cursor.at_punctuator(Punctuator::CloseParen) {
            let arg_start = self.cursor.position();
            let arg_start_byte = self.cursor.peek().span.start;
            if self.cursor.eat_punctuator(Punctuator::Spread) {
                let argument = Box::new(self.parse_assignment_expression()?);
                args.push(self.finish(NodeKind::SpreadElement(argument), arg_start, arg_start_byte));
            } else {
                args.push(self.parse_assignment_expression()?);
            }
            if !self.cursor.eat_punctuator(Punctuator::Comma) {
                break;
            }
        }
        self.cursor.expect_punctuator(Punctuator::CloseParen)?;
        Ok(args)
    }

    fn parse_primary_expression(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;

        if self.cursor.at_punctuator(Punctuator::Div) || self.cursor.at_punctuator(Punctuator::AssignDiv) {
            self.cursor.rescan_as_regex(self.src)?;
        }

        match self.cursor.peek().kind.clone() {
            TokenKind::Keyword(Keyword::This) => {
                self.cursor.advance();
                Ok(self.finish(NodeKind::ThisExpression, start, start_byte))
            }
            TokenKind::Keyword(Keyword::Super) => {
                self.cursor.advance();
                Ok(self.finish(NodeKind::Super, start, start_byte))
            }
            TokenKind::Keyword(Keyword::Function) => self.parse_function(false, start, start_byte),
            TokenKind::Keyword(Keyword::Async)
                if matches!(self.cursor.peek_at(1).kind, TokenKind::Keyword(Keyword::Function)) =>
            {
                self.cursor.advance();
                let node = self.parse_function(false, start, start_byte)?;
                Ok(mark_async(node))
            }
            TokenKind::Keyword(Keyword::Class) => self.parse_class(false, start, start_byte),
            TokenKind::Keyword(Keyword::Yield) => {
                self.cursor.advance();
                let delegate = self.cursor.eat_punctuator(Punctuator::Mul);
                let argument = if self.at_statement_end() || self.cursor.at_punctuator(Punctuator::Comma) {
                    None
                } else {
                    Some(Box::new(self.parse_assignment_expression()?))
                };
                Ok(self.finish(NodeKind::YieldExpression(YieldExpression { argument, delegate }), start, start_byte))
            }
            TokenKind::Identifier(name) => {
                self.cursor.advance();
                let sym = self.intern(&name);
                Ok(self.finish(NodeKind::Identifier(Identifier::new(sym)), start, start_byte))
            }
            TokenKind::Number(n) => {
                self.cursor.advance();
                Ok(self.finish(NodeKind::Literal(Literal::new(LiteralValue::Number(n))), start, start_byte))
            }
            TokenKind::StringLiteral(s) => {
                self.cursor.advance();
                Ok(self.finish(NodeKind::Literal(Literal::new(LiteralValue::String(s))), start, start_byte))
            }
            TokenKind::BooleanLiteral(b) => {
                self.cursor.advance();
                Ok(self.finish(NodeKind::Literal(Literal::new(LiteralValue::Boolean(b))), start, start_byte))
            }
            TokenKind::NullLiteral => {
                self.cursor.advance();
                Ok(self.finish(NodeKind::Literal(Literal::new(LiteralValue::Null)), start, start_byte))
            }
            TokenKind::RegExpLiteral { pattern, flags } => {
                self.cursor.advance();
                Ok(self.finish(
                    NodeKind::Literal(Literal::new(LiteralValue::RegExp { pattern, flags })),
                    start,
                    start_byte,
                ))
            }
            TokenKind::TemplateLiteral(_) => self.parse_template_literal(),
            TokenKind::Punctuator(Punctuator::OpenParen) => {
                self.cursor.advance();
                let expr = self.parse_expression()?;
                self.cursor.expect_punctuator(Punctuator::CloseParen)?;
                Ok(expr)
            }
            TokenKind::Punctuator(Punctuator::OpenBracket) => self.parse_array_expression(start, start_byte),
            TokenKind::Punctuator(Punctuator::OpenBlock) => self.parse_object_expression(start, start_byte),
            other => Err(ParseError::unexpected(
                format!("unexpected token '{}'", crate::cursor::describe(&other)),
                start,
            )),
        }
    }

    fn parse_array_expression(&mut self, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        self.cursor.expect_punctuator(Punctuator::OpenBracket)?;
        let mut elements = Vec::new();
        while !self.cursor.at_punctuator(Punctuator::CloseBracket) {
            if self.cursor.at_punctuator(Punctuator::Comma) {
                elements.push(None);
                self.cursor.advance();
                continue;
            }
            if self.cursor.eat_punctuator(Punctuator::Spread) {
                let elem_start = self.cursor.position();
                let elem_start_byte = self.cursor.peek().span.start;
                let argument = Box::new(self.parse_assignment_expression()?);
                elements.push(Some(self.finish(NodeKind::SpreadElement(argument), elem_start, elem_start_byte)));
            } else {
                elements.push(Some(self.parse_assignment_expression()?));
            }
            if !self.cursor.eat_punctuator(Punctuator::Comma) {
                break;
            }
        }
        self.cursor.expect_punctuator(Punctuator::CloseBracket)?;
        Ok(self.finish(NodeKind::ArrayExpression(ArrayExpression { elements }), start, start_byte))
    }

    fn parse_object_expression(&mut self, start: Position, start_byte: u32) -> Result<Node, ParseError> {
        self.cursor.expect_punctuator(Punctuator::OpenBlock)?;
        let mut properties = Vec::new();
        while !self.cursor.at_punctuator(Punctuator::CloseBlock) {
            properties.push(self.parse_object_property()?);
            if !self.cursor.eat_punctuator(Punctuator::Comma) {
                break;
            }
        }
        self.cursor.expect_punctuator(Punctuator::CloseBlock)?;
        Ok(self.finish(NodeKind::ObjectExpression(ObjectExpression { properties }), start, start_byte))
    }

    fn parse_object_property(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;

        if self.cursor.eat_punctuator(Punctuator::Spread) {
            let argument = Box::new(self.parse_assignment_expression()?);
            return Ok(self.finish(NodeKind::SpreadElement(argument), start, start_byte));
        }

        let is_async = self.cursor.at_keyword(Keyword::Async)
            && !matches!(
                self.cursor.peek_at(1).kind,
                TokenKind::Punctuator(Punctuator::Colon | Punctuator::Comma | Punctuator::CloseBlock | Punctuator::OpenParen)
            );
        if is_async {
            self.cursor.advance();
        }
        let is_generator = self.cursor.eat_punctuator(Punctuator::Mul);

        let mut kind = PropertyKind::Init;
        if self.cursor.at_keyword(Keyword::Get)
            && !matches!(
                self.cursor.peek_at(1).kind,
                TokenKind::Punctuator(Punctuator::Colon | Punctuator::Comma | Punctuator::CloseBlock | Punctuator::OpenParen)
            )
        {
            self.cursor.advance();
            kind = PropertyKind::Get;
        } else if self.cursor.at_keyword(Keyword::Set)
            && !matches!(
                self.cursor.peek_at(1).kind,
                TokenKind::Punctuator(Punctuator::Colon | Punctuator::Comma | Punctuator::CloseBlock | Punctuator::OpenParen)
            )
        {
            self.cursor.advance();
            kind = PropertyKind::Set;
        }

        let (key, computed) = self.parse_property_key()?;

        if self.cursor.at_punctuator(Punctuator::OpenParen) {
            let params = self.parse_params()?;
            let body = FunctionBody::Block(self.parse_block()?);
            let func = Function::new(None, params, body, is_async, is_generator, false);
            let value = Box::new(self.finish(NodeKind::FunctionExpression(func), start, start_byte));
            return Ok(self.finish(
                NodeKind::Property(Property { key, value, shorthand: false, kind }),
                start,
                start_byte,
            ));
        }

        if self.cursor.eat_punctuator(Punctuator::Colon) {
            let value = Box::new(self.parse_assignment_expression()?);
            return Ok(self.finish(
                NodeKind::Property(Property { key, value, shorthand: false, kind: PropertyKind::Init }),
                start,
                start_byte,
            ));
        }

        // Shorthand `{ a }` or `{ a = 1 }` (the latter only valid once
        // converted to an ObjectPattern by `expr_to_pattern`).
        let PropertyKey::Identifier(id) = key else {
            return Err(ParseError::unexpected("expected ':' after computed property key", start));
        };
        let value: Box<Node> = if self.cursor.eat_punctuator(Punctuator::Assign) {
            let default = Box::new(self.parse_assignment_expression()?);
            let left = Box::new(self.finish(NodeKind::Identifier(id), start, start_byte));
            Box::new(self.finish(
                NodeKind::AssignmentPattern(AssignmentPattern { left, right: default }),
                start,
                start_byte,
            ))
        } else {
            Box::new(self.finish(NodeKind::Identifier(id), start, start_byte))
        };
        Ok(self.finish(
            NodeKind::Property(Property { key: PropertyKey::Identifier(id), value, shorthand: true, kind: PropertyKind::Init }),
            start,
            start_byte,
        ))
    }

    fn parse_template_literal(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let start_byte = self.cursor.peek().span.start;
        let token = self.cursor.advance();
        let TokenKind::TemplateLiteral(parts) = token.kind else {
            unreachable!("caller checked TemplateLiteral");
        };
        let mut quasis = Vec::new();
        let mut expressions = Vec::new();
        let count = parts.len();
        for (i, part) in parts.into_iter().enumerate() {
            match part {
                TemplatePart::Str(raw) => {
                    quasis.push(TemplateElement { raw, tail: i + 1 == count });
                }
                TemplatePart::Expr(src) => {
                    expressions.push(Parser::parse_expression_source(&src, self.interner)?);
                }
            }
        }
        Ok(self.finish(NodeKind::TemplateLiteral(TemplateLiteral { quasis, expressions }), start, start_byte))
    }

    // ---- Expression <-> pattern conversion ------------------------------

    /// Converts an already-parsed expression into its binding-pattern
    /// form, for the positions (declarator ids, parameters, destructuring
    /// assignment targets, catch params) where the grammar calls for a
    /// pattern rather than an expression. Plain identifiers and member
    /// expressions are passed through unchanged.
    fn expr_to_pattern(&mut self, node: Node) -> Result<Node, ParseError> {
        let loc = node.loc;
        let range = node.range;
        let kind = match node.kind {
            NodeKind::ArrayExpression(ArrayExpression { elements }) => {
                let elements = elements
                    .into_iter()
                    .map(|el| el.map(|e| self.expr_to_pattern(e)).transpose())
                    .collect::<Result<Vec<_>, _>>()?;
                NodeKind::ArrayPattern(ArrayPattern { elements })
            }
            NodeKind::ObjectExpression(ObjectExpression { properties }) => {
                let properties = properties
                    .into_iter()
                    .map(|p| self.property_to_pattern(p))
                    .collect::<Result<Vec<_>, _>>()?;
                NodeKind::ObjectPattern(ObjectPattern { properties })
            }
            NodeKind::AssignmentExpression(AssignmentExpression { operator: AssignOp::Assign, left, right }) => {
                NodeKind::AssignmentPattern(AssignmentPattern { left: Box::new(self.expr_to_pattern(*left)?), right })
            }
            NodeKind::SpreadElement(argument) => NodeKind::RestElement(Box::new(self.expr_to_pattern(*argument)?)),
            other => other,
        };
        let mut result = Node::new(kind);
        if let (Some(loc), Some(range)) = (loc, range) {
            result = result.with_loc(loc, range);
        }
        Ok(result)
    }

    fn property_to_pattern(&mut self, node: Node) -> Result<Node, ParseError> {
        let loc = node.loc;
        let range = node.range;
        let kind = match node.kind {
            NodeKind::Property(Property { key, value, shorthand, kind }) => {
                NodeKind::Property(Property { key, value: Box::new(self.expr_to_pattern(*value)?), shorthand, kind })
            }
            NodeKind::SpreadElement(argument) => NodeKind::RestElement(Box::new(self.expr_to_pattern(*argument)?)),
            other => other,
        };
        let mut result = Node::new(kind);
        if let (Some(loc), Some(range)) = (loc, range) {
            result = result.with_loc(loc, range);
        }
        Ok(result)
    }
}

fn mark_async(mut node: Node) -> Node {
    if let NodeKind::FunctionExpression(f) | NodeKind::FunctionDeclaration(f) = &mut node.kind {
        f.is_async = true;
    }
    node
}

fn keyword_text(keyword: Keyword) -> String {
    format!("{keyword:?}").to_lowercase()
}
