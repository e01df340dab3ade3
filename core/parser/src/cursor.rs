//! A peekable cursor over a pre-lexed token stream.
//!
//! Rather than driving the lexer lazily token by token, this core lexes
//! eagerly into a `Vec<Token>` up front (simpler, and the whole source is
//! already in memory for template-hole re-parsing) and walks it with this
//! cursor instead.

use redast_ast::Position;

use crate::error::ParseError;
use crate::token::{Keyword, Punctuator, Token, TokenKind};

pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub(crate) fn peek_at(&self, ahead: usize) -> &Token {
        let idx = (self.pos + ahead).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    pub(crate) fn position(&self) -> Position {
        self.peek().loc.0
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos.min(self.tokens.len() - 1)].clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn is_eof(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Re-lexes a `/` at the current position as a regular expression
    /// literal, for call sites where the grammar rules out division.
    /// Replaces the current `/` (or `/=`) token with the result, and any
    /// later token whose span the regex swallowed is dropped.
    pub(crate) fn rescan_as_regex(&mut self, src: &str) -> Result<(), ParseError> {
        let start_byte = self.peek().span.start as usize;
        let start_pos = self.peek().loc.0;
        let newline_before = self.peek().newline_before;
        let (kind, end_byte, columns) = crate::lexer::rescan_regex(src, start_byte, start_pos)?;
        let end_pos = Position::new(start_pos.line, start_pos.column + columns);
        let absolute_end = start_byte + end_byte;

        let mut idx = self.pos;
        while idx < self.tokens.len() && (self.tokens[idx].span.start as usize) < absolute_end {
            idx += 1;
        }
        let replacement = Token {
            kind,
            loc: (start_pos, end_pos),
            span: redast_ast::Span::new(start_byte as u32, absolute_end as u32),
            newline_before,
        };
        self.tokens.splice(self.pos..idx, std::iter::once(replacement));
        Ok(())
    }

    pub(crate) fn expect_punctuator(&mut self, expected: Punctuator) -> Result<Token, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Punctuator(p) if p == expected => Ok(token),
            ref other => Err(ParseError::expected(
                [expected.as_str()],
                describe(other),
                token.loc.0,
            )),
        }
    }

    pub(crate) fn expect_keyword(&mut self, expected: Keyword) -> Result<Token, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Keyword(k) if k == expected => Ok(token),
            ref other => Err(ParseError::expected(
                [format!("{expected:?}").to_lowercase()],
                describe(other),
                token.loc.0,
            )),
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Identifier(name) => Ok(name),
            ref other => Err(ParseError::expected(
                ["an identifier"],
                describe(other),
                token.loc.0,
            )),
        }
    }

    pub(crate) fn eat_punctuator(&mut self, p: Punctuator) -> bool {
        if matches!(&self.peek().kind, TokenKind::Punctuator(found) if *found == p) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_keyword(&mut self, k: Keyword) -> bool {
        if matches!(&self.peek().kind, TokenKind::Keyword(found) if *found == k) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn at_punctuator(&self, p: Punctuator) -> bool {
        matches!(&self.peek().kind, TokenKind::Punctuator(found) if *found == p)
    }

    pub(crate) fn at_keyword(&self, k: Keyword) -> bool {
        matches!(&self.peek().kind, TokenKind::Keyword(found) if *found == k)
    }

    /// Returns the `n`-th previously consumed token (`n = 1` is the token
    /// just advanced past), for call sites that need to tell which of two
    /// alternatives an `eat_*` call actually matched.
    pub(crate) fn tokens_back(&self, n: usize) -> &Token {
        let idx = self.pos.saturating_sub(n).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Saves the current position for a speculative parse; pair with
    /// [`Self::restore`] to back out if the speculation fails.
    pub(crate) fn checkpoint(&self) -> usize {
        self.pos
    }

    pub(crate) fn restore(&mut self, checkpoint: usize) {
        self.pos = checkpoint;
    }

    /// Steps back one token, for a lookahead that consumed a token it
    /// turns out still needs to be re-read by a shared helper.
    pub(crate) fn rewind_one(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }
}

impl Keyword {
    fn as_str_lower(self) -> String {
        format!("{self:?}").to_lowercase()
    }
}

pub(crate) fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Identifier(name) => name.clone(),
        TokenKind::Keyword(k) => k.as_str_lower(),
        TokenKind::Punctuator(p) => p.as_str().to_string(),
        TokenKind::Number(n) => n.to_string(),
        TokenKind::StringLiteral(_) => "a string literal".to_string(),
        TokenKind::BooleanLiteral(b) => b.to_string(),
        TokenKind::NullLiteral => "null".to_string(),
        TokenKind::TemplateLiteral(_) => "a template literal".to_string(),
        TokenKind::RegExpLiteral { .. } => "a regular expression".to_string(),
        TokenKind::Eof => "end of input".to_string(),
    }
}
