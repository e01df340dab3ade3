//! A lexical analyzer for the ECMAScript subset this core parses.
//!
//! A `Peekable<CharIndices>` buffer, a
//! running `Position`, and a token loop that records the span each token
//! started and ended at. Comments are consumed and dropped here; the
//! parser adapter re-attaches the nearest ones to the surrounding node
//! from the raw source separately, since comment trivia never resolves a
//! grammar ambiguity in this subset.
//!
//! `@name` and `#name` sigil identifiers (see [`redast_ast::sigil`]) are
//! accepted as ordinary identifier tokens: the sigil character is only
//! valid in the identifier-start position, never in the continuation, so
//! `@foo` lexes as one identifier and `a@b` does not.

use std::iter::Peekable;
use std::str::CharIndices;

use redast_ast::{sigil::SIGIL_CHARS, Position, Span};

use crate::error::LexError;
use crate::token::{Keyword, Punctuator, TemplatePart, Token, TokenKind};

/// Lexes `src` into a flat token stream, terminated by a [`TokenKind::Eof`].
pub fn tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(src).run()
}

pub(crate) struct Lexer<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: u32,
    column: u32,
    newline_pending: bool,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            line: 1,
            column: 0,
            newline_pending: false,
        }
    }

    fn pos(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn byte_offset(&mut self) -> u32 {
        self.chars.peek().map_or(self.src.len(), |&(i, _)| i) as u32
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek_at(&self, skip: usize) -> Option<char> {
        self.chars.clone().nth(skip).map(|(_, c)| c)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 0;
            self.newline_pending = true;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia()?;
            let start_pos = self.pos();
            let start_byte = self.byte_offset();
            let newline_before = std::mem::take(&mut self.newline_pending);

            let Some(c) = self.peek_char() else {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    loc: (start_pos, start_pos),
                    span: Span::new(start_byte, start_byte),
                    newline_before,
                });
                break;
            };

            let kind = self.read_token(c, start_pos)?;
            let end_byte = self.byte_offset();
            let end_pos = self.pos();
            tokens.push(Token {
                kind,
                loc: (start_pos, end_pos),
                span: Span::new(start_byte, end_byte),
                newline_before,
            });
        }
        Ok(tokens)
    }

    /// Consumes whitespace and comments. Sets `newline_pending` when a
    /// line terminator (including one inside a block comment) was
    /// crossed, for automatic-semicolon-insertion purposes.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek_char() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.peek_at(1) == Some('/') => {
                    self.bump();
                    self.bump();
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                Some('/') if self.peek_at(1) == Some('*') => {
                    let start = self.pos();
                    self.bump();
                    self.bump();
                    loop {
                        match self.bump() {
                            Some('*') if self.eat('/') => break,
                            Some(_) => {}
                            None => {
                                return Err(LexError::new("unterminated block comment", start))
                            }
                        }
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn read_token(&mut self, c: char, start: Position) -> Result<TokenKind, LexError> {
        match c {
            '"' | '\'' => self.read_string(c),
            '`' => self.read_template(),
            '0'..='9' => self.read_number(),
            '.' if matches!(self.peek_at(1), Some('0'..='9')) => self.read_number(),
            c if is_ident_start(c) => Ok(self.read_identifier_or_keyword()),
            '/' => Ok(self.read_slash()),
            _ => self.read_punctuator(start),
        }
    }

    fn read_identifier_or_keyword(&mut self) -> TokenKind {
        let mut buf = String::new();
        buf.push(self.bump().expect("checked by caller"));
        while let Some(c) = self.peek_char() {
            if is_ident_continue(c) {
                buf.push(c);
                self.bump();
            } else {
                break;
            }
        }
        match buf.as_str() {
            "true" => TokenKind::BooleanLiteral(true),
            "false" => TokenKind::BooleanLiteral(false),
            "null" => TokenKind::NullLiteral,
            _ if buf.starts_with(SIGIL_CHARS) => TokenKind::Identifier(buf),
            _ => Keyword::from_str(&buf).map_or(TokenKind::Identifier(buf), TokenKind::Keyword),
        }
    }

    fn read_string(&mut self, quote: char) -> Result<TokenKind, LexError> {
        let start = self.pos();
        self.bump();
        let mut buf = String::new();
        loop {
            match self.bump() {
                None => return Err(LexError::new("unterminated string literal", start)),
                Some(c) if c == quote => break,
                Some('\\') => {
                    if let Some(resolved) = self.read_escape(start)? {
                        buf.push(resolved);
                    }
                }
                Some(c) => buf.push(c),
            }
        }
        Ok(TokenKind::StringLiteral(buf))
    }

    /// Resolves a single backslash escape. Returns `None` for a line
    /// continuation (`\` followed directly by a newline), which
    /// contributes no character to the decoded string.
    fn read_escape(&mut self, string_start: Position) -> Result<Option<char>, LexError> {
        match self.bump() {
            None => Err(LexError::new("unterminated string literal", string_start)),
            Some('n') => Ok(Some('\n')),
            Some('r') => Ok(Some('\r')),
            Some('t') => Ok(Some('\t')),
            Some('b') => Ok(Some('\u{8}')),
            Some('f') => Ok(Some('\u{c}')),
            Some('v') => Ok(Some('\u{b}')),
            Some('0') => Ok(Some('\0')),
            Some('\n') => Ok(None),
            Some('x') => self.read_hex_escape(2, string_start).map(Some),
            Some('u') => {
                if self.eat('{') {
                    let mut hex = String::new();
                    while let Some(c) = self.peek_char() {
                        if c == '}' {
                            break;
                        }
                        hex.push(c);
                        self.bump();
                    }
                    self.eat('}');
                    u32::from_str_radix(&hex, 16)
                        .ok()
                        .and_then(char::from_u32)
                        .map(Some)
                        .ok_or_else(|| LexError::new("invalid unicode escape", string_start))
                } else {
                    self.read_hex_escape(4, string_start).map(Some)
                }
            }
            Some(other) => Ok(Some(other)),
        }
    }

    fn read_hex_escape(&mut self, digits: usize, string_start: Position) -> Result<char, LexError> {
        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            match self.bump() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                _ => return Err(LexError::new("invalid hex escape", string_start)),
            }
        }
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| LexError::new("invalid hex escape", string_start))
    }

    /// Reads a backtick template literal, splitting it into quasis and the
    /// raw source text of each `${...}` hole. Hole contents are re-parsed
    /// independently by [`crate::parser::Parser::parse_expression_source`],
    /// so this only needs to track brace/string/template nesting depth
    /// well enough to find each hole's matching `}`.
    fn read_template(&mut self) -> Result<TokenKind, LexError> {
        let start = self.pos();
        self.bump();
        let mut parts = Vec::new();
        let mut quasi = String::new();
        loop {
            match self.peek_char() {
                None => return Err(LexError::new("unterminated template literal", start)),
                Some('`') => {
                    self.bump();
                    parts.push(TemplatePart::Str(quasi));
                    break;
                }
                Some('$') if self.peek_at(1) == Some('{') => {
                    parts.push(TemplatePart::Str(std::mem::take(&mut quasi)));
                    self.bump();
                    self.bump();
                    parts.push(TemplatePart::Expr(self.read_template_hole(start)?));
                }
                Some('\\') => {
                    self.bump();
                    if let Some(resolved) = self.read_escape(start)? {
                        quasi.push(resolved);
                    }
                }
                Some(c) => {
                    quasi.push(c);
                    self.bump();
                }
            }
        }
        Ok(TokenKind::TemplateLiteral(parts))
    }

    /// Consumes raw source text up to (and past) the `}` that balances
    /// the `${` already consumed by [`Self::read_template`], respecting
    /// nested braces, strings, and templates so a hole may itself
    /// contain an object literal or another template.
    fn read_template_hole(&mut self, template_start: Position) -> Result<String, LexError> {
        let mut depth = 0u32;
        let mut hole = String::new();
        loop {
            match self.peek_char() {
                None => {
                    return Err(LexError::new(
                        "unterminated template literal hole",
                        template_start,
                    ))
                }
                Some('}') if depth == 0 => {
                    self.bump();
                    break;
                }
                Some(c @ '{') => {
                    depth += 1;
                    hole.push(c);
                    self.bump();
                }
                Some(c @ '}') => {
                    depth -= 1;
                    hole.push(c);
                    self.bump();
                }
                Some(c @ ('"' | '\'')) => {
                    hole.push(c);
                    self.bump();
                    loop {
                        match self.bump() {
                            None => {
                                return Err(LexError::new(
                                    "unterminated string literal",
                                    template_start,
                                ))
                            }
                            Some(quote) if quote == c => {
                                hole.push(quote);
                                break;
                            }
                            Some('\\') => {
                                hole.push('\\');
                                if let Some(escaped) = self.bump() {
                                    hole.push(escaped);
                                }
                            }
                            Some(other) => hole.push(other),
                        }
                    }
                }
                Some('`') => {
                    hole.push('`');
                    self.bump();
                    let mut nested_depth = 0u32;
                    loop {
                        match self.bump() {
                            None => {
                                return Err(LexError::new(
                                    "unterminated template literal",
                                    template_start,
                                ))
                            }
                            Some('`') if nested_depth == 0 => {
                                hole.push('`');
                                break;
                            }
                            Some(c @ '$') => {
                                hole.push(c);
                                if self.eat('{') {
                                    hole.push('{');
                                    nested_depth += 1;
                                }
                            }
                            Some(c @ '}') => {
                                hole.push(c);
                                if nested_depth > 0 {
                                    nested_depth -= 1;
                                }
                            }
                            Some(c) => hole.push(c),
                        }
                    }
                }
                Some(c) => {
                    hole.push(c);
                    self.bump();
                }
            }
        }
        Ok(hole)
    }

    fn read_number(&mut self) -> Result<TokenKind, LexError> {
        let mut buf = String::new();
        if self.peek_char() == Some('0')
            && matches!(self.peek_at(1), Some('x' | 'X' | 'o' | 'O' | 'b' | 'B'))
        {
            buf.push(self.bump().expect("peeked"));
            let marker = self.bump().expect("peeked");
            buf.push(marker);
            let radix = match marker {
                'x' | 'X' => 16,
                'o' | 'O' => 8,
                _ => 2,
            };
            while let Some(c) = self.peek_char() {
                if c.is_digit(radix) {
                    buf.push(c);
                    self.bump();
                } else {
                    break;
                }
            }
            let digits = &buf[2..];
            let value = i64::from_str_radix(digits, radix)
                .map(|v| v as f64)
                .unwrap_or(f64::NAN);
            return Ok(TokenKind::Number(value));
        }

        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                buf.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if self.peek_char() == Some('.') {
            buf.push('.');
            self.bump();
            while let Some(c) = self.peek_char() {
                if c.is_ascii_digit() {
                    buf.push(c);
                    self.bump();
                } else {
                    break;
                }
            }
        }
        if matches!(self.peek_char(), Some('e' | 'E')) {
            buf.push(self.bump().expect("peeked"));
            if matches!(self.peek_char(), Some('+' | '-')) {
                buf.push(self.bump().expect("peeked"));
            }
            while let Some(c) = self.peek_char() {
                if c.is_ascii_digit() {
                    buf.push(c);
                    self.bump();
                } else {
                    break;
                }
            }
        }
        buf.parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| LexError::new("invalid numeric literal", self.pos()))
    }

    fn read_slash(&mut self) -> TokenKind {
        self.bump();
        if self.eat('=') {
            TokenKind::Punctuator(Punctuator::AssignDiv)
        } else {
            TokenKind::Punctuator(Punctuator::Div)
        }
    }

    fn read_punctuator(&mut self, start: Position) -> Result<TokenKind, LexError> {
        macro_rules! p {
            ($p:ident) => {
                Ok(TokenKind::Punctuator(Punctuator::$p))
            };
        }
        let c = self.bump().expect("checked by caller");
        match c {
            '(' => p!(OpenParen),
            ')' => p!(CloseParen),
            '{' => p!(OpenBlock),
            '}' => p!(CloseBlock),
            '[' => p!(OpenBracket),
            ']' => p!(CloseBracket),
            ';' => p!(Semicolon),
            ',' => p!(Comma),
            ':' => p!(Colon),
            '~' => p!(Neg),
            '.' => {
                if self.peek_char() == Some('.') && self.peek_at(1) == Some('.') {
                    self.bump();
                    self.bump();
                    p!(Spread)
                } else {
                    p!(Dot)
                }
            }
            '?' => {
                if self.eat('.') {
                    p!(QuestionDot)
                } else if self.eat('?') {
                    if self.eat('=') {
                        p!(AssignCoalesce)
                    } else {
                        p!(Coalesce)
                    }
                } else {
                    p!(Question)
                }
            }
            '+' => {
                if self.eat('+') {
                    p!(Inc)
                } else if self.eat('=') {
                    p!(AssignAdd)
                } else {
                    p!(Add)
                }
            }
            '-' => {
                if self.eat('-') {
                    p!(Dec)
                } else if self.eat('=') {
                    p!(AssignSub)
                } else {
                    p!(Sub)
                }
            }
            '*' => {
                if self.eat('*') {
                    if self.eat('=') {
                        p!(AssignExp)
                    } else {
                        p!(Exp)
                    }
                } else if self.eat('=') {
                    p!(AssignMul)
                } else {
                    p!(Mul)
                }
            }
            '%' => {
                if self.eat('=') {
                    p!(AssignMod)
                } else {
                    p!(Mod)
                }
            }
            '&' => {
                if self.eat('&') {
                    if self.eat('=') {
                        p!(AssignBoolAnd)
                    } else {
                        p!(BoolAnd)
                    }
                } else if self.eat('=') {
                    p!(AssignAnd)
                } else {
                    p!(And)
                }
            }
            '|' => {
                if self.eat('|') {
                    if self.eat('=') {
                        p!(AssignBoolOr)
                    } else {
                        p!(BoolOr)
                    }
                } else if self.eat('=') {
                    p!(AssignOr)
                } else {
                    p!(Or)
                }
            }
            '^' => {
                if self.eat('=') {
                    p!(AssignXor)
                } else {
                    p!(Xor)
                }
            }
            '=' => {
                if self.eat('=') {
                    if self.eat('=') {
                        p!(StrictEq)
                    } else {
                        p!(Eq)
                    }
                } else if self.eat('>') {
                    p!(Arrow)
                } else {
                    p!(Assign)
                }
            }
            '!' => {
                if self.eat('=') {
                    if self.eat('=') {
                        p!(StrictNotEq)
                    } else {
                        p!(NotEq)
                    }
                } else {
                    p!(Not)
                }
            }
            '<' => {
                if self.eat('<') {
                    if self.eat('=') {
                        p!(AssignShl)
                    } else {
                        p!(Shl)
                    }
                } else if self.eat('=') {
                    p!(LessThanOrEq)
                } else {
                    p!(LessThan)
                }
            }
            '>' => {
                if self.eat('>') {
                    if self.eat('>') {
                        if self.eat('=') {
                            p!(AssignUShr)
                        } else {
                            p!(UShr)
                        }
                    } else if self.eat('=') {
                        p!(AssignShr)
                    } else {
                        p!(Shr)
                    }
                } else if self.eat('=') {
                    p!(GreaterThanOrEq)
                } else {
                    p!(GreaterThan)
                }
            }
            other => Err(LexError::new(
                format!("unexpected character '{other}'"),
                start,
            )),
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$' || SIGIL_CHARS.contains(&c)
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Re-lexes a `/pattern/flags` regular expression starting at `start_byte`
/// in `src`, once the parser has decided from grammar position that a
/// leading `/` there cannot be division. Returns the decoded token, the
/// byte length consumed, and how many source columns it advanced (regex
/// literals cannot contain a literal newline, so no line tracking needed).
pub(crate) fn rescan_regex(
    src: &str,
    start_byte: usize,
    start: Position,
) -> Result<(TokenKind, usize, u32), LexError> {
    let rest = &src[start_byte..];
    let mut chars = rest.char_indices().peekable();
    chars.next(); // the opening '/'
    let mut pattern = String::new();
    let mut in_class = false;
    let mut columns = 1u32;
    let end_byte = loop {
        match chars.next() {
            None | Some((_, '\n')) => {
                return Err(LexError::new("unterminated regular expression", start))
            }
            Some((_, '\\')) => {
                pattern.push('\\');
                columns += 1;
                if let Some((_, c)) = chars.next() {
                    pattern.push(c);
                    columns += 1;
                }
            }
            Some((_, '[')) => {
                in_class = true;
                pattern.push('[');
                columns += 1;
            }
            Some((_, ']')) => {
                in_class = false;
                pattern.push(']');
                columns += 1;
            }
            Some((i, '/')) if !in_class => {
                columns += 1;
                break i + 1;
            }
            Some((_, c)) => {
                pattern.push(c);
                columns += 1;
            }
        }
    };
    let mut flags = String::new();
    let mut tail = rest[end_byte..].char_indices().peekable();
    let mut flags_end = end_byte;
    while let Some(&(i, c)) = tail.peek() {
        if c.is_alphabetic() {
            flags.push(c);
            columns += 1;
            flags_end = i + c.len_utf8();
            tail.next();
        } else {
            break;
        }
    }
    Ok((
        TokenKind::RegExpLiteral { pattern, flags },
        flags_end,
        columns,
    ))
}
