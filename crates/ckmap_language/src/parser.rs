//! Parser for the ck2 text format.
//!
//! The parser is recursive descent over the token stream. The whole input is
//! an implicit block of `key = value` statements ending at end of input;
//! nested blocks end at `}`.
//!
//! A `{ ... }` value is a block when its first inner token is followed by
//! `=`, and a list of scalars otherwise. `{ }` is an empty list.

use ckmap_foundation::{Error, Result};

use crate::document::{Document, Statement, Value};
use crate::lexer::Lexer;
use crate::limits::Limits;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser for ck2 source text.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token.
    current: Token,
    /// Second token of lookahead, filled on demand.
    next: Option<Token>,
    /// Number of braces currently open.
    depth: usize,
    /// Resource bounds for this parse.
    limits: Limits,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    ///
    /// # Errors
    /// Returns an error if the source exceeds the size limit or its first
    /// token cannot be lexed.
    pub fn new(source: &'src str, limits: Limits) -> Result<Self> {
        if source.len() > limits.max_file_size {
            return Err(Error::limit_exceeded(format!(
                "input is {} bytes, limit is {}",
                source.len(),
                limits.max_file_size
            )));
        }
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            next: None,
            depth: 0,
            limits,
        })
    }

    /// Parses the entire input as a document.
    ///
    /// # Errors
    /// Returns an error if the source cannot be lexed or parsed.
    pub fn parse_document(&mut self) -> Result<Document> {
        let statements = self.parse_statements(None)?;
        Ok(Document::new(statements))
    }

    /// Parses statements until end of input (top level) or the `}` closing
    /// the block opened at `open`.
    fn parse_statements(&mut self, open: Option<Span>) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();
        loop {
            match (&self.current.kind, open) {
                (TokenKind::Eof, None) => break,
                (TokenKind::Eof, Some(open)) => {
                    return Err(self.error(&format!("'}}' to close block opened at {open}")));
                }
                (TokenKind::RBrace, Some(_)) => {
                    self.advance()?;
                    break;
                }
                _ => statements.push(self.parse_statement()?),
            }
        }
        Ok(statements)
    }

    /// Parses `<key> = <value>`.
    fn parse_statement(&mut self) -> Result<Statement> {
        let span = self.current.span;
        let Some(key) = scalar(&self.current.kind) else {
            return Err(self.error("statement key"));
        };
        self.advance()?;

        if self.current.kind != TokenKind::Equals {
            return Err(self.error(&format!("'=' after key {key}")));
        }
        self.advance()?;

        let value = self.parse_value()?;
        Ok(Statement::new(key, value, span))
    }

    /// Parses the value following `=`.
    fn parse_value(&mut self) -> Result<Value> {
        if let Some(value) = scalar(&self.current.kind) {
            self.advance()?;
            return Ok(value);
        }
        match self.current.kind {
            TokenKind::LBrace => self.parse_aggregate(),
            _ => Err(self.error("value after '='")),
        }
    }

    /// Parses `{ ... }` as either a block or a list.
    fn parse_aggregate(&mut self) -> Result<Value> {
        let open = self.current.span;
        if self.depth >= self.limits.max_depth {
            return Err(Error::limit_exceeded(format!(
                "nesting deeper than {} levels",
                self.limits.max_depth
            ))
            .at(open.line, open.column));
        }
        self.depth += 1;
        self.advance()?;

        let is_block = self.current.is_scalar() && self.peek()?.kind == TokenKind::Equals;
        let value = if is_block {
            Value::Block(self.parse_statements(Some(open))?)
        } else {
            Value::List(self.parse_list(open)?)
        };

        self.depth -= 1;
        Ok(value)
    }

    /// Parses scalars up to the closing `}`.
    fn parse_list(&mut self, open: Span) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        loop {
            if let Some(item) = scalar(&self.current.kind) {
                items.push(item);
                self.advance()?;
                continue;
            }
            match self.current.kind {
                TokenKind::RBrace => {
                    self.advance()?;
                    return Ok(items);
                }
                TokenKind::Eof => {
                    return Err(self.error(&format!("'}}' to close list opened at {open}")));
                }
                _ => return Err(self.error("list element or '}'")),
            }
        }
    }

    /// Returns the token after the current one without consuming anything.
    fn peek(&mut self) -> Result<&Token> {
        let token = match self.next.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(self.next.insert(token))
    }

    /// Advances to the next token.
    fn advance(&mut self) -> Result<()> {
        self.current = match self.next.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        Ok(())
    }

    /// Creates a parse error at the current token.
    fn error(&self, expected: &str) -> Error {
        let span = self.current.span;
        Error::parse(expected, self.current.kind.describe()).at(span.line, span.column)
    }
}

/// Converts a scalar token into a value.
fn scalar(kind: &TokenKind) -> Option<Value> {
    match kind {
        TokenKind::Word(s) | TokenKind::String(s) => Some(Value::String(s.clone())),
        TokenKind::Int(n) => Some(Value::Integer(*n)),
        _ => None,
    }
}

/// Parses source text into a document with default limits.
///
/// # Errors
/// Returns an error if the source cannot be lexed or parsed.
pub fn parse(source: &str) -> Result<Document> {
    parse_with_limits(source, Limits::default())
}

/// Parses source text into a document.
///
/// # Errors
/// Returns an error if the source cannot be lexed or parsed, or exceeds `limits`.
pub fn parse_with_limits(source: &str, limits: Limits) -> Result<Document> {
    Parser::new(source, limits)?.parse_document()
}
