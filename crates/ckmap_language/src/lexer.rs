//! Lexer for the ck2 text format.
//!
//! The lexer converts source text into a stream of tokens. Whitespace and
//! `#` line comments separate tokens and are dropped.

use ckmap_foundation::{Error, Result};

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for ck2 source text.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Once the input is exhausted every call returns [`TokenKind::Eof`].
    ///
    /// # Errors
    /// Returns a lex error on an unterminated quoted string, an integer
    /// literal that does not fit in 64 bits, or a control character.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_trivia();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Ok(Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            ));
        };

        let kind = match c {
            '=' => {
                self.advance();
                TokenKind::Equals
            }
            '{' => {
                self.advance();
                TokenKind::LBrace
            }
            '}' => {
                self.advance();
                TokenKind::RBrace
            }
            '"' => self.scan_string()?,
            c if is_word_char(c) => self.scan_word()?,
            c => {
                return Err(Error::lex(format!(
                    "unexpected character U+{:04X}",
                    u32::from(c)
                ))
                .at(start_line, start_column));
            }
        };

        Ok(Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        ))
    }

    /// Tokenizes all source, ending with an [`TokenKind::Eof`] token.
    ///
    /// # Errors
    /// Returns the first lex error encountered.
    pub fn tokenize(source: &str) -> Result<Vec<Token>> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace and `#` comments.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else if c == '#' {
                while let Some(c) = self.peek_char() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    /// Scans a quoted string. Quoted strings may not span lines.
    fn scan_string(&mut self) -> Result<TokenKind> {
        let (line, column) = (self.line, self.column);
        self.advance(); // consume opening '"'
        let start = self.position;
        loop {
            match self.peek_char() {
                Some('"') => break,
                Some('\n') | None => {
                    return Err(Error::lex("unterminated quoted string").at(line, column));
                }
                Some(_) => self.advance(),
            }
        }
        let text = self.source[start..self.position].to_string();
        self.advance(); // consume closing '"'
        Ok(TokenKind::String(text))
    }

    /// Scans a bare word, classifying it as an integer when it is one.
    fn scan_word(&mut self) -> Result<TokenKind> {
        let (line, column) = (self.line, self.column);
        let start = self.position;
        while self.peek_char().is_some_and(is_word_char) {
            self.advance();
        }
        let text = &self.source[start..self.position];

        if is_integer_literal(text) {
            text.parse::<i64>().map(TokenKind::Int).map_err(|_| {
                Error::lex(format!("integer literal out of range: {text}")).at(line, column)
            })
        } else {
            Ok(TokenKind::Word(text.to_string()))
        }
    }
}

/// Returns true if `text` lexes back as a single bare-word string.
///
/// Anything else must be written as a quoted string to read back unchanged.
#[must_use]
pub fn is_bare_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_word_char) && !is_integer_literal(text)
}

/// Returns true if `c` can appear in a bare word.
fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control() && !matches!(c, '"' | '#' | '=' | '{' | '}')
}

/// Returns true if `text` is an optionally signed run of decimal digits.
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
