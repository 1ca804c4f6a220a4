//! The lexical analyzer: turns Pascal-dialect source text into a vector of
//! [`Token`]s.
//!
//! Recognition rules follow spec.md §4.1 exactly: identifiers are
//! `[A-Za-z][A-Za-z0-9_]*`, matched case-insensitively against the keyword
//! table; integers are `[0-9]+`; `:=`, `<=`, `>=`, `<>` are the
//! multi-character operators, with a bare `:` producing `COLON`.

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{keyword_from_upper, Token, TokenKind};

/// Lexes an entire source string into a flat token vector (no trailing
/// `Eof` token — callers that need a sentinel add it themselves, as
/// `tpc-par`'s `Parser` does).
///
/// This is the only entry point into the stage: the core is small enough
/// that a lazy iterator adds ceremony without benefit, unlike the
/// streaming lexer the teacher compiler uses for much larger sources.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    lexer.run()
}

struct Lexer<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: Cursor::new(source),
        }
    }

    fn run(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            if self.cursor.is_at_end() {
                break;
            }
            tokens.push(self.next_token()?);
        }
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while self.cursor.current_char().is_whitespace() {
            self.cursor.advance();
        }
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let start_offset = self.cursor.position();
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();
        let span = self.cursor.span_at(start_offset, start_line, start_column);

        let c = self.cursor.current_char();
        let kind = match c {
            ',' => {
                self.cursor.advance();
                TokenKind::Comma
            }
            ';' => {
                self.cursor.advance();
                TokenKind::SColon
            }
            '.' => {
                self.cursor.advance();
                TokenKind::Dot
            }
            '(' => {
                self.cursor.advance();
                TokenKind::LParen
            }
            ')' => {
                self.cursor.advance();
                TokenKind::RParen
            }
            '+' => {
                self.cursor.advance();
                TokenKind::Plus
            }
            '-' => {
                self.cursor.advance();
                TokenKind::Minus
            }
            '*' => {
                self.cursor.advance();
                TokenKind::Mult
            }
            '/' => {
                self.cursor.advance();
                TokenKind::Div
            }
            '=' => {
                self.cursor.advance();
                TokenKind::Eq
            }
            ':' => {
                self.cursor.advance();
                if self.cursor.eat('=') {
                    TokenKind::Assign
                } else {
                    TokenKind::Colon
                }
            }
            '<' => {
                self.cursor.advance();
                if self.cursor.eat('=') {
                    TokenKind::Le
                } else if self.cursor.eat('>') {
                    TokenKind::Ne
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                self.cursor.advance();
                if self.cursor.eat('=') {
                    TokenKind::Ge
                } else {
                    TokenKind::Gt
                }
            }
            c if c.is_ascii_digit() => return self.lex_int_const(start_offset, span),
            c if c.is_ascii_alphabetic() => return self.lex_ident_or_keyword(span),
            other => {
                self.cursor.advance();
                return Err(LexError::UnexpectedCharacter {
                    span,
                    character: other,
                });
            }
        };

        let lexeme = self.source_slice(start_offset);
        Ok(Token::new(kind, lexeme, span))
    }

    fn source_slice(&self, start_offset: usize) -> String {
        // Safe: start_offset..position always falls on char boundaries
        // because every branch above advances whole chars.
        self.source[start_offset..self.cursor.position()].to_string()
    }

    fn lex_int_const(&mut self, start_offset: usize, span: tpc_util::Span) -> Result<Token, LexError> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let text = self.source_slice(start_offset);
        let value: i32 = text.parse().map_err(|_| LexError::IntegerOverflow {
            span,
            text: text.clone(),
        })?;
        Ok(Token::new(TokenKind::IntConst(value), text, span))
    }

    fn lex_ident_or_keyword(&mut self, span: tpc_util::Span) -> Result<Token, LexError> {
        let start_offset = self.cursor.position();
        while {
            let c = self.cursor.current_char();
            c.is_ascii_alphanumeric() || c == '_'
        } {
            self.cursor.advance();
        }
        let text = self.source_slice(start_offset);
        let upper = text.to_ascii_uppercase();
        let kind = keyword_from_upper(&upper).unwrap_or_else(|| TokenKind::Ident(text.clone()));
        Ok(Token::new(kind, text, span))
    }
}
