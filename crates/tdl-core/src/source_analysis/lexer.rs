// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for TDL source text.
//!
//! This module converts source text into a stream of [`Token`]s. The lexer
//! is hand-written for maximum control over error recovery and span
//! precision.
//!
//! # Design Principles
//!
//! - **Error recovery**: Never fail on malformed input; emit
//!   [`TokenKind::Unknown`] and keep going
//! - **Trivia preservation**: Whitespace, newlines, and comments stay in the
//!   stream so hosts can reconstruct layout; the parser filters them
//! - **Precise spans**: Every token carries line, column, offset, and length
//!
//! # Example
//!
//! ```
//! use tdl_core::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("link: Link16").collect();
//! // keyword, colon, whitespace, identifier (EOF excluded from iterator)
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].kind(), TokenKind::Keyword);
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use super::{Span, Token, TokenKind, token::is_keyword};

/// Returns `true` for characters that may continue an identifier.
const fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Returns `true` for characters that may start an identifier.
const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// A lexer that tokenizes TDL source text.
///
/// Implements [`Iterator`], yielding every token up to (but excluding) the
/// final [`TokenKind::Eof`]; use [`lex`] when the terminator is wanted.
///
/// # Error Recovery
///
/// The lexer never fails. Stray characters become [`TokenKind::Unknown`]
/// tokens of exactly one character; unterminated strings are emitted as
/// [`TokenKind::String`] up to the offending newline, which stays in the
/// stream.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
    /// Current 1-based line.
    line: u32,
    /// Current 1-based column (in characters).
    column: u32,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("line", &self.line)
            .field("column", &self.column)
            .finish()
    }
}

/// A snapshot of the lexer position at the start of a lexeme.
#[derive(Debug, Clone, Copy)]
struct Mark {
    line: u32,
    column: u32,
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Peeks `n+1` characters ahead without consuming (n=0 is the next
    /// character).
    fn peek_char_n(&self, n: usize) -> Option<char> {
        let mut iter = self.chars.clone();
        for _ in 0..n {
            iter.next();
        }
        iter.next().map(|(_, c)| c)
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.peek_char_n(0)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Captures the position before a lexeme starts.
    const fn mark(&self) -> Mark {
        Mark {
            line: self.line,
            column: self.column,
            position: self.position,
        }
    }

    /// Creates a span from a mark to the current position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn span_from(&self, mark: Mark) -> Span {
        Span::new(
            mark.line,
            mark.column,
            mark.position as u32,
            (self.position - mark.position) as u32,
        )
    }

    /// Extracts the source text between a mark and the current position.
    fn text_from(&self, mark: Mark) -> &'src str {
        &self.source[mark.position..self.position]
    }

    /// Lexes the next token. At end of input, returns the EOF token.
    pub fn next_token(&mut self) -> Token {
        let mark = self.mark();

        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(c) => self.lex_token_kind(c),
        };

        Token::new(kind, self.text_from(mark), self.span_from(mark))
    }

    /// Lexes a token kind based on the first character.
    fn lex_token_kind(&mut self, c: char) -> TokenKind {
        match c {
            ' ' | '\t' | '\r' => {
                self.advance_while(|c| matches!(c, ' ' | '\t' | '\r'));
                TokenKind::Whitespace
            }

            '\n' => {
                self.advance();
                TokenKind::Newline
            }

            '-' if self.peek_char_n(1) == Some('-') => {
                self.advance_while(|c| c != '\n');
                TokenKind::Comment
            }

            '"' => self.lex_string(),

            '0'..='9' => self.lex_number(),

            // `J` immediately followed by a digit starts a J-message.
            'J' if self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit()) => self.lex_jmessage(),

            c if is_identifier_start(c) => self.lex_identifier(),

            '{' => {
                self.advance();
                TokenKind::LBrace
            }
            '}' => {
                self.advance();
                TokenKind::RBrace
            }
            '[' => {
                self.advance();
                TokenKind::LBracket
            }
            ']' => {
                self.advance();
                TokenKind::RBracket
            }
            ':' => {
                self.advance();
                TokenKind::Colon
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }

            '>' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '<' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '=' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Unknown
                }
            }
            '!' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::NotEqual
                } else {
                    TokenKind::Unknown
                }
            }

            // Unknown character, consumed singly so progress is guaranteed.
            _ => {
                self.advance();
                TokenKind::Unknown
            }
        }
    }

    /// Lexes a double-quoted string.
    ///
    /// No escape processing; the lexeme keeps the surrounding quotes. An
    /// unterminated string ends before the offending newline (which is not
    /// consumed) or at end of input, and stays typed [`TokenKind::String`].
    fn lex_string(&mut self) -> TokenKind {
        self.advance(); // opening quote

        loop {
            match self.peek_char() {
                None | Some('\n') => break,
                Some('"') => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        TokenKind::String
    }

    /// Lexes a number, hex number, percentage, or duration.
    fn lex_number(&mut self) -> TokenKind {
        // `0x`/`0X` with at least one hex digit is a hex literal.
        if self.peek_char() == Some('0')
            && matches!(self.peek_char_n(1), Some('x' | 'X'))
            && self.peek_char_n(2).is_some_and(|c| c.is_ascii_hexdigit())
        {
            self.advance();
            self.advance();
            self.advance_while(|c| c.is_ascii_hexdigit());
            return TokenKind::HexNumber;
        }

        self.advance_while(|c| c.is_ascii_digit());

        // Fractional part only when a digit follows the dot.
        if self.peek_char() == Some('.') && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
        }

        if self.peek_char() == Some('%') {
            self.advance();
            return TokenKind::Percent;
        }

        if let Some(len) = self.duration_suffix_len() {
            for _ in 0..len {
                self.advance();
            }
            return TokenKind::Duration;
        }

        TokenKind::Number
    }

    /// Checks for a duration suffix (`ms`, `min`, `s`, `h`) at the current
    /// position, returning its character length.
    ///
    /// A suffix only counts when the character after it cannot continue an
    /// identifier; `10s` is a duration but `10stations` is not.
    fn duration_suffix_len(&self) -> Option<usize> {
        let boundary_after = |len: usize| match self.peek_char_n(len) {
            None => true,
            Some(c) => !is_identifier_continue(c),
        };

        match self.peek_char()? {
            'm' => {
                if self.peek_char_n(1) == Some('i')
                    && self.peek_char_n(2) == Some('n')
                    && boundary_after(3)
                {
                    Some(3)
                } else if self.peek_char_n(1) == Some('s') && boundary_after(2) {
                    Some(2)
                } else {
                    None
                }
            }
            's' if boundary_after(1) => Some(1),
            'h' if boundary_after(1) => Some(1),
            _ => None,
        }
    }

    /// Lexes a J-message identifier: `J<digits>` with an optional
    /// `/<digits>` minor part.
    fn lex_jmessage(&mut self) -> TokenKind {
        self.advance(); // J
        self.advance_while(|c| c.is_ascii_digit());

        if self.peek_char() == Some('/') && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance(); // /
            self.advance_while(|c| c.is_ascii_digit());
        }

        TokenKind::JMessage
    }

    /// Lexes an identifier, keyword, or boolean.
    fn lex_identifier(&mut self) -> TokenKind {
        let mark = self.mark();
        self.advance_while(is_identifier_continue);

        match self.text_from(mark) {
            "true" | "false" => TokenKind::Boolean,
            text if is_keyword(text) => TokenKind::Keyword,
            _ => TokenKind::Identifier,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind().is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Tokenizes source text completely, including trivia and the final
/// [`TokenKind::Eof`] token.
///
/// # Examples
///
/// ```
/// use tdl_core::source_analysis::{TokenKind, lex};
///
/// let tokens = lex("net \"A\" {}");
/// assert_eq!(tokens.last().unwrap().kind(), TokenKind::Eof);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token.kind().is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}
