// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Structured lexical error types.
//!
//! The lexer itself never fails; stray input surfaces as
//! [`TokenKind::Unknown`] tokens and unterminated strings stay typed as
//! strings. Hosts that want structured, renderable errors can run
//! [`lex_errors`] over a token stream to recover them. Errors carry source
//! locations ([`Span`]) and integrate with [`miette`] for report rendering.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use super::{Span, Token, TokenKind};

/// A lexical error recovered from a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct LexError {
    /// The kind of lexical error.
    #[source]
    pub kind: LexErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character (or operator prefix) with no valid interpretation.
    #[error("unexpected input '{0}'")]
    UnexpectedInput(ecow::EcoString),

    /// A string literal that ran into a newline or end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
}

/// Extracts structured errors from a lexed token stream.
///
/// `Unknown` tokens map to [`LexErrorKind::UnexpectedInput`]; `String`
/// tokens whose lexeme is missing the closing quote map to
/// [`LexErrorKind::UnterminatedString`].
///
/// # Examples
///
/// ```
/// use tdl_core::source_analysis::{lex, lex_errors};
///
/// let errors = lex_errors(&lex("net ~ \"oops"));
/// assert_eq!(errors.len(), 2);
/// ```
#[must_use]
pub fn lex_errors(tokens: &[Token]) -> Vec<LexError> {
    let mut errors = Vec::new();

    for token in tokens {
        match token.kind() {
            TokenKind::Unknown => {
                errors.push(LexError::new(
                    LexErrorKind::UnexpectedInput(token.text_eco()),
                    token.span(),
                ));
            }
            TokenKind::String => {
                let text = token.text();
                let terminated = text.len() >= 2 && text.ends_with('"');
                if !terminated {
                    errors.push(LexError::new(LexErrorKind::UnterminatedString, token.span()));
                }
            }
            _ => {}
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::lex;

    #[test]
    fn lex_error_display() {
        let err = LexError::new(
            LexErrorKind::UnexpectedInput("~".into()),
            Span::new(1, 1, 0, 1),
        );
        assert_eq!(err.to_string(), "unexpected input '~'");

        let err = LexError::new(LexErrorKind::UnterminatedString, Span::new(1, 1, 0, 5));
        assert_eq!(err.to_string(), "unterminated string literal");
    }

    #[test]
    fn clean_input_has_no_errors() {
        assert!(lex_errors(&lex("network \"X\" { link: Link16 }")).is_empty());
    }

    #[test]
    fn unknown_token_becomes_error() {
        let errors = lex_errors(&lex("net = 1"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, LexErrorKind::UnexpectedInput("=".into()));
    }

    #[test]
    fn unterminated_string_becomes_error() {
        let errors = lex_errors(&lex("\"oops\n"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, LexErrorKind::UnterminatedString);
        assert_eq!(errors[0].span.length(), 5);
    }

    #[test]
    fn lone_quote_is_unterminated() {
        let errors = lex_errors(&lex("\""));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, LexErrorKind::UnterminatedString);
    }
}
