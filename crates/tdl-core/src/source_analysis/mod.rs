// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexing and parsing for TDL source text.
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts source text into a stream of [`Token`]s. Each
//! token carries its source location via [`Span`]. Trivia (whitespace,
//! newlines, comments) stays in the stream; [`parse`] filters it out and
//! collects comments onto the document.
//!
//! ```
//! use tdl_core::source_analysis::{TokenKind, lex};
//!
//! let tokens = lex("link: Link16");
//! assert_eq!(tokens[0].kind(), TokenKind::Keyword);
//! ```
//!
//! # Parsing
//!
//! The [`parse`] function converts tokens into a
//! [`Document`](crate::ast::Document) plus parse diagnostics. It never
//! fails; malformed input produces a partial AST and precise
//! [`Diagnostic`]s.
//!
//! # Error Handling
//!
//! The lexer uses error recovery: invalid input becomes
//! [`TokenKind::Unknown`] tokens rather than stopping the scan. Use
//! [`lex_errors`] to turn those into structured [`LexError`]s with miette
//! integration.

mod error;
mod lexer;
mod parser;
mod span;
mod token;

// Property-based tests for the lexer
#[cfg(test)]
mod lexer_property_tests;

pub use error::{LexError, LexErrorKind, lex_errors};
pub use lexer::{Lexer, lex};
pub use parser::{Diagnostic, Severity, is_input_complete, parse};
pub use span::Span;
pub use token::{KEYWORDS, Token, TokenKind, is_keyword};
