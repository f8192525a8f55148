// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for TDL source text.
//!
//! This parser builds a [`Document`] from a stream of tokens. It is designed
//! for editor use with comprehensive error recovery and diagnostics.
//!
//! # Design Philosophy
//!
//! - **Error recovery is mandatory** — the parser MUST always produce an AST
//! - **Multiple errors** — report all errors, don't stop at the first
//! - **Precise spans** — every diagnostic points to an exact source location
//! - **Synchronization points** — recover at `}` and declaration keywords
//!
//! # Recovery discipline
//!
//! Each production consumes only its own closing brace on success. On an
//! expectation failure the production reports `Expected '<x>', got '<y>'`,
//! returns `None`, and [`Parser::synchronize`] advances to the next safe
//! boundary: a `}` (which is consumed), the start of a declaration
//! (`network`, `terminal`, `net`, `subnetwork`, `messages`, `filters`), or
//! end of input.
//!
//! # Usage
//!
//! ```
//! use tdl_core::source_analysis::{lex, parse};
//!
//! let (document, diagnostics) = parse(lex("network \"X\" { link: Link16 }"));
//! assert!(diagnostics.is_empty());
//! assert_eq!(document.networks.len(), 1);
//! ```

use ecow::EcoString;
use serde::Serialize;

use crate::ast::{Comment, Document};
use crate::source_analysis::{Span, Token, TokenKind, lex};

// Submodules with additional impl blocks for Parser
mod declarations;
mod properties;

/// Parse a token stream into a document.
///
/// This is the main entry point for parsing. Trivia tokens are filtered out
/// here (comments are collected onto the [`Document`] in source order); the
/// grammar productions only ever see significant tokens. A [`Document`] is
/// always returned, even for badly broken input — check the diagnostics.
#[must_use]
pub fn parse(tokens: Vec<Token>) -> (Document, Vec<Diagnostic>) {
    let mut comments = Vec::new();
    let mut significant = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.kind() {
            TokenKind::Comment => comments.push(Comment {
                text: token.text_eco(),
                span: token.span(),
            }),
            TokenKind::Whitespace | TokenKind::Newline => {}
            _ => significant.push(token),
        }
    }

    let mut parser = Parser::new(significant);
    let document = parser.parse_document(comments);
    (document, parser.diagnostics)
}

/// Checks whether the given source text appears syntactically complete.
///
/// This is a heuristic used by interactive hosts to decide whether to run a
/// buffer through [`parse`] or show a continuation prompt for multi-line
/// input. It returns `false` (incomplete) when:
///
/// - Braces or brackets are unclosed
/// - A string literal is unterminated
/// - The last significant token is a `:`, a `,`, or a comparison operator,
///   all of which expect something to their right
///
/// Extra closing delimiters are treated as complete so the host can surface
/// the syntax error rather than waiting forever.
///
/// # Examples
///
/// ```
/// use tdl_core::source_analysis::is_input_complete;
///
/// assert!(is_input_complete("network \"X\" { }"));
/// assert!(!is_input_complete("network \"X\" {"));
/// assert!(!is_input_complete("link:"));
/// ```
#[must_use]
pub fn is_input_complete(source: &str) -> bool {
    if source.trim().is_empty() {
        return true;
    }

    let tokens = lex(source);

    let mut brace_depth: i32 = 0;
    let mut bracket_depth: i32 = 0;
    let mut last_significant: Option<TokenKind> = None;

    for token in &tokens {
        match token.kind() {
            TokenKind::String => {
                let text = token.text();
                if text.len() < 2 || !text.ends_with('"') {
                    return false;
                }
            }
            TokenKind::LBrace => brace_depth += 1,
            TokenKind::RBrace => brace_depth -= 1,
            TokenKind::LBracket => bracket_depth += 1,
            TokenKind::RBracket => bracket_depth -= 1,
            _ => {}
        }

        let kind = token.kind();
        if !kind.is_trivia() && !kind.is_eof() {
            last_significant = Some(kind);
        }
    }

    if brace_depth > 0 || bracket_depth > 0 {
        return false;
    }

    // A trailing `:`/`,`/comparison expects a right-hand side.
    match last_significant {
        Some(TokenKind::Colon | TokenKind::Comma) => false,
        Some(kind) if kind.is_comparison() => false,
        _ => true,
    }
}

/// A diagnostic produced by the parser or validator.
///
/// This record is a stable contract with editor hosts: syntax diagnostics
/// carry no `rule`; validator diagnostics always do, plus a `spec_ref` when
/// a spec section is known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// The severity of the diagnostic.
    pub severity: Severity,
    /// The human-readable message.
    pub message: EcoString,
    /// The source location.
    pub span: Span,
    /// Stable rule code for validator diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
    /// Reference into the underlying link specification, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_ref: Option<EcoString>,
}

impl Diagnostic {
    /// Creates a new error diagnostic (no rule code; used by the parser).
    #[must_use]
    pub fn error(message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            span,
            rule: None,
            spec_ref: None,
        }
    }

    /// Creates an error diagnostic carrying a validation rule code.
    #[must_use]
    pub fn rule_error(rule: &'static str, message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            span,
            rule: Some(rule),
            spec_ref: None,
        }
    }

    /// Creates a warning diagnostic carrying a validation rule code.
    #[must_use]
    pub fn rule_warning(rule: &'static str, message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            span,
            rule: Some(rule),
            spec_ref: None,
        }
    }

    /// Attaches a spec reference.
    #[must_use]
    pub fn with_spec_ref(mut self, spec_ref: impl Into<EcoString>) -> Self {
        self.spec_ref = Some(spec_ref.into());
        self
    }
}

/// Diagnostic severity level.
///
/// The engine emits only `Error` and `Warning`; `Info` is reserved for
/// advisory notes and `Hint` for host-side quick-fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A defect that makes the configuration invalid.
    Error,
    /// A questionable construct that should be addressed.
    Warning,
    /// An advisory note.
    Info,
    /// A host-side quick-fix suggestion.
    Hint,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Hint => "hint",
        })
    }
}

/// The parser state.
///
/// Holds the significant-token stream, a cursor, and the accumulated
/// diagnostics; each production is a method that reads this state.
pub(super) struct Parser {
    /// The tokens being parsed (trivia already filtered, EOF-terminated).
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Accumulated diagnostics.
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Creates a new parser for the given significant tokens.
    fn new(mut tokens: Vec<Token>) -> Self {
        // Guarantee an EOF terminator so current_token never runs dry.
        if !tokens.last().is_some_and(|t| t.kind().is_eof()) {
            let span = tokens
                .last()
                .map_or_else(|| Span::new(1, 1, 0, 0), |t| {
                    Span::new(t.span().line(), t.span().column(), t.span().end(), 0)
                });
            tokens.push(Token::new(TokenKind::Eof, "", span));
        }
        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Returns the current token.
    pub(super) fn current_token(&self) -> &Token {
        self.tokens
            .get(self.current)
            .unwrap_or_else(|| &self.tokens[self.tokens.len() - 1])
    }

    /// Returns the current token kind.
    pub(super) fn current_kind(&self) -> TokenKind {
        self.current_token().kind()
    }

    /// Peeks at the token after the current one.
    pub(super) fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.current + 1)
            .map_or(TokenKind::Eof, Token::kind)
    }

    /// Checks if we're at the end of input.
    pub(super) fn is_at_end(&self) -> bool {
        self.current_kind().is_eof()
    }

    /// Returns the span of the most recently consumed token.
    ///
    /// Composite nodes end at the last accepted token; this is that anchor.
    pub(super) fn previous_span(&self) -> Span {
        if self.current == 0 {
            self.current_token().span()
        } else {
            self.tokens[self.current - 1].span()
        }
    }

    /// Advances to the next token and returns the consumed one.
    pub(super) fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.tokens[self.current - 1].clone()
    }

    /// Checks if the current token has the given kind.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consumes the current token if it has the given kind.
    pub(super) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns `true` if the current token is the given keyword.
    pub(super) fn at_keyword(&self, word: &str) -> bool {
        self.current_token().is_keyword(word)
    }

    /// Expects a token of the given kind, advancing on a match.
    ///
    /// `expected` is the human spelling used in the diagnostic. On a
    /// mismatch, reports `Expected '<x>', got '<y>'` and returns `None`.
    pub(super) fn expect(&mut self, kind: TokenKind, expected: &str) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            self.expected(expected);
            None
        }
    }

    // ========================================================================
    // Error Handling & Recovery
    // ========================================================================

    /// Reports an `Expected '<x>', got '<y>'` error at the current token.
    pub(super) fn expected(&mut self, expected: &str) {
        let message = format!("Expected '{expected}', got {}", self.describe_current());
        let span = self.current_token().span();
        self.diagnostics.push(Diagnostic::error(message, span));
    }

    /// Reports a plain error at the current token.
    pub(super) fn error(&mut self, message: impl Into<EcoString>) {
        let span = self.current_token().span();
        self.diagnostics.push(Diagnostic::error(message, span));
    }

    /// Describes the current token for an error message.
    fn describe_current(&self) -> String {
        let token = self.current_token();
        if token.kind().is_eof() {
            "end of input".to_string()
        } else {
            format!("'{}'", token.text())
        }
    }

    /// Returns `true` if the current token starts a declaration.
    pub(super) fn at_declaration_start(&self) -> bool {
        self.current_kind() == TokenKind::Keyword
            && matches!(
                self.current_token().text(),
                "network" | "terminal" | "net" | "subnetwork" | "messages" | "filters"
            )
    }

    /// Synchronizes the parser to a safe recovery point.
    ///
    /// Advances until a `}` is found (and consumed), a declaration keyword
    /// is next, or end of input is reached.
    pub(super) fn synchronize(&mut self) {
        while !self.is_at_end() {
            if self.match_kind(TokenKind::RBrace) {
                return;
            }
            if self.at_declaration_start() {
                return;
            }
            self.advance();
        }
    }
}
