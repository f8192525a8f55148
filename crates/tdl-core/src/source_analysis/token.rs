// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for TDL lexical analysis.
//!
//! The lexer produces [`Token`]s carrying a [`TokenKind`], the verbatim
//! source lexeme, and a [`Span`]. Trivia (whitespace, newlines, comments)
//! is kept in the stream so editor hosts can reconstruct layout; the parser
//! filters it out before consuming.

use ecow::EcoString;

use super::Span;

/// The kind of a token.
///
/// A closed set: literals, identifiers and keywords, punctuation, comparison
/// operators, trivia, and the two sentinels. The lexeme itself lives on
/// [`Token`]; kinds are plain tags so they stay `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Literals ===
    /// A double-quoted string: `"Alpha Net"` (no escapes).
    String,
    /// A decimal number: `42`, `3.5`.
    Number,
    /// A hex number: `0x1A4`.
    HexNumber,
    /// A percentage: `60%`.
    Percent,
    /// A duration: `12s`, `500ms`, `5min`, `1h`.
    Duration,
    /// A boolean: `true` or `false`.
    Boolean,

    // === Identifiers and keywords ===
    /// A reserved word: `network`, `terminal`, `tsdf`, ...
    Keyword,
    /// A non-reserved identifier: `Link16`, `NPG_7`, `my-net`.
    Identifier,
    /// A J-series message identifier: `J3/2`, `J12`.
    JMessage,

    // === Punctuation ===
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,

    // === Comparison operators ===
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `==`
    EqualEqual,
    /// `!=`
    NotEqual,

    // === Trivia ===
    /// A line comment: `-- text` (runs to end of line).
    Comment,
    /// A run of spaces, tabs, or carriage returns.
    Whitespace,
    /// A single `\n`.
    Newline,

    // === Sentinels ===
    /// End of input.
    Eof,
    /// A character (or operator prefix) with no valid interpretation.
    Unknown,
}

impl TokenKind {
    /// Returns `true` for whitespace, newlines, and comments.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Comment | Self::Whitespace | Self::Newline)
    }

    /// Returns `true` if this token can open a property value.
    #[must_use]
    pub const fn is_value_start(self) -> bool {
        matches!(
            self,
            Self::String
                | Self::Number
                | Self::HexNumber
                | Self::Percent
                | Self::Duration
                | Self::Boolean
                | Self::Identifier
                | Self::Keyword
                | Self::JMessage
                | Self::LBracket
        )
    }

    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::GreaterEqual
                | Self::LessEqual
                | Self::Greater
                | Self::Less
                | Self::EqualEqual
                | Self::NotEqual
        )
    }

    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }

    /// A short human-readable name used in diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::HexNumber => "hex number",
            Self::Percent => "percentage",
            Self::Duration => "duration",
            Self::Boolean => "boolean",
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::JMessage => "J-message",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::GreaterEqual => "'>='",
            Self::LessEqual => "'<='",
            Self::Greater => "'>'",
            Self::Less => "'<'",
            Self::EqualEqual => "'=='",
            Self::NotEqual => "'!='",
            Self::Comment => "comment",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::Eof => "end of input",
            Self::Unknown => "unknown token",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// The reserved words of the language.
///
/// Anything lexed as an identifier that appears here becomes a
/// [`TokenKind::Keyword`]; `true`/`false` are handled separately as
/// [`TokenKind::Boolean`].
pub const KEYWORDS: &[&str] = &[
    "network",
    "terminal",
    "net",
    "subnetwork",
    "member",
    "messages",
    "filters",
    "inbound",
    "outbound",
    "accept",
    "drop",
    "where",
    "link",
    "classification",
    "track_number",
    "platform_type",
    "role",
    "subscribes",
    "transmits",
    "net_number",
    "npg",
    "stacked",
    "stacking_level",
    "tsdf",
    "participants",
    "enabled",
    "operating_mode",
    "data_rate",
    "unit_id",
    "forwarding",
    "quality",
    "age",
];

/// Returns `true` if `text` is a reserved word.
#[must_use]
pub fn is_keyword(text: &str) -> bool {
    // Keep in sync with KEYWORDS above; a match gives zero-allocation lookup.
    matches!(
        text,
        "network"
            | "terminal"
            | "net"
            | "subnetwork"
            | "member"
            | "messages"
            | "filters"
            | "inbound"
            | "outbound"
            | "accept"
            | "drop"
            | "where"
            | "link"
            | "classification"
            | "track_number"
            | "platform_type"
            | "role"
            | "subscribes"
            | "transmits"
            | "net_number"
            | "npg"
            | "stacked"
            | "stacking_level"
            | "tsdf"
            | "participants"
            | "enabled"
            | "operating_mode"
            | "data_rate"
            | "unit_id"
            | "forwarding"
            | "quality"
            | "age"
    )
}

/// A token: kind, verbatim lexeme, and source span.
///
/// # Examples
///
/// ```
/// use tdl_core::source_analysis::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier, "Link16", Span::new(1, 1, 0, 6));
/// assert_eq!(token.text(), "Link16");
/// assert_eq!(token.span().length(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: EcoString,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<EcoString>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the verbatim source lexeme.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the lexeme as an owned [`EcoString`] (cheap clone).
    #[must_use]
    pub fn text_eco(&self) -> EcoString {
        self.text.clone()
    }

    /// Returns the source span of this token.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns `true` if this token is a keyword with the given spelling.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_membership() {
        for word in KEYWORDS {
            assert!(is_keyword(word), "{word} should be reserved");
        }
        assert!(!is_keyword("Link16"));
        assert!(!is_keyword("true"));
        assert!(!is_keyword(""));
    }

    #[test]
    fn trivia_predicate() {
        assert!(TokenKind::Comment.is_trivia());
        assert!(TokenKind::Whitespace.is_trivia());
        assert!(TokenKind::Newline.is_trivia());
        assert!(!TokenKind::Identifier.is_trivia());
        assert!(!TokenKind::Eof.is_trivia());
    }

    #[test]
    fn comparison_predicate() {
        assert!(TokenKind::GreaterEqual.is_comparison());
        assert!(TokenKind::NotEqual.is_comparison());
        assert!(!TokenKind::Colon.is_comparison());
    }

    #[test]
    fn value_start_predicate() {
        assert!(TokenKind::String.is_value_start());
        assert!(TokenKind::LBracket.is_value_start());
        assert!(TokenKind::Keyword.is_value_start());
        assert!(!TokenKind::RBrace.is_value_start());
        assert!(!TokenKind::Comma.is_value_start());
    }

    #[test]
    fn token_accessors() {
        let token = Token::new(TokenKind::Keyword, "network", Span::new(1, 1, 0, 7));
        assert_eq!(token.kind(), TokenKind::Keyword);
        assert_eq!(token.text(), "network");
        assert!(token.is_keyword("network"));
        assert!(!token.is_keyword("net"));
    }

    #[test]
    fn kind_display() {
        assert_eq!(TokenKind::RBrace.to_string(), "'}'");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
        assert_eq!(TokenKind::JMessage.to_string(), "J-message");
    }
}
