// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property and value parsing for TDL.
//!
//! ```text
//! property = key ":" value [","]
//! key      = identifier | keyword
//! value    = string | number | percent | duration | boolean
//!          | hex | identifier | keyword | array | j-message
//! array    = "[" [ item { "," item } ] "]"
//! cond     = field op value
//! ```
//!
//! Each [`PropertyValue`] variant is chosen solely by the producing token
//! kind; there is no coercion, so exporters can trust the tag.

use crate::ast::{Condition, Property, PropertyValue, WhereClause};
use crate::source_analysis::TokenKind;

use super::Parser;

impl Parser {
    /// Returns `true` if the current position looks like `key ":"`.
    pub(super) fn at_property(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Identifier | TokenKind::Keyword
        ) && self.peek_kind() == TokenKind::Colon
    }

    /// Parses one property assignment. Only called when [`Self::at_property`]
    /// holds, so the key and colon are already certain.
    pub(super) fn parse_property(&mut self) -> Option<Property> {
        let key_token = self.advance();
        let start = key_token.span();
        self.advance(); // `:`

        let value = self.parse_value()?;
        let span = start.merge(self.previous_span());

        // Optional trailing comma, consumed silently and excluded from the span.
        self.match_kind(TokenKind::Comma);

        Some(Property::new(key_token.text_eco(), value, span))
    }

    /// Parses a property value.
    fn parse_value(&mut self) -> Option<PropertyValue> {
        match self.current_kind() {
            TokenKind::String => {
                let token = self.advance();
                Some(PropertyValue::String(strip_quotes(token.text()).into()))
            }
            TokenKind::Number => {
                let token = self.advance();
                Some(PropertyValue::Number(parse_numeric(token.text())))
            }
            TokenKind::Percent => {
                let token = self.advance();
                let digits = token.text().strip_suffix('%').unwrap_or(token.text());
                Some(PropertyValue::Percent(parse_numeric(digits)))
            }
            TokenKind::Duration => {
                let token = self.advance();
                Some(PropertyValue::Duration(token.text_eco()))
            }
            TokenKind::Boolean => {
                let token = self.advance();
                Some(PropertyValue::Boolean(token.text() == "true"))
            }
            TokenKind::HexNumber => {
                let token = self.advance();
                Some(PropertyValue::Hex(token.text_eco()))
            }
            TokenKind::Identifier | TokenKind::Keyword | TokenKind::JMessage => {
                let token = self.advance();
                Some(PropertyValue::Identifier(token.text_eco()))
            }
            TokenKind::LBracket => self.parse_array(),
            _ => {
                self.expected("value");
                None
            }
        }
    }

    /// Parses a bracketed array of identifier/keyword/J-message/string items.
    ///
    /// Separating commas are consumed permissively; a missing comma between
    /// items is tolerated rather than reported.
    fn parse_array(&mut self) -> Option<PropertyValue> {
        self.advance(); // `[`
        let mut items = Vec::new();

        loop {
            if self.match_kind(TokenKind::RBracket) {
                break;
            }
            if self.is_at_end() {
                self.expected("]");
                break;
            }

            match self.current_kind() {
                TokenKind::Identifier | TokenKind::Keyword | TokenKind::JMessage => {
                    items.push(self.advance().text_eco());
                }
                TokenKind::String => {
                    let token = self.advance();
                    items.push(strip_quotes(token.text()).into());
                }
                TokenKind::Comma => {
                    self.advance();
                }
                _ => {
                    self.error(format!(
                        "Unexpected token '{}' in array",
                        self.current_token().text()
                    ));
                    self.advance();
                }
            }
        }

        Some(PropertyValue::Array(items))
    }

    // ========================================================================
    // Where clauses
    // ========================================================================

    /// Parses `where "{" cond "}"` after a filter rule.
    pub(super) fn parse_where_clause(&mut self) -> Option<WhereClause> {
        let start = self.current_token().span();
        self.advance(); // `where`

        if !self.match_kind(TokenKind::LBrace) {
            self.expected("{");
            return None;
        }

        let Some(condition) = self.parse_condition() else {
            self.synchronize();
            return None;
        };

        if !self.match_kind(TokenKind::RBrace) {
            self.expected("}");
        }

        Some(WhereClause {
            condition,
            span: start.merge(self.previous_span()),
        })
    }

    /// Parses `field op value`, keeping operator and value as raw lexemes.
    fn parse_condition(&mut self) -> Option<Condition> {
        let start = self.current_token().span();

        let field = if matches!(
            self.current_kind(),
            TokenKind::Identifier | TokenKind::Keyword
        ) {
            self.advance().text_eco()
        } else {
            self.expected("field");
            return None;
        };

        let operator = if self.current_kind().is_comparison() {
            self.advance().text_eco()
        } else {
            self.expected("comparison operator");
            return None;
        };

        let value = if matches!(
            self.current_kind(),
            TokenKind::String
                | TokenKind::Number
                | TokenKind::HexNumber
                | TokenKind::Percent
                | TokenKind::Duration
                | TokenKind::Boolean
                | TokenKind::Identifier
                | TokenKind::Keyword
                | TokenKind::JMessage
        ) {
            self.advance().text_eco()
        } else {
            self.expected("value");
            return None;
        };

        Some(Condition {
            field,
            operator,
            value,
            span: start.merge(self.previous_span()),
        })
    }
}

/// Strips the surrounding quotes from a string lexeme.
fn strip_quotes(lexeme: &str) -> &str {
    let inner = lexeme.strip_prefix('"').unwrap_or(lexeme);
    inner.strip_suffix('"').unwrap_or(inner)
}

/// Parses the digits of a number/percent lexeme.
///
/// The lexer guarantees the shape, so failure cannot actually occur; zero
/// keeps the parser total.
fn parse_numeric(digits: &str) -> f64 {
    digits.parse().unwrap_or_default()
}
