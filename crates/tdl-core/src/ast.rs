// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for TDL documents.
//!
//! The AST represents a tactical data link configuration after parsing.
//! Every node carries a [`Span`] for diagnostics and IDE features.
//!
//! # Design Philosophy
//!
//! This AST is designed for editor tooling first:
//!
//! - **All nodes have spans** — required for markers, outline, hover
//! - **Error recovery** — the parser can produce partial documents; a
//!   declaration with a missing name gets the placeholder `<missing>`
//! - **Source order preserved** — every repeating child list keeps the
//!   order in which declarations appeared, including duplicate property
//!   keys and duplicate message ids (the validator decides what to flag)
//! - **No source back-references** — nodes carry spans, never text slices
//!
//! # Example
//!
//! ```
//! use tdl_core::analyze;
//!
//! let analysis = analyze("network \"X\" { link: Link16 }");
//! assert_eq!(analysis.document.networks.len(), 1);
//! assert_eq!(analysis.document.networks[0].name, "X");
//! ```

use ecow::EcoString;

use crate::source_analysis::Span;

/// Placeholder name used when a declaration's name string is missing.
///
/// The parser substitutes this and keeps going; the validator cannot match
/// such a node by name, which is acceptable for partial input.
pub const MISSING_NAME: &str = "<missing>";

/// Top-level container for a parsed TDL document.
///
/// A document owns an ordered sequence of [`Network`] declarations plus the
/// comments collected from the token stream, in source order, so a host can
/// attach them to nodes by offset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Network declarations in source order.
    pub networks: Vec<Network>,
    /// All comments in the source, in source order.
    pub comments: Vec<Comment>,
    /// Source location spanning the entire document.
    pub span: Span,
}

impl Document {
    /// Creates a new document.
    #[must_use]
    pub fn new(networks: Vec<Network>, comments: Vec<Comment>, span: Span) -> Self {
        Self {
            networks,
            comments,
            span,
        }
    }
}

/// A comment lexeme (`-- ...`), kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// The comment text including the leading `--`.
    pub text: EcoString,
    /// Source location of the comment.
    pub span: Span,
}

/// A `network` declaration: the root of one link configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    /// The network's declared name.
    pub name: EcoString,
    /// Property assignments (link type, classification, ...), source order.
    pub properties: Vec<Property>,
    /// `terminal` declarations, source order.
    pub terminals: Vec<Terminal>,
    /// `net` declarations, source order.
    pub nets: Vec<Net>,
    /// `subnetwork` declarations, source order.
    pub subnetworks: Vec<Subnetwork>,
    /// The `messages` catalog, if declared.
    pub messages: Option<MessageCatalog>,
    /// The `filters` block, if declared.
    pub filters: Option<FilterBlock>,
    /// Span from the `network` keyword to the closing brace.
    pub span: Span,
}

impl Network {
    /// Creates an empty network with the given name.
    #[must_use]
    pub fn new(name: impl Into<EcoString>, span: Span) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            terminals: Vec::new(),
            nets: Vec::new(),
            subnetworks: Vec::new(),
            messages: None,
            filters: None,
            span,
        }
    }
}

/// A `terminal` declaration: one Link-16 participant.
#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    /// The terminal's declared name.
    pub name: EcoString,
    /// Property assignments, source order.
    pub properties: Vec<Property>,
    /// Span of the whole declaration.
    pub span: Span,
}

/// A `net` declaration: one Link-16 net (time-slot pool).
#[derive(Debug, Clone, PartialEq)]
pub struct Net {
    /// The net's declared name.
    pub name: EcoString,
    /// Property assignments, source order.
    pub properties: Vec<Property>,
    /// Span of the whole declaration.
    pub span: Span,
}

/// A `subnetwork` declaration: one Link-22 NILE subnetwork.
#[derive(Debug, Clone, PartialEq)]
pub struct Subnetwork {
    /// The subnetwork's declared name.
    pub name: EcoString,
    /// Property assignments, source order.
    pub properties: Vec<Property>,
    /// `member` declarations, source order.
    pub members: Vec<Member>,
    /// Span of the whole declaration.
    pub span: Span,
}

/// A `member` declaration: one Link-22 unit inside a subnetwork.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// The member's declared name.
    pub name: EcoString,
    /// Property assignments, source order.
    pub properties: Vec<Property>,
    /// Span of the whole declaration.
    pub span: Span,
}

/// A `messages` catalog: which J-messages the network exchanges.
///
/// Entries preserve source order; duplicate message ids are syntactically
/// permitted.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCatalog {
    /// Message entries, source order.
    pub entries: Vec<MessageEntry>,
    /// Span of the whole block.
    pub span: Span,
}

/// One entry in a [`MessageCatalog`], like `J3/2 { enabled: true }`.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEntry {
    /// The message identifier lexeme, like `J3/2`.
    pub message_id: EcoString,
    /// Property assignments, source order.
    pub properties: Vec<Property>,
    /// Span of the whole entry.
    pub span: Span,
}

/// A `filters` block with inbound and outbound rule lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterBlock {
    /// Rules applied to inbound traffic, source order.
    pub inbound: Vec<FilterRule>,
    /// Rules applied to outbound traffic, source order.
    pub outbound: Vec<FilterRule>,
    /// Span of the whole block.
    pub span: Span,
}

/// A single filter rule: `accept J3/2 where { quality >= 5 }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRule {
    /// Whether matching traffic is accepted or dropped.
    pub action: FilterAction,
    /// The message identifier the rule matches.
    pub message_id: EcoString,
    /// Optional condition; a rule without one matches all.
    pub where_clause: Option<WhereClause>,
    /// Span of the whole rule.
    pub span: Span,
}

/// The action of a [`FilterRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterAction {
    /// `accept`
    Accept,
    /// `drop`
    Drop,
}

impl FilterAction {
    /// The source spelling of this action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Drop => "drop",
        }
    }
}

impl std::fmt::Display for FilterAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `where { ... }` clause owning one condition.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    /// The condition inside the braces.
    pub condition: Condition,
    /// Span from `where` to the closing brace.
    pub span: Span,
}

/// A comparison of the form `field op value`, e.g. `quality >= 5`.
///
/// The operator and value are kept as verbatim lexemes; the engine does not
/// evaluate conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// The field being compared (identifier or keyword lexeme).
    pub field: EcoString,
    /// The comparison operator lexeme (`>=`, `==`, ...).
    pub operator: EcoString,
    /// The right-hand-side value lexeme.
    pub value: EcoString,
    /// Span from field to value.
    pub span: Span,
}

/// A property assignment: `key: value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The property key (identifier or keyword lexeme).
    pub key: EcoString,
    /// The property value.
    pub value: PropertyValue,
    /// Span from key to value.
    pub span: Span,
}

impl Property {
    /// Creates a new property.
    #[must_use]
    pub fn new(key: impl Into<EcoString>, value: PropertyValue, span: Span) -> Self {
        Self {
            key: key.into(),
            value,
            span,
        }
    }
}

/// The value of a [`Property`].
///
/// One variant per producing token kind; the parser never coerces between
/// variants, so an exporter can rely on the tag alone. `Hex` and `Duration`
/// keep their raw lexemes.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A quoted string, stored without the quotes.
    String(EcoString),
    /// A decimal number.
    Number(f64),
    /// A percentage; `60%` stores `60.0`.
    Percent(f64),
    /// A duration, kept as the raw lexeme (`500ms`).
    Duration(EcoString),
    /// A boolean.
    Boolean(bool),
    /// An identifier or keyword reference (`Link16`, `NPG_7`, `enabled`).
    Identifier(EcoString),
    /// A hex literal, kept as the raw lexeme (`0x1A4`).
    Hex(EcoString),
    /// A bracketed list of identifier/keyword/J-message/string items.
    Array(Vec<EcoString>),
}

impl PropertyValue {
    /// Returns the text of an `Identifier` or `String` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Identifier(text) | Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric value of a `Number` or `Percent`.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) | Self::Percent(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value of a `Boolean`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the items of an `Array`.
    #[must_use]
    pub fn as_array(&self) -> Option<&[EcoString]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` for the `Hex` variant.
    #[must_use]
    pub const fn is_hex(&self) -> bool {
        matches!(self, Self::Hex(_))
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(text) => write!(f, "\"{text}\""),
            Self::Number(n) => write!(f, "{n}"),
            Self::Percent(n) => write!(f, "{n}%"),
            Self::Duration(raw) | Self::Hex(raw) | Self::Identifier(raw) => f.write_str(raw),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(item)?;
                }
                f.write_str("]")
            }
        }
    }
}
