// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Declaration parsing for TDL.
//!
//! This module handles the declaration layer of the grammar:
//!
//! ```text
//! document   = { network }
//! network    = "network" string "{" { net-body } "}"
//! net-body   = property | terminal | net | subnetwork | messages | filters
//! terminal   = "terminal"   string "{" { property } "}"
//! net        = "net"        string "{" { property } "}"
//! subnet     = "subnetwork" string "{" { property | member } "}"
//! member     = "member"     string "{" { property } "}"
//! messages   = "messages"   "{" { msg-entry } "}"
//! filters    = "filters"    "{" { ("inbound"|"outbound") "{" { rule } "}" } "}"
//! ```
//!
//! Property and value parsing lives in the sibling `properties` module.

use ecow::EcoString;

use crate::ast::{
    Comment, Document, FilterAction, FilterBlock, FilterRule, MISSING_NAME, Member,
    MessageCatalog, MessageEntry, Net, Network, Property, Subnetwork, Terminal,
};
use crate::source_analysis::{Span, TokenKind};

use super::Parser;

impl Parser {
    /// Parses a whole document: a sequence of network declarations.
    ///
    /// Stray top-level tokens are reported and skipped singly so one bad
    /// character cannot hide a later declaration.
    pub(super) fn parse_document(&mut self, comments: Vec<Comment>) -> Document {
        let start = self.current_token().span();
        let mut networks = Vec::new();

        while !self.is_at_end() {
            if self.at_keyword("network") {
                if let Some(network) = self.parse_network() {
                    networks.push(network);
                }
            } else {
                self.expected("network");
                self.advance();
            }
        }

        let span = if networks.is_empty() {
            start
        } else {
            start.merge(self.previous_span())
        };

        Document::new(networks, comments, span)
    }

    /// Parses one `network` declaration.
    fn parse_network(&mut self) -> Option<Network> {
        let start = self.current_token().span();
        self.advance(); // `network`

        let name = self.parse_name("network name");

        if !self.match_kind(TokenKind::LBrace) {
            self.expected("{");
            self.synchronize();
            return None;
        }

        let mut network = Network::new(name, start);

        loop {
            if self.match_kind(TokenKind::RBrace) {
                break;
            }
            if self.is_at_end() {
                self.expected("}");
                break;
            }

            // Property keys may be keywords (`net: ...`), so the key-colon
            // check comes before declaration dispatch.
            if self.at_property() {
                if let Some(property) = self.parse_property() {
                    network.properties.push(property);
                } else {
                    self.synchronize();
                }
            } else if self.at_keyword("terminal") {
                if let Some(terminal) = self.parse_terminal() {
                    network.terminals.push(terminal);
                }
            } else if self.at_keyword("net") {
                if let Some(net) = self.parse_net() {
                    network.nets.push(net);
                }
            } else if self.at_keyword("subnetwork") {
                if let Some(subnetwork) = self.parse_subnetwork() {
                    network.subnetworks.push(subnetwork);
                }
            } else if self.at_keyword("messages") {
                if let Some(catalog) = self.parse_messages() {
                    match &mut network.messages {
                        // A second catalog appends to the first.
                        Some(existing) => existing.entries.extend(catalog.entries),
                        None => network.messages = Some(catalog),
                    }
                }
            } else if self.at_keyword("filters") {
                if let Some(block) = self.parse_filters() {
                    match &mut network.filters {
                        Some(existing) => {
                            existing.inbound.extend(block.inbound);
                            existing.outbound.extend(block.outbound);
                        }
                        None => network.filters = Some(block),
                    }
                }
            } else if self.at_keyword("network") {
                // A nested `network` means the closing brace went missing;
                // hand the token back to the document loop.
                self.expected("}");
                break;
            } else {
                self.error(format!(
                    "Unexpected token '{}' in network body",
                    self.current_token().text()
                ));
                self.advance();
            }
        }

        network.span = start.merge(self.previous_span());
        Some(network)
    }

    /// Parses a `terminal` declaration.
    fn parse_terminal(&mut self) -> Option<Terminal> {
        let (name, properties, span) = self.parse_property_block("terminal name")?;
        Some(Terminal {
            name,
            properties,
            span,
        })
    }

    /// Parses a `net` declaration.
    fn parse_net(&mut self) -> Option<Net> {
        let (name, properties, span) = self.parse_property_block("net name")?;
        Some(Net {
            name,
            properties,
            span,
        })
    }

    /// Parses a `member` declaration.
    fn parse_member(&mut self) -> Option<Member> {
        let (name, properties, span) = self.parse_property_block("member name")?;
        Some(Member {
            name,
            properties,
            span,
        })
    }

    /// Parses a `subnetwork` declaration, whose body mixes properties and
    /// `member` declarations.
    fn parse_subnetwork(&mut self) -> Option<Subnetwork> {
        let start = self.current_token().span();
        self.advance(); // `subnetwork`

        let name = self.parse_name("subnetwork name");

        if !self.match_kind(TokenKind::LBrace) {
            self.expected("{");
            self.synchronize();
            return None;
        }

        let mut properties = Vec::new();
        let mut members = Vec::new();

        loop {
            if self.match_kind(TokenKind::RBrace) {
                break;
            }
            if self.is_at_end() {
                self.expected("}");
                break;
            }

            if self.at_property() {
                if let Some(property) = self.parse_property() {
                    properties.push(property);
                } else {
                    self.synchronize();
                }
            } else if self.at_keyword("member") {
                if let Some(member) = self.parse_member() {
                    members.push(member);
                }
            } else if self.at_declaration_start() {
                self.expected("}");
                break;
            } else {
                self.error(format!(
                    "Unexpected token '{}' in subnetwork body",
                    self.current_token().text()
                ));
                self.advance();
            }
        }

        Some(Subnetwork {
            name,
            properties,
            members,
            span: start.merge(self.previous_span()),
        })
    }

    /// Shared body of `terminal`, `net`, and `member`: a name string and a
    /// braced property list.
    fn parse_property_block(
        &mut self,
        name_desc: &str,
    ) -> Option<(EcoString, Vec<Property>, Span)> {
        let start = self.current_token().span();
        self.advance(); // declaration keyword

        let name = self.parse_name(name_desc);

        if !self.match_kind(TokenKind::LBrace) {
            self.expected("{");
            self.synchronize();
            return None;
        }

        let mut properties = Vec::new();

        loop {
            if self.match_kind(TokenKind::RBrace) {
                break;
            }
            if self.is_at_end() {
                self.expected("}");
                break;
            }

            if self.at_property() {
                if let Some(property) = self.parse_property() {
                    properties.push(property);
                } else {
                    self.synchronize();
                    break;
                }
            } else if self.at_declaration_start() {
                // Probably a missing `}`; let the enclosing body resume.
                self.expected("}");
                break;
            } else {
                self.error(format!(
                    "Unexpected token '{}' in declaration body",
                    self.current_token().text()
                ));
                self.advance();
            }
        }

        Some((name, properties, start.merge(self.previous_span())))
    }

    /// Parses a declaration name string, substituting [`MISSING_NAME`] when
    /// absent so parsing can continue.
    fn parse_name(&mut self, desc: &str) -> EcoString {
        if self.check(TokenKind::String) {
            let token = self.advance();
            strip_quotes(token.text()).into()
        } else {
            self.expected(desc);
            MISSING_NAME.into()
        }
    }

    // ========================================================================
    // Message catalog
    // ========================================================================

    /// Parses a `messages` block.
    fn parse_messages(&mut self) -> Option<MessageCatalog> {
        let start = self.current_token().span();
        self.advance(); // `messages`

        if !self.match_kind(TokenKind::LBrace) {
            self.expected("{");
            self.synchronize();
            return None;
        }

        let mut entries = Vec::new();

        loop {
            if self.match_kind(TokenKind::RBrace) {
                break;
            }
            if self.is_at_end() {
                self.expected("}");
                break;
            }

            if self.check(TokenKind::JMessage) {
                if let Some(entry) = self.parse_message_entry() {
                    entries.push(entry);
                } else {
                    self.synchronize();
                    break;
                }
            } else if self.at_declaration_start() {
                self.expected("}");
                break;
            } else {
                self.error(format!(
                    "Unexpected token '{}' in messages block",
                    self.current_token().text()
                ));
                self.advance();
            }
        }

        Some(MessageCatalog {
            entries,
            span: start.merge(self.previous_span()),
        })
    }

    /// Parses one catalog entry: `J3/2 { enabled: true }`.
    fn parse_message_entry(&mut self) -> Option<MessageEntry> {
        let start = self.current_token().span();
        let message_id = self.advance().text_eco();

        self.expect(TokenKind::LBrace, "{")?;

        let mut properties = Vec::new();

        loop {
            if self.match_kind(TokenKind::RBrace) {
                break;
            }
            if self.is_at_end() {
                self.expected("}");
                break;
            }

            if self.at_property() {
                if let Some(property) = self.parse_property() {
                    properties.push(property);
                } else {
                    self.synchronize();
                    break;
                }
            } else {
                self.error(format!(
                    "Unexpected token '{}' in message entry",
                    self.current_token().text()
                ));
                self.advance();
            }
        }

        Some(MessageEntry {
            message_id,
            properties,
            span: start.merge(self.previous_span()),
        })
    }

    // ========================================================================
    // Filter block
    // ========================================================================

    /// Parses a `filters` block with its `inbound`/`outbound` sub-blocks.
    fn parse_filters(&mut self) -> Option<FilterBlock> {
        let start = self.current_token().span();
        self.advance(); // `filters`

        if !self.match_kind(TokenKind::LBrace) {
            self.expected("{");
            self.synchronize();
            return None;
        }

        let mut block = FilterBlock::default();

        loop {
            if self.match_kind(TokenKind::RBrace) {
                break;
            }
            if self.is_at_end() {
                self.expected("}");
                break;
            }

            if self.at_keyword("inbound") {
                let rules = self.parse_filter_direction();
                block.inbound.extend(rules);
            } else if self.at_keyword("outbound") {
                let rules = self.parse_filter_direction();
                block.outbound.extend(rules);
            } else if self.at_declaration_start() {
                self.expected("}");
                break;
            } else {
                self.error(format!(
                    "Unexpected token '{}' in filters block",
                    self.current_token().text()
                ));
                self.advance();
            }
        }

        block.span = start.merge(self.previous_span());
        Some(block)
    }

    /// Parses one direction sub-block: `inbound { rule* }`.
    fn parse_filter_direction(&mut self) -> Vec<FilterRule> {
        self.advance(); // `inbound` / `outbound`

        if !self.match_kind(TokenKind::LBrace) {
            self.expected("{");
            self.synchronize();
            return Vec::new();
        }

        let mut rules = Vec::new();

        loop {
            if self.match_kind(TokenKind::RBrace) {
                break;
            }
            if self.is_at_end() {
                self.expected("}");
                break;
            }

            if self.at_keyword("accept") || self.at_keyword("drop") {
                if let Some(rule) = self.parse_filter_rule() {
                    rules.push(rule);
                } else {
                    self.synchronize();
                    break;
                }
            } else if self.at_declaration_start() {
                self.expected("}");
                break;
            } else {
                self.error(format!(
                    "Unexpected token '{}' in filter rules",
                    self.current_token().text()
                ));
                self.advance();
            }
        }

        rules
    }

    /// Parses one rule: `accept J3/2 [where { quality >= 5 }]`.
    fn parse_filter_rule(&mut self) -> Option<FilterRule> {
        let start = self.current_token().span();
        let action = if self.current_token().text() == "accept" {
            FilterAction::Accept
        } else {
            FilterAction::Drop
        };
        self.advance();

        let message_id = self.expect(TokenKind::JMessage, "message identifier")?.text_eco();

        let where_clause = if self.at_keyword("where") {
            self.parse_where_clause()
        } else {
            None
        };

        Some(FilterRule {
            action,
            message_id,
            where_clause,
            span: start.merge(self.previous_span()),
        })
    }
}

/// Strips the surrounding quotes from a string lexeme.
///
/// The closing quote may be absent on an unterminated string.
fn strip_quotes(lexeme: &str) -> &str {
    let inner = lexeme.strip_prefix('"').unwrap_or(lexeme);
    inner.strip_suffix('"').unwrap_or(inner)
}

#[cfg(test)]
mod tests {
    use super::super::parse;
    use crate::ast::{FilterAction, PropertyValue};
    use crate::source_analysis::lex;

    fn networks(source: &str) -> Vec<crate::ast::Network> {
        parse(lex(source)).0.networks
    }

    #[test]
    fn subnetwork_with_members() {
        let nets = networks(
            "network \"X\" { link: Link22 subnetwork \"S\" { operating_mode: NetSlotted \
             member \"A\" { role: Controller } member \"B\" { role: Participant } } }",
        );
        let subnetwork = &nets[0].subnetworks[0];
        assert_eq!(subnetwork.name, "S");
        assert_eq!(subnetwork.properties.len(), 1);
        assert_eq!(subnetwork.members.len(), 2);
        assert_eq!(subnetwork.members[1].name, "B");
    }

    #[test]
    fn message_catalog_entries_in_order() {
        let nets = networks(
            "network \"X\" { messages { J3/2 { enabled: true } J2/2 { enabled: false } } }",
        );
        let catalog = nets[0].messages.as_ref().unwrap();
        assert_eq!(catalog.entries.len(), 2);
        assert_eq!(catalog.entries[0].message_id, "J3/2");
        assert_eq!(catalog.entries[1].message_id, "J2/2");
    }

    #[test]
    fn duplicate_messages_blocks_append() {
        let nets = networks(
            "network \"X\" { messages { J3/2 { } } messages { J2/2 { } } }",
        );
        let catalog = nets[0].messages.as_ref().unwrap();
        assert_eq!(catalog.entries.len(), 2);
    }

    #[test]
    fn filter_rules_with_and_without_where() {
        let nets = networks(
            "network \"X\" { filters { inbound { accept J3/2 where { quality >= 5 } drop J2/2 } \
             outbound { accept J12/6 } } }",
        );
        let filters = nets[0].filters.as_ref().unwrap();
        assert_eq!(filters.inbound.len(), 2);
        assert_eq!(filters.outbound.len(), 1);

        let first = &filters.inbound[0];
        assert_eq!(first.action, FilterAction::Accept);
        assert_eq!(first.message_id, "J3/2");
        let cond = &first.where_clause.as_ref().unwrap().condition;
        assert_eq!(cond.field, "quality");
        assert_eq!(cond.operator, ">=");
        assert_eq!(cond.value, "5");

        assert_eq!(filters.inbound[1].action, FilterAction::Drop);
        assert!(filters.inbound[1].where_clause.is_none());
    }

    #[test]
    fn duplicate_properties_preserved() {
        let nets = networks("network \"X\" { link: Link16 link: Link22 }");
        let props = &nets[0].properties;
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].value, PropertyValue::Identifier("Link16".into()));
        assert_eq!(props[1].value, PropertyValue::Identifier("Link22".into()));
    }

    #[test]
    fn terminal_missing_brace_recovers_to_next_declaration() {
        let nets = networks(
            "network \"X\" { terminal \"A\" role: NetControlStation terminal \"B\" { role: Relay } }",
        );
        // `terminal \"A\"` without `{` is dropped; B survives.
        assert_eq!(nets.len(), 1);
        let terminals = &nets[0].terminals;
        assert_eq!(terminals.len(), 1);
        assert_eq!(terminals[0].name, "B");
    }

    #[test]
    fn keyword_named_property_not_mistaken_for_declaration() {
        // `net:` is a property key even though `net` is a declaration word.
        let nets = networks("network \"X\" { net: fallback }");
        assert_eq!(nets[0].properties.len(), 1);
        assert_eq!(nets[0].properties[0].key, "net");
        assert!(nets[0].nets.is_empty());
    }
}
