// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Validation passes over a parsed [`Document`].
//!
//! The validator only reads; it never mutates the AST. Each rule is a
//! function `check_<rule>(&Document, &mut Vec<Diagnostic>)` run from
//! [`validate`] in the fixed catalog order below, so the overall output is
//! the concatenation of each rule's output and diagnostics within one rule
//! follow document order. Determinism beats discovery order: when two rules
//! fire on the same node, both emit.
//!
//! Rule levels:
//!
//! - **Semantic** (`semantic` module) — reference and type checks that run
//!   on every network regardless of link type
//! - **Link-16 domain** (`link16` module) — spec rules for networks with
//!   `link: Link16`
//! - **Link-22 domain** (`link22` module) — spec rules for networks with
//!   `link: Link22`
//!
//! Every diagnostic carries a stable rule code from [`code`], and domain
//! diagnostics carry a `spec_ref` when a spec section is known.

use ecow::EcoString;

use crate::ast::{Document, Network, Property};
use crate::source_analysis::{Diagnostic, Span};

mod link16;
mod link22;
mod semantic;

/// Stable rule codes: part of the diagnostic contract with hosts.
pub mod code {
    /// `link` must name a known link type.
    pub const VALID_LINK_TYPE: &str = "valid-link-type";
    /// `classification` must name a declared level.
    pub const VALID_CLASSIFICATION: &str = "valid-classification";
    /// Terminals may not share a `track_number`.
    pub const TRACK_NUMBER_UNIQUENESS: &str = "track-number-uniqueness";
    /// Nets may not share a `net_number`.
    pub const NET_NUMBER_UNIQUENESS: &str = "net-number-uniqueness";
    /// Exactly one net control station per Link-16 network.
    pub const NCS_REQUIRED: &str = "ncs-required";
    /// Roles must come from the link's role table.
    pub const VALID_ROLE: &str = "valid-role";
    /// Platform types must come from the platform table.
    pub const VALID_PLATFORM_TYPE: &str = "valid-platform-type";
    /// Track numbers are bounded by 77777.
    pub const VALID_TRACK_NUMBER: &str = "valid-track-number";
    /// Net numbers are bounded by 127.
    pub const VALID_NET_NUMBER: &str = "valid-net-number";
    /// Per-net TSDF is a percentage.
    pub const VALID_TSDF: &str = "valid-tsdf";
    /// The network-wide TSDF budget.
    pub const TOTAL_TSDF_BUDGET: &str = "total-tsdf-budget";
    /// `stacked` and `stacking_level` must agree.
    pub const STACKING_CONSISTENCY: &str = "stacking-consistency";
    /// Transmitted NPGs need a subscriber elsewhere.
    pub const NPG_SUBSCRIBER_COVERAGE: &str = "npg-subscriber-coverage";
    /// Subscribing terminals must take a PPLI group.
    pub const PPLI_REQUIRED: &str = "ppli-required";
    /// NPG references must resolve.
    pub const VALID_NPG_REFERENCE: &str = "valid-npg-reference";
    /// Catalog message ids must resolve.
    pub const VALID_JMESSAGE_REFERENCE: &str = "valid-j-message-reference";
    /// A catalog entry's NPG must be valid for the message.
    pub const MESSAGE_NPG_MATCH: &str = "message-npg-match";
    /// Net participants must name declared terminals.
    pub const PARTICIPANT_REFERENCE: &str = "participant-reference";
    /// Declarations should carry their expected properties.
    pub const REQUIRED_PROPERTY: &str = "required-property";
    /// Link-22 operating modes must resolve.
    pub const VALID_OPERATING_MODE: &str = "valid-operating-mode";
    /// Link-22 data rates must resolve.
    pub const VALID_DATA_RATE: &str = "valid-data-rate";
    /// `unit_id` must be a hex value.
    pub const VALID_UNIT_ID: &str = "valid-unit-id";
    /// `forwarding` is `enabled` or `disabled`.
    pub const VALID_FORWARDING: &str = "valid-forwarding";
    /// Every subnetwork needs a controller.
    pub const LINK22_CONTROLLER_REQUIRED: &str = "link22-controller-required";
    /// Every non-empty subnetwork needs a forwarder.
    pub const LINK22_FORWARDING: &str = "link22-forwarding";
    /// Distinct members may not share a `unit_id`.
    pub const UNIT_ID_UNIQUENESS: &str = "unit-id-uniqueness";
}

/// Validates a document, returning semantic and domain diagnostics.
///
/// Output order is the rule-catalog order; callers append these after the
/// parse diagnostics.
#[must_use]
pub fn validate(document: &Document) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    // Level 2: semantic rules, every network.
    semantic::check_link_type(document, &mut diagnostics);
    semantic::check_classification(document, &mut diagnostics);
    semantic::check_track_number_uniqueness(document, &mut diagnostics);
    semantic::check_net_number_uniqueness(document, &mut diagnostics);

    // Level 3: Link-16 domain rules.
    link16::check_ncs_required(document, &mut diagnostics);
    link16::check_roles(document, &mut diagnostics);
    link16::check_platform_types(document, &mut diagnostics);
    link16::check_track_number_range(document, &mut diagnostics);
    link16::check_net_number_range(document, &mut diagnostics);
    link16::check_tsdf_range(document, &mut diagnostics);
    link16::check_tsdf_budget(document, &mut diagnostics);
    link16::check_stacking(document, &mut diagnostics);
    link16::check_npg_subscriber_coverage(document, &mut diagnostics);
    link16::check_ppli(document, &mut diagnostics);
    link16::check_npg_references(document, &mut diagnostics);
    link16::check_jmessage_references(document, &mut diagnostics);
    link16::check_message_npg_match(document, &mut diagnostics);
    link16::check_participant_references(document, &mut diagnostics);
    link16::check_required_properties(document, &mut diagnostics);

    // Level 3: Link-22 domain rules.
    link22::check_roles(document, &mut diagnostics);
    link22::check_operating_modes(document, &mut diagnostics);
    link22::check_data_rates(document, &mut diagnostics);
    link22::check_unit_id_types(document, &mut diagnostics);
    link22::check_forwarding_values(document, &mut diagnostics);
    link22::check_controller_required(document, &mut diagnostics);
    link22::check_forwarding_required(document, &mut diagnostics);
    link22::check_unit_id_uniqueness(document, &mut diagnostics);
    link22::check_required_properties(document, &mut diagnostics);

    diagnostics
}

/// The link type a network declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkType {
    Link16,
    Link22,
}

/// Resolves a network's declared link type.
///
/// Returns `None` when `link` is absent or names an unknown type; the
/// link-specific rules then skip the network silently (the unknown type is
/// reported by `valid-link-type`).
pub(crate) fn link_type(network: &Network) -> Option<LinkType> {
    match get_identifier(&network.properties, "link") {
        Some("Link16") => Some(LinkType::Link16),
        Some("Link22") => Some(LinkType::Link22),
        _ => None,
    }
}

/// Returns the first property with the given key, regardless of value.
pub(crate) fn find_property<'a>(properties: &'a [Property], key: &str) -> Option<&'a Property> {
    properties.iter().find(|p| p.key == key)
}

/// Returns the text of the first property with the given key whose value is
/// an `Identifier` or `String`. Duplicate keys are not coalesced; the first
/// match wins.
pub(crate) fn get_identifier<'a>(properties: &'a [Property], key: &str) -> Option<&'a str> {
    properties
        .iter()
        .find_map(|p| if p.key == key { p.value.as_text() } else { None })
}

/// Like [`get_identifier`], but also returns the property span.
pub(crate) fn get_identifier_with_span<'a>(
    properties: &'a [Property],
    key: &str,
) -> Option<(&'a str, Span)> {
    properties.iter().find_map(|p| {
        if p.key == key {
            p.value.as_text().map(|text| (text, p.span))
        } else {
            None
        }
    })
}

/// Returns the numeric value and span of the first `Number` or `Percent`
/// property with the given key.
pub(crate) fn get_number(properties: &[Property], key: &str) -> Option<(f64, Span)> {
    properties.iter().find_map(|p| {
        if p.key == key {
            p.value.as_number().map(|n| (n, p.span))
        } else {
            None
        }
    })
}

/// Returns the value of the first `Boolean` property with the given key.
pub(crate) fn get_bool(properties: &[Property], key: &str) -> Option<bool> {
    properties
        .iter()
        .find_map(|p| if p.key == key { p.value.as_bool() } else { None })
}

/// Returns the items and span of the first `Array` property with the given
/// key.
pub(crate) fn get_array<'a>(
    properties: &'a [Property],
    key: &str,
) -> Option<(&'a [EcoString], Span)> {
    properties.iter().find_map(|p| {
        if p.key == key {
            p.value.as_array().map(|items| (items, p.span))
        } else {
            None
        }
    })
}

/// Formats a numeric value for a message, dropping a `.0` fraction so sums
/// read as `110%` rather than `110.0%`.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
