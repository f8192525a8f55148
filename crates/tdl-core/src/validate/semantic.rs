// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Semantic (reference/type) rules that run on every network regardless of
//! link type.

use std::collections::HashMap;

use crate::ast::Document;
use crate::source_analysis::Diagnostic;
use crate::spec_db;

use super::{code, format_number, get_identifier_with_span, get_number};

/// `valid-link-type`: the `link` identifier must name a known link type.
///
/// An absent `link` property is not an error; the link-specific rule sets
/// simply skip the network.
pub(super) fn check_link_type(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in &document.networks {
        if let Some((link, span)) = get_identifier_with_span(&network.properties, "link") {
            if !matches!(link, "Link16" | "Link22") {
                diagnostics.push(Diagnostic::rule_error(
                    code::VALID_LINK_TYPE,
                    format!("Unknown link type '{link}'; expected Link16 or Link22"),
                    span,
                ));
            }
        }
    }
}

/// `valid-classification`: `classification`, if present, must be a declared
/// level.
pub(super) fn check_classification(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in &document.networks {
        if let Some((level, span)) =
            get_identifier_with_span(&network.properties, "classification")
        {
            if !spec_db::is_classification_id(level) {
                diagnostics.push(Diagnostic::rule_error(
                    code::VALID_CLASSIFICATION,
                    format!("Unknown classification '{level}'"),
                    span,
                ));
            }
        }
    }
}

/// `track-number-uniqueness`: no two terminals of one network may share a
/// `track_number`. The first occurrence wins; later ones are reported.
pub(super) fn check_track_number_uniqueness(
    document: &Document,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for network in &document.networks {
        let mut seen: HashMap<u64, &str> = HashMap::new();

        for terminal in &network.terminals {
            let Some((number, span)) = get_number(&terminal.properties, "track_number") else {
                continue;
            };

            match seen.get(&number.to_bits()) {
                Some(first) => diagnostics.push(Diagnostic::rule_error(
                    code::TRACK_NUMBER_UNIQUENESS,
                    format!(
                        "Duplicate track_number {}; already used by terminal '{first}'",
                        format_number(number)
                    ),
                    span,
                )),
                None => {
                    seen.insert(number.to_bits(), &terminal.name);
                }
            }
        }
    }
}

/// `net-number-uniqueness`: no two nets of one network may share a
/// `net_number`.
pub(super) fn check_net_number_uniqueness(
    document: &Document,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for network in &document.networks {
        let mut seen: HashMap<u64, &str> = HashMap::new();

        for net in &network.nets {
            let Some((number, span)) = get_number(&net.properties, "net_number") else {
                continue;
            };

            match seen.get(&number.to_bits()) {
                Some(first) => diagnostics.push(Diagnostic::rule_error(
                    code::NET_NUMBER_UNIQUENESS,
                    format!(
                        "Duplicate net_number {}; already used by net '{first}'",
                        format_number(number)
                    ),
                    span,
                )),
                None => {
                    seen.insert(number.to_bits(), &net.name);
                }
            }
        }
    }
}
