// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Link-16 domain rules.
//!
//! Every rule here gates on `link: Link16` and carries a `MIL-STD-6016`
//! spec reference (the `message-npg-match` rule cites the specific message
//! section).
//!
//! Track and net numbers are validated as decimal integers; the language
//! does not express numeric base, so the conventional octal reading of
//! track numbers is approximated by the decimal bound 77777.

use crate::ast::{Document, Network};
use crate::source_analysis::Diagnostic;
use crate::spec_db;

use super::{
    LinkType, code, find_property, format_number, get_array, get_bool, get_identifier,
    get_identifier_with_span, get_number, link_type,
};

const SPEC_REF: &str = "MIL-STD-6016";

/// Largest assignable track number (decimal reading of octal 77777).
const TRACK_NUMBER_MAX: f64 = 77777.0;

/// Largest assignable net number.
const NET_NUMBER_MAX: f64 = 127.0;

/// Iterates the Link-16 networks of a document.
fn link16_networks(document: &Document) -> impl Iterator<Item = &Network> {
    document
        .networks
        .iter()
        .filter(|network| link_type(network) == Some(LinkType::Link16))
}

/// `ncs-required`: exactly one terminal per network has
/// `role: NetControlStation`. Zero is reported on the network; each terminal
/// beyond the first is reported on its own span.
pub(super) fn check_ncs_required(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        let mut stations = network.terminals.iter().filter(|terminal| {
            get_identifier(&terminal.properties, "role") == Some("NetControlStation")
        });

        if stations.next().is_none() {
            diagnostics.push(
                Diagnostic::rule_error(
                    code::NCS_REQUIRED,
                    format!(
                        "Network '{}' has no terminal with role NetControlStation",
                        network.name
                    ),
                    network.span,
                )
                .with_spec_ref(SPEC_REF),
            );
            continue;
        }

        for extra in stations {
            diagnostics.push(
                Diagnostic::rule_error(
                    code::NCS_REQUIRED,
                    format!(
                        "Terminal '{}' also has role NetControlStation; the network already has one",
                        extra.name
                    ),
                    extra.span,
                )
                .with_spec_ref(SPEC_REF),
            );
        }
    }
}

/// `valid-role`: a terminal's `role`, if present, must be a declared
/// Link-16 role.
pub(super) fn check_roles(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        for terminal in &network.terminals {
            if let Some((role, span)) = get_identifier_with_span(&terminal.properties, "role") {
                if !spec_db::is_link16_role_id(role) {
                    diagnostics.push(
                        Diagnostic::rule_error(
                            code::VALID_ROLE,
                            format!("Unknown Link-16 role '{role}'"),
                            span,
                        )
                        .with_spec_ref(SPEC_REF),
                    );
                }
            }
        }
    }
}

/// `valid-platform-type`: a terminal's `platform_type`, if present, should
/// be a declared platform type (warning).
pub(super) fn check_platform_types(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        for terminal in &network.terminals {
            if let Some((platform, span)) =
                get_identifier_with_span(&terminal.properties, "platform_type")
            {
                if !spec_db::is_platform_type_id(platform) {
                    diagnostics.push(
                        Diagnostic::rule_warning(
                            code::VALID_PLATFORM_TYPE,
                            format!("Unknown platform type '{platform}'"),
                            span,
                        )
                        .with_spec_ref(SPEC_REF),
                    );
                }
            }
        }
    }
}

/// `valid-track-number`: track numbers lie in `0..=77777`.
pub(super) fn check_track_number_range(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        for terminal in &network.terminals {
            if let Some((number, span)) = get_number(&terminal.properties, "track_number") {
                if !(0.0..=TRACK_NUMBER_MAX).contains(&number) {
                    diagnostics.push(
                        Diagnostic::rule_error(
                            code::VALID_TRACK_NUMBER,
                            format!(
                                "track_number {} is outside the range 0..77777",
                                format_number(number)
                            ),
                            span,
                        )
                        .with_spec_ref(SPEC_REF),
                    );
                }
            }
        }
    }
}

/// `valid-net-number`: net numbers lie in `0..=127`.
pub(super) fn check_net_number_range(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        for net in &network.nets {
            if let Some((number, span)) = get_number(&net.properties, "net_number") {
                if !(0.0..=NET_NUMBER_MAX).contains(&number) {
                    diagnostics.push(
                        Diagnostic::rule_error(
                            code::VALID_NET_NUMBER,
                            format!(
                                "net_number {} is outside the range 0..127",
                                format_number(number)
                            ),
                            span,
                        )
                        .with_spec_ref(SPEC_REF),
                    );
                }
            }
        }
    }
}

/// `valid-tsdf`: per-net TSDF lies in `0..=100`.
pub(super) fn check_tsdf_range(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        for net in &network.nets {
            if let Some((tsdf, span)) = get_number(&net.properties, "tsdf") {
                if !(0.0..=100.0).contains(&tsdf) {
                    diagnostics.push(
                        Diagnostic::rule_error(
                            code::VALID_TSDF,
                            format!(
                                "tsdf {}% is outside the range 0..100",
                                format_number(tsdf)
                            ),
                            span,
                        )
                        .with_spec_ref(SPEC_REF),
                    );
                }
            }
        }
    }
}

/// `total-tsdf-budget`: the sum of all nets' TSDF in one network.
///
/// Over 100% is an error; over 90% (and at most 100%) is a warning. One
/// diagnostic per network, on the network span, citing the sum.
pub(super) fn check_tsdf_budget(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        let total: f64 = network
            .nets
            .iter()
            .filter_map(|net| get_number(&net.properties, "tsdf").map(|(tsdf, _)| tsdf))
            .sum();

        if total > 100.0 {
            diagnostics.push(
                Diagnostic::rule_error(
                    code::TOTAL_TSDF_BUDGET,
                    format!(
                        "Total TSDF of all nets is {}%, exceeding the 100% time slot budget",
                        format_number(total)
                    ),
                    network.span,
                )
                .with_spec_ref(SPEC_REF),
            );
        } else if total > 90.0 {
            diagnostics.push(
                Diagnostic::rule_warning(
                    code::TOTAL_TSDF_BUDGET,
                    format!(
                        "Total TSDF of all nets is {}%, close to the 100% time slot budget",
                        format_number(total)
                    ),
                    network.span,
                )
                .with_spec_ref(SPEC_REF),
            );
        }
    }
}

/// `stacking-consistency`: `stacked: true` requires a `stacking_level` of 2
/// or 4; a `stacking_level` without `stacked: true` is ineffective.
pub(super) fn check_stacking(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        for net in &network.nets {
            let stacked = get_bool(&net.properties, "stacked").unwrap_or(false);
            let level = find_property(&net.properties, "stacking_level");

            if stacked {
                match level {
                    None => diagnostics.push(
                        Diagnostic::rule_error(
                            code::STACKING_CONSISTENCY,
                            format!("Net '{}' is stacked but has no stacking_level", net.name),
                            net.span,
                        )
                        .with_spec_ref(SPEC_REF),
                    ),
                    Some(property) => {
                        if let Some(value) = property.value.as_number() {
                            if value != 2.0 && value != 4.0 {
                                diagnostics.push(
                                    Diagnostic::rule_error(
                                        code::STACKING_CONSISTENCY,
                                        format!(
                                            "stacking_level must be 2 or 4, got {}",
                                            format_number(value)
                                        ),
                                        property.span,
                                    )
                                    .with_spec_ref(SPEC_REF),
                                );
                            }
                        }
                    }
                }
            } else if let Some(property) = level {
                diagnostics.push(
                    Diagnostic::rule_warning(
                        code::STACKING_CONSISTENCY,
                        format!(
                            "Net '{}' has a stacking_level but is not stacked",
                            net.name
                        ),
                        property.span,
                    )
                    .with_spec_ref(SPEC_REF),
                );
            }
        }
    }
}

/// `npg-subscriber-coverage`: every NPG a terminal transmits should be
/// subscribed to by at least one *other* terminal (warning).
pub(super) fn check_npg_subscriber_coverage(
    document: &Document,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for network in link16_networks(document) {
        for (index, terminal) in network.terminals.iter().enumerate() {
            let Some((transmits, span)) = get_array(&terminal.properties, "transmits") else {
                continue;
            };

            for npg_id in transmits {
                let covered = network.terminals.iter().enumerate().any(|(other, t)| {
                    other != index
                        && get_array(&t.properties, "subscribes")
                            .is_some_and(|(subscribed, _)| subscribed.contains(npg_id))
                });

                if !covered {
                    diagnostics.push(
                        Diagnostic::rule_warning(
                            code::NPG_SUBSCRIBER_COVERAGE,
                            format!(
                                "No other terminal subscribes to {npg_id} transmitted by '{}'",
                                terminal.name
                            ),
                            span,
                        )
                        .with_spec_ref(SPEC_REF),
                    );
                }
            }
        }
    }
}

/// `ppli-required`: a terminal that subscribes at all must subscribe to a
/// PPLI partition, `NPG_A` or `NPG_B` (warning).
pub(super) fn check_ppli(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        for terminal in &network.terminals {
            let Some((subscribes, span)) = get_array(&terminal.properties, "subscribes") else {
                continue;
            };

            let has_ppli = subscribes
                .iter()
                .any(|id| id == "NPG_A" || id == "NPG_B");

            if !has_ppli {
                diagnostics.push(
                    Diagnostic::rule_warning(
                        code::PPLI_REQUIRED,
                        format!(
                            "Terminal '{}' does not subscribe to a PPLI partition (NPG_A or NPG_B)",
                            terminal.name
                        ),
                        span,
                    )
                    .with_spec_ref(SPEC_REF),
                );
            }
        }
    }
}

/// `valid-npg-reference`: every NPG id in `subscribes`, `transmits`, or a
/// net's `npg` property must be declared.
pub(super) fn check_npg_references(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        for terminal in &network.terminals {
            for key in ["subscribes", "transmits"] {
                let Some((ids, span)) = get_array(&terminal.properties, key) else {
                    continue;
                };
                for id in ids {
                    if !spec_db::is_npg_id(id) {
                        diagnostics.push(
                            Diagnostic::rule_error(
                                code::VALID_NPG_REFERENCE,
                                format!("Unknown NPG id '{id}'"),
                                span,
                            )
                            .with_spec_ref(SPEC_REF),
                        );
                    }
                }
            }
        }

        for net in &network.nets {
            if let Some((id, span)) = get_identifier_with_span(&net.properties, "npg") {
                if !spec_db::is_npg_id(id) {
                    diagnostics.push(
                        Diagnostic::rule_error(
                            code::VALID_NPG_REFERENCE,
                            format!("Unknown NPG id '{id}'"),
                            span,
                        )
                        .with_spec_ref(SPEC_REF),
                    );
                }
            }
        }
    }
}

/// `valid-j-message-reference`: every catalog entry must name a declared
/// J-message.
pub(super) fn check_jmessage_references(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        let Some(catalog) = &network.messages else {
            continue;
        };

        for entry in &catalog.entries {
            if !spec_db::is_jmessage_id(&entry.message_id) {
                diagnostics.push(
                    Diagnostic::rule_error(
                        code::VALID_JMESSAGE_REFERENCE,
                        format!("Unknown J-message '{}'", entry.message_id),
                        entry.span,
                    )
                    .with_spec_ref(SPEC_REF),
                );
            }
        }
    }
}

/// `message-npg-match`: a catalog entry's `npg`, if assigned, must be one
/// the message is valid on.
pub(super) fn check_message_npg_match(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        let Some(catalog) = &network.messages else {
            continue;
        };

        for entry in &catalog.entries {
            let Some(message) = spec_db::jmessage(&entry.message_id) else {
                continue; // unknown id already reported by valid-j-message-reference
            };
            let Some(npg_id) = get_identifier(&entry.properties, "npg") else {
                continue;
            };

            if !message.valid_npgs.contains(&npg_id) {
                diagnostics.push(
                    Diagnostic::rule_error(
                        code::MESSAGE_NPG_MATCH,
                        format!(
                            "{} is not valid on {npg_id}; valid NPGs: {}",
                            entry.message_id,
                            message.valid_npgs.join(", ")
                        ),
                        entry.span,
                    )
                    .with_spec_ref(message.spec_ref),
                );
            }
        }
    }
}

/// `participant-reference`: every name in a net's `participants` array must
/// match a terminal declared in the same network.
pub(super) fn check_participant_references(
    document: &Document,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for network in link16_networks(document) {
        for net in &network.nets {
            let Some((participants, span)) = get_array(&net.properties, "participants") else {
                continue;
            };

            for name in participants {
                let declared = network
                    .terminals
                    .iter()
                    .any(|terminal| terminal.name == *name);

                if !declared {
                    diagnostics.push(
                        Diagnostic::rule_error(
                            code::PARTICIPANT_REFERENCE,
                            format!("Unknown participant '{name}'; no terminal with that name"),
                            span,
                        )
                        .with_spec_ref(SPEC_REF),
                    );
                }
            }
        }
    }
}

/// `required-property`: a terminal should declare a `role`; a net should
/// declare a `net_number` (warnings).
pub(super) fn check_required_properties(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link16_networks(document) {
        for terminal in &network.terminals {
            if find_property(&terminal.properties, "role").is_none() {
                diagnostics.push(
                    Diagnostic::rule_warning(
                        code::REQUIRED_PROPERTY,
                        format!("Terminal '{}' has no role", terminal.name),
                        terminal.span,
                    )
                    .with_spec_ref(SPEC_REF),
                );
            }
        }

        for net in &network.nets {
            if find_property(&net.properties, "net_number").is_none() {
                diagnostics.push(
                    Diagnostic::rule_warning(
                        code::REQUIRED_PROPERTY,
                        format!("Net '{}' has no net_number", net.name),
                        net.span,
                    )
                    .with_spec_ref(SPEC_REF),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::validate;
    use crate::source_analysis::{Diagnostic, Severity, lex, parse};

    fn diagnostics_for(source: &str, rule: &str) -> Vec<Diagnostic> {
        let (document, parse_diags) = parse(lex(source));
        assert!(parse_diags.is_empty(), "unexpected parse errors: {parse_diags:?}");
        validate(&document)
            .into_iter()
            .filter(|d| d.rule == Some(rule))
            .collect()
    }

    /// A minimal NCS terminal so unrelated rules stay quiet.
    const NCS: &str = "terminal \"NCS\" { role: NetControlStation }";

    #[test]
    fn missing_ncs_is_reported_once_on_the_network() {
        let diags = diagnostics_for(
            "network \"X\" { link: Link16 terminal \"A\" { role: Participant } }",
            "ncs-required",
        );
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!(diags[0].span.offset(), 0);
    }

    #[test]
    fn extra_ncs_reported_per_terminal() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             terminal \"B\" {{ role: NetControlStation }} \
             terminal \"C\" {{ role: NetControlStation }} }}"
        );
        let diags = diagnostics_for(&source, "ncs-required");
        assert_eq!(diags.len(), 2);
        assert!(diags[0].message.contains("'B'"));
        assert!(diags[1].message.contains("'C'"));
    }

    #[test]
    fn ncs_rules_skip_non_link16_networks() {
        let diags = diagnostics_for("network \"X\" { link: Link22 }", "ncs-required");
        assert!(diags.is_empty());
    }

    #[test]
    fn unknown_role_is_an_error() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} terminal \"B\" {{ role: Observer }} }}"
        );
        let diags = diagnostics_for(&source, "valid-role");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("Observer"));
    }

    #[test]
    fn unknown_platform_type_is_a_warning() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             terminal \"B\" {{ role: Participant, platform_type: zeppelin }} }}"
        );
        let diags = diagnostics_for(&source, "valid-platform-type");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
    }

    #[test]
    fn track_number_bounds() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             terminal \"B\" {{ role: Participant, track_number: 77778 }} }}"
        );
        let diags = diagnostics_for(&source, "valid-track-number");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("77778"));

        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             terminal \"B\" {{ role: Participant, track_number: 77777 }} }}"
        );
        assert!(diagnostics_for(&source, "valid-track-number").is_empty());
    }

    #[test]
    fn net_number_bounds() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} net \"N\" {{ net_number: 128 }} }}"
        );
        let diags = diagnostics_for(&source, "valid-net-number");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn tsdf_range() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             net \"N\" {{ net_number: 1, npg: NPG_7, tsdf: 140% }} }}"
        );
        let diags = diagnostics_for(&source, "valid-tsdf");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("140"));
    }

    #[test]
    fn tsdf_budget_overflow_is_one_error_citing_the_sum() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             net \"A\" {{ net_number: 1, npg: NPG_9, tsdf: 60% }} \
             net \"B\" {{ net_number: 2, npg: NPG_6, tsdf: 50% }} }}"
        );
        let diags = diagnostics_for(&source, "total-tsdf-budget");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert!(diags[0].message.contains("110%"), "{}", diags[0].message);
    }

    #[test]
    fn tsdf_budget_high_water_is_a_warning() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             net \"A\" {{ net_number: 1, npg: NPG_9, tsdf: 60% }} \
             net \"B\" {{ net_number: 2, npg: NPG_6, tsdf: 35% }} }}"
        );
        let diags = diagnostics_for(&source, "total-tsdf-budget");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].message.contains("95%"));
    }

    #[test]
    fn tsdf_budget_under_threshold_is_silent() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             net \"A\" {{ net_number: 1, npg: NPG_9, tsdf: 60% }} }}"
        );
        assert!(diagnostics_for(&source, "total-tsdf-budget").is_empty());
    }

    #[test]
    fn stacked_without_level_is_an_error() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             net \"N\" {{ net_number: 1, npg: NPG_7, stacked: true }} }}"
        );
        let diags = diagnostics_for(&source, "stacking-consistency");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
    }

    #[test]
    fn stacking_level_must_be_two_or_four() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             net \"N\" {{ net_number: 1, npg: NPG_7, stacked: true, stacking_level: 3 }} }}"
        );
        let diags = diagnostics_for(&source, "stacking-consistency");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains('3'));

        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             net \"N\" {{ net_number: 1, npg: NPG_7, stacked: true, stacking_level: 4 }} }}"
        );
        assert!(diagnostics_for(&source, "stacking-consistency").is_empty());
    }

    #[test]
    fn stacking_level_without_stacked_is_a_warning() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             net \"N\" {{ net_number: 1, npg: NPG_7, stacking_level: 2 }} }}"
        );
        let diags = diagnostics_for(&source, "stacking-consistency");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
    }

    #[test]
    fn uncovered_transmission_is_a_warning() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             terminal \"B\" {{ role: Participant, transmits: [NPG_7] }} }}"
        );
        let diags = diagnostics_for(&source, "npg-subscriber-coverage");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("NPG_7"));
    }

    #[test]
    fn own_subscription_does_not_count_as_coverage() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             terminal \"B\" {{ role: Participant, transmits: [NPG_7], \
             subscribes: [NPG_A, NPG_7] }} }}"
        );
        let diags = diagnostics_for(&source, "npg-subscriber-coverage");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn another_subscriber_satisfies_coverage() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             terminal \"B\" {{ role: Participant, transmits: [NPG_7] }} \
             terminal \"C\" {{ role: Participant, subscribes: [NPG_A, NPG_7] }} }}"
        );
        assert!(diagnostics_for(&source, "npg-subscriber-coverage").is_empty());
    }

    #[test]
    fn subscriber_without_ppli_partition_is_warned() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             terminal \"B\" {{ role: Participant, subscribes: [NPG_7] }} }}"
        );
        let diags = diagnostics_for(&source, "ppli-required");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("'B'"));
    }

    #[test]
    fn terminal_without_subscribes_is_not_warned() {
        let source = format!("network \"X\" {{ link: Link16 {NCS} }}");
        assert!(diagnostics_for(&source, "ppli-required").is_empty());
    }

    #[test]
    fn unknown_npg_in_arrays_and_nets() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             terminal \"B\" {{ role: Participant, subscribes: [NPG_A, NPG_99] }} \
             net \"N\" {{ net_number: 1, npg: NPG_77 }} }}"
        );
        let diags = diagnostics_for(&source, "valid-npg-reference");
        assert_eq!(diags.len(), 2);
        assert!(diags[0].message.contains("NPG_99"));
        assert!(diags[1].message.contains("NPG_77"));
    }

    #[test]
    fn unknown_catalog_message_is_an_error() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} messages {{ J99/9 {{ enabled: true }} }} }}"
        );
        let diags = diagnostics_for(&source, "valid-j-message-reference");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("J99/9"));
    }

    #[test]
    fn message_npg_mismatch_reports_on_the_entry() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             messages {{ J3/2 {{ enabled: true, npg: NPG_6 }} }} }}"
        );
        let diags = diagnostics_for(&source, "message-npg-match");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("NPG_7"));
        assert!(diags[0].message.contains("NPG_9"));
        assert_eq!(diags[0].spec_ref.as_deref(), Some("MIL-STD-6016 J3.2"));
    }

    #[test]
    fn message_npg_match_passes_on_valid_assignment() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             messages {{ J3/2 {{ enabled: true, npg: NPG_7 }} }} }}"
        );
        assert!(diagnostics_for(&source, "message-npg-match").is_empty());
    }

    #[test]
    fn unknown_participant_is_an_error() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             net \"N\" {{ net_number: 1, npg: NPG_7, participants: [NCS, Ghost] }} }}"
        );
        let diags = diagnostics_for(&source, "participant-reference");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("Ghost"));
    }

    #[test]
    fn missing_role_and_net_number_are_warnings() {
        let source = format!(
            "network \"X\" {{ link: Link16 {NCS} \
             terminal \"B\" {{ track_number: 1 }} net \"N\" {{ npg: NPG_7 }} }}"
        );
        let diags = diagnostics_for(&source, "required-property");
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.severity == Severity::Warning));
    }
}
