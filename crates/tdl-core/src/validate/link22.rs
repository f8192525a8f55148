// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Link-22 domain rules.
//!
//! Every rule here gates on `link: Link22` and carries a `STANAG 5522`
//! spec reference. Link-22 networks are organized as subnetworks of
//! members; `operating_mode` and `data_rate` are accepted at network,
//! subnetwork, or member scope and validated wherever they appear.

use std::collections::HashMap;

use ecow::EcoString;

use crate::ast::{Document, Network, Property};
use crate::source_analysis::Diagnostic;
use crate::spec_db;

use super::{
    LinkType, code, find_property, get_identifier, get_identifier_with_span, link_type,
};

const SPEC_REF: &str = "STANAG 5522";

/// Iterates the Link-22 networks of a document.
fn link22_networks(document: &Document) -> impl Iterator<Item = &Network> {
    document
        .networks
        .iter()
        .filter(|network| link_type(network) == Some(LinkType::Link22))
}

/// Property lists of a network in document order: the network's own, then
/// each subnetwork's, then each member's.
fn property_scopes(network: &Network) -> Vec<&[Property]> {
    let mut scopes: Vec<&[Property]> = vec![&network.properties];
    for subnetwork in &network.subnetworks {
        scopes.push(&subnetwork.properties);
        for member in &subnetwork.members {
            scopes.push(&member.properties);
        }
    }
    scopes
}

/// `valid-role`: a member's `role`, if present, must be a declared Link-22
/// role.
pub(super) fn check_roles(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link22_networks(document) {
        for subnetwork in &network.subnetworks {
            for member in &subnetwork.members {
                if let Some((role, span)) = get_identifier_with_span(&member.properties, "role") {
                    if !spec_db::is_link22_role_id(role) {
                        diagnostics.push(
                            Diagnostic::rule_error(
                                code::VALID_ROLE,
                                format!("Unknown Link-22 role '{role}'"),
                                span,
                            )
                            .with_spec_ref(SPEC_REF),
                        );
                    }
                }
            }
        }
    }
}

/// `valid-operating-mode`: `operating_mode` must name a declared mode.
pub(super) fn check_operating_modes(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link22_networks(document) {
        for properties in property_scopes(network) {
            if let Some((mode, span)) = get_identifier_with_span(properties, "operating_mode") {
                if !spec_db::is_operating_mode_id(mode) {
                    diagnostics.push(
                        Diagnostic::rule_error(
                            code::VALID_OPERATING_MODE,
                            format!("Unknown operating mode '{mode}'"),
                            span,
                        )
                        .with_spec_ref(SPEC_REF),
                    );
                }
            }
        }
    }
}

/// `valid-data-rate`: `data_rate` must name a declared rate.
pub(super) fn check_data_rates(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link22_networks(document) {
        for properties in property_scopes(network) {
            if let Some((rate, span)) = get_identifier_with_span(properties, "data_rate") {
                if !spec_db::is_data_rate_id(rate) {
                    diagnostics.push(
                        Diagnostic::rule_error(
                            code::VALID_DATA_RATE,
                            format!("Unknown data rate '{rate}'"),
                            span,
                        )
                        .with_spec_ref(SPEC_REF),
                    );
                }
            }
        }
    }
}

/// `valid-unit-id`: a member's `unit_id`, if present, must be a hex value.
pub(super) fn check_unit_id_types(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link22_networks(document) {
        for subnetwork in &network.subnetworks {
            for member in &subnetwork.members {
                if let Some(property) = find_property(&member.properties, "unit_id") {
                    if !property.value.is_hex() {
                        diagnostics.push(
                            Diagnostic::rule_error(
                                code::VALID_UNIT_ID,
                                format!(
                                    "unit_id of member '{}' must be a hex value like 0x2F",
                                    member.name
                                ),
                                property.span,
                            )
                            .with_spec_ref(SPEC_REF),
                        );
                    }
                }
            }
        }
    }
}

/// `valid-forwarding`: `forwarding`, when given as an identifier, must be
/// exactly `enabled` or `disabled`.
pub(super) fn check_forwarding_values(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link22_networks(document) {
        for subnetwork in &network.subnetworks {
            for member in &subnetwork.members {
                if let Some((value, span)) =
                    get_identifier_with_span(&member.properties, "forwarding")
                {
                    if !matches!(value, "enabled" | "disabled") {
                        diagnostics.push(
                            Diagnostic::rule_error(
                                code::VALID_FORWARDING,
                                format!("forwarding must be 'enabled' or 'disabled', got '{value}'"),
                                span,
                            )
                            .with_spec_ref(SPEC_REF),
                        );
                    }
                }
            }
        }
    }
}

/// `link22-controller-required`: every subnetwork needs at least one member
/// with `role: Controller`.
pub(super) fn check_controller_required(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link22_networks(document) {
        for subnetwork in &network.subnetworks {
            let has_controller = subnetwork
                .members
                .iter()
                .any(|member| get_identifier(&member.properties, "role") == Some("Controller"));

            if !has_controller {
                diagnostics.push(
                    Diagnostic::rule_error(
                        code::LINK22_CONTROLLER_REQUIRED,
                        format!(
                            "Subnetwork '{}' has no member with role Controller",
                            subnetwork.name
                        ),
                        subnetwork.span,
                    )
                    .with_spec_ref(SPEC_REF),
                );
            }
        }
    }
}

/// `link22-forwarding`: every non-empty subnetwork needs at least one
/// member with `forwarding: enabled`.
pub(super) fn check_forwarding_required(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link22_networks(document) {
        for subnetwork in &network.subnetworks {
            if subnetwork.members.is_empty() {
                continue;
            }

            let has_forwarder = subnetwork.members.iter().any(|member| {
                get_identifier(&member.properties, "forwarding") == Some("enabled")
            });

            if !has_forwarder {
                diagnostics.push(
                    Diagnostic::rule_error(
                        code::LINK22_FORWARDING,
                        format!(
                            "Subnetwork '{}' has no member with forwarding enabled",
                            subnetwork.name
                        ),
                        subnetwork.span,
                    )
                    .with_spec_ref(SPEC_REF),
                );
            }
        }
    }
}

/// `unit-id-uniqueness`: within one network, two members with different
/// names may not share a `unit_id` (warning). The same name reusing the
/// same id across subnetworks is dual membership and allowed.
///
/// Ids are compared as written; `0x1` and `0x01` count as distinct.
pub(super) fn check_unit_id_uniqueness(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link22_networks(document) {
        let mut seen: HashMap<&EcoString, &EcoString> = HashMap::new();

        for subnetwork in &network.subnetworks {
            for member in &subnetwork.members {
                let Some(property) = find_property(&member.properties, "unit_id") else {
                    continue;
                };
                let crate::ast::PropertyValue::Hex(id) = &property.value else {
                    continue;
                };

                match seen.get(id) {
                    Some(first) if **first != member.name => diagnostics.push(
                        Diagnostic::rule_warning(
                            code::UNIT_ID_UNIQUENESS,
                            format!("unit_id {id} is already used by member '{first}'"),
                            property.span,
                        )
                        .with_spec_ref(SPEC_REF),
                    ),
                    Some(_) => {} // dual membership
                    None => {
                        seen.insert(id, &member.name);
                    }
                }
            }
        }
    }
}

/// `required-property`: a member should declare both a `role` and a
/// `unit_id` (warnings).
pub(super) fn check_required_properties(document: &Document, diagnostics: &mut Vec<Diagnostic>) {
    for network in link22_networks(document) {
        for subnetwork in &network.subnetworks {
            for member in &subnetwork.members {
                if find_property(&member.properties, "role").is_none() {
                    diagnostics.push(
                        Diagnostic::rule_warning(
                            code::REQUIRED_PROPERTY,
                            format!("Member '{}' has no role", member.name),
                            member.span,
                        )
                        .with_spec_ref(SPEC_REF),
                    );
                }
                if find_property(&member.properties, "unit_id").is_none() {
                    diagnostics.push(
                        Diagnostic::rule_warning(
                            code::REQUIRED_PROPERTY,
                            format!("Member '{}' has no unit_id", member.name),
                            member.span,
                        )
                        .with_spec_ref(SPEC_REF),
                    );
                }
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

    /// A well-formed subnetwork that satisfies every Link-22 rule.
    const CLEAN_SUBNET: &str = "subnetwork \"S\" { operating_mode: NetSlotted, data_rate: High \
        member \"A\" { role: Controller, unit_id: 0x1, forwarding: enabled } \
        member \"B\" { role: Participant, unit_id: 0x2, forwarding: disabled } }";

    #[test]
    fn clean_subnetwork_passes_all_rules() {
        let source = format!("network \"X\" {{ link: Link22 {CLEAN_SUBNET} }}");
        let (document, parse_diags) = parse(lex(&source));
        assert!(parse_diags.is_empty());
        let diags = validate(&document);
        assert!(diags.is_empty(), "{diags:?}");
    }

    #[test]
    fn unknown_member_role_is_an_error() {
        let source = "network \"X\" { link: Link22 subnetwork \"S\" { \
             member \"A\" { role: Relay, unit_id: 0x1, forwarding: enabled } } }";
        let diags = diagnostics_for(source, "valid-role");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("Relay"));
        assert_eq!(diags[0].spec_ref.as_deref(), Some("STANAG 5522"));
    }

    #[test]
    fn operating_mode_checked_at_any_scope() {
        let source = "network \"X\" { link: Link22 operating_mode: FreeRunning \
             subnetwork \"S\" { operating_mode: Swarm \
             member \"A\" { role: Controller, unit_id: 0x1, forwarding: enabled, \
             operating_mode: Turbo } } }";
        let diags = diagnostics_for(source, "valid-operating-mode");
        assert_eq!(diags.len(), 3);
        assert!(diags[0].message.contains("FreeRunning"));
        assert!(diags[1].message.contains("Swarm"));
        assert!(diags[2].message.contains("Turbo"));
    }

    #[test]
    fn unknown_data_rate_is_an_error() {
        let source = "network \"X\" { link: Link22 subnetwork \"S\" { data_rate: Turbo \
             member \"A\" { role: Controller, unit_id: 0x1, forwarding: enabled } } }";
        let diags = diagnostics_for(source, "valid-data-rate");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn non_hex_unit_id_is_an_error() {
        let source = "network \"X\" { link: Link22 subnetwork \"S\" { \
             member \"A\" { role: Controller, unit_id: 17, forwarding: enabled } } }";
        let diags = diagnostics_for(source, "valid-unit-id");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("'A'"));
    }

    #[test]
    fn bad_forwarding_value_is_an_error() {
        let source = "network \"X\" { link: Link22 subnetwork \"S\" { \
             member \"A\" { role: Controller, unit_id: 0x1, forwarding: sometimes } } }";
        let diags = diagnostics_for(source, "valid-forwarding");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("sometimes"));
    }

    #[test]
    fn subnetwork_without_controller_or_forwarder() {
        let source = "network \"X\" { link: Link22 subnetwork \"S\" { \
             member \"A\" { role: Participant, unit_id: 0x1, forwarding: disabled } } }";
        let controller = diagnostics_for(source, "link22-controller-required");
        assert_eq!(controller.len(), 1);
        assert!(controller[0].message.contains("'S'"));

        let forwarding = diagnostics_for(source, "link22-forwarding");
        assert_eq!(forwarding.len(), 1);
    }

    #[test]
    fn empty_subnetwork_skips_forwarding_but_not_controller() {
        let source = "network \"X\" { link: Link22 subnetwork \"S\" { } }";
        assert!(diagnostics_for(source, "link22-forwarding").is_empty());
        assert_eq!(diagnostics_for(source, "link22-controller-required").len(), 1);
    }

    #[test]
    fn shared_unit_id_between_different_members_is_a_warning() {
        let source = "network \"X\" { link: Link22 \
             subnetwork \"S1\" { member \"A\" { role: Controller, unit_id: 0x1, forwarding: enabled } } \
             subnetwork \"S2\" { member \"B\" { role: Controller, unit_id: 0x1, forwarding: enabled } } }";
        let diags = diagnostics_for(source, "unit-id-uniqueness");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].message.contains("'A'"));
    }

    #[test]
    fn dual_membership_with_same_name_is_allowed() {
        let source = "network \"X\" { link: Link22 \
             subnetwork \"S1\" { member \"A\" { role: Controller, unit_id: 0x1, forwarding: enabled } } \
             subnetwork \"S2\" { member \"A\" { role: Controller, unit_id: 0x1, forwarding: enabled } } }";
        assert!(diagnostics_for(source, "unit-id-uniqueness").is_empty());
    }

    #[test]
    fn member_missing_role_and_unit_id_warns_twice() {
        let source = "network \"X\" { link: Link22 subnetwork \"S\" { \
             member \"A\" { forwarding: enabled } } }";
        let diags = diagnostics_for(source, "required-property");
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.severity == Severity::Warning));
    }

    #[test]
    fn link22_rules_skip_link16_networks() {
        let source = "network \"X\" { link: Link16 \
             terminal \"A\" { role: NetControlStation } \
             subnetwork \"S\" { member \"M\" { } } }";
        assert!(diagnostics_for(source, "link22-controller-required").is_empty());
    }
}
