// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests driving the full pipeline through [`tdl_core::analyze`].

use tdl_core::prelude::*;

fn errors(analysis: &Analysis) -> Vec<&Diagnostic> {
    analysis
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .collect()
}

fn with_rule<'a>(analysis: &'a Analysis, rule: &str) -> Vec<&'a Diagnostic> {
    analysis
        .diagnostics
        .iter()
        .filter(|d| d.rule == Some(rule))
        .collect()
}

#[test]
fn empty_input() {
    let analysis = analyze("");
    assert!(analysis.document.networks.is_empty());
    assert!(analysis.diagnostics.is_empty());
}

#[test]
fn minimal_valid_link16_network() {
    let analysis =
        analyze("network \"X\" { link: Link16 terminal \"A\" { role: NetControlStation } }");
    assert!(analysis.diagnostics.is_empty(), "{:?}", analysis.diagnostics);
    assert_eq!(analysis.document.networks[0].terminals.len(), 1);
}

#[test]
fn tsdf_overflow_is_exactly_one_error_citing_the_sum() {
    let analysis = analyze(
        "network \"X\" { link: Link16 terminal \"A\" { role: NetControlStation } \
         net \"A\" { net_number: 1, npg: NPG_9, tsdf: 60% } \
         net \"B\" { net_number: 2, npg: NPG_6, tsdf: 50% } }",
    );
    assert_eq!(analysis.diagnostics.len(), 1, "{:?}", analysis.diagnostics);
    let diagnostic = &analysis.diagnostics[0];
    assert_eq!(diagnostic.rule, Some("total-tsdf-budget"));
    assert_eq!(diagnostic.severity, Severity::Error);
    assert!(diagnostic.message.contains("110%"), "{}", diagnostic.message);
}

#[test]
fn unterminated_network_block_keeps_partial_ast() {
    let analysis = analyze("network \"TEST\" { link: Link16");
    assert_eq!(analysis.document.networks.len(), 1);
    assert!(
        analysis
            .diagnostics
            .iter()
            .any(|d| d.rule.is_none() && d.message.contains("'}'")),
        "{:?}",
        analysis.diagnostics
    );
}

#[test]
fn message_npg_mismatch() {
    let source = "network \"X\" { link: Link16 terminal \"A\" { role: NetControlStation } \
                  messages { J3/2 { enabled: true, npg: NPG_6 } } }";
    let analysis = analyze(source);

    let mismatches = with_rule(&analysis, "message-npg-match");
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].severity, Severity::Error);
    // Reported on the entry's span.
    let entry_offset = source.find("J3/2").unwrap();
    assert_eq!(mismatches[0].span.offset() as usize, entry_offset);
    assert_eq!(errors(&analysis).len(), 1);
}

#[test]
fn link22_subnetwork_without_controller_or_forwarding() {
    let analysis = analyze(
        "network \"X\" { link: Link22 subnetwork \"S\" { \
         member \"A\" { role: Participant, unit_id: 0x1, forwarding: disabled } } }",
    );
    assert_eq!(with_rule(&analysis, "link22-controller-required").len(), 1);
    assert_eq!(with_rule(&analysis, "link22-forwarding").len(), 1);
    assert_eq!(errors(&analysis).len(), 2, "{:?}", analysis.diagnostics);
}

// ── Universal invariants ─────────────────────────────────────────────────────

/// A grab bag of well-formed, broken, and hostile inputs.
const SAMPLES: &[&str] = &[
    "",
    "network",
    "network \"X\"",
    "network \"X\" {",
    "network \"X\" { link: Link16 }",
    "network \"X\" { link: }",
    "}}}}",
    "\"unterminated",
    "terminal \"A\" { role: NetControlStation }",
    "network \"X\" { net \"N\" { subscribes: [NPG_A net \"M\" { } }",
    "-- only a comment",
    "§ J3/ 0x 3.",
];

#[test]
fn analysis_terminates_with_bounded_spans() {
    for source in SAMPLES {
        let analysis = analyze(source);

        for network in &analysis.document.networks {
            assert!(network.span.end() as usize <= source.len(), "{source:?}");
        }
        for diagnostic in &analysis.diagnostics {
            assert!(diagnostic.span.end() as usize <= source.len(), "{source:?}");
        }
        for comment in &analysis.document.comments {
            assert!(comment.text.starts_with("--"), "{source:?}");
            assert!(!comment.text.contains('\n'), "{source:?}");
        }
    }
}

#[test]
fn tokenize_covers_every_byte() {
    for source in SAMPLES {
        let tokens = tokenize(source);
        let mut offset = 0;
        for token in &tokens {
            assert_eq!(token.span().offset(), offset, "{source:?}");
            offset = token.span().end();
        }
        assert_eq!(offset as usize, source.len(), "{source:?}");
        assert_eq!(tokens.last().unwrap().kind(), TokenKind::Eof);
    }
}

#[test]
fn percent_values_equal_their_lexeme() {
    let analysis = analyze("network \"X\" { a: 60%, b: 12.5%, c: 0% }");
    let values: Vec<f64> = analysis.document.networks[0]
        .properties
        .iter()
        .filter_map(|p| match p.value {
            PropertyValue::Percent(n) => Some(n),
            _ => None,
        })
        .collect();
    assert_eq!(values, vec![60.0, 12.5, 0.0]);
}

#[test]
fn hex_values_keep_their_prefix() {
    let analysis = analyze(
        "network \"X\" { link: Link22 subnetwork \"S\" { \
         member \"A\" { role: Controller, unit_id: 0x2F, forwarding: enabled } \
         member \"B\" { role: Participant, unit_id: 0XAB, forwarding: enabled } } }",
    );
    for subnetwork in &analysis.document.networks[0].subnetworks {
        for member in &subnetwork.members {
            for property in &member.properties {
                if let PropertyValue::Hex(raw) = &property.value {
                    assert!(raw.starts_with("0x") || raw.starts_with("0X"), "{raw}");
                }
            }
        }
    }
}

#[test]
fn zero_ncs_link16_network_gets_exactly_one_ncs_error() {
    let analysis = analyze(
        "network \"X\" { link: Link16 terminal \"A\" { role: Participant } \
         terminal \"B\" { role: Relay } }",
    );
    assert_eq!(with_rule(&analysis, "ncs-required").len(), 1);
}

#[test]
fn multiple_networks_analyzed_independently() {
    let analysis = analyze(
        "network \"L16\" { link: Link16 terminal \"A\" { role: NetControlStation } } \
         network \"L22\" { link: Link22 subnetwork \"S\" { \
         member \"M\" { role: Controller, unit_id: 0x1, forwarding: enabled } } } \
         network \"untyped\" { classification: SECRET }",
    );
    assert_eq!(analysis.document.networks.len(), 3);
    assert!(analysis.diagnostics.is_empty(), "{:?}", analysis.diagnostics);
}

#[test]
fn diagnostics_for_one_rule_follow_document_order() {
    let analysis = analyze(
        "network \"X\" { link: Link16 terminal \"NCS\" { role: NetControlStation } \
         terminal \"B\" { role: Ghost1 } terminal \"C\" { role: Ghost2 } }",
    );
    let roles = with_rule(&analysis, "valid-role");
    assert_eq!(roles.len(), 2);
    assert!(roles[0].span.offset() < roles[1].span.offset());
}

#[test]
fn filter_rules_survive_analysis_untouched() {
    let analysis = analyze(
        "network \"X\" { link: Link16 terminal \"A\" { role: NetControlStation } \
         filters { inbound { accept J3/2 where { quality >= 5 } drop J14/0 } \
         outbound { accept J2/2 } } }",
    );
    assert!(analysis.diagnostics.is_empty(), "{:?}", analysis.diagnostics);

    let filters = analysis.document.networks[0].filters.as_ref().unwrap();
    assert_eq!(filters.inbound.len(), 2);
    assert_eq!(filters.inbound[0].action, FilterAction::Accept);
    assert_eq!(filters.inbound[1].action, FilterAction::Drop);
    assert!(filters.inbound[1].where_clause.is_none());
    assert_eq!(filters.outbound.len(), 1);
}
