// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the TDL lexer.
//!
//! These tests use `proptest` to verify lexer invariants over generated
//! inputs:
//!
//! 1. **Lexer never panics** — arbitrary string input always produces tokens
//! 2. **Token spans within input** — every span satisfies `end <= len`
//! 3. **Token spans tile the input** — tokens are adjacent and in order
//! 4. **EOF is always last** — and appears exactly once
//! 5. **Lexer is deterministic** — same input, same tokens
//! 6. **Valid fragments produce no Unknown tokens**
//! 7. **Comments never contain newlines**

use proptest::prelude::*;

use super::lexer::lex;
use super::token::TokenKind;

// ============================================================================
// Generators
// ============================================================================

/// Known-valid single-token fragments that should lex without Unknown tokens.
const VALID_SINGLE_TOKENS: &[&str] = &[
    "42",
    "3.5",
    "60%",
    "0x1F",
    "500ms",
    "12s",
    "5min",
    "1h",
    "\"Alpha Net\"",
    "true",
    "false",
    "network",
    "terminal",
    "tsdf",
    "Link16",
    "NPG_7",
    "my-net",
    "J3/2",
    "J12",
    "{",
    "}",
    "[",
    "]",
    ":",
    ",",
    ">=",
    "<=",
    ">",
    "<",
    "==",
    "!=",
    "-- comment",
];

/// Multi-token valid fragments that should lex cleanly.
const VALID_FRAGMENTS: &[&str] = &[
    "link: Link16",
    "tsdf: 60%",
    "subscribes: [NPG_A, NPG_7]",
    "network \"X\" { }",
    "terminal \"A\" { role: NetControlStation }",
    "accept J3/2 where { quality >= 5 }",
    "unit_id: 0x2F, forwarding: enabled",
    "-- note\nnet \"N\" { net_number: 1 }",
];

fn valid_single_token() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_SINGLE_TOKENS).prop_map(std::string::ToString::to_string)
}

fn valid_fragment() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_FRAGMENTS).prop_map(std::string::ToString::to_string)
}

// ============================================================================
// Invariants
// ============================================================================

proptest! {
    #[test]
    fn lexer_never_panics(input in "\\PC*") {
        let _ = lex(&input);
    }

    #[test]
    fn token_spans_within_input(input in "\\PC*") {
        for token in lex(&input) {
            prop_assert!(token.span().end() as usize <= input.len());
        }
    }

    #[test]
    fn token_spans_tile_the_input(input in "\\PC*") {
        let mut offset = 0;
        for token in lex(&input) {
            prop_assert_eq!(token.span().offset(), offset);
            offset = token.span().end();
        }
        prop_assert_eq!(offset as usize, input.len());
    }

    #[test]
    fn eof_is_always_last_and_unique(input in "\\PC*") {
        let tokens = lex(&input);
        prop_assert!(tokens.last().is_some_and(|t| t.kind().is_eof()));
        let eof_count = tokens.iter().filter(|t| t.kind().is_eof()).count();
        prop_assert_eq!(eof_count, 1);
    }

    #[test]
    fn lexer_is_deterministic(input in "\\PC*") {
        prop_assert_eq!(lex(&input), lex(&input));
    }

    #[test]
    fn valid_single_tokens_lex_cleanly(input in valid_single_token()) {
        let tokens = lex(&input);
        prop_assert!(tokens.iter().all(|t| t.kind() != TokenKind::Unknown));
    }

    #[test]
    fn valid_fragments_lex_cleanly(input in valid_fragment()) {
        let tokens = lex(&input);
        prop_assert!(tokens.iter().all(|t| t.kind() != TokenKind::Unknown));
    }

    #[test]
    fn comments_start_with_dashes_and_hold_no_newline(input in "\\PC*") {
        for token in lex(&input) {
            if token.kind() == TokenKind::Comment {
                prop_assert!(token.text().starts_with("--"));
                prop_assert!(!token.text().contains('\n'));
            }
        }
    }

    #[test]
    fn lexemes_match_source_slices(input in "\\PC*") {
        for token in lex(&input) {
            prop_assert_eq!(token.text(), &input[token.span().as_range()]);
        }
    }
}
