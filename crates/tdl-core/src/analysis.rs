// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The public analysis entry points.
//!
//! [`analyze`] runs the whole pipeline — lex, parse with error recovery,
//! validate — and hands the caller everything it produced. The engine is
//! synchronous, keeps no state between calls, and is safe to call from many
//! threads at once (the spec database is immutable). Hosts that re-analyze
//! on every keystroke should debounce on their side; a full pass over a
//! thousand-line document is expected to stay well under 50 ms.

use crate::ast::Document;
use crate::source_analysis::{Diagnostic, Token, lex, parse};
use crate::validate::validate;

/// The result of analyzing one source text.
///
/// The document is always present, possibly with zero networks; diagnostics
/// are the parse diagnostics followed by the validator diagnostics, each in
/// source order per producer.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The parsed (possibly partial) document.
    pub document: Document,
    /// Parse diagnostics, then validation diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == crate::source_analysis::Severity::Error)
    }
}

/// Analyzes a TDL source text.
///
/// Never fails and never panics: malformed input yields a partial document
/// plus diagnostics.
///
/// # Examples
///
/// ```
/// use tdl_core::analyze;
///
/// let analysis = analyze(
///     "network \"X\" { link: Link16 terminal \"A\" { role: NetControlStation } }",
/// );
/// assert!(!analysis.has_errors());
/// assert_eq!(analysis.document.networks.len(), 1);
/// ```
#[must_use]
pub fn analyze(source: &str) -> Analysis {
    let tokens = lex(source);
    tracing::trace!(tokens = tokens.len(), bytes = source.len(), "lexed source");

    let (document, mut diagnostics) = parse(tokens);
    let parse_count = diagnostics.len();

    diagnostics.extend(validate(&document));
    tracing::debug!(
        networks = document.networks.len(),
        parse_diagnostics = parse_count,
        validation_diagnostics = diagnostics.len() - parse_count,
        "analysis complete"
    );

    Analysis {
        document,
        diagnostics,
    }
}

/// Tokenizes a TDL source text, trivia included, for editor integrations
/// such as syntax highlighting.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    lex(source)
}
