// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! TDL language engine core.
//!
//! This crate contains the language engine for TDL, a configuration
//! language describing tactical data link network topologies (Link 16 and
//! Link 22):
//!
//! - Lexical analysis (tokenization with trivia and precise spans)
//! - Parsing (error-recovering recursive descent into an AST)
//! - Validation (semantic and domain rules against the link spec database)
//!
//! The engine is designed as a language service: it never fails on
//! malformed input, always produces an AST alongside its diagnostics, and
//! keeps no state between calls. Editors drive it through [`analyze`] and
//! [`tokenize`]; everything else is plumbing those two expose.
//!
//! ```
//! use tdl_core::analyze;
//!
//! let analysis = analyze("network \"Alpha\" { link: Link16 }");
//! assert_eq!(analysis.document.networks[0].name, "Alpha");
//! ```

mod analysis;
pub mod ast;
pub mod source_analysis;
pub mod spec_db;
pub mod validate;

pub use analysis::{Analysis, analyze, tokenize};

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::analysis::{Analysis, analyze, tokenize};
    pub use crate::ast::{
        Document, FilterAction, FilterBlock, FilterRule, Member, MessageCatalog, MessageEntry,
        Net, Network, Property, PropertyValue, Subnetwork, Terminal,
    };
    pub use crate::source_analysis::{Diagnostic, Severity, Span, Token, TokenKind};
}
