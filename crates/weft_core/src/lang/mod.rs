//! Weft language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords,
//! expression operators, pragma fields, and the lexical character classes.
//!
//! The design goal is to avoid stringly-typed checks scattered across the parser and
//! tooling. Instead, callers work with **stable IDs** (e.g. [`keywords::KeywordId`],
//! [`operators::OperatorId`]) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The parser enforces syntax; registries provide spellings and metadata for shared use
//!   (diagnostics, highlighting, validation).
//!
//! ## Examples
//! ```rust
//! use weft_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("endfor"), Some(KeywordId::EndFor));
//! assert_eq!(keywords::as_str(KeywordId::EndFor), "endfor");
//! ```

pub mod keywords;
pub mod operators;
pub mod pragma;
pub mod style;
