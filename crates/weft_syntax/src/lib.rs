//! Syntax frontend for the Weft template language: AST, parser, diagnostics.
//!
//! This crate turns raw template source (literal text interleaved with render
//! regions, comments, and block constructs) into a position-tagged AST plus a map
//! of every `include` reference encountered, ready for a downstream evaluator and
//! include resolver.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not evaluate expressions,
//!   resolve includes, or produce output text.
//! - Delimiters, keywords, and operators come from the `weft_core` registries.
//!
//! ## Examples
//! ```rust,no_run
//! use weft_core::syntax::SyntaxConfig;
//! use weft_syntax::parser;
//!
//! let syntax = SyntaxConfig::braces();
//! let (ast, includes) = parser::parse("greeting", "Hello {{ name }}!", &syntax).unwrap();
//! assert!(includes.is_empty());
//! # let _ = ast;
//! ```

pub mod ast;
pub mod diagnostics;
pub mod parser;
