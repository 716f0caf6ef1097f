//! Parser for Weft templates.
//!
//! Converts raw template source into a position-tagged [`Expr`] tree plus the
//! include-reference map, consulting a [`SyntaxConfig`] for delimiters and the
//! `weft_core` registries for keywords and operators.
//!
//! The parser is scannerless: delimiters are configuration, so there is no fixed
//! token alphabet to lex against. Instead, character-level scanning and the
//! grammar productions live in one recursive-descent pass.
//!
//! ## Examples
//!
//! ```rust
//! use weft_core::syntax::SyntaxConfig;
//! use weft_syntax::parser;
//!
//! let source = "{% for item in cart.lines %}{{ item.name }}{% endfor %}";
//! let (ast, includes) = parser::parse("cart", source, &SyntaxConfig::braces()).unwrap();
//! assert!(includes.is_empty());
//! # let _ = ast;
//! ```

use crate::ast::{Expr, Ident, IncludeMap, Literal, Pattern, Pos, Variable};
use crate::diagnostics::ParseError;
use rust_decimal::Decimal;
use std::str::FromStr;
use weft_core::lang::keywords::{self, KeywordId};
use weft_core::lang::operators::{self, Associativity, Fixity, OperatorId};
use weft_core::lang::style;
use weft_core::syntax::SyntaxConfig;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/document.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
