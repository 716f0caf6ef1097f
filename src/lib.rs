#![forbid(unsafe_code)]
//! Weft Template Language Frontend
//!
//! Weft is a text-templating language with configurable delimiters. This crate
//! is the parsing front end: it turns raw template source into a
//! position-tagged expression tree plus a map of every `include` reference,
//! ready for an evaluator to consume.
//!
//! The workspace is layered:
//!
//! - [`weft_core`] — pure vocabulary: keyword/operator/pragma registries and the
//!   delimiter configuration. No AST, no IO.
//! - [`weft_syntax`] — the scannerless recursive-descent parser, the AST, and
//!   parse diagnostics.
//! - `weft` (this crate) — the facade: re-exports plus the [`parse`] and
//!   [`parse_with`] conveniences.
//!
//! ## Panic Policy
//!
//! Production code uses `Result` with `?`; `.unwrap()` / `.expect()` are
//! acceptable in tests and for true invariants with an explanatory message.
//!
//! ## Examples
//!
//! ```rust
//! let source = "{% for line in cart.lines %}{{ line.name }}\n{% endfor %}";
//! let parsed = weft::parse("cart", source)?;
//! assert!(parsed.includes.is_empty());
//! # Ok::<(), weft::ParseError>(())
//! ```

pub use weft_core::lang::{keywords, operators, pragma};
pub use weft_core::syntax::{DelimiterPair, SyntaxConfig};
pub use weft_syntax::ast::{Expr, Ident, IncludeMap, Literal, Pattern, Pos, Variable};
pub use weft_syntax::diagnostics::{ErrorKind, ParseError};
pub use weft_syntax::parser;

/// The result of a successful parse: the root expression and every `include`
/// reference encountered, keyed by template name.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub root: Expr,
    pub includes: IncludeMap,
}

/// Parse a template using the default `{{ }}` / `{% %}` delimiter set.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered; there is no recovery.
pub fn parse(name: &str, source: &str) -> Result<Parsed, ParseError> {
    parse_with(name, source, &SyntaxConfig::default())
}

/// Parse a template with an explicit delimiter configuration.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered; there is no recovery.
#[tracing::instrument(level = "debug", skip(source, syntax))]
pub fn parse_with(name: &str, source: &str, syntax: &SyntaxConfig) -> Result<Parsed, ParseError> {
    let (root, includes) = parser::parse(name, source, syntax)?;
    Ok(Parsed { root, includes })
}
