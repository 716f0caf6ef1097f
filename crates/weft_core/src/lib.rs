//! Provide shared, pure language vocabulary and syntax configuration for the Weft template parser.
//!
//! This crate is intentionally small and dependency-free. It contains the deterministic
//! configuration that both:
//! - the parser uses to recognize delimiters, keywords, and operators, and
//! - external tooling (highlighters, validators) can use to agree on the same vocabulary.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no AST types.
//! - Current scope: delimiter configuration (with the two canonical presets), the reserved
//!   keyword set, the operator table (precedence/associativity/fixity), the pragma field
//!   set, and the lexical character classes.

pub mod lang;
pub mod syntax;
