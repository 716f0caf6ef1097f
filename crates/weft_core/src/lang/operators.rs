//! Operator vocabulary for template expressions.
//!
//! This module defines the canonical operator set along with the metadata the parser's
//! precedence-climbing loop consults: binding power, associativity, and fixity.
//!
//! Operators carry no meaning at parse time. Every operator desugars uniformly into an
//! application of a function named after its spelling, so the table below fixes *binding*
//! only; semantics belong to the evaluator.
//!
//! ## Notes
//! - Lookup via [`match_prefix`] is longest-spelling-first, which is how `||` vs `|`,
//!   `==` vs `=`, and `!=` vs `!` are disambiguated lexically.
//! - The filter operator `|` is the loosest-binding operator and carries a grammar
//!   restriction (bare identifier on the right) enforced by the parser, not here.
//!
//! ## Examples
//! ```rust
//! use weft_core::lang::operators::{self, Fixity, OperatorId};
//!
//! let op = operators::match_prefix("||rest", Fixity::Infix).unwrap();
//! assert_eq!(op.id, OperatorId::OrOr);
//! assert!(operators::info_for(OperatorId::Star).binding > operators::info_for(OperatorId::Plus).binding);
//! ```

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Filter
    Pipe,

    // Logical
    OrOr,
    AndAnd,

    // Comparison
    EqEq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Unary
    Bang,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `binding` is a relative ordering where higher binds tighter. The absolute scale is an
///   implementation detail, but must be consistent across the parser.
/// - `spelling` doubles as the name of the function the operator desugars to.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub binding: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
}

/// Registry of all operators, loosest-binding first.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Pipe, "|", 10, Associativity::Left, Fixity::Infix),
    op(OperatorId::OrOr, "||", 20, Associativity::Left, Fixity::Infix),
    op(OperatorId::AndAnd, "&&", 30, Associativity::Left, Fixity::Infix),
    op(OperatorId::EqEq, "==", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::NotEq, "!=", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::Gt, ">", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::GtEq, ">=", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::Lt, "<", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::LtEq, "<=", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::Minus, "-", 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::Plus, "+", 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::Star, "*", 60, Associativity::Left, Fixity::Infix),
    op(OperatorId::Slash, "/", 60, Associativity::Left, Fixity::Infix),
    op(OperatorId::Bang, "!", 70, Associativity::Right, Fixity::Prefix),
];

const fn op(
    id: OperatorId,
    spelling: &'static str,
    binding: u8,
    associativity: Associativity,
    fixity: Fixity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        binding,
        associativity,
        fixity,
    }
}

/// Look up an operator by exact spelling.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Return the full metadata entry for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .unwrap_or_else(|| unreachable!("operator {id:?} missing from registry"))
}

/// Match the longest operator spelling of the given fixity at the start of `input`.
///
/// ## Notes
/// - Longest-first matching is what keeps `a||b` from lexing as two filters and `a!=b`
///   from lexing as `a ! = b`.
pub fn match_prefix(input: &str, fixity: Fixity) -> Option<&'static OperatorInfo> {
    let mut best: Option<&'static OperatorInfo> = None;
    for o in OPERATORS {
        if o.fixity == fixity
            && input.starts_with(o.spelling)
            && best.is_none_or(|b| o.spelling.len() > b.spelling.len())
        {
            best = Some(o);
        }
    }
    best
}

/// Return `true` if `input` begins with an operator spelling of *any* fixity.
///
/// Validation/highlighting helper for external tooling; the parser itself
/// consults [`match_prefix`] per fixity.
pub fn at_operator(input: &str) -> bool {
    match_prefix(input, Fixity::Infix).is_some() || match_prefix(input, Fixity::Prefix).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_round_trips_every_spelling() {
        for o in OPERATORS {
            assert_eq!(from_str(o.spelling), Some(o.id));
            assert_eq!(info_for(o.id).spelling, o.spelling);
        }
    }

    #[test]
    fn test_binding_order_matches_grammar() {
        // Loosest to tightest: | then || then && then comparisons then +- then */.
        let ladder = [
            OperatorId::Pipe,
            OperatorId::OrOr,
            OperatorId::AndAnd,
            OperatorId::EqEq,
            OperatorId::Plus,
            OperatorId::Star,
        ];
        for pair in ladder.windows(2) {
            assert!(
                info_for(pair[0]).binding < info_for(pair[1]).binding,
                "{:?} should bind looser than {:?}",
                pair[0],
                pair[1]
            );
        }
        // Comparisons share one level, as do additive and multiplicative.
        assert_eq!(info_for(OperatorId::EqEq).binding, info_for(OperatorId::LtEq).binding);
        assert_eq!(info_for(OperatorId::Plus).binding, info_for(OperatorId::Minus).binding);
        assert_eq!(info_for(OperatorId::Star).binding, info_for(OperatorId::Slash).binding);
        // Unary ! binds tightest of all operators.
        for o in OPERATORS {
            if o.id != OperatorId::Bang {
                assert!(info_for(OperatorId::Bang).binding > o.binding);
            }
        }
    }

    #[test]
    fn test_longest_match_disambiguation() {
        assert_eq!(match_prefix("||", Fixity::Infix).unwrap().id, OperatorId::OrOr);
        assert_eq!(match_prefix("|f", Fixity::Infix).unwrap().id, OperatorId::Pipe);
        assert_eq!(match_prefix("!=x", Fixity::Infix).unwrap().id, OperatorId::NotEq);
        assert_eq!(match_prefix(">=y", Fixity::Infix).unwrap().id, OperatorId::GtEq);
        assert_eq!(match_prefix(">y", Fixity::Infix).unwrap().id, OperatorId::Gt);
        assert_eq!(match_prefix("<=y", Fixity::Infix).unwrap().id, OperatorId::LtEq);
        assert_eq!(match_prefix("!x", Fixity::Prefix).unwrap().id, OperatorId::Bang);
        assert!(match_prefix("x + y", Fixity::Infix).is_none());
    }

    #[test]
    fn test_at_operator() {
        assert!(at_operator("+ 1"));
        assert!(at_operator("!flag"));
        assert!(!at_operator("name"));
        assert!(!at_operator(""));
    }
}
