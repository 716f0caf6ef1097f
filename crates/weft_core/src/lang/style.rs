//! Lexical character classes for identifiers and operator symbols.
//!
//! The parser is scannerless (delimiters are configuration, so there is no fixed token
//! alphabet), and these predicates define where identifier and operator lexemes begin
//! and end inside template syntax regions.
//!
//! ## Notes
//! - Identifiers are ASCII-only, matching the rest of the vocabulary.
//! - Reserved-word disambiguation lives in [`crate::lang::keywords`]; an identifier
//!   lexeme is scanned with these classes first and *then* checked against the
//!   reserved set.

/// Check if a character can start an identifier.
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check if a character can appear in an operator spelling.
pub fn is_operator_char(c: char) -> bool {
    matches!(c, '|' | '&' | '=' | '!' | '<' | '>' | '+' | '-' | '*' | '/')
}

/// Check if a character is insignificant whitespace inside a syntax region.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::operators::OPERATORS;

    #[test]
    fn test_ident_classes() {
        assert!(is_ident_start('a'));
        assert!(is_ident_start('_'));
        assert!(!is_ident_start('1'));
        assert!(!is_ident_start('.'));
        assert!(is_ident_continue('x'));
        assert!(is_ident_continue('9'));
        assert!(!is_ident_continue('-'));
        // ASCII-only: no unicode identifiers.
        assert!(!is_ident_start('π'));
    }

    #[test]
    fn test_operator_class_covers_registry() {
        for o in OPERATORS {
            for c in o.spelling.chars() {
                assert!(is_operator_char(c), "{c:?} from {:?} should be an operator char", o.spelling);
            }
        }
        assert!(!is_operator_char('%'));
        assert!(!is_operator_char('a'));
    }
}
