//! Define the reserved keyword vocabulary for the Weft template language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical
//! spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; there are no aliases.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//! - An identifier lexeme that collides with any entry here must be rejected by the
//!   parser wherever a free identifier is required (“keyword used as identifier”).
//!
//! ## Examples
//! ```rust
//! use weft_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::as_str(KeywordId::If), "if");
//! assert!(keywords::is_reserved("endcase"));
//! ```

/// Stable identifier for every reserved word.
///
/// ## Notes
/// - The canonical spelling is accessible via [`as_str`].
/// - The terminator that closes a block opener is accessible via [`KeywordId::block_terminator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Block openers
    If,
    Case,
    For,
    Include,
    Let,

    // Intermediate clauses
    Elif,
    Else,
    When,

    // Block terminators
    EndIf,
    EndCase,
    EndFor,
    EndLet,

    // Clause connectives
    In,
    With,

    // Pattern / path punctuation spelled as words
    Wildcard,
    Dot,

    // Literals
    True,
    False,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
/// - [`KeywordCategory::Clause`] and [`KeywordCategory::Terminator`] entries may only
///   appear where an enclosing block admits them; the parser owns that discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    BlockOpener,
    Clause,
    Terminator,
    Connective,
    Punctuation,
    Literal,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all reserved words.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    kw(KeywordId::If, "if", KeywordCategory::BlockOpener),
    kw(KeywordId::Case, "case", KeywordCategory::BlockOpener),
    kw(KeywordId::For, "for", KeywordCategory::BlockOpener),
    kw(KeywordId::Include, "include", KeywordCategory::BlockOpener),
    kw(KeywordId::Let, "let", KeywordCategory::BlockOpener),
    kw(KeywordId::Elif, "elif", KeywordCategory::Clause),
    kw(KeywordId::Else, "else", KeywordCategory::Clause),
    kw(KeywordId::When, "when", KeywordCategory::Clause),
    kw(KeywordId::EndIf, "endif", KeywordCategory::Terminator),
    kw(KeywordId::EndCase, "endcase", KeywordCategory::Terminator),
    kw(KeywordId::EndFor, "endfor", KeywordCategory::Terminator),
    kw(KeywordId::EndLet, "endlet", KeywordCategory::Terminator),
    kw(KeywordId::In, "in", KeywordCategory::Connective),
    kw(KeywordId::With, "with", KeywordCategory::Connective),
    kw(KeywordId::Wildcard, "_", KeywordCategory::Punctuation),
    kw(KeywordId::Dot, ".", KeywordCategory::Punctuation),
    kw(KeywordId::True, "true", KeywordCategory::Literal),
    kw(KeywordId::False, "false", KeywordCategory::Literal),
];

const fn kw(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}

/// Look up a reserved word by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved, `None` otherwise.
pub fn from_str(spelling: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == spelling).map(|k| k.id)
}

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a keyword.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    // The registry covers every id by construction.
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .unwrap_or_else(|| unreachable!("keyword {id:?} missing from registry"))
}

/// Return `true` if the spelling collides with a reserved word.
pub fn is_reserved(spelling: &str) -> bool {
    from_str(spelling).is_some()
}

impl KeywordId {
    /// Return this keyword's registry category.
    pub fn category(self) -> KeywordCategory {
        info_for(self).category
    }

    /// Return `true` if this keyword opens a delimited block construct.
    pub fn opens_block(self) -> bool {
        matches!(self.category(), KeywordCategory::BlockOpener)
    }

    /// Return `true` if this keyword can only appear as a clause boundary or
    /// terminator inside an already-open block (`elif`, `else`, `when`, `end*`).
    pub fn exits_block(self) -> bool {
        matches!(self.category(), KeywordCategory::Clause | KeywordCategory::Terminator)
    }

    /// Return the terminator keyword that closes this block opener, if any.
    ///
    /// `include` is a single statement and has no terminator.
    pub fn block_terminator(self) -> Option<KeywordId> {
        match self {
            KeywordId::If => Some(KeywordId::EndIf),
            KeywordId::Case => Some(KeywordId::EndCase),
            KeywordId::For => Some(KeywordId::EndFor),
            KeywordId::Let => Some(KeywordId::EndLet),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_round_trips_every_spelling() {
        for k in KEYWORDS {
            assert_eq!(
                from_str(k.canonical),
                Some(k.id),
                "spelling {:?} should resolve to {:?}",
                k.canonical,
                k.id
            );
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn test_reserved_set_is_exact() {
        let expected = [
            "if", "elif", "else", "case", "when", "for", "include", "let", "endif", "endcase",
            "endfor", "endlet", "in", "with", "_", ".", "true", "false",
        ];
        assert_eq!(KEYWORDS.len(), expected.len());
        for spelling in expected {
            assert!(is_reserved(spelling), "{spelling:?} should be reserved");
        }
        assert!(!is_reserved("end"));
        assert!(!is_reserved("item"));
        assert!(!is_reserved("If"), "lookup is case-sensitive");
    }

    #[test]
    fn test_openers_pair_with_terminators() {
        assert_eq!(KeywordId::If.block_terminator(), Some(KeywordId::EndIf));
        assert_eq!(KeywordId::Case.block_terminator(), Some(KeywordId::EndCase));
        assert_eq!(KeywordId::For.block_terminator(), Some(KeywordId::EndFor));
        assert_eq!(KeywordId::Let.block_terminator(), Some(KeywordId::EndLet));
        assert_eq!(KeywordId::Include.block_terminator(), None);
    }

    #[test]
    fn test_exit_keywords() {
        for id in [
            KeywordId::Elif,
            KeywordId::Else,
            KeywordId::When,
            KeywordId::EndIf,
            KeywordId::EndCase,
            KeywordId::EndFor,
            KeywordId::EndLet,
        ] {
            assert!(id.exits_block(), "{id:?} should exit a block");
            assert!(!id.opens_block());
        }
        for id in [KeywordId::If, KeywordId::Case, KeywordId::For, KeywordId::Let, KeywordId::Include] {
            assert!(id.opens_block(), "{id:?} should open a block");
            assert!(!id.exits_block());
        }
    }
}
