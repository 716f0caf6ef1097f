//! Pragma field vocabulary.
//!
//! Pragma regions (delimited by the pragma pair in [`crate::syntax::SyntaxConfig`]) carry
//! per-template directives for the layers that sit *outside* the core document grammar:
//! loaders, escapers, and formatters. The parser engine never consumes pragma regions
//! itself; this registry exists so those outer layers and external tooling agree on the
//! reserved field names.
//!
//! ## Notes
//! - The field set is reserved separately from the expression keywords in
//!   [`crate::lang::keywords`]; the two sets do not interact.
//! - Lookup via [`from_str`] is **case-sensitive**.

/// Stable identifier for every reserved pragma field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PragmaFieldId {
    /// Select the delimiter preset a template is written in.
    Syntax,
    /// Select the output escaping discipline.
    Escape,
    /// Control whitespace stripping around block delimiters.
    Strip,
}

/// Metadata for a pragma field.
#[derive(Debug, Clone, Copy)]
pub struct PragmaFieldInfo {
    pub id: PragmaFieldId,
    pub canonical: &'static str,
}

/// Registry of all reserved pragma fields.
pub const PRAGMA_FIELDS: &[PragmaFieldInfo] = &[
    PragmaFieldInfo {
        id: PragmaFieldId::Syntax,
        canonical: "syntax",
    },
    PragmaFieldInfo {
        id: PragmaFieldId::Escape,
        canonical: "escape",
    },
    PragmaFieldInfo {
        id: PragmaFieldId::Strip,
        canonical: "strip",
    },
];

/// Look up a pragma field by spelling.
pub fn from_str(spelling: &str) -> Option<PragmaFieldId> {
    PRAGMA_FIELDS.iter().find(|f| f.canonical == spelling).map(|f| f.id)
}

/// Return the canonical spelling for a pragma field.
pub fn as_str(id: PragmaFieldId) -> &'static str {
    PRAGMA_FIELDS
        .iter()
        .find(|f| f.id == id)
        .map(|f| f.canonical)
        .unwrap_or_else(|| unreachable!("pragma field {id:?} missing from registry"))
}

/// Return `true` if the spelling is a reserved pragma field.
pub fn is_pragma_field(spelling: &str) -> bool {
    from_str(spelling).is_some()
}
