//! Delimiter configuration for template parsing.
//!
//! A [`SyntaxConfig`] describes where literal text ends and template syntax begins: four
//! delimiter pairs for pragma, render (inline expression), comment, and block regions.
//! It is pure data; the parser consults it but never mutates it, so one configuration
//! value can serve any number of concurrent parses.
//!
//! ## Notes
//! - Two canonical presets ship out of the box: [`SyntaxConfig::braces`] (the default)
//!   and [`SyntaxConfig::at_sign`], for templates whose *output* already uses
//!   brace-style markup.
//! - **Caller responsibility**: no two start tokens may be prefixes of one another.
//!   With an ambiguous configuration (say, block `{%` and comment `{`), parsing is
//!   undefined; longest-match resolution is *not* guaranteed. [`SyntaxConfig::ambiguity`]
//!   reports the condition for tooling that wants to validate up front, but the parser
//!   does not silently resolve it.
//!
//! ## Examples
//! ```rust
//! use weft_core::syntax::SyntaxConfig;
//!
//! let syntax = SyntaxConfig::braces();
//! assert_eq!(syntax.block().start(), "{%");
//! assert_eq!(syntax.render().end(), "}}");
//! assert!(syntax.ambiguity().is_none());
//! ```

/// A matched pair of delimiter tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterPair {
    start: String,
    end: String,
}

impl DelimiterPair {
    /// Create a delimiter pair from start and end tokens.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The token that opens the region.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The token that closes the region.
    pub fn end(&self) -> &str {
        &self.end
    }
}

/// The full delimiter configuration for one template dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxConfig {
    pragma: DelimiterPair,
    render: DelimiterPair,
    comment: DelimiterPair,
    block: DelimiterPair,
}

impl SyntaxConfig {
    /// Create a custom configuration from four delimiter pairs.
    pub fn new(pragma: DelimiterPair, render: DelimiterPair, comment: DelimiterPair, block: DelimiterPair) -> Self {
        Self {
            pragma,
            render,
            comment,
            block,
        }
    }

    /// The default brace-style preset: pragma `{! !}`, render `{{ }}`, comment `{# #}`,
    /// block `{% %}`.
    pub fn braces() -> Self {
        Self::new(
            DelimiterPair::new("{!", "!}"),
            DelimiterPair::new("{{", "}}"),
            DelimiterPair::new("{#", "#}"),
            DelimiterPair::new("{%", "%}"),
        )
    }

    /// The alternate at-sign preset: pragma `@! !@`, render `@{ }@`, comment `@# #@`,
    /// block `@% %@`.
    ///
    /// Intended for templates whose output format already gives braces a meaning.
    pub fn at_sign() -> Self {
        Self::new(
            DelimiterPair::new("@!", "!@"),
            DelimiterPair::new("@{", "}@"),
            DelimiterPair::new("@#", "#@"),
            DelimiterPair::new("@%", "%@"),
        )
    }

    /// Delimiters for pragma regions (consumed by outer layers, not the core parser).
    pub fn pragma(&self) -> &DelimiterPair {
        &self.pragma
    }

    /// Delimiters for inline-expression render regions.
    pub fn render(&self) -> &DelimiterPair {
        &self.render
    }

    /// Delimiters for comment regions.
    pub fn comment(&self) -> &DelimiterPair {
        &self.comment
    }

    /// Delimiters for block constructs (`if`, `case`, `for`, `let`, `include`).
    pub fn block(&self) -> &DelimiterPair {
        &self.block
    }

    /// Report a pair of start tokens where one is a prefix of the other, if any.
    ///
    /// ## Notes
    /// - This is a validation helper for tooling. The parser itself assumes the
    ///   configuration is unambiguous and makes no guarantee about which delimiter wins
    ///   otherwise.
    pub fn ambiguity(&self) -> Option<(&str, &str)> {
        let starts = [
            self.pragma.start(),
            self.render.start(),
            self.comment.start(),
            self.block.start(),
        ];
        for (i, a) in starts.iter().enumerate() {
            for b in &starts[i + 1..] {
                if a.starts_with(b) || b.starts_with(a) {
                    return Some((a, b));
                }
            }
        }
        None
    }
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self::braces()
    }
}
