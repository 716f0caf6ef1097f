/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and fails on the first offending position; there is
///   no error recovery and no partial AST.
/// - The include map is parse-local: it accumulates for one invocation and is handed
///   off read-only, so independent parses never share state.
pub struct Parser<'a> {
    name: &'a str,
    source: &'a str,
    syntax: &'a SyntaxConfig,
    offset: usize,
    line: u32,
    column: u32,
    includes: IncludeMap,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a named source buffer.
    ///
    /// ## Parameters
    /// - `name`: source name used in diagnostics and include positions.
    /// - `source`: the complete raw template text.
    /// - `syntax`: delimiter configuration (must be unambiguous; see
    ///   [`SyntaxConfig::ambiguity`]).
    pub fn new(name: &'a str, source: &'a str, syntax: &'a SyntaxConfig) -> Self {
        Self {
            name,
            source,
            syntax,
            offset: 0,
            line: 1,
            column: 1,
            includes: IncludeMap::new(),
        }
    }

    /// Parse the entire source into a root expression and the include map.
    ///
    /// ## Errors
    /// Returns the first [`ParseError`] encountered; on failure no AST is produced.
    pub fn parse(mut self) -> Result<(Expr, IncludeMap), ParseError> {
        let (document, end) = self.body(None, &[])?;
        // With no enclosing block, `body` can only stop at end of input.
        debug_assert!(end.is_none());
        Ok((document, self.includes))
    }
}
