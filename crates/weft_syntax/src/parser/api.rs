// ============================================================================
// Public API
// ============================================================================

/// Parse a named template source into its root expression and include map.
///
/// `name` tags every position in the result, so diagnostics and the include
/// map stay attributable when many templates are parsed in one session.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered. Parsing has no recovery: on
/// failure no AST and no include map are produced.
///
/// ## Examples
///
/// ```rust
/// use weft_core::syntax::SyntaxConfig;
/// use weft_syntax::parser;
///
/// let (ast, includes) =
///     parser::parse("greeting", "Hello, {{ user.name }}!", &SyntaxConfig::braces())?;
/// assert!(includes.is_empty());
/// # let _ = ast;
/// # Ok::<(), weft_syntax::diagnostics::ParseError>(())
/// ```
#[tracing::instrument(level = "debug", skip(source, syntax), fields(bytes = source.len()))]
pub fn parse(
    name: &str,
    source: &str,
    syntax: &SyntaxConfig,
) -> Result<(Expr, IncludeMap), ParseError> {
    let result = Parser::new(name, source, syntax).parse();
    match &result {
        Ok((_, includes)) => {
            tracing::debug!(includes = includes.len(), "parse succeeded");
        }
        Err(err) => {
            tracing::debug!(%err, "parse failed");
        }
    }
    result
}
