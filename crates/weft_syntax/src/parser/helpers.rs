/// Character-level primitives shared by all parser chunks.
///
/// This chunk contains the low-level scanning helpers:
/// - Peeking/consuming characters (`peek_char`, `bump`, `eat`)
/// - Position bookkeeping (`pos`)
/// - Identifier and keyword scanning
///
/// Most functions in this file are internal (`fn`) and are documented primarily
/// to aid maintenance and onboarding.
impl<'a> Parser<'a> {
    // ========================================================================
    // Core character handling
    // ========================================================================

    /// The unconsumed remainder of the source.
    fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Return `true` if the whole source has been consumed.
    fn at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Return the current character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Return `true` if the remaining input starts with `token`.
    fn at(&self, token: &str) -> bool {
        self.rest().starts_with(token)
    }

    /// Consume and return one character, updating line/column counters.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume `token` if the remaining input starts with it.
    fn eat(&mut self, token: &str) -> bool {
        if !self.at(token) {
            return false;
        }
        for _ in token.chars() {
            self.bump();
        }
        true
    }

    /// The position of the current character.
    fn pos(&self) -> Pos {
        Pos::new(self.name, self.line, self.column, self.offset)
    }

    /// Skip insignificant whitespace inside a syntax region.
    fn skip_space(&mut self) {
        while self.peek_char().is_some_and(style::is_space) {
            self.bump();
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    /// Scan an identifier lexeme, or `None` if the input does not start one.
    fn scan_ident(&mut self) -> Option<&'a str> {
        if !self.peek_char().is_some_and(style::is_ident_start) {
            return None;
        }
        let start = self.offset;
        while self.peek_char().is_some_and(style::is_ident_continue) {
            self.bump();
        }
        Some(&self.source[start..self.offset])
    }

    /// Scan an identifier that must not collide with the reserved-word set.
    fn free_ident(&mut self) -> Result<Ident, ParseError> {
        self.skip_space();
        let pos = self.pos();
        let Some(name) = self.scan_ident() else {
            return Err(ParseError::syntax("Expected an identifier", pos));
        };
        if keywords::is_reserved(name) {
            return Err(ParseError::reserved(
                format!("Keyword `{name}` cannot be used as an identifier"),
                pos,
            ));
        }
        Ok(Ident::new(name, pos))
    }

    /// Expect a specific connective keyword (e.g. `in`).
    fn expect_keyword(&mut self, id: KeywordId) -> Result<(), ParseError> {
        self.skip_space();
        let pos = self.pos();
        let found = self.scan_ident().unwrap_or("");
        if keywords::from_str(found) == Some(id) {
            Ok(())
        } else {
            Err(ParseError::syntax(
                format!("Expected keyword `{}`", keywords::as_str(id)),
                pos,
            ))
        }
    }

    // ========================================================================
    // Block delimiter helpers
    // ========================================================================

    /// Look at the keyword that follows the block-start delimiter, without
    /// consuming anything.
    ///
    /// Only meaningful when the input is positioned at the block-start token.
    fn peek_block_keyword(&self) -> Option<KeywordId> {
        let after = &self.source[self.offset + self.syntax.block().start().len()..];
        let after = after.trim_start_matches(style::is_space);
        let end = after
            .find(|c: char| !style::is_ident_continue(c))
            .unwrap_or(after.len());
        keywords::from_str(&after[..end])
    }

    /// Consume the block-start delimiter and the keyword that follows it.
    ///
    /// Returns the keyword and the position of its first character.
    fn block_keyword(&mut self) -> Result<(KeywordId, Pos), ParseError> {
        let start_tok: &'a str = self.syntax.block().start();
        self.eat(start_tok);
        self.skip_space();
        let pos = self.pos();
        let Some(word) = self.scan_ident() else {
            return Err(ParseError::syntax(
                "Expected a block keyword after the opening delimiter",
                pos,
            ));
        };
        match keywords::from_str(word) {
            Some(kw) => Ok((kw, pos)),
            None => Err(ParseError::syntax(format!("Unknown block keyword `{word}`"), pos)),
        }
    }

    /// Expect the block-end delimiter that closes the current tag.
    fn end_of_tag(&mut self) -> Result<(), ParseError> {
        self.skip_space();
        let end_tok: &'a str = self.syntax.block().end();
        if self.eat(end_tok) {
            Ok(())
        } else {
            Err(ParseError::syntax(
                format!("Expected `{end_tok}` to close the block tag"),
                self.pos(),
            ))
        }
    }

    /// Build the diagnostic for a block whose terminator never arrived.
    fn unterminated(&self, kw: KeywordId, pos: &Pos) -> ParseError {
        let terminator = kw
            .block_terminator()
            .map(keywords::as_str)
            .unwrap_or("a terminator");
        ParseError::syntax(
            format!(
                "Unterminated `{}` block: expected `{}` before end of input",
                keywords::as_str(kw),
                terminator
            ),
            pos.clone(),
        )
    }
}
