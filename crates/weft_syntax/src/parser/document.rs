/// Document-level productions: text fragments, comments, render regions, and the
/// block constructs with their matching-terminator discipline.
///
/// ## Notes
/// - `body` is the workhorse: every block hands it the set of keywords that may
///   close or continue that block, and gets back the spliced body plus whichever
///   keyword actually stopped it.
impl<'a> Parser<'a> {
    // ========================================================================
    // Document structure
    // ========================================================================

    /// Parse a run of constructs until end of input or one of `exits`.
    ///
    /// Returns the spliced body and the exit keyword (with its position) that
    /// stopped it, or `None` when end of input was reached. `open` names the
    /// enclosing block for unterminated-block diagnostics; with `open == None`,
    /// reaching end of input is success and any block-exit keyword is an error.
    fn body(
        &mut self,
        open: Option<(KeywordId, &Pos)>,
        exits: &[KeywordId],
    ) -> Result<(Expr, Option<(KeywordId, Pos)>), ParseError> {
        let comment_start: &'a str = self.syntax.comment().start();
        let render_start: &'a str = self.syntax.render().start();
        let block_start: &'a str = self.syntax.block().start();

        let mut items = Vec::new();
        loop {
            if self.at_end() {
                return match open {
                    None => Ok((Expr::seq(items), None)),
                    Some((kw, pos)) => Err(self.unterminated(kw, pos)),
                };
            }
            if self.at(comment_start) {
                self.comment()?;
            } else if self.at(render_start) {
                items.push(self.render()?);
            } else if self.at(block_start) {
                match self.peek_block_keyword() {
                    Some(kw) if exits.contains(&kw) => {
                        let (kw, kw_pos) = self.block_keyword()?;
                        return Ok((Expr::seq(items), Some((kw, kw_pos))));
                    }
                    Some(kw) if kw.exits_block() => {
                        let pos = self.pos();
                        let message = match open {
                            Some((open_kw, _)) => format!(
                                "Unexpected `{}` inside `{}` block",
                                keywords::as_str(kw),
                                keywords::as_str(open_kw)
                            ),
                            None => format!("Unexpected `{}` with no open block", keywords::as_str(kw)),
                        };
                        return Err(ParseError::syntax(message, pos));
                    }
                    _ => items.push(self.block()?),
                }
            } else {
                items.push(self.text_fragment());
            }
        }
    }

    /// Parse a maximal literal text run (no leading delimiter at the current
    /// position; always consumes at least one character).
    fn text_fragment(&mut self) -> Expr {
        let comment_start: &'a str = self.syntax.comment().start();
        let render_start: &'a str = self.syntax.render().start();
        let block_start: &'a str = self.syntax.block().start();

        let pos = self.pos();
        let start = self.offset;
        while !self.at_end() && !self.at(comment_start) && !self.at(render_start) && !self.at(block_start) {
            self.bump();
        }
        Expr::Text(pos, self.source[start..self.offset].to_string())
    }

    /// Skip a comment region. Contents are discarded entirely.
    fn comment(&mut self) -> Result<(), ParseError> {
        let start_tok: &'a str = self.syntax.comment().start();
        let end_tok: &'a str = self.syntax.comment().end();
        let pos = self.pos();
        self.eat(start_tok);
        while !self.at_end() {
            if self.eat(end_tok) {
                return Ok(());
            }
            self.bump();
        }
        Err(ParseError::syntax(
            format!("Unterminated comment: expected `{end_tok}` before end of input"),
            pos,
        ))
    }

    /// Parse a render region: one expression between the render delimiters.
    fn render(&mut self) -> Result<Expr, ParseError> {
        let start_tok: &'a str = self.syntax.render().start();
        let end_tok: &'a str = self.syntax.render().end();
        self.eat(start_tok);
        self.skip_space();
        if self.at(end_tok) {
            return Err(ParseError::syntax(
                "Expected an expression between the render delimiters",
                self.pos(),
            ));
        }
        let expr = self.term()?;
        self.skip_space();
        if !self.eat(end_tok) {
            return Err(ParseError::syntax(
                format!("Expected `{end_tok}` to close the render region"),
                self.pos(),
            ));
        }
        Ok(expr)
    }

    // ========================================================================
    // Block constructs
    // ========================================================================

    /// Parse one block construct, starting at the block-start delimiter.
    fn block(&mut self) -> Result<Expr, ParseError> {
        let (kw, pos) = self.block_keyword()?;
        match kw {
            KeywordId::If => self.if_block(pos),
            KeywordId::Case => self.case_block(pos),
            KeywordId::For => self.for_block(pos),
            KeywordId::Let => self.let_block(pos),
            KeywordId::Include => self.include_stmt(pos),
            other => Err(ParseError::syntax(
                format!("`{}` cannot open a block", keywords::as_str(other)),
                pos,
            )),
        }
    }

    /// `if <expr> ... [elif <expr> ...]* [else ...] endif`
    ///
    /// Desugars into nested boolean `case` nodes in source order; the `else` body
    /// (or the neutral node when omitted) becomes the innermost fallback.
    fn if_block(&mut self, pos: Pos) -> Result<Expr, ParseError> {
        let mut pending = (pos.clone(), self.term()?);
        self.end_of_tag()?;

        let mut branches = Vec::new();
        let fallback;
        loop {
            let (branch_body, end) = self.body(
                Some((KeywordId::If, &pos)),
                &[KeywordId::Elif, KeywordId::Else, KeywordId::EndIf],
            )?;
            let (branch_pos, condition) = pending;
            branches.push((branch_pos, condition, branch_body));
            match end {
                Some((KeywordId::Elif, elif_pos)) => {
                    pending = (elif_pos, self.term()?);
                    self.end_of_tag()?;
                }
                Some((KeywordId::Else, _)) => {
                    self.end_of_tag()?;
                    let (else_body, _) = self.body(Some((KeywordId::If, &pos)), &[KeywordId::EndIf])?;
                    self.end_of_tag()?;
                    fallback = Some(else_body);
                    break;
                }
                _ => {
                    // EndIf: `body` only stops at a requested terminator.
                    self.end_of_tag()?;
                    fallback = None;
                    break;
                }
            }
        }
        Ok(Expr::cond_chain(branches, fallback))
    }

    /// `case <expr> [when <pattern> ...]* [else ...] endcase`
    ///
    /// Alternatives are kept in source order; `else` appends an implicit wildcard
    /// alternative. Without `else` no fallback is fabricated: a non-exhaustive
    /// match is the evaluator's condition to report, not ours to hide.
    fn case_block(&mut self, pos: Pos) -> Result<Expr, ParseError> {
        let scrutinee = self.term()?;
        self.end_of_tag()?;

        let exits = [KeywordId::When, KeywordId::Else, KeywordId::EndCase];
        // Content between the case header and the first `when` belongs to no
        // alternative; parse and discard it.
        let (_, mut end) = self.body(Some((KeywordId::Case, &pos)), &exits)?;

        let mut alternatives = Vec::new();
        while matches!(end, Some((KeywordId::When, _))) {
            let pattern = self.pattern()?;
            self.end_of_tag()?;
            let (alt_body, next) = self.body(Some((KeywordId::Case, &pos)), &exits)?;
            alternatives.push((pattern, alt_body));
            end = next;
        }
        if matches!(end, Some((KeywordId::Else, _))) {
            self.end_of_tag()?;
            let (else_body, _) = self.body(Some((KeywordId::Case, &pos)), &[KeywordId::EndCase])?;
            alternatives.push((Pattern::Wildcard, else_body));
        }
        self.end_of_tag()?;
        Ok(Expr::Case(pos, Box::new(scrutinee), alternatives))
    }

    /// `for <ident> in <variable> ... [else ...] endfor`
    ///
    /// The bound identifier is visible only inside the loop body; the optional
    /// `else` body runs when the source is empty.
    fn for_block(&mut self, pos: Pos) -> Result<Expr, ParseError> {
        let var = self.free_ident()?;
        self.expect_keyword(KeywordId::In)?;
        let source = self.variable_expr()?;
        self.end_of_tag()?;

        let (body, end) = self.body(Some((KeywordId::For, &pos)), &[KeywordId::Else, KeywordId::EndFor])?;
        let empty = if matches!(end, Some((KeywordId::Else, _))) {
            self.end_of_tag()?;
            let (else_body, _) = self.body(Some((KeywordId::For, &pos)), &[KeywordId::EndFor])?;
            Some(Box::new(else_body))
        } else {
            None
        };
        self.end_of_tag()?;
        Ok(Expr::Loop {
            pos,
            var,
            source: Box::new(source),
            body: Box::new(body),
            empty,
        })
    }

    /// `let <ident> = <expr> ... endlet`
    fn let_block(&mut self, pos: Pos) -> Result<Expr, ParseError> {
        let name = self.free_ident()?;
        self.skip_space();
        if !self.eat("=") {
            return Err(ParseError::syntax("Expected `=` after the binding name", self.pos()));
        }
        let value = self.term()?;
        self.end_of_tag()?;
        let (body, _) = self.body(Some((KeywordId::Let, &pos)), &[KeywordId::EndLet])?;
        self.end_of_tag()?;
        Ok(Expr::Let(pos, name, Box::new(value), Box::new(body)))
    }

    /// `include "<key>" [with <expr>]` — a single statement, no terminator.
    ///
    /// Registers the key and position into the include map once per syntactic
    /// occurrence, regardless of what branch or loop body it sits in.
    fn include_stmt(&mut self, pos: Pos) -> Result<Expr, ParseError> {
        self.skip_space();
        if !self.at("\"") {
            return Err(ParseError::syntax(
                "Expected a quoted template key after `include`",
                self.pos(),
            ));
        }
        let (key, _) = self.string_literal()?;

        self.skip_space();
        let mut context = None;
        if self.peek_char().is_some_and(style::is_ident_start) {
            let word_pos = self.pos();
            let word = self.scan_ident().unwrap_or("");
            if keywords::from_str(word) != Some(KeywordId::With) {
                return Err(ParseError::syntax(
                    format!("Expected `with` or the closing delimiter, found `{word}`"),
                    word_pos,
                ));
            }
            context = Some(Box::new(self.term()?));
        }
        self.end_of_tag()?;

        self.includes.entry(key.clone()).or_default().push(pos.clone());
        Ok(Expr::Include(pos, key, context))
    }

    // ========================================================================
    // Patterns
    // ========================================================================

    /// Parse a `when` pattern: wildcard, literal, or binding name.
    fn pattern(&mut self) -> Result<Pattern, ParseError> {
        self.skip_space();
        let pos = self.pos();
        match self.peek_char() {
            Some('"') => {
                let (text, _) = self.string_literal()?;
                Ok(Pattern::Literal(Literal::Text(text)))
            }
            Some(c) if c.is_ascii_digit() => {
                let (number, _) = self.number_literal()?;
                Ok(Pattern::Literal(Literal::Number(number)))
            }
            Some(c) if style::is_ident_start(c) => {
                let word = self
                    .scan_ident()
                    .expect("INVARIANT: leading character class was just checked");
                match keywords::from_str(word) {
                    Some(KeywordId::Wildcard) => Ok(Pattern::Wildcard),
                    Some(KeywordId::True) => Ok(Pattern::Literal(Literal::Bool(true))),
                    Some(KeywordId::False) => Ok(Pattern::Literal(Literal::Bool(false))),
                    Some(kw) => Err(ParseError::reserved(
                        format!("Keyword `{}` cannot be used as a pattern binding", keywords::as_str(kw)),
                        pos,
                    )),
                    None => Ok(Pattern::Bind(Ident::new(word, pos))),
                }
            }
            _ => Err(ParseError::syntax(
                "Expected a pattern (`_`, a literal, or a binding name)",
                pos,
            )),
        }
    }
}
