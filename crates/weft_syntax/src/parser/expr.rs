/// Expression productions: precedence climbing over the operator registry,
/// unary operators, atoms, variable paths, and literal scanning.
impl<'a> Parser<'a> {
    // ========================================================================
    // Precedence climbing
    // ========================================================================

    /// Parse a full expression.
    fn term(&mut self) -> Result<Expr, ParseError> {
        self.climb(0)
    }

    /// Parse an expression whose operators all bind at least as tightly as
    /// `min_binding`. The registry supplies binding power and associativity, so
    /// this loop never hard-codes a precedence level.
    fn climb(&mut self, min_binding: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            self.skip_space();
            let Some(op) = operators::match_prefix(self.rest(), Fixity::Infix) else {
                break;
            };
            if op.binding < min_binding {
                break;
            }
            let op_pos = self.pos();
            self.eat(op.spelling);

            if op.id == OperatorId::Pipe {
                lhs = self.filter(lhs)?;
                continue;
            }

            let next_min = match op.associativity {
                Associativity::Left => op.binding + 1,
                Associativity::Right => op.binding,
            };
            let rhs = self.climb(next_min)?;
            lhs = Expr::binary_app(op_pos, op.spelling, lhs, rhs);
        }
        Ok(lhs)
    }

    /// Parse a prefix-operator application or fall through to an atom.
    fn unary(&mut self) -> Result<Expr, ParseError> {
        self.skip_space();
        if let Some(op) = operators::match_prefix(self.rest(), Fixity::Prefix) {
            // `!=` is an infix spelling, not `!` followed by `=`; a longer infix
            // match at the same position wins and falls through to the atom
            // error path.
            let shadowed = operators::match_prefix(self.rest(), Fixity::Infix)
                .is_some_and(|infix| infix.spelling.len() > op.spelling.len());
            if !shadowed {
                let pos = self.pos();
                self.eat(op.spelling);
                let operand = self.unary()?;
                return Ok(Expr::unary_app(pos, op.spelling, operand));
            }
        }
        self.atom()
    }

    /// Parse the right-hand side of a `|`: a bare filter name.
    ///
    /// Dotted paths and anything fancier are rejected; the filter position is
    /// the name's own position so diagnostics point at the filter, not the pipe.
    fn filter(&mut self, value: Expr) -> Result<Expr, ParseError> {
        self.skip_space();
        let pos = self.pos();
        let Some(name) = self.scan_ident() else {
            return Err(ParseError::syntax("Expected a filter name after `|`", pos));
        };
        if keywords::is_reserved(name) {
            return Err(ParseError::reserved(
                format!("Keyword `{name}` cannot be used as a filter name"),
                pos,
            ));
        }
        if self.at(".") || self.at("(") {
            return Err(ParseError::syntax(
                format!("A filter name must be a bare identifier, but `{name}` continues"),
                pos,
            ));
        }
        Ok(Expr::filter_app(Ident::new(name, pos), value))
    }

    // ========================================================================
    // Atoms
    // ========================================================================

    /// Parse an atom: parenthesized expression, literal, or variable path.
    fn atom(&mut self) -> Result<Expr, ParseError> {
        self.skip_space();
        let pos = self.pos();
        match self.peek_char() {
            Some('(') => {
                self.bump();
                let inner = self.term()?;
                self.skip_space();
                if !self.eat(")") {
                    return Err(ParseError::syntax(
                        "Expected `)` to close the parenthesized expression",
                        self.pos(),
                    ));
                }
                Ok(inner)
            }
            Some('"') => {
                let (text, pos) = self.string_literal()?;
                Ok(Expr::Literal(pos, Literal::Text(text)))
            }
            Some(c) if c.is_ascii_digit() => {
                let (number, pos) = self.number_literal()?;
                Ok(Expr::Literal(pos, Literal::Number(number)))
            }
            Some(c) if style::is_ident_start(c) => {
                let name = self
                    .scan_ident()
                    .expect("INVARIANT: leading character class was just checked");
                match keywords::from_str(name) {
                    Some(KeywordId::True) => Ok(Expr::Literal(pos, Literal::Bool(true))),
                    Some(KeywordId::False) => Ok(Expr::Literal(pos, Literal::Bool(false))),
                    Some(kw) => Err(ParseError::reserved(
                        format!("Keyword `{}` cannot be used as a variable name", keywords::as_str(kw)),
                        pos,
                    )),
                    None => {
                        let head = Ident::new(name, pos.clone());
                        let var = self.variable_path(head)?;
                        Ok(Expr::Var(pos, var))
                    }
                }
            }
            _ => Err(ParseError::syntax("Expected an expression", pos)),
        }
    }

    /// Extend a leading identifier into a full dotted path.
    fn variable_path(&mut self, head: Ident) -> Result<Variable, ParseError> {
        let mut var = Variable::new(head);
        while self.at(".") {
            self.bump();
            let pos = self.pos();
            let Some(name) = self.scan_ident() else {
                return Err(ParseError::syntax(
                    "Expected an identifier after `.` in a variable path",
                    pos,
                ));
            };
            if keywords::is_reserved(name) {
                return Err(ParseError::reserved(
                    format!("Keyword `{name}` cannot be used in a variable path"),
                    pos,
                ));
            }
            var.push(Ident::new(name, pos));
        }
        Ok(var)
    }

    /// Parse a bare variable path as an expression (the only shape a `for`
    /// source may take).
    fn variable_expr(&mut self) -> Result<Expr, ParseError> {
        let pos = {
            self.skip_space();
            self.pos()
        };
        let head = self.free_ident()?;
        let var = self.variable_path(head)?;
        Ok(Expr::Var(pos, var))
    }

    // ========================================================================
    // Literal scanning
    // ========================================================================

    /// Scan a number literal: digits with an optional fractional part.
    ///
    /// The dot is consumed only when a digit follows, so `items.0` never eats
    /// into a trailing path and `1.` leaves the dot for the caller to reject.
    fn number_literal(&mut self) -> Result<(Decimal, Pos), ParseError> {
        let pos = self.pos();
        let start = self.offset;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        if self.at(".") && self.rest()[1..].starts_with(|c: char| c.is_ascii_digit()) {
            self.bump();
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
        }
        if self.peek_char().is_some_and(style::is_ident_continue) {
            while self.peek_char().is_some_and(style::is_ident_continue) {
                self.bump();
            }
            let text = &self.source[start..self.offset];
            return Err(ParseError::lexical(format!("Malformed number literal `{text}`"), pos));
        }
        let text = &self.source[start..self.offset];
        match Decimal::from_str(text) {
            Ok(number) => Ok((number, pos)),
            Err(_) => Err(ParseError::lexical(format!("Malformed number literal `{text}`"), pos)),
        }
    }

    /// Scan a double-quoted string literal with `\n \t \r \" \\` escapes.
    fn string_literal(&mut self) -> Result<(String, Pos), ParseError> {
        let pos = self.pos();
        self.bump();
        let mut text = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok((text, pos)),
                Some('\\') => match self.bump() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some('r') => text.push('\r'),
                    Some('"') => text.push('"'),
                    Some('\\') => text.push('\\'),
                    Some(other) => {
                        return Err(ParseError::lexical(
                            format!("Unknown escape sequence `\\{other}` in string literal"),
                            pos,
                        ));
                    }
                    None => {
                        return Err(ParseError::lexical(
                            "Unterminated string literal: expected `\"` before end of input",
                            pos,
                        ));
                    }
                },
                Some(c) => text.push(c),
                None => {
                    return Err(ParseError::lexical(
                        "Unterminated string literal: expected `\"` before end of input",
                        pos,
                    ));
                }
            }
        }
    }
}
