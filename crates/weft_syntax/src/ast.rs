//! Abstract Syntax Tree definitions for Weft templates.
//!
//! Every node is built once during parsing and never mutated. Positions are
//! diagnostic metadata only: they are carried on (almost) every node but are
//! invisible to equality, so two parses of the same logical template compare
//! equal regardless of where their delimiters sat in the source.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;

/// Source location: line/column plus byte offset, tagged with the source name.
#[derive(Debug, Clone)]
pub struct Pos {
    /// Name identifying the originating source (for diagnostics).
    pub source: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
    /// Byte offset into the source.
    pub offset: usize,
}

impl Pos {
    pub fn new(source: impl Into<String>, line: u32, column: u32, offset: usize) -> Self {
        Self {
            source: source.into(),
            line,
            column,
            offset,
        }
    }
}

/// Positions are metadata, not structure: any two positions compare equal so that
/// AST comparisons ignore them.
impl PartialEq for Pos {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.line, self.column)
    }
}

/// A position-tagged name. Equality ignores the position.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub pos: Pos,
}

impl Ident {
    pub fn new(name: impl Into<String>, pos: Pos) -> Self {
        Self { name: name.into(), pos }
    }
}

/// A dotted access path (`a.b.c`). Never empty; a single identifier is the
/// one-element case.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    parts: Vec<Ident>,
}

impl Variable {
    /// Create a one-element path.
    pub fn new(head: Ident) -> Self {
        Self { parts: vec![head] }
    }

    /// Append a path component.
    pub fn push(&mut self, part: Ident) {
        self.parts.push(part);
    }

    /// The ordered components of the path. Guaranteed non-empty.
    pub fn parts(&self) -> &[Ident] {
        &self.parts
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", part.name)?;
        }
        Ok(())
    }
}

/// Literal values appearing in expressions and patterns.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    /// Decimal number, covering both integer and fractional forms.
    Number(Decimal),
    Text(String),
}

/// Patterns for `case`/`when` alternatives.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// `_` — matches anything, binds nothing.
    Wildcard,
    /// A name — matches anything, binds the scrutinee to it.
    Bind(Ident),
    /// A literal — matches on equality.
    Literal(Literal),
}

/// Accumulated record of every `include` key and the positions where it was
/// referenced, in source order. Values are never empty.
pub type IncludeMap = HashMap<String, Vec<Pos>>;

/// Template expression.
///
/// The variant set is closed: evaluators and printers match exhaustively so the
/// compiler flags every consumer when a variant is added.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Pos, Literal),
    /// A dotted variable reference.
    Var(Pos, Variable),
    /// A reference to a named function (operators desugar to these).
    Func(Pos, Ident),
    /// Application of a function expression to one argument. Curried: n-ary
    /// calls are nested single-argument applications.
    Apply(Pos, Box<Expr>, Box<Expr>),
    /// Scrutinee plus ordered `(pattern, body)` alternatives; first match wins.
    Case(Pos, Box<Expr>, Vec<(Pattern, Expr)>),
    /// `for` loop: `var` is bound only inside `body`; `empty` runs when the
    /// source yields nothing.
    Loop {
        pos: Pos,
        var: Ident,
        source: Box<Expr>,
        body: Box<Expr>,
        empty: Option<Box<Expr>>,
    },
    /// `let` binding: the name is visible only inside the body expression.
    Let(Pos, Ident, Box<Expr>, Box<Expr>),
    /// Reference to another template by key, with an optional `with` context.
    Include(Pos, String, Option<Box<Expr>>),
    /// Literal text copied verbatim to the output.
    Text(Pos, String),
    /// Concatenation of sibling expressions. The empty sequence is the neutral
    /// node; it is the only variant without a position.
    Seq(Vec<Expr>),
}

impl Expr {
    /// The neutral node: renders to nothing.
    pub fn empty() -> Expr {
        Expr::Seq(Vec::new())
    }

    /// Splice sibling expressions together, collapsing a singleton to its element.
    pub fn seq(items: Vec<Expr>) -> Expr {
        let mut items = items;
        match items.len() {
            1 => items.remove(0),
            _ => Expr::Seq(items),
        }
    }

    /// Apply the unary operator named `op` to `operand`.
    pub fn unary_app(pos: Pos, op: &str, operand: Expr) -> Expr {
        let func = Expr::Func(pos.clone(), Ident::new(op, pos.clone()));
        Expr::Apply(pos, Box::new(func), Box::new(operand))
    }

    /// Apply the binary operator named `op` to two operands, as nested
    /// single-argument applications.
    pub fn binary_app(pos: Pos, op: &str, lhs: Expr, rhs: Expr) -> Expr {
        let func = Expr::Func(pos.clone(), Ident::new(op, pos.clone()));
        let partial = Expr::Apply(pos.clone(), Box::new(func), Box::new(lhs));
        Expr::Apply(pos, Box::new(partial), Box::new(rhs))
    }

    /// Apply the named filter function to `value` (`value | name` becomes
    /// `name(value)`).
    pub fn filter_app(name: Ident, value: Expr) -> Expr {
        let pos = name.pos.clone();
        let func = Expr::Func(pos.clone(), name);
        Expr::Apply(pos, Box::new(func), Box::new(value))
    }

    /// Fold an `if`/`elif`/.../`else` chain into nested boolean `Case` nodes.
    ///
    /// Each `(pos, condition, body)` branch becomes a two-alternative case
    /// matching the condition against `true` and `false`, in source order, with
    /// the final `else` body (or the neutral node when omitted) as the innermost
    /// fallback.
    pub fn cond_chain(branches: Vec<(Pos, Expr, Expr)>, fallback: Option<Expr>) -> Expr {
        let mut acc = fallback.unwrap_or_else(Expr::empty);
        for (pos, cond, body) in branches.into_iter().rev() {
            acc = Expr::Case(
                pos,
                Box::new(cond),
                vec![
                    (Pattern::Literal(Literal::Bool(true)), body),
                    (Pattern::Literal(Literal::Bool(false)), acc),
                ],
            );
        }
        acc
    }

    /// The position of this node's leading token, if it has one.
    ///
    /// Sequence nodes are synthesized splices and carry no position.
    pub fn pos(&self) -> Option<&Pos> {
        match self {
            Expr::Literal(pos, _)
            | Expr::Var(pos, _)
            | Expr::Func(pos, _)
            | Expr::Apply(pos, _, _)
            | Expr::Case(pos, _, _)
            | Expr::Loop { pos, .. }
            | Expr::Let(pos, _, _, _)
            | Expr::Include(pos, _, _)
            | Expr::Text(pos, _) => Some(pos),
            Expr::Seq(_) => None,
        }
    }
}
