//! Property-based tests for the Weft frontend.
//!
//! These use proptest to verify parser invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use weft::{Expr, SyntaxConfig, keywords, parse, parse_with};

// =============================================================================
// Literal text properties
// =============================================================================

proptest! {
    /// Property: text containing no delimiter start token is parsed verbatim,
    /// as a single Text node, with no include references.
    #[test]
    fn plain_text_round_trips(text in "[a-zA-Z0-9 ,.;:'<>()_-]{1,80}") {
        let parsed = parse("prop", &text).unwrap();
        prop_assert_eq!(parsed.root, Expr::Text(weft::Pos::new("prop", 1, 1, 0), text));
        prop_assert!(parsed.includes.is_empty());
    }

    /// Property: the empty template parses to the neutral node.
    #[test]
    fn whitespace_only_is_literal(text in "[ \t\n]{0,40}") {
        let parsed = parse("prop", &text).unwrap();
        if text.is_empty() {
            prop_assert_eq!(parsed.root, Expr::empty());
        } else {
            prop_assert!(matches!(parsed.root, Expr::Text(_, t) if t == text));
        }
    }
}

// =============================================================================
// Expression properties
// =============================================================================

proptest! {
    /// Property: any non-reserved identifier renders as a variable reference.
    #[test]
    fn identifiers_parse_as_variables(name in "[a-z][a-z0-9_]{0,15}") {
        prop_assume!(!keywords::is_reserved(&name));
        let source = format!("{{{{ {name} }}}}");
        let parsed = parse("prop", &source).unwrap();
        match parsed.root {
            Expr::Var(_, var) => prop_assert_eq!(var.to_string(), name),
            other => prop_assert!(false, "expected variable, got {:?}", other),
        }
    }

    /// Property: interior whitespace never changes the parse.
    #[test]
    fn whitespace_between_tokens_is_insignificant(pad in " {0,6}") {
        let tight = parse("prop", "{{a+b*c}}").unwrap();
        let padded_source = format!("{{{{{pad}a{pad}+{pad}b{pad}*{pad}c{pad}}}}}");
        let padded = parse("prop", &padded_source).unwrap();
        prop_assert_eq!(tight.root, padded.root);
    }

    /// Property: integer literals survive into the AST unchanged.
    #[test]
    fn integer_literals_round_trip(n in 0u64..1_000_000_000) {
        let source = format!("{{{{ {n} }}}}");
        let parsed = parse("prop", &source).unwrap();
        match parsed.root {
            Expr::Literal(_, weft::Literal::Number(d)) => {
                prop_assert_eq!(d, rust_decimal::Decimal::from(n));
            }
            other => prop_assert!(false, "expected number literal, got {:?}", other),
        }
    }
}

// =============================================================================
// Structural properties
// =============================================================================

proptest! {
    /// Property: every syntactic `include` occurrence is recorded, keyed by
    /// template name, one position per occurrence.
    #[test]
    fn include_occurrences_are_all_recorded(key in "[a-z][a-z/_]{0,12}", n in 1usize..5) {
        let tag = format!("{{% include \"{key}\" %}}");
        let source = tag.repeat(n);
        let parsed = parse("prop", &source).unwrap();
        prop_assert_eq!(parsed.includes.len(), 1);
        prop_assert_eq!(parsed.includes[&key].len(), n);
    }

    /// Property: nesting `if` blocks to any depth produces a case tree of the
    /// same depth and never confuses the terminator discipline.
    #[test]
    fn nested_ifs_terminate_correctly(depth in 1usize..8) {
        let mut source = String::new();
        for _ in 0..depth {
            source.push_str("{% if ok %}");
        }
        source.push('x');
        for _ in 0..depth {
            source.push_str("{% endif %}");
        }
        let parsed = parse("prop", &source).unwrap();

        let mut node = &parsed.root;
        for _ in 0..depth {
            match node {
                Expr::Case(_, _, alts) => node = &alts[0].1,
                other => {
                    prop_assert!(false, "expected case at this depth, got {:?}", other);
                    unreachable!()
                }
            }
        }
        prop_assert!(matches!(node, Expr::Text(_, t) if t == "x"));
    }

    /// Property: the two shipped presets parse the same template identically.
    #[test]
    fn presets_agree_on_the_same_template(name in "[a-z][a-z0-9]{0,8}", text in "[a-zA-Z ]{0,20}") {
        prop_assume!(!keywords::is_reserved(&name));
        let braces = format!("{text}{{% if {name} %}}{{{{ {name} }}}}{{% endif %}}");
        let at_sign = format!("{text}@% if {name} %@@{{ {name} }}@@% endif %@");
        let a = parse("prop", &braces).unwrap();
        let b = parse_with("prop", &at_sign, &SyntaxConfig::at_sign()).unwrap();
        prop_assert_eq!(a.root, b.root);
    }
}
