//! End-to-end tests through the `weft` facade.
//!
//! These exercise realistic templates (the kind an application would actually
//! ship) rather than single productions; the per-production coverage lives in
//! the `weft_syntax` unit tests.

use weft::{ErrorKind, Expr, Literal, Pattern, SyntaxConfig, parse, parse_with};

const INVOICE: &str = r#"{# invoice body, one row per line item #}
{% include "header" with invoice.meta %}
{% for line in invoice.lines %}
  {{ line.name | pad }} x {{ line.count }} = {{ line.count * line.unit_price }}
{% else %}
  (no items)
{% endfor %}
{% if invoice.total > 100 && !invoice.paid %}
  Please pay promptly.
{% elif invoice.paid %}
  Thank you!
{% endif %}
{% include "footer" %}
"#;

#[test]
fn invoice_template_parses() {
    let parsed = parse("invoice", INVOICE).expect("invoice template should parse");

    assert_eq!(parsed.includes.len(), 2);
    assert_eq!(parsed.includes["header"].len(), 1);
    assert_eq!(parsed.includes["footer"].len(), 1);

    // Include positions point at the keyword, tagged with the source name.
    let header_pos = &parsed.includes["header"][0];
    assert_eq!(header_pos.source, "invoice");
    assert_eq!(header_pos.line, 2);
}

#[test]
fn status_template_desugars_to_case_tree() {
    let source = r#"{% case order.status %}
{% when "shipped" %}On the way.
{% when "delivered" %}Arrived.
{% else %}Processing.
{% endcase %}"#;
    let parsed = parse("status", source).expect("status template should parse");

    // Find the case node: the root is a splice of text and the case.
    let case = match &parsed.root {
        Expr::Seq(items) => items
            .iter()
            .find(|e| matches!(e, Expr::Case(..)))
            .expect("case node in root"),
        other @ Expr::Case(..) => other,
        other => panic!("unexpected root: {other:?}"),
    };
    match case {
        Expr::Case(_, _, alts) => {
            assert_eq!(alts.len(), 3);
            assert_eq!(alts[0].0, Pattern::Literal(Literal::Text("shipped".into())));
            assert_eq!(alts[2].0, Pattern::Wildcard);
        }
        _ => unreachable!(),
    }
}

#[test]
fn reparse_is_deterministic() {
    let first = parse("invoice", INVOICE).expect("parse");
    let second = parse("invoice", INVOICE).expect("parse");
    assert_eq!(first, second);
    assert_eq!(first.includes, second.includes);
}

#[test]
fn include_positions_accumulate_across_contexts() {
    let source = r#"{% include "x" %}
{% for i in xs %}{% include "x" %}{% endfor %}
{% if ok %}{% include "x" %}{% endif %}"#;
    let parsed = parse("t", source).expect("parse");
    let positions = &parsed.includes["x"];
    assert_eq!(positions.len(), 3);
    // Source order: top level, then inside the loop, then inside the branch.
    assert_eq!(positions[0].line, 1);
    assert_eq!(positions[1].line, 2);
    assert_eq!(positions[2].line, 3);
}

#[test]
fn include_map_is_parse_local() {
    let a = parse("a", r#"{% include "shared" %}"#).expect("parse");
    let b = parse("b", "no includes here").expect("parse");
    assert_eq!(a.includes["shared"].len(), 1);
    assert!(b.includes.is_empty(), "a fresh parse starts with an empty map");
}

#[test]
fn at_sign_dialect_leaves_braces_alone() {
    let source = "body {{ font-size: {@ size @}px }} @{ title }@";
    // `{@ size @}` is not a delimiter in the at-sign preset either; only `@{`
    // opens a render region.
    let parsed = parse_with("css", source, &SyntaxConfig::at_sign()).expect("parse");
    match &parsed.root {
        Expr::Seq(items) => {
            assert!(matches!(&items[0], Expr::Text(_, t) if t.contains("{{ font-size:")));
            assert!(matches!(&items[1], Expr::Var(..)));
        }
        other => panic!("unexpected root: {other:?}"),
    }
}

#[test]
fn first_error_wins() {
    // Two problems: a reserved loop variable and a missing endfor. The parser
    // reports the left-most one and stops.
    let err = parse("bad", "{% for in in xs %}{{ x }").unwrap_err();
    assert_eq!(err.kind, ErrorKind::ReservedName);
    assert!(err.to_string().contains("bad:1:"), "got: {err}");
}

#[test]
fn unterminated_block_names_the_missing_terminator() {
    let err = parse("bad", "{% let x = 1 %}{{ x }}").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert!(err.message.contains("`endlet`"), "got: {}", err.message);
}

#[test]
fn custom_delimiters_can_be_validated_up_front() {
    let custom = SyntaxConfig::new(
        weft::DelimiterPair::new("<!", "!>"),
        weft::DelimiterPair::new("<<", ">>"),
        weft::DelimiterPair::new("<#", "#>"),
        weft::DelimiterPair::new("<:", ":>"),
    );
    assert!(custom.ambiguity().is_none());
    let parsed = parse_with("t", "<: if ok :>yes<: endif :>", &custom).expect("parse");
    assert!(matches!(parsed.root, Expr::Case(..)));
}
