use indoc::indoc;

use crate::diagnostics::ErrorCategory;
use crate::parse;
use crate::test_utils::errors;

#[test]
fn missing_bracket_after_name() {
    insta::assert_snapshot!(errors("[Foo"), @"1:1: missing closing `]` (related: attribute list started here at 0..1) (fix: close the attribute list)");
}

#[test]
fn only_open_bracket() {
    insta::assert_snapshot!(errors("["), @"1:1: missing closing `]` (related: attribute list started here at 0..1) (fix: close the attribute list)");
}

#[test]
fn missing_bracket_after_arguments() {
    insta::assert_snapshot!(errors("[A(x)"), @"1:1: missing closing `]` (related: attribute list started here at 0..1) (fix: close the attribute list)");
}

#[test]
fn missing_paren_and_bracket() {
    insta::assert_snapshot!(errors("[A=b(x"), @"1:1: missing closing `]` (related: attribute list started here at 0..1) (fix: close the attribute list)");
    insta::assert_snapshot!(errors("[A=(x,"), @"1:1: missing closing `]` (related: attribute list started here at 0..1) (fix: close the attribute list)");
}

#[test]
fn unclosed_range_covers_rest_of_input() {
    let result = parse("", "[Foo").unwrap();

    let diag = result.diagnostics().iter().next().unwrap();
    assert_eq!(diag.category(), ErrorCategory::UnterminatedGroup);
    assert_eq!(u32::from(diag.range().start()), 0);
    assert_eq!(u32::from(diag.range().end()), 4);
}

#[test]
fn second_group_unclosed() {
    let input = indoc! {r#"
    [A]
    [B,
    "#};

    let result = parse("", input).unwrap();

    assert_eq!(result.attributes().len(), 1);
    insta::assert_snapshot!(result.render_diagnostics(), @"2:1: missing closing `]` (related: attribute list started here at 4..5) (fix: close the attribute list)");
}

#[test]
fn annotated_output_points_at_open_bracket() {
    let input = "[Exposed=Window";
    let result = parse("", input).unwrap();

    let rendered = result.diagnostics().render(input);
    assert!(rendered.contains("missing closing `]`"));
    assert!(rendered.contains("attribute list started here"));
    assert!(rendered.contains("[Exposed=Window"));
}

#[test]
fn fix_inserts_bracket_at_end_of_input() {
    let result = parse("", "[A, B(x)").unwrap();

    let fix = result.diagnostics().iter().next().and_then(|d| d.fix()).unwrap();
    assert_eq!(fix.replacement(), "]");
    assert!(fix.range().is_empty());
    assert_eq!(u32::from(fix.range().start()), 8);

    let rendered = result.diagnostics().render("[A, B(x)");
    assert!(rendered.contains("help: close the attribute list"));
}
