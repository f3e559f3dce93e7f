use indoc::indoc;

use crate::diagnostics::{DiagnosticKind, ErrorCategory};
use crate::parse;
use crate::test_utils::errors;

#[test]
fn empty_group() {
    insta::assert_snapshot!(errors("[]"), @"1:2: expected attribute name, found `]`");
}

#[test]
fn trailing_comma() {
    insta::assert_snapshot!(errors("[A,]"), @"1:4: expected attribute name, found `]`");
}

#[test]
fn leading_comma() {
    insta::assert_snapshot!(errors("[,A]"), @"1:2: expected attribute name, found `,`");
}

#[test]
fn name_is_not_identifier() {
    insta::assert_snapshot!(errors("[(x)]"), @"1:2: expected attribute name, found `(`");
}

#[test]
fn two_names_without_separator() {
    insta::assert_snapshot!(errors("[A B]"), @"1:4: unexpected `B` in `A`");
}

#[test]
fn nested_group() {
    insta::assert_snapshot!(errors("[A [B]]"), @"1:4: unexpected `[` in `A`");
}

#[test]
fn missing_value() {
    insta::assert_snapshot!(errors("[A=]"), @"1:4: expected identifier, found `]` in `A`");
}

#[test]
fn value_is_not_identifier() {
    insta::assert_snapshot!(errors("[A=1]"), @"1:4: expected identifier, found `1` in `A`");
}

#[test]
fn value_followed_by_identifier() {
    insta::assert_snapshot!(errors("[A=B C]"), @"1:6: unexpected `C` in `A`");
}

#[test]
fn empty_identifier_list() {
    insta::assert_snapshot!(errors("[A=()]"), @"1:5: expected identifier, found `)` in `A`");
}

#[test]
fn identifier_list_trailing_comma() {
    insta::assert_snapshot!(errors("[A=(B,)]"), @"1:7: expected identifier, found `)` in `A`");
}

#[test]
fn identifier_list_missing_comma() {
    insta::assert_snapshot!(errors("[A=(B C)]"), @"1:7: unexpected `C` in `A`");
}

#[test]
fn empty_argument_slots() {
    insta::assert_snapshot!(errors("[A(x,)]"), @"1:6: empty argument in `A`");
    insta::assert_snapshot!(errors("[A(,x)]"), @"1:4: empty argument in `A`");
    insta::assert_snapshot!(errors("[A(x,,y)]"), @"1:6: empty argument in `A`");
}

#[test]
fn argument_list_closed_by_bracket() {
    insta::assert_snapshot!(errors("[A(x]"), @"1:5: unexpected `]` in `A`");
}

#[test]
fn default_value_in_arguments() {
    insta::assert_snapshot!(errors("[A(x = 1)]"), @"1:6: unexpected `=` in `A`");
}

#[test]
fn missing_separator_after_arguments() {
    insta::assert_snapshot!(errors("[A(x) y]"), @"1:7: expected `,` or `]`, found `y`");
    insta::assert_snapshot!(errors("[A(x)(y)]"), @"1:6: expected `,` or `]`, found `(`");
    insta::assert_snapshot!(errors("[A=b(x) c]"), @"1:9: expected `,` or `]`, found `c`");
}

#[test]
fn stray_close_bracket() {
    insta::assert_snapshot!(errors("[A] ]"), @"1:5: `]` without a matching `[` (fix: remove the stray `]`)");

    let result = parse("", "] [A]").unwrap();
    assert!(result.attributes().is_empty());
    insta::assert_snapshot!(result.render_diagnostics(), @"1:1: `]` without a matching `[` (fix: remove the stray `]`)");
}

#[test]
fn position_on_later_line() {
    let input = indoc! {r#"
    [A]
    [B
      C]
    "#};

    insta::assert_snapshot!(errors(input), @"3:3: unexpected `C` in `B`");
}

#[test]
fn stops_at_first_error() {
    let result = parse("", "[A B] [C D]").unwrap();

    assert_eq!(result.diagnostics().len(), 1);
    assert!(result.attributes().is_empty());
}

#[test]
fn keeps_groups_before_error() {
    let result = parse("", "[A] [B C] [D]").unwrap();

    assert_eq!(result.attributes().len(), 1);
    assert_eq!(result.attributes()[0].attributes[0].name(), "A");

    let diag = result.diagnostics().iter().next().unwrap();
    assert_eq!(diag.kind(), DiagnosticKind::UnexpectedToken);
    assert_eq!(diag.category(), ErrorCategory::Syntax);
}

#[test]
fn name_shown_in_rendered_output() {
    let result = parse("window.webidl", "[A=]").unwrap();

    insta::assert_snapshot!(result.render_diagnostics(), @"window.webidl:1:4: expected identifier, found `]` in `A`");
}

#[test]
fn stray_bracket_fix_deletes_it() {
    let result = parse("", "[A]]").unwrap();

    let fix = result.diagnostics().iter().next().and_then(|d| d.fix()).unwrap();
    assert_eq!(fix.replacement(), "");
    assert_eq!(u32::from(fix.range().start()), 3);
    assert_eq!(u32::from(fix.range().end()), 4);
}
