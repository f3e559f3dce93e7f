use indoc::indoc;

use crate::parser::Spanned;
use crate::test_utils::{dump, dump_with_spans};

#[test]
fn empty_input() {
    insta::assert_snapshot!(dump(""), @"");
}

#[test]
fn no_groups() {
    insta::assert_snapshot!(dump("interface Foo { };"), @"");
}

#[test]
fn groups_in_source_order() {
    insta::assert_snapshot!(dump_with_spans("[A] [B, C=d]\n[E(x)]"), @r"
    AttributeList [0..4]
      NoArgs [1..2] A
    AttributeList [4..13]
      NoArgs [5..6] B
      Ident [8..11] C = d
    AttributeList [13..19]
      ArgList [14..18] E
        Argument x
    ");
}

#[test]
fn groups_between_interface_tokens() {
    let input = indoc! {r#"
    [Exposed=Window, Constructor]
    interface Point {
      [Replaceable] attribute double x;
    };
    "#};

    insta::assert_snapshot!(dump(input), @r"
    AttributeList
      Ident Exposed = Window
      NoArgs Constructor
    AttributeList
      NoArgs Replaceable
    ");
}

#[test]
fn parens_outside_groups_are_ignored() {
    let input = "void f(long x); [A] (B)";

    insta::assert_snapshot!(dump(input), @r"
    AttributeList
      NoArgs A
    ");
}

#[test]
fn duplicate_names_are_kept() {
    insta::assert_snapshot!(dump("[A, A=b]"), @r"
    AttributeList
      NoArgs A
      Ident A = b
    ");
}

#[test]
fn lookup_by_name() {
    let lists = crate::parse("", "[Exposed=Window, Replaceable, Exposed]")
        .unwrap()
        .into_result()
        .unwrap();

    let list = &lists[0];
    assert!(list.contains("Replaceable"));
    assert!(!list.contains("replaceable"));
    assert_eq!(
        list.get("Exposed").map(|a| a.span()),
        Some(list.attributes[0].span())
    );
    assert!(list.get("Missing").is_none());
}

#[test]
fn list_span_at_end_of_input() {
    insta::assert_snapshot!(dump_with_spans("  [A]"), @r"
    AttributeList [2..5]
      NoArgs [3..4] A
    ");
}
