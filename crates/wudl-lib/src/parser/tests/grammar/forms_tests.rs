use crate::test_utils::{dump, dump_with_spans};

#[test]
fn no_args() {
    insta::assert_snapshot!(dump("[Replaceable]"), @r"
    AttributeList
      NoArgs Replaceable
    ");
}

#[test]
fn arg_list() {
    insta::assert_snapshot!(dump("[Constructor(double x, double y)]"), @r"
    AttributeList
      ArgList Constructor
        Argument double x
        Argument double y
    ");
}

#[test]
fn ident() {
    insta::assert_snapshot!(dump("[PutForwards=name]"), @r"
    AttributeList
      Ident PutForwards = name
    ");
}

#[test]
fn named_arg_list() {
    insta::assert_snapshot!(dump("[NamedConstructor=Image(DOMString src)]"), @r"
    AttributeList
      NamedArgList NamedConstructor = Image
        Argument DOMString src
    ");
}

#[test]
fn ident_list() {
    insta::assert_snapshot!(dump("[Exposed=(Window,Worker)]"), @r"
    AttributeList
      IdentList Exposed
        Window
        Worker
    ");
}

#[test]
fn ident_list_single() {
    insta::assert_snapshot!(dump("[Exposed=(Window)]"), @r"
    AttributeList
      IdentList Exposed
        Window
    ");
}

#[test]
fn all_forms_in_one_group() {
    let input = "[A, B(x), C=d, E=f(g h), I=(j, k)]";

    insta::assert_snapshot!(dump(input), @r"
    AttributeList
      NoArgs A
      ArgList B
        Argument x
      Ident C = d
      NamedArgList E = f
        Argument g h
      IdentList I
        j
        k
    ");
}

#[test]
fn form_spans_end_before_next_token() {
    insta::assert_snapshot!(dump_with_spans("[Replaceable]"), @r"
    AttributeList [0..13]
      NoArgs [1..12] Replaceable
    ");
    insta::assert_snapshot!(dump_with_spans("[Constructor(double x, double y)]"), @r"
    AttributeList [0..33]
      ArgList [1..32] Constructor
        Argument double x
        Argument double y
    ");
    insta::assert_snapshot!(dump_with_spans("[PutForwards=name]"), @r"
    AttributeList [0..18]
      Ident [1..17] PutForwards = name
    ");
    insta::assert_snapshot!(dump_with_spans("[NamedConstructor=Image(DOMString src)]"), @r"
    AttributeList [0..39]
      NamedArgList [1..38] NamedConstructor = Image
        Argument DOMString src
    ");
    insta::assert_snapshot!(dump_with_spans("[Exposed=(Window,Worker)]"), @r"
    AttributeList [0..25]
      IdentList [1..24] Exposed
        Window
        Worker
    ");
}

#[test]
fn attribute_span_stops_at_comma() {
    insta::assert_snapshot!(dump_with_spans("[A=b,C]"), @r"
    AttributeList [0..7]
      Ident [1..4] A = b
      NoArgs [5..6] C
    ");
}

#[test]
fn keyword_names_are_plain_identifiers() {
    insta::assert_snapshot!(dump("[attribute=(interface, any)]"), @r"
    AttributeList
      IdentList attribute
        interface
        any
    ");
}
