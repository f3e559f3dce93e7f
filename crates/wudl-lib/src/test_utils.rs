//! Test helpers shared by the parser and diagnostics tests.

use crate::parser::{AstPrinter, ParseResult, parse};

fn parse_ok(input: &str) -> ParseResult {
    parse("", input).expect("default fuel is enough for test inputs")
}

/// AST dump of input that must parse without errors.
pub fn dump(input: &str) -> String {
    let result = parse_ok(input);
    assert!(
        result.is_valid(),
        "expected valid input, got:\n{}",
        result.render_diagnostics()
    );
    result.dump()
}

/// Same as [`dump`], with spans.
pub fn dump_with_spans(input: &str) -> String {
    let result = parse_ok(input);
    assert!(
        result.is_valid(),
        "expected valid input, got:\n{}",
        result.render_diagnostics()
    );
    AstPrinter::new(result.attributes()).with_spans(true).dump()
}

/// Plain diagnostics of input that must fail.
pub fn errors(input: &str) -> String {
    let result = parse_ok(input);
    assert!(
        !result.is_valid(),
        "expected invalid input, got:\n{}",
        result.dump()
    );
    result.render_diagnostics()
}
