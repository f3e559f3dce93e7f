//! Reserved words of the WebIDL grammar.
//!
//! Standalone on purpose: tools that only validate identifiers can depend on
//! this crate without pulling in the parser.
//!
//! ```
//! use wudl_core::is_keyword;
//!
//! assert!(is_keyword("interface"));
//! assert!(!is_keyword("Foo"));
//! ```

use std::sync::LazyLock;

use indexmap::IndexSet;


/// Reserved words in declaration order.
///
/// `-Infinity` is listed as a single word because the lexer produces it as one
/// identifier token.
const KEYWORD_LIST: &[&str] = &[
    "any",
    "attribute",
    "ArrayBuffer",
    "boolean",
    "byte",
    "ByteString",
    "callback",
    "const",
    "creator",
    "DataView",
    "Date",
    "deleter",
    "dictionary",
    "DOMString",
    "double",
    "enum",
    "Error",
    "exception",
    "false",
    "float",
    "Float32Array",
    "Float64Array",
    "FrozenArray",
    "getter",
    "implements",
    "includes",
    "Infinity",
    "-Infinity",
    "inherit",
    "Int8Array",
    "Int16Array",
    "Int32Array",
    "interface",
    "iterable",
    "legacycaller",
    "legacyiterable",
    "long",
    "maplike",
    "mixin",
    "namespace",
    "NaN",
    "null",
    "object",
    "octet",
    "optional",
    "or",
    "partial",
    "Promise",
    "readonly",
    "record",
    "RegExp",
    "required",
    "sequence",
    "setlike",
    "setter",
    "short",
    "static",
    "stringifier",
    "true",
    "typedef",
    "Uint8Array",
    "Uint16Array",
    "Uint32Array",
    "Uint8ClampedArray",
    "unrestricted",
    "unsigned",
    "USVString",
    "void",
];

static KEYWORDS: LazyLock<IndexSet<&'static str>> =
    LazyLock::new(|| KEYWORD_LIST.iter().copied().collect());

/// Returns true if `ident` is a reserved WebIDL word.
///
/// Case-sensitive, exact match: `Interface` is not reserved.
pub fn is_keyword(ident: &str) -> bool {
    KEYWORDS.contains(ident)
}

/// All reserved words in declaration order.
pub fn keywords() -> impl ExactSizeIterator<Item = &'static str> {
    KEYWORDS.iter().copied()
}
