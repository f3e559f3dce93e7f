//! Parser for WebIDL extended attributes.
//!
//! # Architecture
//!
//! Three layers, each pulling from the one below:
//!
//! - Token source ([`lexer`]): Logos scanner, trivia skipped, unrecognized
//!   input coalesced into `Garbage` tokens and reported as it is met
//! - Lookahead buffer: a single push-back slot; `peek` is `next` followed by
//!   `push_back`. It lives in per-call state, so [`Parser`] itself borrows no
//!   source between calls
//! - Grammar: a driver that finds `[...]` groups and a recursive-descent
//!   attribute parser that picks one of five forms by peeking one token
//!
//! # Failure Strategy
//!
//! Parsing is fail-stop. The first diagnostic ends the call: the attribute
//! being parsed is dropped along with its group, and only groups completed
//! earlier are returned. Fuel exhaustion is the only `Err`.

pub mod ast;
pub mod lexer;
pub mod printer;
pub mod token;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use ast::{
    ArgList, Argument, AttributeList, ExtendedAttribute, Ident, IdentList, NamedArgList, NoArgs,
    Node, Span, Spanned,
};
pub use printer::AstPrinter;
pub use token::{Token, TokenKind};

pub use self::core::{ParseResult, Parser};

use crate::Result;

/// Main entry point, with default fuel. Returns Err on fuel exhaustion.
pub fn parse(name: &str, source: &str) -> Result<ParseResult> {
    Parser::new().parse(name, source)
}
