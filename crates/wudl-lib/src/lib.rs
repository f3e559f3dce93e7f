//! wudl: recognizer for WebIDL extended attributes.
//!
//! # Example
//!
//! ```
//! use wudl_lib::parser::ExtendedAttribute;
//!
//! let result = wudl_lib::parse("window.idl", "[Exposed=(Window,Worker)]").expect("out of fuel");
//! assert!(result.is_valid());
//!
//! let list = &result.attributes()[0];
//! let ExtendedAttribute::IdentList(exposed) = &list.attributes[0] else {
//!     panic!("expected an identifier list");
//! };
//! assert_eq!(exposed.idents, ["Window", "Worker"]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parser;

#[cfg(test)]
pub mod test_utils;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter, ErrorCategory};
pub use parser::{ParseResult, Parser, parse};
pub use wudl_core::{is_keyword, keywords};

/// Errors that can occur during extended attribute parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many tokens read).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    #[error("extended attribute parsing failed with {} errors", .0.len())]
    ParseError(Diagnostics),
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
