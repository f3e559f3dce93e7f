//! Parser state and low-level operations: the one-token lookahead buffer,
//! execution fuel, and error reporting helpers.

use rowan::{TextRange, TextSize};
use tracing::debug;

use super::ast::AttributeList;
use super::lexer::{TokenSource, token_text};
use super::printer::AstPrinter;
use super::token::{Token, TokenKind};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::{Error, Result};

pub(crate) const DEFAULT_EXEC_FUEL: u32 = 1_000_000;

/// Output of one parse call.
///
/// When [`diagnostics`](Self::diagnostics) is non-empty, `attributes` holds only
/// the groups completed before the first error and must not be treated as the
/// full result.
#[derive(Debug, Clone)]
pub struct ParseResult {
    name: String,
    attributes: Vec<AttributeList>,
    diagnostics: Diagnostics,
}

impl ParseResult {
    /// Source name given to the parse call, used for positions in rendered output.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[AttributeList] {
        &self.attributes
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// The attribute lists, or every collected diagnostic if any error occurred.
    pub fn into_result(self) -> Result<Vec<AttributeList>> {
        if self.diagnostics.has_errors() {
            return Err(Error::ParseError(self.diagnostics));
        }
        Ok(self.attributes)
    }

    /// Plain `name:line:column: message` lines, one per diagnostic.
    pub fn render_diagnostics(&self) -> String {
        self.diagnostics.printer().path(&self.name).render()
    }

    pub fn dump(&self) -> String {
        AstPrinter::new(&self.attributes).dump()
    }
}

/// Extended attribute parser.
///
/// Holds configuration and the diagnostics buffer only. Everything tied to a
/// source (token cursor, push-back slot, open group) lives in a `ParseState`
/// built for each call, so one instance can parse any number of independently
/// owned buffers in turn. `parse` takes `&mut self`: concurrent use of one
/// instance is ruled out at compile time.
#[derive(Debug)]
pub struct Parser {
    exec_fuel: Option<u32>,
    diagnostics: Diagnostics,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Set execution fuel limit. None = infinite.
    ///
    /// One unit is spent per token read from the source; re-reading a
    /// pushed-back token is free. Fuel refills at the start of every call.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    /// Parse every `[...]` group in `source`.
    ///
    /// `name` only labels positions in rendered diagnostics. Returns `Err` if
    /// fuel runs out; syntax and lexical problems are reported through
    /// [`ParseResult::diagnostics`].
    pub fn parse(&mut self, name: &str, source: &str) -> Result<ParseResult> {
        self.diagnostics.clear();
        let mut state = ParseState::new(source, &mut self.diagnostics, self.exec_fuel);
        let attributes = state.parse_root();
        if let Some(err) = state.fatal_error {
            return Err(err);
        }
        self.finish(name, attributes)
    }

    /// Like [`parse`](Self::parse), for raw bytes that should hold UTF-8 text.
    ///
    /// Invalid input yields a single `InvalidUtf8` diagnostic whose range
    /// refers to `String::from_utf8_lossy(source)`: the first invalid
    /// sequence becomes one U+FFFD, and that is what the range covers. Render
    /// against the lossy text.
    pub fn parse_bytes(&mut self, name: &str, source: &[u8]) -> Result<ParseResult> {
        let err = match std::str::from_utf8(source) {
            Ok(text) => return self.parse(name, text),
            Err(err) => err,
        };

        self.diagnostics.clear();
        let lossy = String::from_utf8_lossy(source);
        let range = TextRange::at(
            TextSize::from(err.valid_up_to() as u32),
            TextSize::of(char::REPLACEMENT_CHARACTER),
        );
        self.diagnostics
            .report(&lossy, DiagnosticKind::InvalidUtf8, range)
            .emit();
        self.finish(name, Vec::new())
    }

    fn finish(&mut self, name: &str, attributes: Vec<AttributeList>) -> Result<ParseResult> {
        let diagnostics = std::mem::take(&mut self.diagnostics);
        debug!(
            source_name = name,
            groups = attributes.len(),
            errors = diagnostics.len(),
            "parse finished"
        );
        Ok(ParseResult {
            name: name.to_owned(),
            attributes,
            diagnostics,
        })
    }
}

/// State of one parse call: scan cursor, single push-back slot, open group
/// and remaining fuel. Diagnostics go to the owning [`Parser`]'s buffer.
pub(super) struct ParseState<'src, 'd> {
    pub(super) tokens: TokenSource<'src>,
    pub(super) lookahead: Option<Token>,
    pub(super) diagnostics: &'d mut Diagnostics,
    /// `[` of the group being parsed; `None` while between groups.
    pub(super) open_group: Option<TextRange>,
    exec_fuel_remaining: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src, 'd> ParseState<'src, 'd> {
    pub(super) fn new(
        source: &'src str,
        diagnostics: &'d mut Diagnostics,
        exec_fuel: Option<u32>,
    ) -> Self {
        Self {
            tokens: TokenSource::new(source),
            lookahead: None,
            diagnostics,
            open_group: None,
            exec_fuel_remaining: exec_fuel,
            fatal_error: None,
        }
    }

    pub(super) fn source(&self) -> &'src str {
        self.tokens.source()
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    /// Stop as soon as anything went wrong: parsing is fail-stop.
    pub(super) fn should_stop(&self) -> bool {
        self.diagnostics.has_errors() || self.has_fatal_error()
    }

    fn consume_exec_fuel(&mut self) -> bool {
        let Some(ref mut remaining) = self.exec_fuel_remaining else {
            return true;
        };
        if *remaining == 0 {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::ExecFuelExhausted);
            }
            return false;
        }
        *remaining -= 1;
        true
    }

    /// Consume one token, from the push-back slot if it is occupied.
    ///
    /// Out of fuel, this yields `Eof` so every production unwinds.
    pub(super) fn next(&mut self) -> Token {
        if let Some(token) = self.lookahead.take() {
            return token;
        }
        if !self.consume_exec_fuel() {
            return Token::new(TokenKind::Eof, TextRange::empty(self.tokens.eof_offset()));
        }
        self.tokens.next(self.diagnostics)
    }

    pub(super) fn push_back(&mut self, token: Token) {
        self.ensure_lookahead_empty(token);
        self.lookahead = Some(token);
    }

    /// Next token without consuming it.
    pub(super) fn peek(&mut self) -> Token {
        let token = self.next();
        self.push_back(token);
        token
    }

    pub(super) fn text(&self, token: Token) -> &'src str {
        token_text(self.source(), &token)
    }

    /// Token as it appears in messages.
    pub(super) fn describe(&self, token: Token) -> String {
        match token.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("`{}`", self.text(token)),
        }
    }

    /// `]` with no group open. Deleting it is the suggested fix.
    pub(super) fn error_stray_bracket(&mut self, token: Token) {
        let source = self.source();
        self.diagnostics
            .report(source, DiagnosticKind::StrayBracket, token.span)
            .fix("remove the stray `]`", token.span, "")
            .emit();
    }

    /// Report `token` where something else was expected.
    ///
    /// End of input inside a group is reported as an unclosed group instead.
    /// `Garbage` is not reported again: the token source already did.
    pub(super) fn error_unexpected(
        &mut self,
        kind: DiagnosticKind,
        token: Token,
        detail: impl Into<String>,
    ) {
        match token.kind {
            TokenKind::Garbage => {}
            TokenKind::Eof => self.error_unclosed_group(token),
            _ => {
                let source = self.source();
                self.diagnostics
                    .report(source, kind, token.span)
                    .message(detail)
                    .emit();
            }
        }
    }

    fn error_unclosed_group(&mut self, eof: Token) {
        // Fuel exhaustion fakes `Eof`; the fatal error wins.
        if self.has_fatal_error() {
            return;
        }
        let Some(open) = self.open_group else {
            return;
        };
        let source = self.source();
        let full_range = TextRange::new(open.start(), eof.span.end());
        self.diagnostics
            .report(source, DiagnosticKind::UnclosedAttributeList, full_range)
            .related_to("attribute list started here", open)
            .fix("close the attribute list", TextRange::empty(eof.span.end()), "]")
            .emit();
    }
}
