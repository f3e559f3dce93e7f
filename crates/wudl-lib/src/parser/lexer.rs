//! Token source for extended attributes.
//!
//! Lazily pulls span-based tokens from the Logos lexer, one per call, and
//! never surfaces trivia (whitespace and comments) to the parser.
//!
//! ## Error handling
//!
//! The token source coalesces consecutive error characters into single `Garbage` tokens
//! rather than producing one error per character. Each `Garbage` token is reported once
//! into the caller's [`Diagnostics`]; scanning then carries on.

use logos::Logos;
use rowan::{TextRange, TextSize};
use std::ops::Range;
use tracing::trace;

use super::token::{Token, TokenKind};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

pub struct TokenSource<'src> {
    source: &'src str,
    lexer: logos::Lexer<'src, TokenKind>,
    /// Token that ended a garbage run; handed out on the following call.
    pending: Option<Token>,
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

impl<'src> TokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lexer: TokenKind::lexer(source),
            pending: None,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    /// Next non-trivia token. Returns `Eof` forever once the input is exhausted.
    pub fn next(&mut self, diagnostics: &mut Diagnostics) -> Token {
        loop {
            let token = self.scan(diagnostics);
            if token.kind.is_trivia() {
                continue;
            }
            trace!(
                kind = ?token.kind,
                span_start = u32::from(token.span.start()),
                span_end = u32::from(token.span.end()),
                "scan"
            );
            return token;
        }
    }

    fn scan(&mut self, diagnostics: &mut Diagnostics) -> Token {
        if let Some(token) = self.pending.take() {
            return token;
        }

        let mut error_start: Option<usize> = None;
        loop {
            match self.lexer.next() {
                Some(Ok(kind)) => {
                    let span = self.lexer.span();
                    let token = Token::new(kind, range_to_text_range(span.clone()));
                    let Some(start) = error_start else {
                        return token;
                    };
                    self.pending = Some(token);
                    return self.garbage(start..span.start, diagnostics);
                }
                Some(Err(())) => {
                    if error_start.is_none() {
                        error_start = Some(self.lexer.span().start);
                    }
                }
                None => {
                    if let Some(start) = error_start {
                        return self.garbage(start..self.source.len(), diagnostics);
                    }
                    return Token::new(TokenKind::Eof, TextRange::empty(self.eof_offset()));
                }
            }
        }
    }

    fn garbage(&self, range: Range<usize>, diagnostics: &mut Diagnostics) -> Token {
        let text = &self.source[range.clone()];
        let span = range_to_text_range(range);
        diagnostics
            .report(self.source, DiagnosticKind::UnrecognizedInput, span)
            .message(format!("`{}`", text.escape_debug()))
            .emit();
        Token::new(TokenKind::Garbage, span)
    }
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
