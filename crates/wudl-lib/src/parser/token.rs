//! Token kinds of the extended attribute lexer.
//!
//! Logos derives token recognition. `Garbage` and `Eof` have no pattern: the
//! token source synthesizes them for unrecognized input and end of input.

use logos::Logos;
use rowan::TextRange;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    #[token("[")]
    BracketOpen = 0,

    #[token("]")]
    BracketClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token("=")]
    Equals,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token("<")]
    AngleOpen,

    #[token(">")]
    AngleClose,

    #[token("?")]
    Question,

    #[token("*")]
    Star,

    #[token(".")]
    Dot,

    #[token("...")]
    Ellipsis,

    #[token("-")]
    Minus,

    /// Identifier. A leading `_` or `-` is part of the token, so `-Infinity` is one identifier.
    #[regex(r"[_-]?[A-Za-z][0-9A-Za-z_-]*")]
    Identifier,

    /// Integer (decimal, octal, hex) or floating point literal.
    #[regex(r"-?(?:0[xX][0-9A-Fa-f]+|[0-9]+(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?|\.[0-9]+(?:[eE][+-]?[0-9]+)?)")]
    Number,

    #[regex(r#""[^"]*""#)]
    StringLiteral,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,

    Eof,
}

use TokenKind::*;

impl TokenKind {
    const ALL: [TokenKind; 25] = [
        BracketOpen,
        BracketClose,
        ParenOpen,
        ParenClose,
        BraceOpen,
        BraceClose,
        Comma,
        Equals,
        Semicolon,
        Colon,
        AngleOpen,
        AngleClose,
        Question,
        Star,
        Dot,
        Ellipsis,
        Minus,
        Identifier,
        Number,
        StringLiteral,
        Whitespace,
        LineComment,
        BlockComment,
        Garbage,
        Eof,
    ];

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | LineComment | BlockComment)
    }
}

/// Kind plus span. Text is sliced from the source only when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Set of token kinds, one bit per discriminant.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u32);

impl TokenSet {
    /// Fails const evaluation if a discriminant does not fit in the set.
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < kinds.len() {
            assert!((kinds[i] as u8) < 32, "TokenKind does not fit in TokenSet");
            bits |= 1 << kinds[i] as u8;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        self.0 & (1 << kind as u8) != 0
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(TokenKind::ALL.into_iter().filter(|&kind| self.contains(kind)))
            .finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens collected verbatim into an argument-group.
    pub const ARGUMENT: TokenSet = TokenSet::new(&[
        Identifier,
        Number,
        StringLiteral,
        AngleOpen,
        AngleClose,
        Question,
        Star,
        Dot,
        Ellipsis,
        Minus,
        Colon,
    ]);
}
