//! Extended attribute grammar: the parse driver and the attribute parser.
//!
//! ```text
//! list      = "[" attribute ("," attribute)* "]"
//! attribute = Name                                  NoArgs
//!           | Name "(" args ")"                     ArgList
//!           | Name "=" Ident                        Ident
//!           | Name "=" Ident "(" args ")"           NamedArgList
//!           | Name "=" "(" Ident ("," Ident)* ")"   IdentList
//! args      = (arg ("," arg)*)?
//! arg       = token+
//! ```
//!
//! Every decision needs at most one token of lookahead.

use rowan::{TextRange, TextSize};
use tracing::{debug, trace};

use super::ast::{
    ArgList, Argument, AttributeList, ExtendedAttribute, Ident, IdentList, NamedArgList, NoArgs,
};
use super::core::ParseState;
use super::token::{Token, TokenKind, token_sets};
use crate::diagnostics::DiagnosticKind;

impl ParseState<'_, '_> {
    /// Driver loop over `[...]` groups.
    ///
    /// Tokens between groups belong to the surrounding interface grammar and
    /// are skipped.
    pub(super) fn parse_root(&mut self) -> Vec<AttributeList> {
        let mut lists = Vec::new();
        while !self.should_stop() {
            let token = self.next();
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::BracketOpen => match self.parse_attribute_list(token) {
                    Some(list) => lists.push(list),
                    None => break,
                },
                TokenKind::BracketClose => {
                    self.error_stray_bracket(token);
                    break;
                }
                _ => {}
            }
        }
        lists
    }

    /// Called right after `open` (`[`) was consumed.
    fn parse_attribute_list(&mut self, open: Token) -> Option<AttributeList> {
        self.open_group = Some(open.span);
        let list = self.parse_attribute_list_items(open.span.start());
        self.open_group = None;

        if let Some(list) = &list {
            debug!(
                span_start = u32::from(list.span.start()),
                span_end = u32::from(list.span.end()),
                attributes = list.attributes.len(),
                "attribute list"
            );
        }
        list
    }

    fn parse_attribute_list_items(&mut self, start: TextSize) -> Option<AttributeList> {
        let mut attributes = Vec::new();
        loop {
            attributes.push(self.parse_attribute()?);

            let token = self.next();
            match token.kind {
                TokenKind::Comma => continue,
                TokenKind::BracketClose => {
                    let end = self.peek().span.start();
                    return Some(AttributeList {
                        span: TextRange::new(start, end),
                        attributes,
                    });
                }
                _ => {
                    let detail = self.describe(token);
                    self.error_unexpected(DiagnosticKind::ExpectedSeparator, token, detail);
                    return None;
                }
            }
        }
    }

    /// One attribute; leaves the terminating `,` or `]` unconsumed.
    fn parse_attribute(&mut self) -> Option<ExtendedAttribute> {
        let name_token = self.next();
        if name_token.kind != TokenKind::Identifier {
            let detail = self.describe(name_token);
            self.error_unexpected(DiagnosticKind::ExpectedAttributeName, name_token, detail);
            return None;
        }

        let name = self.text(name_token).to_owned();
        let start = name_token.span.start();
        let next = self.peek();
        match next.kind {
            TokenKind::Comma | TokenKind::BracketClose => {
                trace!(name = %name, "NoArgs");
                Some(ExtendedAttribute::NoArgs(NoArgs {
                    span: TextRange::new(start, next.span.start()),
                    name,
                }))
            }
            TokenKind::ParenOpen => {
                self.next();
                let args = self.parse_arguments(&name)?;
                let end = self.peek().span.start();
                trace!(name = %name, args = args.len(), "ArgList");
                Some(ExtendedAttribute::ArgList(ArgList {
                    span: TextRange::new(start, end),
                    name,
                    args,
                }))
            }
            TokenKind::Equals => {
                self.next();
                self.parse_attribute_value(name, start)
            }
            _ => {
                self.next();
                self.error_unexpected_in(next, &name);
                None
            }
        }
    }

    /// Right-hand side of `Name=`.
    fn parse_attribute_value(
        &mut self,
        name: String,
        start: TextSize,
    ) -> Option<ExtendedAttribute> {
        let value = self.next();
        match value.kind {
            TokenKind::ParenOpen => {
                let idents = self.parse_identifier_list(&name)?;
                let end = self.peek().span.start();
                trace!(name = %name, idents = idents.len(), "IdentList");
                Some(ExtendedAttribute::IdentList(IdentList {
                    span: TextRange::new(start, end),
                    name,
                    idents,
                }))
            }
            TokenKind::Identifier => {
                let ident = self.text(value).to_owned();
                let next = self.peek();
                match next.kind {
                    TokenKind::Comma | TokenKind::BracketClose => {
                        trace!(name = %name, ident = %ident, "Ident");
                        Some(ExtendedAttribute::Ident(Ident {
                            span: TextRange::new(start, next.span.start()),
                            name,
                            ident,
                        }))
                    }
                    TokenKind::ParenOpen => {
                        self.next();
                        let args = self.parse_arguments(&name)?;
                        let end = self.peek().span.start();
                        trace!(
                            name = %name,
                            ident = %ident,
                            args = args.len(),
                            "NamedArgList"
                        );
                        Some(ExtendedAttribute::NamedArgList(NamedArgList {
                            span: TextRange::new(start, end),
                            name,
                            ident,
                            args,
                        }))
                    }
                    _ => {
                        self.next();
                        self.error_unexpected_in(next, &name);
                        None
                    }
                }
            }
            _ => {
                let detail = format!("{} in `{}`", self.describe(value), name);
                self.error_unexpected(DiagnosticKind::ExpectedIdentifier, value, detail);
                None
            }
        }
    }

    /// Argument-groups after `(`, through the matching `)`.
    ///
    /// `()` yields no groups. A slot with no tokens (`(a,)`, `(,a)`) is an error,
    /// so no returned group is ever empty.
    fn parse_arguments(&mut self, name: &str) -> Option<Vec<Argument>> {
        let mut args = Vec::new();
        let mut group = Argument::new();
        loop {
            let token = self.next();
            match token.kind {
                TokenKind::Comma => {
                    if group.is_empty() {
                        self.error_empty_argument(token, name);
                        return None;
                    }
                    args.push(std::mem::take(&mut group));
                }
                TokenKind::ParenClose => {
                    if !group.is_empty() {
                        args.push(group);
                    } else if !args.is_empty() {
                        self.error_empty_argument(token, name);
                        return None;
                    }
                    return Some(args);
                }
                kind if token_sets::ARGUMENT.contains(kind) => {
                    group.push(self.text(token).to_owned());
                }
                _ => {
                    self.error_unexpected_in(token, name);
                    return None;
                }
            }
        }
    }

    /// Identifiers after `Name=(`, through the matching `)`.
    fn parse_identifier_list(&mut self, name: &str) -> Option<Vec<String>> {
        let mut idents = Vec::new();
        loop {
            let token = self.next();
            if token.kind != TokenKind::Identifier {
                let detail = format!("{} in `{}`", self.describe(token), name);
                self.error_unexpected(DiagnosticKind::ExpectedIdentifier, token, detail);
                return None;
            }
            idents.push(self.text(token).to_owned());

            let separator = self.next();
            match separator.kind {
                TokenKind::Comma => {}
                TokenKind::ParenClose => return Some(idents),
                _ => {
                    self.error_unexpected_in(separator, name);
                    return None;
                }
            }
        }
    }

    fn error_empty_argument(&mut self, token: Token, name: &str) {
        self.error_unexpected(DiagnosticKind::EmptyArgument, token, format!("`{name}`"));
    }

    fn error_unexpected_in(&mut self, token: Token, name: &str) {
        let detail = format!("{} in `{}`", self.describe(token), name);
        self.error_unexpected(DiagnosticKind::UnexpectedToken, token, detail);
    }
}
