//! Indented text dump of parsed attribute lists.

use std::fmt::Write;

use super::ast::{Argument, AttributeList, Node, Span};

pub struct AstPrinter<'a> {
    lists: &'a [AttributeList],
    spans: bool,
}

impl<'a> AstPrinter<'a> {
    pub fn new(lists: &'a [AttributeList]) -> Self {
        Self {
            lists,
            spans: false,
        }
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        for list in self.lists {
            self.format_node(Node::from(list), 0, w)?;
        }
        Ok(())
    }

    fn format_node(&self, node: Node<'_>, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.span());
        match node {
            Node::AttributeList(_) => writeln!(w, "{prefix}AttributeList{span}")?,
            Node::NoArgs(n) => writeln!(w, "{prefix}NoArgs{span} {}", n.name)?,
            Node::ArgList(n) => {
                writeln!(w, "{prefix}ArgList{span} {}", n.name)?;
                self.format_arguments(&n.args, indent + 1, w)?;
            }
            Node::Ident(n) => writeln!(w, "{prefix}Ident{span} {} = {}", n.name, n.ident)?,
            Node::NamedArgList(n) => {
                writeln!(w, "{prefix}NamedArgList{span} {} = {}", n.name, n.ident)?;
                self.format_arguments(&n.args, indent + 1, w)?;
            }
            Node::IdentList(n) => {
                writeln!(w, "{prefix}IdentList{span} {}", n.name)?;
                let prefix = "  ".repeat(indent + 1);
                for ident in &n.idents {
                    writeln!(w, "{prefix}{ident}")?;
                }
            }
        }

        for child in node.children() {
            self.format_node(child, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_arguments(
        &self,
        args: &[Argument],
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        for arg in args {
            writeln!(w, "{prefix}Argument {}", arg.join(" "))?;
        }
        Ok(())
    }

    fn span_str(&self, span: Span) -> String {
        if self.spans {
            format!(" [{}..{}]", u32::from(span.start()), u32::from(span.end()))
        } else {
            String::new()
        }
    }
}
