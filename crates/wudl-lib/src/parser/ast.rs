//! Typed AST for extended attributes.
//!
//! Nodes own their text, so they outlive both the source buffer and the
//! parser that produced them.
//!
//! Every span ends at the start of the first token *after* the node (or at
//! end of input), not at the node's own closing delimiter.

use rowan::TextRange;
use serde::Serialize;

use crate::diagnostics::serialize_text_range;

pub type Span = TextRange;

/// One comma-separated slot of a parenthesized argument list, token by token.
///
/// `double x` becomes `["double", "x"]`.
pub type Argument = Vec<String>;

/// Capability shared by all six node shapes.
pub trait Spanned {
    fn span(&self) -> Span;
}

macro_rules! spanned {
    ($($name:ident),* $(,)?) => {
        $(
            impl Spanned for $name {
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}

/// One `[...]` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeList {
    #[serde(serialize_with = "serialize_text_range")]
    pub span: Span,
    pub attributes: Vec<ExtendedAttribute>,
}

/// `[Replaceable]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoArgs {
    #[serde(serialize_with = "serialize_text_range")]
    pub span: Span,
    pub name: String,
}

/// `[Constructor(double x, double y)]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgList {
    #[serde(serialize_with = "serialize_text_range")]
    pub span: Span,
    pub name: String,
    pub args: Vec<Argument>,
}

/// `[PutForwards=name]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ident {
    #[serde(serialize_with = "serialize_text_range")]
    pub span: Span,
    pub name: String,
    pub ident: String,
}

/// `[NamedConstructor=Image(DOMString src)]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedArgList {
    #[serde(serialize_with = "serialize_text_range")]
    pub span: Span,
    pub name: String,
    pub ident: String,
    pub args: Vec<Argument>,
}

/// `[Exposed=(Window,Worker)]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentList {
    #[serde(serialize_with = "serialize_text_range")]
    pub span: Span,
    pub name: String,
    pub idents: Vec<String>,
}

spanned!(AttributeList, NoArgs, ArgList, Ident, NamedArgList, IdentList);

/// A single attribute inside a group, one variant per grammar form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form")]
pub enum ExtendedAttribute {
    NoArgs(NoArgs),
    ArgList(ArgList),
    Ident(Ident),
    NamedArgList(NamedArgList),
    IdentList(IdentList),
}

impl ExtendedAttribute {
    /// Attribute name, the identifier before any `(` or `=`.
    pub fn name(&self) -> &str {
        match self {
            ExtendedAttribute::NoArgs(n) => &n.name,
            ExtendedAttribute::ArgList(n) => &n.name,
            ExtendedAttribute::Ident(n) => &n.name,
            ExtendedAttribute::NamedArgList(n) => &n.name,
            ExtendedAttribute::IdentList(n) => &n.name,
        }
    }

    /// Argument-groups, for the two forms that carry them.
    pub fn args(&self) -> Option<&[Argument]> {
        match self {
            ExtendedAttribute::ArgList(n) => Some(&n.args),
            ExtendedAttribute::NamedArgList(n) => Some(&n.args),
            ExtendedAttribute::NoArgs(_)
            | ExtendedAttribute::Ident(_)
            | ExtendedAttribute::IdentList(_) => None,
        }
    }
}

impl Spanned for ExtendedAttribute {
    fn span(&self) -> Span {
        match self {
            ExtendedAttribute::NoArgs(n) => n.span,
            ExtendedAttribute::ArgList(n) => n.span,
            ExtendedAttribute::Ident(n) => n.span,
            ExtendedAttribute::NamedArgList(n) => n.span,
            ExtendedAttribute::IdentList(n) => n.span,
        }
    }
}

impl AttributeList {
    /// First attribute with the given name.
    pub fn get(&self, name: &str) -> Option<&ExtendedAttribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Borrowed view over any of the six node shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    AttributeList(&'a AttributeList),
    NoArgs(&'a NoArgs),
    ArgList(&'a ArgList),
    Ident(&'a Ident),
    NamedArgList(&'a NamedArgList),
    IdentList(&'a IdentList),
}

impl<'a> Node<'a> {
    pub fn span(&self) -> Span {
        match self {
            Node::AttributeList(n) => n.span,
            Node::NoArgs(n) => n.span,
            Node::ArgList(n) => n.span,
            Node::Ident(n) => n.span,
            Node::NamedArgList(n) => n.span,
            Node::IdentList(n) => n.span,
        }
    }

    /// Child nodes in source order. Only attribute lists have children.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let attributes: &'a [ExtendedAttribute] = match *self {
            Node::AttributeList(n) => &n.attributes,
            Node::NoArgs(_)
            | Node::ArgList(_)
            | Node::Ident(_)
            | Node::NamedArgList(_)
            | Node::IdentList(_) => &[],
        };
        attributes.iter().map(Node::from)
    }
}

impl<'a> From<&'a AttributeList> for Node<'a> {
    fn from(list: &'a AttributeList) -> Self {
        Node::AttributeList(list)
    }
}

impl<'a> From<&'a ExtendedAttribute> for Node<'a> {
    fn from(attribute: &'a ExtendedAttribute) -> Self {
        match attribute {
            ExtendedAttribute::NoArgs(n) => Node::NoArgs(n),
            ExtendedAttribute::ArgList(n) => Node::ArgList(n),
            ExtendedAttribute::Ident(n) => Node::Ident(n),
            ExtendedAttribute::NamedArgList(n) => Node::NamedArgList(n),
            ExtendedAttribute::IdentList(n) => Node::IdentList(n),
        }
    }
}
