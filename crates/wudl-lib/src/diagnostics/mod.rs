//! Error accumulation and rendering.
//!
//! Parsing never aborts on bad input: problems are pushed into a
//! [`Diagnostics`] list and returned next to (or instead of) the result.

mod message;
mod printer;


use rowan::TextRange;

pub use message::{Diagnostic, DiagnosticKind, ErrorCategory, Fix, Position, RelatedInfo};
pub use printer::DiagnosticsPrinter;

pub(crate) use message::serialize_text_range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind and span.
    ///
    /// `source` is only used to resolve the line and column of `range`.
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(
        &mut self,
        source: &str,
        kind: DiagnosticKind,
        range: TextRange,
    ) -> DiagnosticBuilder<'_> {
        let position = Position::locate(source, range.start());
        DiagnosticBuilder {
            diagnostics: self,
            message: Diagnostic::new(kind, range, position, kind.fallback_message()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Every diagnostic is an error; kept separate from `is_empty` for call-site clarity.
    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.messages
    }

    pub fn of_category(&self, category: ErrorCategory) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter().filter(move |d| d.category == category)
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }

    /// Annotated rendering against `source`.
    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }

    pub(crate) fn clear(&mut self) {
        self.messages.clear();
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn related_to(mut self, msg: impl Into<String>, range: TextRange) -> Self {
        self.message.related.push(RelatedInfo::new(range, msg));
        self
    }

    /// Attach a suggested edit; a later call replaces an earlier one.
    pub fn fix(
        mut self,
        description: impl Into<String>,
        range: TextRange,
        replacement: impl Into<String>,
    ) -> Self {
        self.message.fix = Some(Fix::new(description, range, replacement));
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
