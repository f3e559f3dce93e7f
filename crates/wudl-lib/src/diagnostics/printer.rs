//! Text output for collected diagnostics.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::{Diagnostic, Diagnostics};

/// Renders [`Diagnostics`] either as plain lines or as annotated snippets.
///
/// Plain output (no source attached) is one `path:line:column: message` line
/// per diagnostic. Attaching the source with [`source`](Self::source) switches
/// to annotated snippets with related labels and suggested fixes.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    /// Name shown in positions. Empty names are ignored.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = (!path.is_empty()).then_some(path);
        self
    }

    /// ANSI styling for annotated output. Plain lines are never colored.
    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        match self.source {
            Some(source) => self.format_annotated(source, w),
            None => self.format_lines(w),
        }
    }

    fn format_lines(&self, w: &mut impl Write) -> std::fmt::Result {
        for diag in self.diagnostics {
            match self.path {
                Some(path) => writeln!(w, "{path}:{diag}")?,
                None => writeln!(w, "{diag}")?,
            }
        }
        Ok(())
    }

    fn format_annotated(&self, source: &str, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let mut first = true;
        for diag in self.diagnostics {
            if !first {
                w.write_char('\n')?;
            }
            first = false;
            write!(w, "{}", renderer.render(&self.report(diag, source)))?;
        }
        Ok(())
    }

    fn report<'a>(&self, diag: &'a Diagnostic, source: &'a str) -> Vec<Group<'a>>
    where
        's: 'a,
    {
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(visible_range(diag.range, source))
                .label(&diag.message),
        );
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        for related in &diag.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(visible_range(related.range, source))
                    .label(&related.message),
            );
        }

        let mut report = vec![Level::ERROR.primary_title(&diag.message).element(snippet)];

        if let Some(fix) = &diag.fix {
            let mut snippet = Snippet::source(source)
                .line_start(1)
                .patch(Patch::new(snap_range(fix.range, source), &fix.replacement));
            if let Some(path) = self.path {
                snippet = snippet.path(path);
            }
            report.push(Level::HELP.secondary_title(&fix.description).element(snippet));
        }

        report
    }
}

/// Clamps `range` to `source` and widens it outward to char boundaries.
///
/// Diagnostics may be rendered against a different text than the one they
/// were reported on (lossy UTF-8, a truncated buffer).
fn snap_range(range: TextRange, source: &str) -> Range<usize> {
    let mut start = usize::from(range.start()).min(source.len());
    let mut end = usize::from(range.end()).clamp(start, source.len());
    while !source.is_char_boundary(start) {
        start -= 1;
    }
    while !source.is_char_boundary(end) {
        end += 1;
    }
    start..end
}

/// Like [`snap_range`], but an empty range inside the text is widened to the
/// following char so the marker has something to point at.
fn visible_range(range: TextRange, source: &str) -> Range<usize> {
    let Range { start, mut end } = snap_range(range, source);
    if start == end && end < source.len() {
        end += 1;
        while !source.is_char_boundary(end) {
            end += 1;
        }
    }
    start..end
}
