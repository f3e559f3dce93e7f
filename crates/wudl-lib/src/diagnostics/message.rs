use rowan::{TextRange, TextSize};
use serde::{Serialize, Serializer};

/// Every problem the recognizer can report.
///
/// Grouped by [`ErrorCategory`]: lexical kinds come from the token source,
/// the rest from the attribute parser and the parse driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Bytes the token source cannot turn into tokens
    InvalidUtf8,
    UnrecognizedInput,

    // End of input inside `[...]`
    UnclosedAttributeList,

    // Token sequences matching none of the five attribute forms
    ExpectedAttributeName,
    ExpectedIdentifier,
    ExpectedSeparator,
    EmptyArgument,
    UnexpectedToken,
    StrayBracket,
}

/// Coarse classification of a [`DiagnosticKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Lexical,
    Syntax,
    UnterminatedGroup,
}

impl DiagnosticKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidUtf8 | Self::UnrecognizedInput => ErrorCategory::Lexical,
            Self::UnclosedAttributeList => ErrorCategory::UnterminatedGroup,
            Self::ExpectedAttributeName
            | Self::ExpectedIdentifier
            | Self::ExpectedSeparator
            | Self::EmptyArgument
            | Self::UnexpectedToken
            | Self::StrayBracket => ErrorCategory::Syntax,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::InvalidUtf8 => "source is not valid UTF-8",
            Self::UnrecognizedInput => "unrecognized input",
            Self::UnclosedAttributeList => "missing closing `]`",
            Self::ExpectedAttributeName => "expected attribute name",
            Self::ExpectedIdentifier => "expected identifier",
            Self::ExpectedSeparator => "expected `,` or `]`",
            Self::EmptyArgument => "empty argument",
            Self::UnexpectedToken => "unexpected token",
            Self::StrayBracket => "`]` without a matching `[`",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnrecognizedInput => "unrecognized input {}".to_string(),
            Self::UnclosedAttributeList => format!("{}; {{}}", self.fallback_message()),
            Self::ExpectedAttributeName
            | Self::ExpectedIdentifier
            | Self::ExpectedSeparator => format!("{}, found {{}}", self.fallback_message()),
            Self::EmptyArgument => "empty argument in {}".to_string(),
            Self::UnexpectedToken => "unexpected {}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

/// 1-based line and byte column of an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn locate(source: &str, offset: TextSize) -> Self {
        let offset = usize::from(offset).min(source.len());
        let before = &source.as_bytes()[..offset];
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |nl| nl + 1);
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        Self {
            line: line as u32,
            column: (offset - line_start + 1) as u32,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Secondary location, e.g. where an unclosed group was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    #[serde(serialize_with = "serialize_text_range")]
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Suggested edit: replace `range` with `replacement`.
///
/// An empty `range` inserts, an empty `replacement` deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    #[serde(serialize_with = "serialize_text_range")]
    pub(crate) range: TextRange,
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(
        description: impl Into<String>,
        range: TextRange,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            range,
            replacement: replacement.into(),
            description: description.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(skip)]
    pub(crate) kind: DiagnosticKind,
    pub(crate) category: ErrorCategory,
    /// The range shown to the user (underlined in output).
    #[serde(serialize_with = "serialize_text_range")]
    pub(crate) range: TextRange,
    /// Line and column of `range.start()`.
    pub(crate) position: Position,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) related: Vec<RelatedInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) fix: Option<Fix>,
}

impl Diagnostic {
    pub(crate) fn new(
        kind: DiagnosticKind,
        range: TextRange,
        position: Position,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            category: kind.category(),
            range,
            position,
            message: message.into(),
            related: Vec::new(),
            fix: None,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn fix(&self) -> Option<&Fix> {
        self.fix.as_ref()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.message)?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

pub(crate) fn serialize_text_range<S: Serializer>(
    range: &TextRange,
    s: S,
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut state = s.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}
