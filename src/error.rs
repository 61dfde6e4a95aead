//! Error types for compiling and rendering templates

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Malformed template text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Two variables with nothing between them, e.g. `$1$2`
    #[error("consecutive variables at {span:?}")]
    ConsecutiveVariables { span: Span },

    /// `$` not followed by a digit
    #[error("variable without digits at {span:?}")]
    VariableWithoutDigits { span: Span },

    /// `{` with no matching `}`
    #[error("unclosed extension set at {span:?}")]
    UnclosedExtension { span: Span },

    /// `}` with no preceding `{`
    #[error("unexpected '}}' at {span:?}")]
    UnexpectedClosingBrace { span: Span },
}

impl CompileError {
    pub fn span(&self) -> &Span {
        match self {
            CompileError::ConsecutiveVariables { span }
            | CompileError::VariableWithoutDigits { span }
            | CompileError::UnclosedExtension { span }
            | CompileError::UnexpectedClosingBrace { span } => span,
        }
    }

    /// Short description without location
    pub fn reason(&self) -> &'static str {
        match self {
            CompileError::ConsecutiveVariables { .. } => "consecutive variables",
            CompileError::VariableWithoutDigits { .. } => "variable without digits",
            CompileError::UnclosedExtension { .. } => "unclosed extension set",
            CompileError::UnexpectedClosingBrace { .. } => "unexpected closing brace",
        }
    }

    /// Hint for fixing the template
    pub fn help(&self) -> &'static str {
        match self {
            CompileError::ConsecutiveVariables { .. } => {
                "put literal text between variables so their boundary can be found"
            }
            CompileError::VariableWithoutDigits { .. } => "variables are written $1, $2, ...",
            CompileError::UnclosedExtension { .. } => "close the extension set with '}'",
            CompileError::UnexpectedClosingBrace { .. } => {
                "'}' may only close an extension set such as {md,mdx}"
            }
        }
    }

    /// Shift the span by `offset` bytes, e.g. to point into a whole rule file
    pub(crate) fn offset_by(mut self, offset: usize) -> Self {
        let span = match &mut self {
            CompileError::ConsecutiveVariables { span }
            | CompileError::VariableWithoutDigits { span }
            | CompileError::UnclosedExtension { span }
            | CompileError::UnexpectedClosingBrace { span } => span,
        };
        *span = span.start + offset..span.end + offset;
        self
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        report(
            filename,
            source,
            self.span().clone(),
            self.reason(),
            Some(self.help()),
        )
    }
}

/// Failure to render an output template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The output references a variable the input side did not capture
    #[error("missing variable {name}")]
    MissingVariable { name: String },

    /// Extension sets only make sense on the input side
    #[error("extensions not supported in output position: {text}")]
    ExtensionInOutput { text: String },
}

/// Build a single-label ariadne report and return it as a string
pub(crate) fn report(
    filename: &str,
    source: &str,
    span: Span,
    message: &str,
    help: Option<&str>,
) -> String {
    let mut buf = Vec::new();
    let mut builder = Report::build(ReportKind::Error, filename, span.start)
        .with_message(message)
        .with_label(
            Label::new((filename, span))
                .with_message(message)
                .with_color(Color::Red),
        );
    if let Some(help) = help {
        builder = builder.with_help(help);
    }
    builder
        .finish()
        .write((filename, Source::from(source)), &mut buf)
        .ok();
    String::from_utf8_lossy(&buf).into_owned()
}
