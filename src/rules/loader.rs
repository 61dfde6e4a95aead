//! Rule file parsing
//!
//! One rule per line: `<input-template> <output-template>`, separated by a
//! single space. Empty lines are skipped.

use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, trace};

use super::{Rule, RuleSet, Side};
use crate::error::{report, CompileError, Span};

/// Errors that can occur when loading a rule file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read rules: {0}")]
    Io(#[from] std::io::Error),

    /// A non-empty line that is not exactly two space-separated templates
    #[error("line {line}: expected '<input> <output>', found {text:?}")]
    InvalidLine {
        line: usize,
        text: String,
        span: Span,
    },

    /// A template on the line failed to compile
    #[error("line {line}: invalid {side} template {template:?}: {source}")]
    Compile {
        line: usize,
        side: Side,
        template: String,
        /// Byte offset of the template within the rule file
        offset: usize,
        source: CompileError,
    },
}

impl LoadError {
    /// Format the error against the whole rule file using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            LoadError::Io(err) => format!("Error: {}: {}\n", filename, err),
            LoadError::InvalidLine { span, .. } => report(
                filename,
                source,
                span.clone(),
                "expected exactly two templates separated by a single space",
                Some("rules are written as `<input-template> <output-template>`"),
            ),
            LoadError::Compile {
                side,
                offset,
                source: err,
                ..
            } => {
                let located = err.clone().offset_by(*offset);
                let message = format!("invalid {} template: {}", side, err.reason());
                let help = err.help();
                report(filename, source, located.span().clone(), &message, Some(help))
            }
        }
    }
}

impl RuleSet {
    /// Parse a rule file's contents
    pub fn parse(source: &str) -> Result<Self, LoadError> {
        let mut rules = Vec::new();
        let mut line_start = 0;

        for (index, raw) in source.split('\n').enumerate() {
            let offset = line_start;
            line_start += raw.len() + 1;

            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if line.is_empty() {
                continue;
            }
            let line_number = index + 1;

            let fields: Vec<&str> = line.split(' ').collect();
            let [input, output] = fields[..] else {
                return Err(LoadError::InvalidLine {
                    line: line_number,
                    text: line.to_string(),
                    span: offset..offset + line.len(),
                });
            };

            let output_offset = offset + input.len() + 1;
            let rule = Rule::compile(input, output).map_err(|(side, err)| {
                let (template, offset) = match side {
                    Side::Input => (input, offset),
                    Side::Output => (output, output_offset),
                };
                LoadError::Compile {
                    line: line_number,
                    side,
                    template: template.to_string(),
                    offset,
                    source: err,
                }
            })?;
            trace!(line = line_number, %rule, "compiled rule");
            rules.push(rule);
        }

        debug!(rules = rules.len(), "parsed rule file");
        Ok(Self::from_rules(rules))
    }

    /// Read and parse a rule file from any reader
    pub fn from_reader(mut reader: impl Read) -> Result<Self, LoadError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::parse(&source)
    }

    /// Read and parse a rule file from disk
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }
}
