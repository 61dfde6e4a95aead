//! Path templates: compilation and the compiled representation
//!
//! A template is literal text interleaved with numbered variables (`$1`) and
//! extension sets (`{md,mdx}`). Matching lives in [`crate::matcher`] and
//! rendering in [`crate::renderer`].

pub mod ast;
mod compiler;
pub mod lexer;

use std::fmt;
use std::str::FromStr;

pub use ast::{ExtensionSet, Segment, VariableName};
pub use compiler::compile;

use crate::error::CompileError;

/// An ordered sequence of segments compiled from one side of a rule.
///
/// Only the compiler constructs templates, so two variables are never adjacent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments, used as the rule priority
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Variables referenced by this template, in order of appearance
    pub fn variables(&self) -> impl Iterator<Item = &VariableName> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Variable(name) => Some(name),
            _ => None,
        })
    }

    pub fn has_extensions(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::ExtensionSet(_)))
    }
}

impl FromStr for Template {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

/// Writes the template back in source form
impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text())?;
        }
        Ok(())
    }
}
