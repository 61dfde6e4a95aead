//! Linkmap - map repository file paths to links
//!
//! A linkmap is a list of rules, each pairing an input path template with an
//! output template. Templates are literal text with numbered variables (`$1`)
//! and, on the input side, a trailing extension set (`{md,mdx}`).
//!
//! # Example
//!
//! ```rust
//! use linkmap::RuleSet;
//!
//! let rules = RuleSet::parse("foo/posts/$1.{md,mdx} https://example.com/posts/$1\n").unwrap();
//! assert_eq!(
//!     rules.evaluate("foo/posts/abc.md").unwrap(),
//!     "https://example.com/posts/abc"
//! );
//! ```

pub mod config;
pub mod error;
pub mod matcher;
mod renderer;
pub mod rules;
pub mod template;

pub use config::{Config, ConfigError};
pub use error::{CompileError, RenderError};
pub use matcher::Bindings;
pub use rules::{EvalError, LoadError, Rule, RuleError, RuleSet, Side};
pub use template::{compile, Segment, Template, VariableName};

use thiserror::Error;

/// Errors that can occur in the parse-then-evaluate pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// The rule source failed to load
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// No rule matched, or the matching rule failed to render
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Parse a rule file's contents and map a single path with it
///
/// # Example
///
/// ```rust
/// let link = linkmap::evaluate(
///     "foo/$1/bar/$2.{html} https://example.com/$1/$2.html",
///     "foo/abc/bar/xyz.html",
/// )
/// .unwrap();
/// assert_eq!(link, "https://example.com/abc/xyz.html");
/// ```
pub fn evaluate(rules: &str, path: &str) -> Result<String, Error> {
    let rules = RuleSet::parse(rules)?;
    Ok(rules.evaluate(path)?)
}
