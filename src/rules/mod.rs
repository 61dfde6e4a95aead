//! Ordered rule sets mapping input paths to output links

mod loader;

use std::cmp::Reverse;
use std::fmt;

use thiserror::Error;

pub use loader::LoadError;

use crate::error::{CompileError, RenderError};
use crate::matcher::Bindings;
use crate::template::{compile, Template};

/// Which half of a rule a template belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Input,
    Output,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Input => f.write_str("input"),
            Side::Output => f.write_str("output"),
        }
    }
}

/// A template in a rule list failed to compile
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("rule {index}: invalid {side} template {template:?}: {source}")]
pub struct RuleError {
    /// Position of the rule in the list given to [`RuleSet::build`]
    pub index: usize,
    pub side: Side,
    pub template: String,
    pub source: CompileError,
}

/// Errors from evaluating a path against a rule set
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// No rule's input template matched
    #[error("no rule matches {candidate:?}")]
    NoMatch { candidate: String },

    /// The first matching rule could not render its output
    #[error("rule `{rule}` failed to render: {source}")]
    Render { rule: String, source: RenderError },
}

/// An input template paired with the output template it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    input: Template,
    output: Template,
}

impl Rule {
    pub fn new(input: Template, output: Template) -> Self {
        Self { input, output }
    }

    /// Compile both sides, tagging a failure with the side it came from
    pub fn compile(input: &str, output: &str) -> Result<Self, (Side, CompileError)> {
        let input = compile(input).map_err(|err| (Side::Input, err))?;
        let output = compile(output).map_err(|err| (Side::Output, err))?;
        Ok(Self::new(input, output))
    }

    pub fn input(&self) -> &Template {
        &self.input
    }

    pub fn output(&self) -> &Template {
        &self.output
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.input, self.output)
    }
}

/// An immutable, priority-ordered collection of rules.
///
/// Rules with more input segments are tried first; ties keep their original
/// order. There is no way to change the rules after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile `(input, output)` pairs into a rule set.
    ///
    /// Stops at the first template that fails to compile.
    pub fn build<I, A, B>(pairs: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let rules = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (input, output))| {
                let (input, output) = (input.as_ref(), output.as_ref());
                Rule::compile(input, output).map_err(|(side, source)| RuleError {
                    index,
                    side,
                    template: match side {
                        Side::Input => input.to_string(),
                        Side::Output => output.to_string(),
                    },
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_rules(rules))
    }

    /// Order already-compiled rules by descending input complexity
    pub fn from_rules(mut rules: Vec<Rule>) -> Self {
        // sort_by_key is stable, so equal-length inputs keep their order
        rules.sort_by_key(|rule| Reverse(rule.input.len()));
        Self { rules }
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Give up the rules, e.g. to merge them with another set
    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The first rule whose input matches `candidate`, with its bindings
    pub fn find<'s>(&self, candidate: &'s str) -> Option<(&Rule, Bindings<'s>)> {
        self.rules
            .iter()
            .find_map(|rule| rule.input.match_str(candidate).map(|b| (rule, b)))
    }

    /// Map `candidate` to the output of the first matching rule.
    ///
    /// A render failure on that rule is returned as-is; later rules are not
    /// tried.
    pub fn evaluate(&self, candidate: &str) -> Result<String, EvalError> {
        let (rule, bindings) = self.find(candidate).ok_or_else(|| EvalError::NoMatch {
            candidate: candidate.to_string(),
        })?;
        rule.output
            .render(&bindings)
            .map_err(|source| EvalError::Render {
                rule: rule.to_string(),
                source,
            })
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
