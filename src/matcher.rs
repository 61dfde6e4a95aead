//! Structural matching of a candidate string against a template
//!
//! Matching is whole-string and strictly left to right. A variable's extent is
//! decided by looking at the next segment only: the first occurrence of a
//! following literal, or of the first listed extension alternative found.
//! There is no backtracking, so a boundary that makes a later segment fail
//! fails the whole match.

use std::collections::HashMap;

use crate::template::{Segment, Template, VariableName};

/// Variable captures from one successful match, borrowed from the candidate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings<'s> {
    values: HashMap<VariableName, &'s str>,
}

impl<'s> Bindings<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any earlier capture under the same name
    pub fn insert(&mut self, name: VariableName, value: &'s str) {
        self.values.insert(name, value);
    }

    /// Look up a capture by its `$N` name
    pub fn get(&self, name: &str) -> Option<&'s str> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VariableName, &'s str)> + '_ {
        self.values.iter().map(|(name, value)| (name, *value))
    }
}

impl Template {
    /// Match `candidate` against this template, returning its bindings.
    ///
    /// An empty template matches only the empty string.
    pub fn match_str<'s>(&self, candidate: &'s str) -> Option<Bindings<'s>> {
        let segments = self.segments();
        let mut bindings = Bindings::new();
        let mut offset = 0;

        for (i, segment) in segments.iter().enumerate() {
            // An extension suffix may advance the offset off a char boundary
            let rest = candidate.get(offset..)?;

            match segment {
                Segment::Literal(text) => {
                    if !rest.starts_with(text.as_str()) {
                        return None;
                    }
                    offset += text.len();
                }
                Segment::ExtensionSet(set) => {
                    offset += set.suffix_of(rest)?.len();
                }
                Segment::Variable(name) => {
                    let end = match segments.get(i + 1) {
                        None => rest.len(),
                        Some(Segment::Literal(text)) => rest.find(text.as_str())?,
                        Some(Segment::ExtensionSet(set)) => set.first_occurrence(rest)?,
                        // The compiler never emits adjacent variables
                        Some(Segment::Variable(_)) => return None,
                    };
                    bindings.insert(name.clone(), &rest[..end]);
                    offset += end;
                }
            }
        }

        (offset == candidate.len()).then_some(bindings)
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.match_str(candidate).is_some()
    }
}
