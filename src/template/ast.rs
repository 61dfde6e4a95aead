//! Compiled template types

use std::fmt;

/// A validated variable name: `$` followed by one or more decimal digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableName(String);

impl VariableName {
    /// Validate and wrap a variable name such as `$1`
    pub fn parse(name: &str) -> Option<Self> {
        let digits = name.strip_prefix('$')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for VariableName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A brace-delimited list of alternative suffixes, e.g. `{md,mdx}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    raw: String,
    alternatives: Vec<String>,
}

impl ExtensionSet {
    /// Split the raw `{a,b}` text into its alternatives.
    ///
    /// Returns `None` unless `raw` is enclosed in braces. Empty alternatives are
    /// kept as written.
    pub fn parse(raw: &str) -> Option<Self> {
        let inner = raw.strip_prefix('{')?.strip_suffix('}')?;
        if inner.contains(['{', '}']) {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            alternatives: inner.split(',').map(str::to_string).collect(),
        })
    }

    /// The raw text including braces
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Alternatives in the order they were listed
    pub fn alternatives(&self) -> impl Iterator<Item = &str> {
        self.alternatives.iter().map(String::as_str)
    }

    /// The first listed alternative that `tail` ends with
    pub fn suffix_of(&self, tail: &str) -> Option<&str> {
        self.alternatives().find(|alt| tail.ends_with(*alt))
    }

    /// Byte offset of the first listed alternative found anywhere in `tail`.
    ///
    /// Alternatives are tried in listed order and the first one that occurs
    /// wins, even if a later alternative occurs earlier in `tail`.
    pub fn first_occurrence(&self, tail: &str) -> Option<usize> {
        self.alternatives().find_map(|alt| tail.find(alt))
    }
}

/// One typed unit of a compiled template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Exact text to match or emit
    Literal(String),
    /// A numbered capture slot
    Variable(VariableName),
    /// Suffix alternation, only meaningful on the input side
    ExtensionSet(ExtensionSet),
}

impl Segment {
    /// The raw template text this segment was compiled from
    pub fn text(&self) -> &str {
        match self {
            Segment::Literal(text) => text,
            Segment::Variable(name) => name.as_str(),
            Segment::ExtensionSet(set) => set.as_str(),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Segment::Variable(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => write!(f, "literal {:?}", text),
            Segment::Variable(name) => write!(f, "variable {}", name),
            Segment::ExtensionSet(set) => write!(f, "extensions {}", set.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_name_validation() {
        assert!(VariableName::parse("$1").is_some());
        assert!(VariableName::parse("$042").is_some());
        assert!(VariableName::parse("$").is_none());
        assert!(VariableName::parse("$a").is_none());
        assert!(VariableName::parse("1").is_none());
        assert!(VariableName::parse("$1a").is_none());
    }

    #[test]
    fn test_extension_alternatives() {
        let set = ExtensionSet::parse("{md,mdx}").unwrap();
        assert_eq!(set.alternatives().collect::<Vec<_>>(), vec!["md", "mdx"]);
        assert_eq!(set.as_str(), "{md,mdx}");
    }

    #[test]
    fn test_extension_rejects_unbraced() {
        assert!(ExtensionSet::parse("md,mdx").is_none());
        assert!(ExtensionSet::parse("{md").is_none());
        assert!(ExtensionSet::parse("{a{b}").is_none());
    }

    #[test]
    fn test_suffix_of_uses_listed_order() {
        let set = ExtensionSet::parse("{md,mdx}").unwrap();
        assert_eq!(set.suffix_of("abc.mdx"), Some("mdx"));
        assert_eq!(set.suffix_of("abc.md"), Some("md"));
        assert_eq!(set.suffix_of("abc.html"), None);
    }

    #[test]
    fn test_first_occurrence_prefers_listed_order() {
        let set = ExtensionSet::parse("{mdx,md}").unwrap();
        // "md" occurs earlier, but "mdx" is listed first
        assert_eq!(set.first_occurrence("a.md.mdx"), Some(5));
        assert_eq!(set.first_occurrence("a.html"), None);
    }

    #[test]
    fn test_segment_text_and_display() {
        let var = Segment::Variable(VariableName::parse("$3").unwrap());
        assert_eq!(var.text(), "$3");
        assert_eq!(var.to_string(), "variable $3");
        assert_eq!(Segment::Literal("a/".into()).to_string(), "literal \"a/\"");
    }
}
