//! Rendering output templates from match bindings

use crate::error::RenderError;
use crate::matcher::Bindings;
use crate::template::{Segment, Template};

impl Template {
    /// Substitute `bindings` into this template.
    ///
    /// Fails on an unbound variable or on any extension set.
    pub fn render(&self, bindings: &Bindings<'_>) -> Result<String, RenderError> {
        let mut out = String::new();
        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Variable(name) => {
                    let value = bindings.get(name.as_str()).ok_or_else(|| {
                        RenderError::MissingVariable {
                            name: name.to_string(),
                        }
                    })?;
                    out.push_str(value);
                }
                Segment::ExtensionSet(set) => {
                    return Err(RenderError::ExtensionInOutput {
                        text: set.as_str().to_string(),
                    })
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::template::{compile, VariableName};

    fn bindings<'s>(pairs: &[(&str, &'s str)]) -> Bindings<'s> {
        let mut bindings = Bindings::new();
        for &(name, value) in pairs {
            bindings.insert(VariableName::parse(name).unwrap(), value);
        }
        bindings
    }

    #[test]
    fn test_render_variables() {
        let template = compile("https://example.com/$1/$2.html").unwrap();
        let out = template
            .render(&bindings(&[("$1", "abc"), ("$2", "xyz")]))
            .unwrap();
        assert_eq!(out, "https://example.com/abc/xyz.html");
    }

    #[test]
    fn test_render_repeated_variable() {
        let template = compile("$1/$1").unwrap();
        assert_eq!(template.render(&bindings(&[("$1", "x")])).unwrap(), "x/x");
    }

    #[test]
    fn test_render_literal_only_ignores_bindings() {
        let template = compile("https://example.com/").unwrap();
        assert_eq!(
            template.render(&bindings(&[("$1", "x")])).unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_missing_variable() {
        let template = compile("https://example.com/$2").unwrap();
        assert_eq!(
            template.render(&bindings(&[("$1", "x")])),
            Err(RenderError::MissingVariable {
                name: "$2".to_string()
            })
        );
    }

    #[test]
    fn test_extension_in_output() {
        let template = compile("https://example.com/$1.{html}").unwrap();
        assert_eq!(
            template.render(&bindings(&[("$1", "x")])),
            Err(RenderError::ExtensionInOutput {
                text: "{html}".to_string()
            })
        );
    }

    #[test]
    fn test_empty_template_renders_empty() {
        assert_eq!(compile("").unwrap().render(&Bindings::new()).unwrap(), "");
    }
}
