//! Compile template text into a segment sequence

use std::iter::Peekable;

use super::ast::{ExtensionSet, Segment, VariableName};
use super::lexer::{lex, Span, Token};
use super::Template;
use crate::error::CompileError;

/// Compile a template such as `foo/posts/$1.{md,mdx}`.
///
/// No partial template is returned on error.
pub fn compile(text: &str) -> Result<Template, CompileError> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut tokens = lex(text).peekable();

    while let Some((token, span)) = tokens.next() {
        let token = token.map_err(|()| lex_error(text, &span))?;
        let follows_variable = segments.last().is_some_and(Segment::is_variable);

        match token {
            Token::Literal(literal) => segments.push(Segment::Literal(literal)),
            Token::Extension(raw) => {
                let set = ExtensionSet::parse(&raw)
                    .ok_or(CompileError::UnclosedExtension { span: span.clone() })?;
                segments.push(Segment::ExtensionSet(set));
            }
            Token::Variable(name) => {
                if follows_variable {
                    return Err(CompileError::ConsecutiveVariables { span });
                }
                let name = VariableName::parse(&name)
                    .ok_or(CompileError::VariableWithoutDigits { span: span.clone() })?;
                segments.push(Segment::Variable(name));
            }
            Token::Dollar => {
                if follows_variable {
                    return Err(CompileError::ConsecutiveVariables { span });
                }
                return Err(bare_dollar_error(&mut tokens, span));
            }
        }
    }

    Ok(Template::from_segments(segments))
}

/// A `$` without digits directly followed by another `$` reads as two
/// variables in a row, anything else as a nameless variable.
fn bare_dollar_error<I>(tokens: &mut Peekable<I>, span: Span) -> CompileError
where
    I: Iterator<Item = (Result<Token, ()>, Span)>,
{
    match tokens.peek() {
        Some((Ok(Token::Variable(_) | Token::Dollar), next)) => {
            CompileError::ConsecutiveVariables { span: next.clone() }
        }
        _ => CompileError::VariableWithoutDigits { span },
    }
}

fn lex_error(text: &str, span: &Span) -> CompileError {
    let brace = span.start..span.start + 1;
    if text[span.start..].starts_with('}') {
        CompileError::UnexpectedClosingBrace { span: brace }
    } else {
        CompileError::UnclosedExtension { span: brace }
    }
}
