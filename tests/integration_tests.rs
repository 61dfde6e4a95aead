//! Integration tests for compiling, matching and rendering templates

use linkmap::{compile, CompileError, EvalError, RenderError, RuleSet, Segment};
use pretty_assertions::assert_eq;

fn describe(source: &str) -> String {
    compile(source)
        .expect("Should compile")
        .segments()
        .iter()
        .map(Segment::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_compile_posts_template() {
    insta::assert_snapshot!(describe("foo/posts/$1.{md,mdx}"), @r###"
    literal "foo/posts/"
    variable $1
    literal "."
    extensions {md,mdx}
    "###);
}

#[test]
fn test_compile_two_variables() {
    insta::assert_snapshot!(describe("foo/$1/bar/$2.{html}"), @r###"
    literal "foo/"
    variable $1
    literal "/bar/"
    variable $2
    literal "."
    extensions {html}
    "###);
}

#[test]
fn test_compile_errors() {
    assert!(matches!(
        compile("$1$2"),
        Err(CompileError::ConsecutiveVariables { .. })
    ));
    assert!(matches!(
        compile("$a"),
        Err(CompileError::VariableWithoutDigits { .. })
    ));
    assert!(matches!(
        compile("$"),
        Err(CompileError::VariableWithoutDigits { .. })
    ));
}

#[test]
fn test_extension_is_suffix_based() {
    let template = compile("a.{md,mdx}").unwrap();
    assert!(template.is_match("a.md"));
    assert!(template.is_match("a.mdx"));
    assert!(!template.is_match("a.html"));
}

#[test]
fn test_match_bindings() {
    let template = compile("foo/posts/$1.{md,mdx}").unwrap();
    let bindings = template.match_str("foo/posts/abc.md").expect("Should match");
    assert_eq!(bindings.get("$1"), Some("abc"));
    assert_eq!(bindings.len(), 1);

    assert!(template.match_str("foo/posts/abc.mdx.md").is_none());
}

#[test]
fn test_match_then_render() {
    let input = compile("foo/$1/bar/$2.{html}").unwrap();
    let output = compile("https://example.com/$1/$2.html").unwrap();

    let bindings = input.match_str("foo/abc/bar/xyz.html").expect("Should match");
    assert_eq!(bindings.get("$1"), Some("abc"));
    assert_eq!(bindings.get("$2"), Some("xyz"));
    assert_eq!(
        output.render(&bindings).unwrap(),
        "https://example.com/abc/xyz.html"
    );
}

#[test]
fn test_render_succeeds_when_output_variables_are_captured() {
    let cases = [
        ("docs/$1.{md}", "https://x/$1", "docs/intro.md"),
        ("a/$1/b/$2", "https://x/$2/$1", "a/one/b/two"),
        ("$1/index.html", "https://x/$1/", "guide/index.html"),
    ];
    for (input, output, candidate) in cases {
        let input = compile(input).unwrap();
        let output = compile(output).unwrap();
        let bindings = input.match_str(candidate).expect(candidate);
        assert!(output
            .variables()
            .all(|name| bindings.get(name.as_str()).is_some()));
        assert!(output.render(&bindings).is_ok(), "{candidate}");
    }
}

#[test]
fn test_whole_string_matching() {
    let template = compile("posts/$1.html").unwrap();
    assert!(!template.is_match("posts/a.html.bak"));
    assert!(!template.is_match("xposts/a.html"));
    assert!(template.is_match("posts/a.html"));
}

#[test]
fn test_more_specific_rule_wins() {
    let rules = RuleSet::build([
        ("$1.{md}", "https://example.com/pages/$1"),
        ("blog/$1/$2.{md}", "https://example.com/blog/$1/$2"),
    ])
    .unwrap();
    assert_eq!(
        rules.evaluate("blog/2024/hello.md").unwrap(),
        "https://example.com/blog/2024/hello"
    );
}

#[test]
fn test_no_match_is_not_empty_success() {
    let rules = RuleSet::build([("docs/$1.{md}", "https://example.com/$1")]).unwrap();
    assert!(matches!(
        rules.evaluate("docs/intro.txt"),
        Err(EvalError::NoMatch { .. })
    ));
}

#[test]
fn test_extension_in_output_fails_render() {
    let rules = RuleSet::build([("docs/$1.{md}", "https://example.com/$1.{html}")]).unwrap();
    assert!(matches!(
        rules.evaluate("docs/a.md"),
        Err(EvalError::Render {
            source: RenderError::ExtensionInOutput { .. },
            ..
        })
    ));
}

#[test]
fn test_concurrent_evaluation() {
    let rules = std::sync::Arc::new(
        RuleSet::build([("docs/$1.{md}", "https://example.com/docs/$1")]).unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rules = rules.clone();
            std::thread::spawn(move || rules.evaluate(&format!("docs/page{i}.md")))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap().unwrap(),
            format!("https://example.com/docs/page{i}")
        );
    }
}
