//! Placeholder renderer for rust-bridge templates.
//! Substitutes `{{ name }}` placeholders with bound values and supports a
//! `replace("from", "to")` filter, e.g. `{{ project_name|replace("-", "_") }}`.
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Placeholder name to value mapping passed to a renderer.
pub type Bindings = IndexMap<String, String>;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given bindings.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `bindings` - Values for the placeholders referenced by `template`
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, bindings: &Bindings) -> Result<String>;
}

/// Literal substitution renderer.
///
/// Rendering is pure: the same template and bindings always produce the same
/// text. Bindings the template does not reference are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    /// # Errors
    /// * `Error::Render` if:
    ///   - a placeholder is not present in `bindings`
    ///   - a filter is unknown or its arguments are malformed
    ///   - a `{{` has no matching `}}`
    fn render(&self, template: &str, bindings: &Bindings) -> Result<String> {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(OPEN) {
            output.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];
            let end = after_open.find(CLOSE).ok_or_else(|| {
                Error::Render(format!(
                    "unterminated placeholder starting at '{}'",
                    first_line(&rest[start..])
                ))
            })?;

            output.push_str(&evaluate(&after_open[..end], bindings)?);
            rest = &after_open[end + CLOSE.len()..];
        }
        output.push_str(rest);

        Ok(output)
    }
}

fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or(s)
}

/// Resolves one placeholder expression: a name followed by zero or more
/// `|filter(...)` segments applied left to right.
fn evaluate(expression: &str, bindings: &Bindings) -> Result<String> {
    let mut segments = split_outside_quotes(expression, '|').into_iter();
    let name = segments.next().unwrap_or_default().trim();
    if name.is_empty() {
        return Err(Error::Render(format!(
            "empty placeholder '{OPEN}{expression}{CLOSE}'"
        )));
    }

    let mut value = bindings
        .get(name)
        .cloned()
        .ok_or_else(|| Error::Render(format!("unknown placeholder '{name}'")))?;

    for filter in segments {
        value = apply_filter(&value, filter.trim())?;
    }
    Ok(value)
}

fn apply_filter(value: &str, filter: &str) -> Result<String> {
    let (name, args) = match filter.find('(') {
        Some(open) if filter.ends_with(')') => (
            filter[..open].trim(),
            parse_string_args(&filter[open + 1..filter.len() - 1])?,
        ),
        Some(_) => {
            return Err(Error::Render(format!(
                "missing closing parenthesis in filter '{filter}'"
            )))
        }
        None => (filter, Vec::new()),
    };

    match (name, args.as_slice()) {
        ("replace", [from, to]) => Ok(value.replace(from.as_str(), to)),
        ("replace", _) => Err(Error::Render(format!(
            "filter 'replace' expects 2 arguments, got {}",
            args.len()
        ))),
        _ => Err(Error::Render(format!("unknown filter '{name}'"))),
    }
}

/// Splits `s` on `separator`, ignoring separators inside double quotes.
fn split_outside_quotes(s: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            c if c == separator && !in_quotes => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Parses a comma separated list of double-quoted string literals.
/// `\"` and `\\` are the only escapes.
fn parse_string_args(args: &str) -> Result<Vec<String>> {
    if args.trim().is_empty() {
        return Ok(Vec::new());
    }

    split_outside_quotes(args, ',')
        .into_iter()
        .map(|arg| {
            let arg = arg.trim();
            let inner = arg
                .strip_prefix('"')
                .and_then(|a| a.strip_suffix('"'))
                .ok_or_else(|| {
                    Error::Render(format!("filter argument {arg} is not a string literal"))
                })?;
            Ok(unescape(inner))
        })
        .collect()
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
                continue;
            }
        }
        out.push(c);
    }
    out
}
