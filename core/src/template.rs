/// Static-text templates with `{name}` placeholders
///
/// Used in both directions: push renders a template against run
/// metadata, pull inverts it to recover the metadata (notably the file
/// name) from an observed cell value.
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("value {value:?} does not match template {template:?}")]
    Mismatch { template: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A compiled template: literal runs interleaved with named slots.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Compile a template once. A placeholder is `{name}` where `name`
    /// is made of ASCII letters, digits, `_` or `-`; braces that do not
    /// form a placeholder are kept as literal text.
    pub fn compile(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = text;

        while let Some(open) = rest.find('{') {
            let (before, tail) = rest.split_at(open);
            literal.push_str(before);

            match tail[1..].find('}') {
                Some(close) if is_placeholder_name(&tail[1..1 + close]) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(tail[1..1 + close].to_string()));
                    rest = &tail[close + 2..];
                }
                _ => {
                    literal.push('{');
                    rest = &tail[1..];
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: text.to_string(),
            segments,
        }
    }

    pub fn has_placeholder(&self, name: &str) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Placeholder(n) if n == name))
    }

    /// Substitute placeholders from `metadata`; unknown names render
    /// as empty text.
    pub fn render(&self, metadata: &HashMap<String, String>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    if let Some(value) = metadata.get(name) {
                        out.push_str(value);
                    }
                }
            }
        }
        out
    }

    /// Invert the template against an observed value, capturing one
    /// string per placeholder. Placeholders are greedy; the whole value
    /// must be consumed.
    pub fn extract(&self, value: &str) -> Result<HashMap<String, String>, TemplateError> {
        let mut captures = HashMap::new();
        if match_segments(&self.segments, value, &mut captures) {
            Ok(captures)
        } else {
            Err(TemplateError::Mismatch {
                template: self.source.clone(),
                value: value.to_string(),
            })
        }
    }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn match_segments(
    segments: &[Segment],
    text: &str,
    captures: &mut HashMap<String, String>,
) -> bool {
    match segments.first() {
        None => text.is_empty(),
        Some(Segment::Literal(lit)) => match text.strip_prefix(lit.as_str()) {
            Some(rest) => match_segments(&segments[1..], rest, captures),
            None => false,
        },
        Some(Segment::Placeholder(name)) => {
            // Longest capture first, backtracking on failure.
            for end in (0..=text.len()).rev() {
                if !text.is_char_boundary(end) {
                    continue;
                }
                captures.insert(name.clone(), text[..end].to_string());
                if match_segments(&segments[1..], &text[end..], captures) {
                    return true;
                }
            }
            captures.remove(name);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn renders_placeholders_from_metadata() {
        let template = Template::compile("{file_name} ({locale})");
        let out = template.render(&metadata(&[("file_name", "app.po"), ("locale", "pt-BR")]));
        assert_eq!(out, "app.po (pt-BR)");
    }

    #[test]
    fn unknown_placeholder_renders_empty() {
        let template = Template::compile("x{nope}y");
        assert_eq!(template.render(&metadata(&[])), "xy");
    }

    #[test]
    fn malformed_braces_stay_literal() {
        let template = Template::compile("a{b c}d {file_name}");
        let out = template.render(&metadata(&[("file_name", "f.po")]));
        assert_eq!(out, "a{b c}d f.po");
    }

    #[test]
    fn extracts_single_capture() {
        let template = Template::compile("{x} world!");
        let captures = template.extract("Hello world!").unwrap();
        assert_eq!(captures["x"], "Hello");
    }

    #[test]
    fn extracts_multiple_captures_greedily() {
        let template = Template::compile("{locale}-{file_name}");
        let captures = template.extract("pt-BR-app.po").unwrap();
        // Greedy: the first slot takes as much as it can.
        assert_eq!(captures["locale"], "pt-BR");
        assert_eq!(captures["file_name"], "app.po");
    }

    #[test]
    fn extract_requires_full_match() {
        let template = Template::compile("file: {file_name}");
        assert!(matches!(
            template.extract("something else"),
            Err(TemplateError::Mismatch { .. })
        ));
    }

    #[test]
    fn extract_round_trips_render() {
        let template = Template::compile("{file_name} @ {timestamp}");
        let meta = metadata(&[("file_name", "app.po"), ("timestamp", "2026-08-30 10:00")]);
        let rendered = template.render(&meta);
        let captures = template.extract(&rendered).unwrap();
        assert_eq!(captures["file_name"], "app.po");
        assert_eq!(captures["timestamp"], "2026-08-30 10:00");
    }

    #[test]
    fn has_placeholder_sees_compiled_names() {
        let template = Template::compile("{file_name}.po");
        assert!(template.has_placeholder("file_name"));
        assert!(!template.has_placeholder("locale"));
    }
}
