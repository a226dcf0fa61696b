//! Simple placeholder substitution over named parameters.
use crate::error::{Error, TemplarResult};

use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\.([A-Za-z_][A-Za-z0-9_]*)$").unwrap())
}

/// Named values substituted into migration content at read time.
///
/// There is no fixed set of recognized names; validity is determined by
/// which names the migration content references.
#[derive(Debug, Clone, Default)]
pub struct Parameters(BTreeMap<String, Value>);

impl Parameters {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add a named value, replacing any previous value under `name`.
    pub fn set<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(name.into(), value.into());
        self
    }

    /// The value under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Migration content parsed into literal runs and `{{.name}}` placeholders,
/// named for the migration it came from.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

impl Template {
    /// Parse `text` under the template name `name`.
    ///
    /// A placeholder is `{{.name}}`, with optional whitespace inside the
    /// braces.  Anything else between `{{` and `}}`, or a `{{` with no
    /// closing `}}`, is malformed.  The name is used in diagnostics only.
    pub fn parse(name: &str, text: &str) -> TemplarResult<Self> {
        let mut segments = Vec::new();
        let mut rest = text;
        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                return Err(Error::Parse(
                    name.to_string(),
                    "unclosed placeholder".to_string(),
                ));
            };
            let inner = after[..end].trim();
            let Some(caps) = placeholder_re().captures(inner) else {
                return Err(Error::Parse(
                    name.to_string(),
                    format!("bad placeholder {{{{{inner}}}}}"),
                ));
            };
            segments.push(Segment::Placeholder(caps[1].to_string()));
            rest = &after[end + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            segments,
        })
    }

    /// Substitute `params` into the parsed placeholders.
    ///
    /// Fails with [`Error::MissingParameter`] if any placeholder references
    /// a name absent from `params`.  String values substitute as their raw
    /// text; any other value substitutes as its JSON serialization.
    pub fn render(&self, params: &Parameters) -> TemplarResult<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(key) => {
                    let value = params.get(key).ok_or_else(|| {
                        Error::MissingParameter(self.name.clone(), key.clone())
                    })?;
                    match value {
                        Value::String(s) => out.push_str(s),
                        v => out.push_str(&v.to_string()),
                    }
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::{Parameters, Template};
    use crate::error::Error;

    #[test]
    fn substitutes_named_parameters() {
        let params = Parameters::new().set("schema", "public");
        let tpl = Template::parse("create_users", "CREATE TABLE {{.schema}}.users (id bigint);")
            .unwrap();
        let out = tpl.render(&params).unwrap();
        assert_eq!(out, "CREATE TABLE public.users (id bigint);");
    }

    #[test]
    fn whitespace_inside_braces_is_accepted() {
        let params = Parameters::new().set("table", "users");
        let tpl = Template::parse("t", "DROP TABLE {{ .table }};").unwrap();
        assert_eq!(tpl.render(&params).unwrap(), "DROP TABLE users;");
    }

    #[test]
    fn adjacent_and_repeated_placeholders() {
        let params = Parameters::new().set("a", "x").set("b", "y");
        let tpl = Template::parse("t", "{{.a}}{{.b}}{{.a}}").unwrap();
        assert_eq!(tpl.render(&params).unwrap(), "xyx");
    }

    #[test]
    fn non_string_values_render_as_json() {
        let params = Parameters::new().set("limit", 100).set("strict", true);
        let tpl = Template::parse("t", "SET limit = {{.limit}}, strict = {{.strict}};").unwrap();
        assert_eq!(
            tpl.render(&params).unwrap(),
            "SET limit = 100, strict = true;"
        );
    }

    #[test]
    fn literal_only_content_passes_through() {
        let tpl = Template::parse("t", "SELECT 1;").unwrap();
        assert_eq!(tpl.render(&Parameters::new()).unwrap(), "SELECT 1;");
    }

    #[test]
    fn rendering_is_deterministic() {
        let params: Parameters = [("schema", "app"), ("owner", "svc")].into_iter().collect();
        let tpl = Template::parse("t", "ALTER SCHEMA {{.schema}} OWNER TO {{.owner}};").unwrap();
        let first = tpl.render(&params).unwrap();
        let second = tpl.render(&params).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn missing_parameter_is_an_error() {
        let tpl = Template::parse("orders", "SELECT * FROM {{.table}}").unwrap();
        let err = tpl.render(&Parameters::new()).unwrap_err();
        match err {
            Error::MissingParameter(name, key) => {
                assert_eq!(name, "orders");
                assert_eq!(key, "table");
            }
            other => panic!("expected MissingParameter, got {other}"),
        }
    }

    #[test]
    fn unclosed_placeholder_is_an_error() {
        let err = Template::parse("t", "SELECT {{.a FROM x").unwrap_err();
        assert!(matches!(err, Error::Parse(..)));
    }

    #[test]
    fn placeholder_without_leading_dot_is_an_error() {
        let err = Template::parse("t", "SELECT {{schema}}.users").unwrap_err();
        match err {
            Error::Parse(name, detail) => {
                assert_eq!(name, "t");
                assert!(detail.contains("{{schema}}"), "detail was {detail:?}");
            }
            other => panic!("expected Parse, got {other}"),
        }
    }

    #[test]
    fn empty_placeholder_is_an_error() {
        let err = Template::parse("t", "SELECT {{}}").unwrap_err();
        assert!(matches!(err, Error::Parse(..)));
    }
}
