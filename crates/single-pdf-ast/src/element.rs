//! Pandoc AST elements
//!
//! Pandoc serializes every block and inline as `{"t": <kind>, "c": <payload>}`.
//! Only the kinds the filters act on are modelled here; every other kind is
//! carried as raw JSON so it round-trips untouched.
//! Reference: https://hackage.haskell.org/package/pandoc-types

use serde::Deserialize;
use serde_json::{Value, json};

/// Element attributes (`[identifier, [classes], [[key, value]]]`), kept verbatim
pub type Attr = Value;

/// Header node (`Header level attr inlines`)
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub level: i64,
    pub attr: Attr,
    pub inlines: Vec<Value>,
}

/// Link node (`Link attr inlines target`)
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub attr: Attr,
    pub inlines: Vec<Value>,
    pub target: Target,
}

/// Link target: URL and title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub url: String,
    pub title: String,
}

/// A tagged AST node
///
/// `Other` holds the complete `{"t", "c"}` object of any kind that is not
/// modelled, as well as `Header`/`Link` objects whose payload does not have
/// the expected shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Header(Header),
    Link(Link),
    Other(Value),
}

impl Element {
    /// Classify a JSON value by its `"t"` tag
    pub fn from_value(value: Value) -> Self {
        let parsed = match (tag_of(&value), value.get("c")) {
            (Some("Header"), Some(c)) => {
                <(i64, Attr, Vec<Value>)>::deserialize(c)
                    .ok()
                    .map(|(level, attr, inlines)| {
                        Element::Header(Header {
                            level,
                            attr,
                            inlines,
                        })
                    })
            }
            (Some("Link"), Some(c)) => <(Attr, Vec<Value>, (String, String))>::deserialize(c)
                .ok()
                .map(|(attr, inlines, (url, title))| {
                    Element::Link(Link {
                        attr,
                        inlines,
                        target: Target { url, title },
                    })
                }),
            _ => None,
        };

        parsed.unwrap_or(Element::Other(value))
    }

    /// Serialize back to Pandoc's `{"t", "c"}` form
    pub fn into_value(self) -> Value {
        match self {
            Element::Header(Header {
                level,
                attr,
                inlines,
            }) => json!({ "t": "Header", "c": [level, attr, inlines] }),
            Element::Link(Link {
                attr,
                inlines,
                target: Target { url, title },
            }) => json!({ "t": "Link", "c": [attr, inlines, [url, title]] }),
            Element::Other(value) => value,
        }
    }

    /// The node kind, as it appears in the `"t"` field
    pub fn kind(&self) -> &str {
        match self {
            Element::Header(_) => "Header",
            Element::Link(_) => "Link",
            Element::Other(value) => tag_of(value).unwrap_or_default(),
        }
    }
}

/// Whether `value` is a tagged AST node
pub fn is_element(value: &Value) -> bool {
    tag_of(value).is_some()
}

fn tag_of(value: &Value) -> Option<&str> {
    value.get("t").and_then(Value::as_str)
}

/// Literal text of the first inline, if it is a `Str`
pub fn first_text(inlines: &[Value]) -> Option<&str> {
    let first = inlines.first()?;
    match tag_of(first) {
        Some("Str") => first.get("c").and_then(Value::as_str),
        _ => None,
    }
}

/// Empty attributes (`["", [], []]`)
pub fn empty_attr() -> Attr {
    json!(["", [], []])
}

// Convenience constructors
impl Element {
    pub fn header(level: i64, attr: Attr, inlines: Vec<Value>) -> Self {
        Element::Header(Header {
            level,
            attr,
            inlines,
        })
    }

    pub fn link(url: impl Into<String>, title: impl Into<String>, inlines: Vec<Value>) -> Self {
        Element::Link(Link {
            attr: empty_attr(),
            inlines,
            target: Target {
                url: url.into(),
                title: title.into(),
            },
        })
    }
}

/// `Str` inline
pub fn str_inline(s: impl Into<String>) -> Value {
    json!({ "t": "Str", "c": s.into() })
}

/// `Space` inline
pub fn space() -> Value {
    json!({ "t": "Space" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_header() {
        let value = json!({ "t": "Header", "c": [1, ["intro", [], []], [{ "t": "Str", "c": "Intro" }]] });
        let element = Element::from_value(value);
        if let Element::Header(h) = &element {
            assert_eq!(h.level, 1);
            assert_eq!(h.attr, json!(["intro", [], []]));
            assert_eq!(first_text(&h.inlines), Some("Intro"));
        } else {
            panic!("Expected Header element");
        }
        assert_eq!(element.kind(), "Header");
    }

    #[test]
    fn test_classify_link() {
        let value = json!({
            "t": "Link",
            "c": [["", [], []], [{ "t": "Str", "c": "intro" }], ["intro.md", "The intro"]]
        });
        if let Element::Link(l) = Element::from_value(value) {
            assert_eq!(l.target.url, "intro.md");
            assert_eq!(l.target.title, "The intro");
            assert_eq!(l.inlines.len(), 1);
        } else {
            panic!("Expected Link element");
        }
    }

    #[test]
    fn test_other_kinds_are_opaque() {
        let value = json!({ "t": "Para", "c": [{ "t": "Str", "c": "text" }] });
        let element = Element::from_value(value.clone());
        assert_eq!(element.kind(), "Para");
        assert_eq!(element.into_value(), value);

        let space = Element::from_value(space());
        assert_eq!(space.kind(), "Space");
    }

    #[test]
    fn test_malformed_payload_is_other() {
        // Missing inline content
        let header = json!({ "t": "Header", "c": [1, ["", [], []]] });
        assert_eq!(
            Element::from_value(header.clone()),
            Element::Other(header.clone())
        );

        // Pre-1.16 link layout without attributes
        let link = json!({ "t": "Link", "c": [[], ["intro.md", ""]] });
        assert_eq!(Element::from_value(link.clone()), Element::Other(link));

        let no_payload = json!({ "t": "Header" });
        assert_eq!(
            Element::from_value(no_payload.clone()),
            Element::Other(no_payload)
        );
    }

    #[test]
    fn test_into_value_matches_pandoc_layout() {
        let value = json!({ "t": "Header", "c": [2, ["a", ["b"], [["k", "v"]]], [{ "t": "Str", "c": "A" }]] });
        assert_eq!(Element::from_value(value.clone()).into_value(), value);

        let link = Element::link("#intro", "", vec![str_inline("intro")]);
        assert_eq!(
            link.into_value(),
            json!({ "t": "Link", "c": [["", [], []], [{ "t": "Str", "c": "intro" }], ["#intro", ""]] })
        );
    }

    #[test]
    fn test_first_text() {
        assert_eq!(first_text(&[]), None);
        assert_eq!(first_text(&[space(), str_inline("x")]), None);
        assert_eq!(
            first_text(&[str_inline("Chapter"), space(), str_inline("1")]),
            Some("Chapter")
        );
    }

    #[test]
    fn test_is_element() {
        assert!(is_element(&str_inline("x")));
        assert!(!is_element(&json!(["", [], []])));
        assert!(!is_element(&json!({ "t": 1 })));
        assert!(!is_element(&json!("Header")));
    }
}
