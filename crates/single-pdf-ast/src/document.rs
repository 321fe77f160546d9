//! Pandoc JSON documents
//!
//! Pandoc 1.18 and later write `{"pandoc-api-version": [..], "meta": {..}, "blocks": [..]}`.
//! Older releases write a two-element array `[{"unMeta": {..}}, [..blocks..]]`.
//! Both layouts are accepted and written back in the layout they were read in.

use serde_json::Value;

use crate::error::{AstError, Result};

/// Top-level JSON layout of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `{"pandoc-api-version", "meta", "blocks"}`
    Modern,
    /// `[{"unMeta": ..}, blocks]`
    Legacy,
}

/// A Pandoc document as read from JSON
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
    layout: Layout,
}

impl Document {
    /// Parse a document from its JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Wrap an already-parsed JSON value
    pub fn from_value(root: Value) -> Result<Self> {
        let layout = match &root {
            Value::Object(map) if map.get("blocks").is_some_and(Value::is_array) => Layout::Modern,
            Value::Array(items)
                if items.len() == 2 && items[0].is_object() && items[1].is_array() =>
            {
                Layout::Legacy
            }
            _ => return Err(AstError::UnknownLayout),
        };
        Ok(Self { root, layout })
    }

    /// Serialize the document back to compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.root)?)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// `pandoc-api-version`, when the document carries one
    pub fn api_version(&self) -> Option<Vec<u64>> {
        self.root
            .get("pandoc-api-version")?
            .as_array()?
            .iter()
            .map(Value::as_u64)
            .collect()
    }

    /// Document metadata map, or `Value::Null` if absent
    pub fn meta(&self) -> &Value {
        let meta = match self.layout {
            Layout::Modern => self.root.get("meta"),
            Layout::Legacy => self.root.get(0).and_then(|m| m.get("unMeta")),
        };
        meta.unwrap_or(&Value::Null)
    }

    /// Top-level blocks
    pub fn blocks(&self) -> &[Value] {
        let blocks = match self.layout {
            Layout::Modern => self.root.get("blocks"),
            Layout::Legacy => self.root.get(1),
        };
        blocks
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The whole document, metadata included
    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_modern_layout() {
        let doc = Document::from_json(
            r#"{"pandoc-api-version":[1,23,1],"meta":{"title":{"t":"MetaInlines","c":[]}},"blocks":[{"t":"HorizontalRule"}]}"#,
        )
        .unwrap();

        assert_eq!(doc.layout(), Layout::Modern);
        assert_eq!(doc.api_version(), Some(vec![1, 23, 1]));
        assert!(doc.meta().get("title").is_some());
        assert_eq!(doc.blocks().len(), 1);
    }

    #[test]
    fn test_legacy_layout() {
        let doc = Document::from_value(json!([
            { "unMeta": { "author": { "t": "MetaString", "c": "me" } } },
            [{ "t": "Para", "c": [] }, { "t": "Para", "c": [] }]
        ]))
        .unwrap();

        assert_eq!(doc.layout(), Layout::Legacy);
        assert_eq!(doc.api_version(), None);
        assert!(doc.meta().get("author").is_some());
        assert_eq!(doc.blocks().len(), 2);
    }

    #[test]
    fn test_missing_meta_is_null() {
        let doc = Document::from_value(json!({ "blocks": [] })).unwrap();
        assert!(doc.meta().is_null());
        assert!(doc.blocks().is_empty());
    }

    #[test]
    fn test_unknown_layout() {
        assert!(matches!(
            Document::from_value(json!({ "meta": {} })),
            Err(AstError::UnknownLayout)
        ));
        assert!(matches!(
            Document::from_value(json!([1, 2, 3])),
            Err(AstError::UnknownLayout)
        ));
        assert!(matches!(
            Document::from_json("not json"),
            Err(AstError::Json(_))
        ));
    }

    #[test]
    fn test_to_json_roundtrip() {
        let value = json!({ "pandoc-api-version": [1, 23], "meta": {}, "blocks": [{ "t": "Null" }] });
        let doc = Document::from_value(value.clone()).unwrap();
        let reparsed: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, value);
    }
}
