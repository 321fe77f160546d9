//! AST rewrite rules
//!
//! A rule looks at one element and either leaves it alone (`Ok(None)`) or
//! returns the element to put in its place.

mod headers;
mod links;

pub use headers::{DEFAULT_EXEMPT_PREFIXES, HeaderLevelOptions, HeaderLevelRule};
pub use links::{
    DEFAULT_LINK_EXTENSION, LinkTargetOptions, LinkTargetRule, heading_slug, read_first_line,
};

use serde_json::Value;
use single_pdf_ast::Element;

use crate::error::Result;

/// Per-document context passed to every rule
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Target output format (e.g. "latex"), empty when not given
    pub format: &'a str,
    /// Document metadata, `Value::Null` when the document has none
    pub meta: &'a Value,
}

/// A single AST rewrite
pub trait Rule {
    /// Short name used in logs and statistics
    fn name(&self) -> &'static str;

    /// Rewrite `element`, or return `Ok(None)` to keep it
    fn apply(&self, element: &Element, ctx: &RuleContext<'_>) -> Result<Option<Element>>;
}
