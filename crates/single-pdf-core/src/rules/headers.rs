//! Header demotion
//!
//! Once several documents are concatenated, their top-level section headers
//! should nest under the chapter title pages. Headers at the demoted level
//! move one level down unless their text marks a chapter or disclaimer page.

use single_pdf_ast::{Element, Header, first_text};
use tracing::debug;

use super::{Rule, RuleContext};
use crate::error::Result;

/// Header text prefixes that keep their level
pub const DEFAULT_EXEMPT_PREFIXES: &[&str] = &["Chapter", "Disclaimer"];

/// Options for [`HeaderLevelRule`]
#[derive(Debug, Clone)]
pub struct HeaderLevelOptions {
    /// Only headers at this level are demoted
    pub level: i64,
    /// Headers whose first text segment starts with one of these are left alone.
    /// Matching is case-sensitive against the ASCII characters of the text.
    pub exempt_prefixes: Vec<String>,
}

impl Default for HeaderLevelOptions {
    fn default() -> Self {
        Self {
            level: 1,
            exempt_prefixes: DEFAULT_EXEMPT_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Demotes eligible headers by one level
#[derive(Debug, Clone, Default)]
pub struct HeaderLevelRule {
    options: HeaderLevelOptions,
}

impl HeaderLevelRule {
    pub fn new(options: HeaderLevelOptions) -> Self {
        Self { options }
    }

    fn is_exempt(&self, text: &str) -> bool {
        // Non-ASCII characters are dropped before matching
        let ascii: String = text.chars().filter(char::is_ascii).collect();
        self.options
            .exempt_prefixes
            .iter()
            .any(|prefix| ascii.starts_with(prefix.as_str()))
    }

    fn should_demote(&self, header: &Header) -> bool {
        if header.level != self.options.level {
            return false;
        }
        match first_text(&header.inlines) {
            Some(text) => !self.is_exempt(text),
            None => false,
        }
    }
}

impl Rule for HeaderLevelRule {
    fn name(&self) -> &'static str {
        "headers"
    }

    fn apply(&self, element: &Element, _ctx: &RuleContext<'_>) -> Result<Option<Element>> {
        let Element::Header(header) = element else {
            return Ok(None);
        };
        if !self.should_demote(header) {
            return Ok(None);
        }

        debug!(
            level = header.level,
            text = first_text(&header.inlines).unwrap_or_default(),
            "demoting header"
        );
        Ok(Some(Element::Header(Header {
            level: header.level + 1,
            ..header.clone()
        })))
    }
}
