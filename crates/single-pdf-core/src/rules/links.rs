//! Local document links to in-document anchors
//!
//! In the combined PDF, a link to `intro.md` has to point at the place where
//! `intro.md` now starts. The anchor is taken from the linked file's first
//! line: a `# Heading` line gives the heading's slug, anything else gives the
//! file path without its extension.

use single_pdf_ast::{Element, Link, Target};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{Rule, RuleContext};
use crate::error::{FilterError, Result};

/// Suffix marking a link to a local markdown document
pub const DEFAULT_LINK_EXTENSION: &str = ".md";

/// Options for [`LinkTargetRule`]
#[derive(Debug, Clone)]
pub struct LinkTargetOptions {
    /// Links whose URL ends with this suffix are rewritten (case-sensitive)
    pub extension: String,
    /// Directory that relative link targets are resolved against.
    /// If None, the process working directory is used.
    pub base_dir: Option<PathBuf>,
}

impl Default for LinkTargetOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_LINK_EXTENSION.to_string(),
            base_dir: None,
        }
    }
}

/// Rewrites links to local markdown files into `#anchor` links
#[derive(Debug, Clone, Default)]
pub struct LinkTargetRule {
    options: LinkTargetOptions,
}

impl LinkTargetRule {
    pub fn new(options: LinkTargetOptions) -> Self {
        Self { options }
    }

    fn resolve(&self, url: &str) -> PathBuf {
        match &self.options.base_dir {
            Some(base) => base.join(url),
            None => PathBuf::from(url),
        }
    }

    /// Anchor for a local document link, or None if `url` is not one
    pub fn anchor_for(&self, url: &str) -> Result<Option<String>> {
        let Some(stem) = url.strip_suffix(self.options.extension.as_str()) else {
            return Ok(None);
        };

        let first_line = read_first_line(&self.resolve(url))?;
        let anchor = if first_line.starts_with('#') {
            heading_slug(&first_line)
        } else {
            stem.to_string()
        };
        Ok(Some(format!("#{}", anchor)))
    }
}

impl Rule for LinkTargetRule {
    fn name(&self) -> &'static str {
        "links"
    }

    fn apply(&self, element: &Element, _ctx: &RuleContext<'_>) -> Result<Option<Element>> {
        let Element::Link(link) = element else {
            return Ok(None);
        };
        let Some(url) = self.anchor_for(&link.target.url)? else {
            return Ok(None);
        };

        debug!(from = %link.target.url, to = %url, "rewriting link");
        Ok(Some(Element::Link(Link {
            target: Target {
                url,
                title: link.target.title.clone(),
            },
            ..link.clone()
        })))
    }
}

/// Read the first line of `path`, including its line terminator
///
/// The file is closed before returning. Invalid UTF-8 is replaced rather than
/// rejected. An empty file is an error.
pub fn read_first_line(path: &Path) -> Result<String> {
    let io_error = |source| FilterError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    let read = reader.read_until(b'\n', &mut line).map_err(io_error)?;

    if read == 0 {
        return Err(FilterError::EmptyTarget {
            path: path.to_path_buf(),
        });
    }
    Ok(String::from_utf8_lossy(&line).into_owned())
}

/// Slug of a `# Heading` line
///
/// Drops the first two characters (the `#` and the space after it),
/// lower-cases, turns every space into `-`, then trims surrounding
/// whitespace. Spaces are replaced before trimming, so trailing spaces
/// survive as trailing hyphens.
pub fn heading_slug(line: &str) -> String {
    let text: String = line.chars().skip(2).collect();
    text.to_lowercase().replace(' ', "-").trim().to_string()
}
