//! single-pdf-core: AST rules for building one PDF from many markdown files
//!
//! This crate provides:
//! - Header demotion, so section headers nest under chapter title pages
//! - Local `.md` link rewriting into in-document anchors
//! - [`FilterChain`], an explicit ordered list of rules applied in one pass
//!
//! ## Example
//!
//! ```rust
//! use single_pdf_core::{FilterChain, run_filter};
//!
//! let input = r#"{"pandoc-api-version":[1,23,1],"meta":{},"blocks":[{"t":"Header","c":[1,["",[],[]],[{"t":"Str","c":"Overview"}]]}]}"#;
//! let (output, stats) = run_filter(input, "latex", &FilterChain::default()).unwrap();
//!
//! assert_eq!(stats.total_rewritten(), 1);
//! assert!(output.contains(r#""c":[2,"#));
//! ```

pub mod error;
pub mod filter;
pub mod rules;

pub use error::{FilterError, Result};
pub use filter::{FilterChain, FilterStats, run_filter};
pub use rules::{
    DEFAULT_EXEMPT_PREFIXES, DEFAULT_LINK_EXTENSION, HeaderLevelOptions, HeaderLevelRule,
    LinkTargetOptions, LinkTargetRule, Rule, RuleContext,
};
pub use single_pdf_ast::{Document, Element};
