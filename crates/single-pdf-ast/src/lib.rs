//! single-pdf-ast: Pandoc JSON AST model for single-pdf
//!
//! This crate provides:
//! - Reading and writing Pandoc JSON documents (current and pre-1.18 layouts)
//! - A closed [`Element`] type for the node kinds the filters act on
//! - A document-order traversal that offers each tagged node to a callback
//!
//! ## Example
//!
//! ```rust
//! use single_pdf_ast::{Document, Element, walk};
//!
//! let mut doc = Document::from_json(
//!     r#"{"pandoc-api-version":[1,23,1],"meta":{},"blocks":[{"t":"Header","c":[1,["",[],[]],[{"t":"Str","c":"Hello"}]]}]}"#,
//! )
//! .unwrap();
//!
//! walk(doc.root_mut(), &mut |element| {
//!     Ok::<_, std::convert::Infallible>(match element {
//!         Element::Header(mut h) => {
//!             h.level += 1;
//!             Element::Header(h)
//!         }
//!         other => other,
//!     })
//! })
//! .unwrap();
//!
//! assert!(doc.to_json().unwrap().contains(r#""c":[2,"#));
//! ```

pub mod document;
pub mod element;
pub mod error;
pub mod walk;

pub use document::{Document, Layout};
pub use element::{
    Attr, Element, Header, Link, Target, empty_attr, first_text, is_element, space, str_inline,
};
pub use error::{AstError, Result};
pub use walk::walk;
