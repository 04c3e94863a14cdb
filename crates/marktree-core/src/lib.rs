//! marktree-core - HTML node tree and serialization
//!
//! This crate provides the HTML node tree produced by the `marktree` Markdown
//! parser, and the serializer that turns a tree into an HTML string.
//!
//! # Architecture
//!
//! ```text
//!                            ┌───────────┐
//! Markdown String ──parse──▶ │ HTML tree │ ──serialize──▶ HTML String
//!                            └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use marktree_core::{serialize, HtmlNode, Options};
//!
//! let tree = HtmlNode::parent(
//!     "p",
//!     vec![
//!         HtmlNode::text("This is "),
//!         HtmlNode::parent("b", vec![HtmlNode::text("bold")]),
//!         HtmlNode::text(" text."),
//!     ],
//! );
//!
//! let html = serialize(&tree, &Options::default()).unwrap();
//! assert_eq!(html, "<p>This is <b>bold</b> text.</p>");
//! ```

mod node;
mod options;
mod serialize;

pub use node::{Attributes, HtmlNode};
pub use options::{Options, DEFAULT_ATTRIBUTE_QUOTE};
pub use serialize::{props_to_html, serialize};

/// Error type for node serialization
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("Parent node must have a tag to render")]
    MissingTag,

    #[error("Parent node <{tag}> must have children to render")]
    EmptyChildren { tag: String },
}

pub type Result<T> = std::result::Result<T, NodeError>;
