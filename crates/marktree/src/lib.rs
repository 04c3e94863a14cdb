//! # marktree
//!
//! Convert Markdown documents to an HTML node tree.
//!
//! The parser covers the small Markdown dialect a static site needs: headings,
//! paragraphs, fenced code blocks, block quotes, flat ordered and unordered
//! lists, and inline bold, italic, code, links and images.
//!
//! ## Design
//!
//! Parsing happens in two stages:
//!
//! - **Blocks**: the document is segmented line by line into block strings,
//!   each classified by its syntactic shape ([`BlockKind`]).
//! - **Inlines**: the text of each block is split into styled [`TextSpan`]s,
//!   which are converted to HTML nodes and wrapped in the block's tag.
//!
//! All block nodes are collected under a single `div` root.
//!
//! ## Example
//!
//! ```rust
//! use marktree::Renderer;
//!
//! let renderer = Renderer::new();
//! let html = renderer.render("# Hello\n\nSome **bold** text.").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text.</p></div>");
//! ```

pub mod block;
pub mod convert;
pub mod inline;
mod service;
pub mod span;

pub use block::{block_to_block_type, markdown_to_blocks, BlockKind};
pub use convert::{block_to_html_node, markdown_to_html_node};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_by_delimiter, split_images, split_links,
    text_to_children, text_to_spans,
};
pub use marktree_core::{HtmlNode, NodeError};
pub use service::{markdown_to_html, RenderOptions, Renderer};
pub use span::{text_span_to_html_node, SpanKind, TextSpan};

/// Error type for marktree operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarktreeError {
    #[error("Invalid Markdown syntax: unmatched delimiter '{0}'")]
    UnmatchedDelimiter(String),

    #[error("{0} span has no target URL")]
    MissingTarget(SpanKind),

    #[error("Structural invariant violation: {0}")]
    StructuralInvariantViolation(String),

    #[error("Unrecognized block kind: {0:?}")]
    UnrecognizedBlockKind(BlockKind),
}

impl From<NodeError> for MarktreeError {
    fn from(err: NodeError) -> Self {
        MarktreeError::StructuralInvariantViolation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MarktreeError>;
