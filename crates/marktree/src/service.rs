//! Renderer - the main entry point for Markdown to HTML conversion.

use marktree_core::HtmlNode;
use tracing::debug;

use crate::convert::markdown_to_html_node;
use crate::Result;

// Re-export serializer options from core
pub use marktree_core::Options as RenderOptions;

/// The main service for converting Markdown documents to HTML
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a new Renderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Renderer with custom options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Convert a Markdown document to an HTML string rooted at one `div`
    pub fn render(&self, markdown: &str) -> Result<String> {
        let tree = self.to_node(markdown)?;
        let html = marktree_core::serialize(&tree, &self.options)?;

        debug!(
            input = markdown.len(),
            output = html.len(),
            "rendered document"
        );
        Ok(html)
    }

    /// Convert a Markdown document to its HTML node tree without serializing it
    pub fn to_node(&self, markdown: &str) -> Result<HtmlNode> {
        markdown_to_html_node(markdown)
    }

    /// Get the current options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }
}

/// Convert a Markdown document to HTML with default options
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Renderer::new().render(markdown)
}
