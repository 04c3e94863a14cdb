//! Inline text spans and their HTML node mapping.

use std::fmt;

use marktree_core::HtmlNode;

use crate::{MarktreeError, Result};

/// Style of an inline text span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Lowercase name of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }

    /// Whether spans of this kind carry a target URL
    pub fn has_target(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run of inline text with a single style.
///
/// `target` holds the URL of links and images and is `None` for every other kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
    pub target: Option<String>,
}

impl TextSpan {
    /// Create a span without a target
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    /// Create a plain text span
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    /// Create a link span
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    /// Create an image span
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Convert this span to an HTML node.
    ///
    /// Styled spans become a parent wrapping one raw text leaf, links and
    /// images become tagged leaves carrying the target as an attribute.
    pub fn to_html_node(&self) -> Result<HtmlNode> {
        let node = match self.kind {
            SpanKind::Plain => HtmlNode::text(self.content.as_str()),
            SpanKind::Bold => wrap("b", &self.content),
            SpanKind::Italic => wrap("i", &self.content),
            SpanKind::Code => wrap("code", &self.content),
            SpanKind::Link => {
                let url = self.require_target()?;
                HtmlNode::leaf_with_attrs("a", self.content.as_str(), vec![("href", url)])
            }
            SpanKind::Image => {
                let url = self.require_target()?;
                let alt = self.content.as_str();
                HtmlNode::leaf_with_attrs("img", "", vec![("src", url), ("alt", alt)])
            }
        };
        Ok(node)
    }

    fn require_target(&self) -> Result<&str> {
        self.target
            .as_deref()
            .ok_or(MarktreeError::MissingTarget(self.kind))
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            content,
            kind,
            target,
        } = self;
        write!(f, "TextSpan({content:?}, {kind}, {target:?})")
    }
}

/// Convert a span to an HTML node
pub fn text_span_to_html_node(span: &TextSpan) -> Result<HtmlNode> {
    span.to_html_node()
}

fn wrap(tag: &str, content: &str) -> HtmlNode {
    HtmlNode::parent(tag, vec![HtmlNode::text(content)])
}
