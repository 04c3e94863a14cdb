//! HTML node tree
//!
//! A tree is built bottom-up by the Markdown converter and consumed once by
//! the serializer. Nodes are never mutated after construction.

use indexmap::IndexMap;

/// HTML attributes in insertion order
pub type Attributes = IndexMap<String, String>;

/// An HTML node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A node without children that renders its own value.
    ///
    /// Without a tag the value is emitted as raw text and attributes are ignored.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Option<Attributes>,
    },

    /// A tagged node whose content is the concatenation of its children
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Option<Attributes>,
    },
}

impl HtmlNode {
    /// Create a raw text leaf (no tag)
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: None,
        }
    }

    /// Create a tagged leaf
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attributes: None,
        }
    }

    /// Create a tagged leaf with attributes
    pub fn leaf_with_attrs(tag: &str, value: impl Into<String>, attrs: Vec<(&str, &str)>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attributes: Some(collect_attrs(attrs)),
        }
    }

    /// Create a parent node
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attributes: None,
        }
    }

    /// Create a parent node with attributes
    pub fn parent_with_attrs(tag: &str, children: Vec<Self>, attrs: Vec<(&str, &str)>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attributes: Some(collect_attrs(attrs)),
        }
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Get the value of a leaf
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => Some(value.as_str()),
            HtmlNode::Parent { .. } => None,
        }
    }

    /// Get the children of a parent (empty for leaves)
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    /// Get the attributes map, if any
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            HtmlNode::Leaf { attributes, .. } => attributes.as_ref(),
            HtmlNode::Parent { attributes, .. } => attributes.as_ref(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes()?.get(name).map(String::as_str)
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            HtmlNode::Leaf { value, .. } => value.clone(),
            HtmlNode::Parent { children, .. } => {
                children.iter().map(HtmlNode::text_content).collect()
            }
        }
    }

    /// Render this node with default options
    pub fn to_html(&self) -> crate::Result<String> {
        crate::serialize(self, &crate::Options::default())
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
