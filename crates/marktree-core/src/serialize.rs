//! HTML tree serialization
//!
//! Converts HTML nodes into an HTML string. Text and attribute values are
//! written verbatim; no escaping is performed.

use crate::node::{Attributes, HtmlNode};
use crate::options::Options;
use crate::{NodeError, Result};

/// Serialize a node and its descendants to an HTML string
pub fn serialize(node: &HtmlNode, options: &Options) -> Result<String> {
    let mut output = String::with_capacity(256);
    serialize_node(node, options, &mut output)?;
    Ok(output)
}

/// Render attributes as ` key="value"` pairs in insertion order
pub fn props_to_html(attributes: &Attributes, options: &Options) -> String {
    let mut out = String::new();
    write_attributes(Some(attributes), options, &mut out);
    out
}

fn serialize_node(node: &HtmlNode, options: &Options, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf {
            tag,
            value,
            attributes,
        } => match tag {
            Some(tag) => {
                write_open_tag(tag, attributes.as_ref(), options, out);
                out.push_str(value);
                write_close_tag(tag, out);
            }
            None => out.push_str(value),
        },

        HtmlNode::Parent {
            tag,
            children,
            attributes,
        } => {
            if tag.is_empty() {
                return Err(NodeError::MissingTag);
            }
            if children.is_empty() {
                return Err(NodeError::EmptyChildren { tag: tag.clone() });
            }

            write_open_tag(tag, attributes.as_ref(), options, out);
            for child in children {
                serialize_node(child, options, out)?;
            }
            write_close_tag(tag, out);
        }
    }

    Ok(())
}

fn write_open_tag(tag: &str, attrs: Option<&Attributes>, options: &Options, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    write_attributes(attrs, options, out);
    out.push('>');
}

fn write_close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attributes(attributes: Option<&Attributes>, options: &Options, out: &mut String) {
    let Some(attributes) = attributes else {
        return;
    };

    let quote = options.attribute_quote;
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push('=');
        out.push(quote);
        out.push_str(value);
        out.push(quote);
    }
}
