//! Conversion from classified blocks to HTML nodes.

use marktree_core::HtmlNode;
use tracing::{debug, trace};

use crate::block::{block_to_block_type, markdown_to_blocks, split_ordered_item, BlockKind, FENCE};
use crate::inline::text_to_children;
use crate::{MarktreeError, Result};

/// Tag of the node that wraps a whole document
pub const ROOT_TAG: &str = "div";

/// Parse a Markdown document into a `div` holding one node per block
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let blocks = markdown_to_blocks(markdown);

    let children = blocks
        .iter()
        .map(|block| {
            let kind = block_to_block_type(block);
            trace!(?kind, "classified block");
            block_to_html_node(block, kind)
        })
        .collect::<Result<Vec<_>>>()
        .inspect_err(|err| debug!(error = %err, "failed to convert document"))?;

    Ok(HtmlNode::parent(ROOT_TAG, children))
}

/// Convert one block of the given kind to its HTML subtree
pub fn block_to_html_node(block: &str, kind: BlockKind) -> Result<HtmlNode> {
    match kind {
        BlockKind::Paragraph => paragraph_to_node(block),
        BlockKind::Heading(level) => heading_to_node(block, level),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => unordered_list_to_node(block),
        BlockKind::OrderedList => ordered_list_to_node(block),
    }
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode> {
    let text = block.lines().collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

fn heading_to_node(block: &str, level: u8) -> Result<HtmlNode> {
    if !(1..=6).contains(&level) {
        let kind = BlockKind::Heading(level);
        return Err(MarktreeError::UnrecognizedBlockKind(kind));
    }

    let marker = "#".repeat(level as usize);
    let text = block
        .strip_prefix(marker.as_str())
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or_else(|| violation("heading", block))?;

    let tag = format!("h{level}");
    Ok(HtmlNode::parent(&tag, text_to_children(text)?))
}

/// Code content is kept verbatim; no inline styling is applied.
fn code_to_node(block: &str) -> HtmlNode {
    let lines: Vec<&str> = block.lines().collect();

    let code = match lines.as_slice() {
        [single] => single
            .trim()
            .trim_start_matches(FENCE)
            .trim_end_matches(FENCE)
            .to_string(),
        [_, inner @ .., last] if last.trim() == FENCE => inner.join("\n"),
        [_, inner @ .., last] if last.ends_with(FENCE) => {
            let mut content = inner.to_vec();
            content.push(last.trim_end_matches(FENCE));
            content.join("\n")
        }
        [_, rest @ ..] => rest.join("\n"),
        [] => String::new(),
    };

    let code = HtmlNode::parent("code", vec![HtmlNode::text(code)]);
    HtmlNode::parent("pre", vec![code])
}

fn quote_to_node(block: &str) -> Result<HtmlNode> {
    let lines = block
        .lines()
        .map(|line| {
            line.trim()
                .strip_prefix('>')
                .map(str::trim)
                .ok_or_else(|| violation("quote line", line))
        })
        .collect::<Result<Vec<_>>>()?;

    let children = text_to_children(&lines.join(" "))?;
    Ok(HtmlNode::parent("blockquote", children))
}

fn unordered_list_to_node(block: &str) -> Result<HtmlNode> {
    let items = block
        .lines()
        .map(|line| {
            let text = line.trim().strip_prefix("- ");
            let text = text.ok_or_else(|| violation("list line", line))?;
            list_item(text)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list_to_node(block: &str) -> Result<HtmlNode> {
    let items = block
        .lines()
        .map(|line| {
            let item = split_ordered_item(line.trim());
            let (_, text) = item.ok_or_else(|| violation("list line", line))?;
            list_item(text)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("ol", items))
}

fn list_item(text: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent("li", text_to_children(text)?))
}

fn violation(what: &str, text: &str) -> MarktreeError {
    MarktreeError::StructuralInvariantViolation(format!("malformed {what}: {text:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        markdown_to_html_node(markdown).unwrap().to_html().unwrap()
    }

    #[test]
    fn test_paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with *italic* text and `code` here

";
        assert_eq!(
            render(md),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            render("# Heading 1\n\n###### Heading *six*"),
            "<div><h1>Heading 1</h1><h6>Heading <i>six</i></h6></div>"
        );
    }

    #[test]
    fn test_code_block() {
        let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
        assert_eq!(
            render(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff</code></pre></div>"
        );
    }

    #[test]
    fn test_code_block_with_blank_line() {
        assert_eq!(
            render("```\nline1\n\nline2\n```"),
            "<div><pre><code>line1\n\nline2</code></pre></div>"
        );
    }

    #[test]
    fn test_single_line_code_block() {
        let node = block_to_html_node("```let x = 1;```", BlockKind::Code).unwrap();
        assert_eq!(
            node.to_html().unwrap(),
            "<pre><code>let x = 1;</code></pre>"
        );
    }

    #[test]
    fn test_code_block_with_info_line() {
        let block = "```rust\nfn main() {}\n```";
        let node = block_to_html_node(block, BlockKind::Code).unwrap();
        assert_eq!(
            node.to_html().unwrap(),
            "<pre><code>fn main() {}</code></pre>"
        );
    }

    #[test]
    fn test_closing_fence_on_last_line() {
        assert_eq!(render("```a\nb```"), "<div><pre><code>b</code></pre></div>");
        assert_eq!(
            render("```\nfirst\nsecond```"),
            "<div><pre><code>first\nsecond</code></pre></div>"
        );
    }

    #[test]
    fn test_code_block_wraps_raw_text() {
        let node = block_to_html_node("```\n**x**\n```", BlockKind::Code).unwrap();
        let code = HtmlNode::parent("code", vec![HtmlNode::text("**x**")]);
        assert_eq!(node, HtmlNode::parent("pre", vec![code]));
    }

    #[test]
    fn test_quote() {
        assert_eq!(
            render("> This is a\n> blockquote block\n>with **style**"),
            "<div><blockquote>This is a blockquote block with <b>style</b></blockquote></div>"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            render("- a\n- b with `code`"),
            "<div><ul><li>a</li><li>b with <code>code</code></li></ul></div>"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            render("1. first\n2. second\n3. **third**"),
            "<div><ol><li>first</li><li>second</li><li><b>third</b></li></ol></div>"
        );
    }

    #[test]
    fn test_out_of_order_list_is_paragraph() {
        assert_eq!(
            render("1. a\n3. b\n2. c"),
            "<div><p>1. a 3. b 2. c</p></div>"
        );
    }

    #[test]
    fn test_link_and_image() {
        let node = markdown_to_html_node("![x](u1) and [y](u2)").unwrap();
        let p = &node.children()[0];
        let img = &p.children()[0];
        let link = &p.children()[2];
        assert_eq!(img.tag(), Some("img"));
        assert_eq!(img.attr("src"), Some("u1"));
        assert_eq!(img.attr("alt"), Some("x"));
        assert_eq!(link.tag(), Some("a"));
        assert_eq!(link.attr("href"), Some("u2"));
        assert_eq!(link.value(), Some("y"));
    }

    #[test]
    fn test_unmatched_delimiter_aborts_document() {
        let err = markdown_to_html_node("# ok\n\nbroken **bold").unwrap_err();
        assert_eq!(err, MarktreeError::UnmatchedDelimiter("**".to_string()));
    }

    #[test]
    fn test_misclassified_list_rejected() {
        let cases = [
            ("- a\nb", BlockKind::UnorderedList),
            ("1. a\nb", BlockKind::OrderedList),
            ("> a\nb", BlockKind::Quote),
            ("no hashes", BlockKind::Heading(2)),
        ];

        for (block, kind) in cases {
            let err = block_to_html_node(block, kind).unwrap_err();
            assert!(matches!(
                err,
                MarktreeError::StructuralInvariantViolation(_)
            ));
        }
    }

    #[test]
    fn test_heading_level_out_of_range() {
        let kind = BlockKind::Heading(7);
        let err = block_to_html_node("####### x", kind).unwrap_err();
        assert_eq!(err, MarktreeError::UnrecognizedBlockKind(kind));
    }

    #[test]
    fn test_empty_document_has_no_children() {
        let node = markdown_to_html_node("").unwrap();
        assert!(node.children().is_empty());
        assert_eq!(
            node.to_html(),
            Err(marktree_core::NodeError::EmptyChildren {
                tag: ROOT_TAG.to_string(),
            })
        );
    }
}
