//! Block segmentation and classification.
//!
//! The segmenter is line-oriented so that fenced code may contain blank lines.
//! Each resulting block string is classified by its shape, first match wins:
//! code, heading, quote, unordered list, ordered list, paragraph.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// The fence line that opens and closes a code block
pub const FENCE: &str = "```";

static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6}) ").expect("heading pattern is valid"));

static ORDERED_ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\. ").expect("ordered item pattern is valid"));

/// Structural kind of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    /// Heading with level (1-6)
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into trimmed, non-empty block strings in document order
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_fence = false;

    for line in markdown.lines() {
        if line.trim() == FENCE {
            if in_fence {
                current.push(line);
                flush(&mut current, &mut blocks);
            } else {
                flush(&mut current, &mut blocks);
                current.push(line);
            }
            in_fence = !in_fence;
        } else if in_fence {
            current.push(line);
        } else if line.trim().is_empty() {
            flush(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut blocks);

    debug!(blocks = blocks.len(), "segmented document");
    blocks
}

fn flush(current: &mut Vec<&str>, blocks: &mut Vec<String>) {
    let block = current.join("\n");
    current.clear();

    let block = block.trim();
    if !block.is_empty() {
        blocks.push(block.to_string());
    }
}

/// Classify a block string. Every input, including the empty string, yields a kind.
pub fn block_to_block_type(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.lines().collect();
    if lines.is_empty() {
        return BlockKind::Paragraph;
    }

    if block.starts_with(FENCE) && block.ends_with(FENCE) {
        return BlockKind::Code;
    }

    if let Some(caps) = HEADING_PATTERN.captures(block) {
        return BlockKind::Heading(caps[1].len() as u8);
    }

    if lines.iter().all(|line| line.trim().starts_with('>')) {
        return BlockKind::Quote;
    }

    if lines.iter().all(|line| line.trim().starts_with("- ")) {
        return BlockKind::UnorderedList;
    }

    if is_ordered_list(&lines) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Every line must be numbered, counting up from 1 without gaps
fn is_ordered_list(lines: &[&str]) -> bool {
    for (expected, line) in (1..).zip(lines) {
        match split_ordered_item(line.trim()) {
            Some((number, _)) if number == expected => {}
            _ => return false,
        }
    }
    true
}

/// Split a trimmed `<n>. text` list line into its number and text
pub(crate) fn split_ordered_item(line: &str) -> Option<(u64, &str)> {
    let caps = ORDERED_ITEM_PATTERN.captures(line)?;
    let number = caps[1].parse().ok()?;
    let marker = caps.get(0)?;
    Some((number, &line[marker.end()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_blocks() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            markdown_to_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn test_excess_blank_lines() {
        let md = "\n\n\nfirst\n\n\n\n   \nsecond\n\n";
        assert_eq!(markdown_to_blocks(md), vec!["first", "second"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(markdown_to_blocks("").is_empty());
        assert!(markdown_to_blocks("  \n\n \n").is_empty());
    }

    #[test]
    fn test_code_block_keeps_blank_lines() {
        let md = "```\nline1\n\nline2\n```";
        assert_eq!(markdown_to_blocks(md), vec!["```\nline1\n\nline2\n```"]);
    }

    #[test]
    fn test_fence_flushes_pending_paragraph() {
        let md = "intro\n```\ncode\n```\noutro";
        assert_eq!(
            markdown_to_blocks(md),
            vec!["intro", "```\ncode\n```", "outro"]
        );
    }

    #[test]
    fn test_indented_fence_lines() {
        let md = "  ```\ncode\n\nmore\n  ```";
        let blocks = markdown_to_blocks(md);
        assert_eq!(blocks, vec!["```\ncode\n\nmore\n  ```"]);
        assert_eq!(block_to_block_type(&blocks[0]), BlockKind::Code);
    }

    #[test]
    fn test_unclosed_fence_flushed_at_end() {
        let md = "para\n\n```\ncode\n\nmore\n";
        assert_eq!(markdown_to_blocks(md), vec!["para", "```\ncode\n\nmore"]);
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        let md = "  indented   words\n  second  line  ";
        assert_eq!(
            markdown_to_blocks(md),
            vec!["indented   words\n  second  line"]
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(block_to_block_type("# heading"), BlockKind::Heading(1));
        assert_eq!(block_to_block_type("### heading"), BlockKind::Heading(3));
        assert_eq!(block_to_block_type("###### heading"), BlockKind::Heading(6));
        assert_eq!(block_to_block_type("####### heading"), BlockKind::Paragraph);
        assert_eq!(block_to_block_type("#heading"), BlockKind::Paragraph);
    }

    #[test]
    fn test_code() {
        assert_eq!(block_to_block_type("```\ncode\n```"), BlockKind::Code);
        assert_eq!(block_to_block_type("```inline```"), BlockKind::Code);
        assert_eq!(block_to_block_type("```\nunclosed"), BlockKind::Paragraph);
    }

    #[test]
    fn test_quote() {
        assert_eq!(
            block_to_block_type("> quote\n> more quote"),
            BlockKind::Quote
        );
        assert_eq!(
            block_to_block_type(">tight\n  > indented"),
            BlockKind::Quote
        );
        assert_eq!(
            block_to_block_type("> quote\nnot quote"),
            BlockKind::Paragraph
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            block_to_block_type("- list\n- items"),
            BlockKind::UnorderedList
        );
        assert_eq!(block_to_block_type("- list\n-items"), BlockKind::Paragraph);
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            block_to_block_type("1. a\n2. b\n3. c"),
            BlockKind::OrderedList
        );
        assert_eq!(
            block_to_block_type("1. a\n3. b\n2. c"),
            BlockKind::Paragraph
        );
        assert_eq!(block_to_block_type("2. a\n3. b"), BlockKind::Paragraph);
        assert_eq!(block_to_block_type("1. a\n1. b"), BlockKind::Paragraph);
        assert_eq!(block_to_block_type("1.a"), BlockKind::Paragraph);
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(block_to_block_type("just some text"), BlockKind::Paragraph);
        assert_eq!(block_to_block_type(""), BlockKind::Paragraph);
    }

    #[test]
    fn test_precedence() {
        // Heading wins over quote/list shapes on later lines
        assert_eq!(
            block_to_block_type("# title\n> quote"),
            BlockKind::Heading(1)
        );
        assert_eq!(
            block_to_block_type("```\n# not heading\n```"),
            BlockKind::Code
        );
    }

    #[test]
    fn test_split_ordered_item() {
        assert_eq!(split_ordered_item("12. item"), Some((12, "item")));
        assert_eq!(split_ordered_item("007. bond"), Some((7, "bond")));
        assert_eq!(split_ordered_item("x. item"), None);
    }
}
