//! Inline tokenizer.
//!
//! Splits the text of a block into styled spans. Delimited styles are split
//! first (bold before italic, since `*` is a prefix of `**`, then code), then
//! images and links are extracted from whatever plain text remains.

use std::ops::Range;

use marktree_core::HtmlNode;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::span::{SpanKind, TextSpan};
use crate::{MarktreeError, Result};

pub const BOLD_DELIMITER: &str = "**";
pub const ITALIC_DELIMITER: &str = "*";
pub const CODE_DELIMITER: &str = "`";

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("image pattern is valid"));

// The `regex` crate has no lookbehind; links preceded by `!` are rejected in `link_markers`.
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("link pattern is valid"));

/// A matched `[text](url)` or `![alt](url)` marker
struct Marker<'a> {
    range: Range<usize>,
    text: &'a str,
    url: &'a str,
}

/// Split every plain span on `delimiter`, styling the odd segments as `kind`.
///
/// Occurrences must pair up within each span. Empty plain segments are dropped,
/// empty styled segments are kept. Non-plain spans pass through unchanged.
pub fn split_by_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    if delimiter.is_empty() {
        return Err(MarktreeError::StructuralInvariantViolation(
            "inline delimiter must not be empty".to_string(),
        ));
    }

    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let segments: Vec<&str> = span.content.split(delimiter).collect();
        if segments.len() % 2 == 0 {
            return Err(MarktreeError::UnmatchedDelimiter(delimiter.to_string()));
        }

        for (i, segment) in segments.into_iter().enumerate() {
            if i % 2 == 1 {
                result.push(TextSpan::new(segment, kind));
            } else if !segment.is_empty() {
                result.push(TextSpan::plain(segment));
            }
        }
    }

    Ok(result)
}

/// Extract `(alt, url)` pairs for every `![alt](url)` in `text`
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    image_markers(text)
        .into_iter()
        .map(|m| (m.text.to_string(), m.url.to_string()))
        .collect()
}

/// Extract `(text, url)` pairs for every `[text](url)` not preceded by `!`
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    link_markers(text)
        .into_iter()
        .map(|m| (m.text.to_string(), m.url.to_string()))
        .collect()
}

/// Replace every image marker in plain spans with an image span
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_markers(spans, SpanKind::Image, image_markers)
}

/// Replace every link marker in plain spans with a link span
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_markers(spans, SpanKind::Link, link_markers)
}

/// Tokenize one block's text into styled spans
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_by_delimiter(spans, BOLD_DELIMITER, SpanKind::Bold)?;
    let spans = split_by_delimiter(spans, ITALIC_DELIMITER, SpanKind::Italic)?;
    let spans = split_by_delimiter(spans, CODE_DELIMITER, SpanKind::Code)?;
    let spans = split_images(spans);
    let spans = split_links(spans);

    trace!(spans = spans.len(), "tokenized inline text");
    Ok(spans)
}

/// Tokenize text and convert each span to an HTML node
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    text_to_spans(text)?
        .iter()
        .map(TextSpan::to_html_node)
        .collect()
}

fn image_markers(text: &str) -> Vec<Marker<'_>> {
    IMAGE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| marker(&caps))
        .collect()
}

fn link_markers(text: &str) -> Vec<Marker<'_>> {
    let mut markers = Vec::new();
    let mut pos = 0;

    while let Some(caps) = LINK_PATTERN.captures_at(text, pos) {
        let Some(found) = marker(&caps) else {
            break;
        };

        if text[..found.range.start].ends_with('!') {
            // Retry just past the `[` so a later marker is still found
            pos = found.range.start + 1;
            continue;
        }

        pos = found.range.end;
        markers.push(found);
    }

    markers
}

fn marker<'a>(caps: &regex::Captures<'a>) -> Option<Marker<'a>> {
    Some(Marker {
        range: caps.get(0)?.range(),
        text: caps.get(1)?.as_str(),
        url: caps.get(2)?.as_str(),
    })
}

fn split_markers<F>(spans: Vec<TextSpan>, kind: SpanKind, find: F) -> Vec<TextSpan>
where
    F: for<'a> Fn(&'a str) -> Vec<Marker<'a>>,
{
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let markers = find(&span.content);
        if markers.is_empty() {
            result.push(span);
            continue;
        }

        let mut cursor = 0;
        for m in &markers {
            if m.range.start > cursor {
                result.push(TextSpan::plain(&span.content[cursor..m.range.start]));
            }
            result.push(TextSpan {
                content: m.text.to_string(),
                kind,
                target: Some(m.url.to_string()),
            });
            cursor = m.range.end;
        }

        if cursor < span.content.len() {
            result.push(TextSpan::plain(&span.content[cursor..]));
        }
    }

    result
}
