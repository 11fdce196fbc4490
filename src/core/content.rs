//! # Content Renderer
//!
//! Turns lesson prose into display blocks, one per line, by looking at the
//! line prefix only. There is deliberately no inline markup: `**bold**` and
//! backticks are shown verbatim.
//!
//! ```text
//! "# Title"    →  Heading("Title")
//! "### Sub"    →  Subheading("Sub")
//! "* item"     →  ListItem("item")
//! "   "        →  Spacer
//! "anything"   →  Paragraph("anything")
//! ```

use std::str::Split;

/// One renderable unit of lesson prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Heading(&'a str),
    Subheading(&'a str),
    ListItem(&'a str),
    Spacer,
    Paragraph(&'a str),
}

/// Lazy iterator over the blocks of a content string.
///
/// A clone is an independent cursor at the same position, so a fresh
/// `Blocks` can be walked more than once (e.g. measure, then draw).
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    lines: Split<'a, char>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(classify)
    }
}

/// Splits `content` on `'\n'` and classifies every line.
pub fn blocks(content: &str) -> Blocks<'_> {
    Blocks {
        lines: content.split('\n'),
    }
}

/// Classifies a single line. Precedence: heading, subheading, list item, spacer, paragraph.
pub fn classify(line: &str) -> Block<'_> {
    if let Some(text) = line.strip_prefix("# ") {
        Block::Heading(text)
    } else if let Some(text) = line.strip_prefix("### ") {
        Block::Subheading(text)
    } else if let Some(text) = line.strip_prefix("* ") {
        Block::ListItem(text)
    } else if line.trim().is_empty() {
        Block::Spacer
    } else {
        Block::Paragraph(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lesson::lessons;

    #[test]
    fn test_block_count_matches_line_count() {
        for input in ["", "one", "one\ntwo", "a\n\nb\n", "\n\n\n"] {
            let expected = input.split('\n').count();
            assert_eq!(blocks(input).count(), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_heading_strips_marker() {
        let out: Vec<Block> = blocks("# Title").collect();
        assert_eq!(out, vec![Block::Heading("Title")]);
    }

    #[test]
    fn test_subheading_strips_marker() {
        assert_eq!(classify("### Setup"), Block::Subheading("Setup"));
    }

    #[test]
    fn test_list_item_strips_marker() {
        let out: Vec<Block> = blocks("* item").collect();
        assert_eq!(out, vec![Block::ListItem("item")]);
    }

    #[test]
    fn test_empty_and_whitespace_lines_are_spacers() {
        assert_eq!(classify(""), Block::Spacer);
        assert_eq!(classify("    "), Block::Spacer);
        assert_eq!(classify("\t"), Block::Spacer);
    }

    #[test]
    fn test_markers_need_trailing_space() {
        assert_eq!(classify("#Title"), Block::Paragraph("#Title"));
        assert_eq!(classify("## Two"), Block::Paragraph("## Two"));
        assert_eq!(classify("*bold*"), Block::Paragraph("*bold*"));
    }

    #[test]
    fn test_inline_markup_is_verbatim() {
        assert_eq!(
            classify("*   **Add:** `[...state, newItem]`"),
            Block::ListItem("  **Add:** `[...state, newItem]`")
        );
        assert_eq!(classify("use `ref.watch`"), Block::Paragraph("use `ref.watch`"));
    }

    #[test]
    fn test_blocks_restartable_and_idempotent() {
        let content = lessons()[0].content;
        let iter = blocks(content);
        let first: Vec<Block> = iter.clone().collect();
        let second: Vec<Block> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(first, blocks(content).collect::<Vec<_>>());
    }

    #[test]
    fn test_lesson_content_shape() {
        let out: Vec<Block> = blocks(lessons()[0].content).collect();
        assert_eq!(out[0], Block::Spacer);
        assert_eq!(out[1], Block::Heading("ยินดีต้อนรับสู่ Riverpod"));
        assert!(out.iter().any(|b| matches!(b, Block::Subheading(_))));
    }
}
