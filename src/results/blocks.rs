//! Line classification for answer text
//!
//! Answers use a tiny markdown subset: `# ` and `## ` headings, `- ` list
//! items and plain paragraphs. Classification is per line and stateless, so
//! a partially revealed answer classifies the same as the finished one up to
//! the reveal cursor.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading1,
    Heading2,
    ListItem,
    Paragraph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockKind,
    /// Line text with the marker stripped
    pub text: &'a str,
}

pub fn classify_line(line: &str) -> Block<'_> {
    if let Some(text) = line.strip_prefix("## ") {
        Block {
            kind: BlockKind::Heading2,
            text,
        }
    } else if let Some(text) = line.strip_prefix("# ") {
        Block {
            kind: BlockKind::Heading1,
            text,
        }
    } else if let Some(text) = line.strip_prefix("- ") {
        Block {
            kind: BlockKind::ListItem,
            text,
        }
    } else {
        Block {
            kind: BlockKind::Paragraph,
            text: line,
        }
    }
}

/// Classify every line of `text`.
///
/// A trailing newline does not produce an extra empty block.
pub fn classify(text: &str) -> Vec<Block<'_>> {
    text.lines().map(classify_line).collect()
}
