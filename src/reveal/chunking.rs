use serde::Deserialize;

/// Granularity of one reveal chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RevealUnit {
    /// Typewriter: `chunk_size` characters per tick
    #[default]
    Chars,
    /// Fade-in: `chunk_size` whole lines per tick
    Lines,
}

impl RevealUnit {
    /// Cursor position (in chars) after advancing one chunk from `cursor`.
    ///
    /// Never moves backwards and never passes `text`'s char count.
    pub fn advance(self, text: &str, cursor: usize, chunk_size: usize) -> usize {
        let total = text.chars().count();
        match self {
            RevealUnit::Chars => cursor.saturating_add(chunk_size).min(total),
            RevealUnit::Lines => {
                let mut remaining = chunk_size.max(1);
                let mut position = cursor;
                for c in text.chars().skip(cursor) {
                    position += 1;
                    if c == '\n' {
                        remaining -= 1;
                        if remaining == 0 {
                            break;
                        }
                    }
                }
                position.min(total)
            }
        }
    }
}

/// Prefix of `text` containing the first `chars` characters
pub fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
