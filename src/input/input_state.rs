use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, TextArea};

/// Single-line search box
pub struct InputState {
    pub textarea: TextArea<'static>,
    /// First visible column when the text is wider than the box
    pub scroll_offset: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
            scroll_offset: 0,
        }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn cursor_column(&self) -> usize {
        self.textarea.cursor().1
    }

    /// Replace the whole text, cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        // Newlines would split the single line
        let flattened: String = text.chars().map(|c| if c == '\n' { ' ' } else { c }).collect();
        self.textarea.insert_str(flattened);
    }

    pub fn clear(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.scroll_offset = 0;
    }

    /// Forward an editing key to the text area.
    ///
    /// Keys that would insert a line break are swallowed. Returns true if the
    /// text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let inserts_newline = key.code == KeyCode::Enter
            || (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL));
        if inserts_newline {
            return false;
        }
        self.textarea.input(key)
    }

    pub fn insert_paste(&mut self, text: &str) {
        let flattened: String = text.chars().map(|c| if c == '\n' { ' ' } else { c }).collect();
        self.textarea.insert_str(flattened);
    }

    /// Keep the cursor inside a viewport `viewport_width` columns wide
    pub fn calculate_scroll_offset(&mut self, viewport_width: usize) {
        if viewport_width == 0 {
            return;
        }
        let cursor_col = self.cursor_column();
        let text_length = self.query().chars().count();

        let mut scroll = self.scroll_offset;
        if cursor_col < scroll {
            scroll = cursor_col;
        } else if cursor_col >= scroll + viewport_width {
            scroll = cursor_col + 1 - viewport_width;
        }

        // Don't leave blank space on the right when the text could fill it
        if text_length < scroll + viewport_width {
            let min_scroll = text_length.saturating_sub(viewport_width - 1);
            scroll = scroll.min(min_scroll);
        }

        self.scroll_offset = scroll;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
