//! Vertical scroll position of the results card
//!
//! The card grows while an answer is revealed. Until the user scrolls up the
//! state follows the tail, so the newest revealed line stays in view.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
    /// Pin the offset to the bottom whenever bounds change
    pub follow: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
            follow: true,
        }
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        if self.follow {
            self.offset = self.max_offset;
        } else {
            self.offset = self.offset.min(self.max_offset);
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
        self.follow = self.offset == self.max_offset;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
        self.follow = self.offset == self.max_offset;
    }

    pub fn page_down(&mut self) {
        let half_page = self.viewport_height / 2;
        self.scroll_down(half_page.max(1));
    }

    pub fn page_up(&mut self) {
        let half_page = self.viewport_height / 2;
        self.scroll_up(half_page.max(1));
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
        self.follow = self.max_offset == 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
        self.follow = true;
    }

    /// Back to the top of fresh content, following it as it grows
    pub fn reset(&mut self) {
        self.offset = 0;
        self.max_offset = 0;
        self.follow = true;
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
