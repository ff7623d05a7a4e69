use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;
use crate::scroll::ScrollState;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Wait for input until the next timer is due, then apply input,
    /// worker responses and timers.
    pub fn handle_events(&mut self) -> io::Result<()> {
        let timeout = self.poll_timeout(Instant::now());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.input.insert_paste(&text);
                    self.mark_dirty();
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }

        self.update(Instant::now());
        Ok(())
    }

    /// Time until the next deadline, capped so input stays responsive
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(now)
                .min(EVENT_POLL_TIMEOUT),
            None => EVENT_POLL_TIMEOUT,
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let now = Instant::now();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit_query(now),
            KeyCode::Esc => self.clear_search(now),
            KeyCode::Up => self.scroll_results(|s| s.scroll_up(1)),
            KeyCode::Down => self.scroll_results(|s| s.scroll_down(1)),
            KeyCode::PageUp => self.scroll_results(|s| s.page_up()),
            KeyCode::PageDown => self.scroll_results(|s| s.page_down()),
            _ => {
                // Cursor moves redraw even when the text is unchanged
                self.input.handle_key(key);
                self.mark_dirty();
            }
        }
    }

    fn scroll_results(&mut self, scroll: impl FnOnce(&mut ScrollState)) {
        let before = self.results_scroll.offset;
        scroll(&mut self.results_scroll);
        if self.results_scroll.offset != before {
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
