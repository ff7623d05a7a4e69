//! Shared test utilities for tapq

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::Config;
    use crate::service::{AnswerRequest, AnswerResponse};

    /// App with default config and no worker attached
    pub fn test_app() -> App {
        App::new(&Config::default()).unwrap()
    }

    /// App whose worker channels are held by the test
    pub struct ConnectedApp {
        pub app: App,
        pub request_rx: Receiver<AnswerRequest>,
        pub response_tx: Sender<AnswerResponse>,
    }

    pub fn connected_app() -> ConnectedApp {
        let mut app = test_app();
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.controller.set_channels(request_tx, response_rx);
        ConnectedApp {
            app,
            request_rx,
            response_tx,
        }
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type `text` into the search box one key at a time
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    /// Request id of the next request the worker would receive
    pub fn take_request_id(rx: &Receiver<AnswerRequest>) -> Option<u64> {
        match rx.try_recv() {
            Ok(AnswerRequest::Query { request_id, .. }) => Some(request_id),
            Err(_) => None,
        }
    }
}
