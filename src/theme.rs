//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Search box styles
pub mod input {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    /// Border while the results card is leaving or loading
    pub const BORDER_BUSY: Color = palette::TEXT_DIM;
    pub const ICON: Color = palette::PINK;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const TEXT: Color = palette::TEXT;

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Results card styles
pub mod results {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const BORDER_FAILURE: Color = palette::ERROR;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);

    // Waiting state
    pub const STATUS_ICON: Color = palette::WARNING;
    pub const STATUS_TEXT: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC);

    // Answer blocks
    pub const HEADING1: Style = Style::new().fg(palette::PINK).add_modifier(Modifier::BOLD);
    pub const HEADING2: Style = Style::new()
        .fg(palette::PURPLE)
        .add_modifier(Modifier::BOLD);
    pub const LIST_BULLET: Color = palette::CYAN;
    pub const PARAGRAPH: Color = palette::TEXT;
    pub const FAILURE_TEXT: Color = palette::ERROR;

    /// Trailing block shown while the reveal runs
    pub const REVEAL_CURSOR: Color = palette::CYAN;

    /// Applied to the whole card during enter/exit transitions
    pub const TRANSITION_MODIFIER: Modifier = Modifier::DIM;

    pub const HINT: Color = palette::TEXT_DIM;
}

/// Notification styles
pub mod notification {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_HIGHLIGHT,
        border: palette::TEXT_MUTED,
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::WARNING,
        border: palette::WARNING,
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::ERROR,
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
    pub const SERVICE: Color = palette::PURPLE;
}

/// Border hint utilities - for building styled keyboard shortcuts on borders
pub mod border_hints {
    use super::*;
    use ratatui::text::{Line, Span};

    /// Build a single hint with key in full color and description dimmed
    pub fn hint(key: &'static str, desc: &'static str, color: Color) -> Vec<Span<'static>> {
        vec![
            Span::styled(key, Style::new().fg(color)),
            Span::styled(
                format!(" {} ", desc),
                Style::new().fg(color).add_modifier(Modifier::DIM),
            ),
        ]
    }

    /// Build a line with multiple hints separated by dots
    pub fn build_hints(hints: &[(&'static str, &'static str)], color: Color) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    "• ",
                    Style::new().fg(color).add_modifier(Modifier::DIM),
                ));
            }
            spans.extend(hint(key, desc, color));
        }
        Line::from(spans)
    }
}
