//! Command-hint footer

pub mod help_line_render;
