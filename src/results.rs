//! Results card: the query's answer, or its loading status, drawn below the
//! search box

mod blocks;
pub mod results_render;

pub use blocks::{Block, BlockKind, classify, classify_line};
