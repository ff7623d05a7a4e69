//! Progressive reveal of answer text
//!
//! Discloses content in fixed-size chunks at a fixed cadence to produce the
//! typewriter effect in the results card. Chunks are measured either in
//! characters or in whole lines.

mod chunking;
mod reveal_state;

pub use chunking::RevealUnit;
pub use reveal_state::{ProgressiveRenderer, RevealError, RevealSettings, RevealTick};
