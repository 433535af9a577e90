//! Render inputs for the presentation layer.
//!
//! A [`PuzzleView`] is a self-contained snapshot: the host can render it,
//! serialize it across a process or JS boundary, or diff it against the
//! previous frame, without reaching back into the engine.

use crate::puzzle::TileId;
use serde::{Deserialize, Serialize};

/// One renderable tile: stable identity plus display letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    /// Stable identity for drag tracking and animation.
    pub id: TileId,
    /// Uppercase letter to display.
    pub letter: char,
}

/// Snapshot of everything the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleView {
    /// Tiles in display order, first and last pinned.
    pub tiles: Vec<TileView>,
    /// Whether the word has been assembled.
    pub solved: bool,
    /// Whether tiles still respond to drags.
    pub locked: bool,
    /// Composed hint sentence tracking the live arrangement.
    pub hint: String,
    /// Seconds elapsed while the word was unsolved.
    pub elapsed_seconds: u32,
    /// Completed drag gestures for this word.
    pub moves: u32,
}

impl PuzzleView {
    /// Elapsed time formatted as `MM:SS`.
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

/// Formats a second count as `MM:SS`.
pub fn format_elapsed(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(9), "00:09");
        assert_eq!(format_elapsed(61), "01:01");
        assert_eq!(format_elapsed(600), "10:00");
    }

    #[test]
    fn minutes_keep_counting_past_the_hour() {
        assert_eq!(format_elapsed(60 * 99 + 59), "99:59");
        assert_eq!(format_elapsed(60 * 100), "100:00");
    }
}
