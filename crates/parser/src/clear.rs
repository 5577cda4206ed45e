//! Screen regions to erase

use serde::{Deserialize, Serialize};

/// A region erased by `ED` (`J`) or `EL` (`K`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clear {
    /// From the cursor to the end of the screen (`J` 0)
    ScreenAfter,
    /// From the start of the screen to the cursor (`J` 1)
    ScreenBefore,
    /// Whole screen (`J` 2)
    Screen,
    /// From the cursor to the end of the line (`K` 0)
    LineAfter,
    /// From the start of the line to the cursor (`K` 1)
    LineBefore,
    /// Whole line (`K` 2)
    Line,
}

impl Clear {
    /// Map an erase-in-display parameter to its region
    pub fn screen(data: u32) -> Option<Self> {
        match data {
            0 => Some(Clear::ScreenAfter),
            1 => Some(Clear::ScreenBefore),
            2 => Some(Clear::Screen),
            _ => None,
        }
    }

    /// Map an erase-in-line parameter to its region
    pub fn line(data: u32) -> Option<Self> {
        match data {
            0 => Some(Clear::LineAfter),
            1 => Some(Clear::LineBefore),
            2 => Some(Clear::Line),
            _ => None,
        }
    }
}
