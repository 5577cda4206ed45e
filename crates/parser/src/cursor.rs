//! Cursor movements

use serde::{Deserialize, Serialize};

/// A single cursor movement.
///
/// Absolute moves are zero-based from the home position. Relative moves
/// carry a signed delta along one axis; up and left are negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CursorMove {
    /// Column, or column delta when relative
    pub x: i64,
    /// Row, or row delta when relative
    pub y: i64,
    /// Whether `x` and `y` are deltas
    pub relative: bool,
}

impl CursorMove {
    /// Move to an absolute zero-based position
    pub fn to(x: u32, y: u32) -> Self {
        Self {
            x: i64::from(x),
            y: i64::from(y),
            relative: false,
        }
    }

    /// Move to the home position
    pub fn to_home() -> Self {
        Self::to(0, 0)
    }

    /// Move up by `steps` rows
    pub fn up(steps: u32) -> Self {
        Self {
            y: -i64::from(steps),
            relative: true,
            ..Self::default()
        }
    }

    /// Move down by `steps` rows
    pub fn down(steps: u32) -> Self {
        Self {
            y: i64::from(steps),
            relative: true,
            ..Self::default()
        }
    }

    /// Move left by `steps` columns
    pub fn left(steps: u32) -> Self {
        Self {
            x: -i64::from(steps),
            relative: true,
            ..Self::default()
        }
    }

    /// Move right by `steps` columns
    pub fn right(steps: u32) -> Self {
        Self {
            x: i64::from(steps),
            relative: true,
            ..Self::default()
        }
    }
}
