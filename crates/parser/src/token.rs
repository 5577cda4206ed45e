//! The basic unit of a control sequence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Final character of an SGR sequence
pub const SGR_KIND: char = 'm';

/// One parameter of a control sequence, tagged with the sequence's final
/// character.
///
/// `ESC[38;2;255;0;255m` yields five tokens of kind `'m'` with data
/// 38, 2, 255, 0 and 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Final character of the sequence
    pub kind: char,
    /// Numeric parameter, 0 when omitted
    pub data: u32,
}

impl Token {
    /// Create a new token
    pub fn new(kind: char, data: u32) -> Self {
        Self { kind, data }
    }

    /// Build a token from one raw parameter.
    ///
    /// An empty parameter becomes 0. Values beyond `u32::MAX` saturate.
    pub(crate) fn from_param(kind: char, param: &str) -> Self {
        let data = param
            .bytes()
            .filter(u8::is_ascii_digit)
            .fold(0u32, |acc, b| {
                acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
            });
        Self { kind, data }
    }

    /// Whether this token belongs to an SGR (Select Graphic Rendition) sequence
    pub fn is_sgr(&self) -> bool {
        self.kind == SGR_KIND
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.data)
    }
}
