//! Text style attributes

use serde::{Deserialize, Serialize};

/// A text style attribute set or reset by an SGR code.
///
/// The discriminant is the SGR code itself. Codes from 22 upwards reset an
/// attribute rather than turning one on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Attribute {
    /// Reset all attributes (VT100, ECMA-48)
    Normal = 0,
    /// Bold or increased intensity (VT100, ECMA-48)
    Bold = 1,
    /// Faint or decreased intensity (ECMA-48)
    Dim = 2,
    /// Italic (ECMA-48)
    Italic = 3,
    /// Underline (VT100, ECMA-48)
    Underline = 4,
    /// Slow blink (VT100, ECMA-48)
    Blink = 5,
    /// Swap foreground and background (VT100, ECMA-48)
    Reverse = 7,
    /// Concealed text (ECMA-48)
    Hidden = 8,
    /// Normal intensity (ECMA-48)
    NeitherBoldNorDim = 22,
    /// Italic off (ECMA-48)
    NotItalic = 23,
    /// Underline off (ECMA-48)
    NotUnderline = 24,
    /// Blink off (ECMA-48)
    NotBlink = 25,
    /// Reverse off (ECMA-48)
    NotReverse = 27,
    /// Concealed off
    NotHidden = 28,
}

impl Attribute {
    /// Every supported attribute, in code order
    pub const ALL: [Attribute; 14] = [
        Attribute::Normal,
        Attribute::Bold,
        Attribute::Dim,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Blink,
        Attribute::Reverse,
        Attribute::Hidden,
        Attribute::NeitherBoldNorDim,
        Attribute::NotItalic,
        Attribute::NotUnderline,
        Attribute::NotBlink,
        Attribute::NotReverse,
        Attribute::NotHidden,
    ];

    /// SGR code of this attribute
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Whether this attribute turns something on (`Normal` included)
    pub fn is_on(self) -> bool {
        !self.is_off()
    }

    /// Whether this attribute turns something off
    pub fn is_off(self) -> bool {
        self.code() >= 22
    }
}

impl TryFrom<u32> for Attribute {
    type Error = u32;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.code() == code)
            .ok_or(code)
    }
}
