//! Color values and the palette they apply to

use serde::{Deserialize, Serialize};

/// Which palette an SGR color code addresses.
///
/// The discriminant is the base code of the 8-color range for that role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ColorRole {
    /// Text color (30-39, 90-97)
    Foreground = 30,
    /// Cell background color (40-49, 100-107)
    Background = 40,
}

impl ColorRole {
    /// Base code of the role's 8-color range
    pub fn base(self) -> u32 {
        self as u32
    }

    /// Role addressed by an SGR code, if the code is a color code at all
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            30..=39 | 90..=97 => Some(ColorRole::Foreground),
            40..=49 | 100..=107 => Some(ColorRole::Background),
            _ => None,
        }
    }

    /// Code announcing an extended (256-color or 24-bit) spec for this role
    pub fn extended_code(self) -> u32 {
        self.base() + 8
    }

    /// Code resetting this role to the terminal default
    pub fn default_code(self) -> u32 {
        self.base() + 9
    }
}

/// A 24-bit color with each channel normalized to `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub red: f64,
    /// Green channel
    pub green: f64,
    /// Blue channel
    pub blue: f64,
}

impl Rgb {
    /// Create a color from normalized channels
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from 8-bit channels
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
        }
    }
}

/// A concrete color selected by an SGR sequence.
///
/// "Terminal default" is not a `Color`; decoders express it as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    /// Index into the terminal's 256-color palette
    Ansi256(u8),
    /// Direct 24-bit color
    Rgb(Rgb),
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}
