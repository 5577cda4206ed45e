//! Decoded control-sequence instructions

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::clear::Clear;
use crate::color::{Color, ColorRole};
use crate::cursor::CursorMove;
use crate::token::Token;

/// A typed command decoded from a control sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    /// Turn a text attribute on or off
    SetAttribute(Attribute),
    /// Change the foreground or background color; `None` restores the
    /// terminal default
    SetColor {
        /// Palette the color applies to
        role: ColorRole,
        /// New color
        color: Option<Color>,
    },
    /// Move the cursor
    SetCursor(CursorMove),
    /// Erase part of the screen
    SetClear(Clear),
    /// A token this decoder does not understand
    Unsupported(Token),
}

impl Instruction {
    /// Whether this is an [`Instruction::Unsupported`] marker
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Instruction::Unsupported(_))
    }
}

impl From<Attribute> for Instruction {
    fn from(attribute: Attribute) -> Self {
        Instruction::SetAttribute(attribute)
    }
}

impl From<CursorMove> for Instruction {
    fn from(movement: CursorMove) -> Self {
        Instruction::SetCursor(movement)
    }
}

impl From<Clear> for Instruction {
    fn from(region: Clear) -> Self {
        Instruction::SetClear(region)
    }
}
