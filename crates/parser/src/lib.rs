//! stransi parser
//!
//! Splits text into plain runs and ANSI control sequences, and decodes the
//! sequences into typed [`Instruction`]s: text attributes, colors, cursor
//! movements and screen clears. Anything outside that subset is reported as
//! [`Instruction::Unsupported`] instead of being dropped.
//!
//! ```
//! use stransi_parser::{Ansi, Color, ColorRole, Decoded, Instruction};
//!
//! let text = Ansi::new("\x1b[31mred\x1b[39m");
//! let mut decoded = text.instructions();
//! assert_eq!(
//!     decoded.next(),
//!     Some(Decoded::Instruction(Instruction::SetColor {
//!         role: ColorRole::Foreground,
//!         color: Some(Color::Ansi256(1)),
//!     }))
//! );
//! assert_eq!(decoded.next(), Some(Decoded::Text("red")));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod ansi;
pub mod attribute;
pub mod clear;
pub mod color;
pub mod cursor;
pub mod escape;
pub mod instruction;
pub mod splitter;
pub mod token;

pub use ansi::{Ansi, AnsiInstructions, Decoded, Escapes, Segment};
pub use attribute::Attribute;
pub use clear::Clear;
pub use color::{Color, ColorRole, Rgb};
pub use cursor::CursorMove;
pub use escape::{is_escape, DecoderOptions, Escape, Instructions, Tokens};
pub use instruction::Instruction;
pub use token::Token;
