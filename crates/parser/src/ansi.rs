//! Strings with embedded control sequences

use regex::Regex;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;
use std::sync::LazyLock;
use tracing::trace;

use crate::escape::{DecoderOptions, Escape, Instructions};
use crate::instruction::Instruction;
use crate::splitter::{self, Piece, Split};

/// Pattern matching one CSI sequence
pub const ESCAPE_PATTERN: &str = r"\x1b\[[0-9;]*[A-Za-z]";

static ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ESCAPE_PATTERN).expect("escape pattern is a valid regex"));

/// A piece of an [`Ansi`] string: plain text or a control sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain text
    Text(&'a str),
    /// A control sequence
    Escape(Escape<'a>),
}

impl<'a> Segment<'a> {
    /// The original text of this segment
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(text) => text,
            Segment::Escape(escape) => escape.as_str(),
        }
    }
}

/// A decoded piece of an [`Ansi`] string: plain text or an instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decoded<'a> {
    /// Plain text
    Text(&'a str),
    /// An instruction decoded from a control sequence
    Instruction(Instruction),
}

impl From<Instruction> for Decoded<'_> {
    fn from(instruction: Instruction) -> Self {
        Decoded::Instruction(instruction)
    }
}

/// A string that may contain ANSI control sequences.
///
/// `Ansi` never changes its text; [`Ansi::escapes`] and
/// [`Ansi::instructions`] are fresh projections on every call.
///
/// ```
/// use stransi_parser::{Ansi, Attribute, Decoded, Instruction};
///
/// let s = Ansi::new("\x1b[1mHello\x1b[m");
/// let decoded: Vec<_> = s.instructions().collect();
/// assert_eq!(decoded, vec![
///     Decoded::Instruction(Instruction::SetAttribute(Attribute::Bold)),
///     Decoded::Text("Hello"),
///     Decoded::Instruction(Instruction::SetAttribute(Attribute::Normal)),
/// ]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Ansi {
    text: String,
}

impl Ansi {
    /// Wrap a text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The wrapped text, control sequences included
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Unwrap into the original text
    pub fn into_string(self) -> String {
        self.text
    }

    /// Text runs and control sequences in the order they appear
    pub fn escapes(&self) -> Escapes<'_> {
        trace!(len = self.text.len(), "Splitting text into escapes");
        Escapes {
            pieces: splitter::split(&self.text, &ESCAPE_RE, true),
        }
    }

    /// Text runs and decoded instructions in the order they appear
    pub fn instructions(&self) -> AnsiInstructions<'_> {
        self.instructions_with(DecoderOptions::default())
    }

    /// Like [`Ansi::instructions`], with explicit decoder options
    pub fn instructions_with(&self, options: DecoderOptions) -> AnsiInstructions<'_> {
        AnsiInstructions {
            escapes: self.escapes(),
            current: None,
            options,
        }
    }

    /// The text with every control sequence removed
    pub fn strip(&self) -> String {
        self.escapes()
            .filter_map(|segment| match segment {
                Segment::Text(text) => Some(text),
                Segment::Escape(_) => None,
            })
            .collect()
    }
}

impl Deref for Ansi {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Ansi {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Ansi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Ansi {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Ansi {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl PartialEq<str> for Ansi {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Ansi {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for Ansi {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}

/// Iterator returned by [`Ansi::escapes`]
#[derive(Debug)]
pub struct Escapes<'a> {
    pieces: Split<'static, 'a>,
}

impl<'a> Iterator for Escapes<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let piece = self.pieces.next()?;
        Some(match piece {
            Piece::Text(text) => Segment::Text(text),
            // Separators are exact pattern matches, so they always form an
            // escape; fall back to text rather than panic.
            Piece::Separator(raw) => match Escape::new(raw) {
                Ok(escape) => Segment::Escape(escape),
                Err(_) => Segment::Text(raw),
            },
        })
    }
}

impl FusedIterator for Escapes<'_> {}

/// Iterator returned by [`Ansi::instructions`]
#[derive(Debug)]
pub struct AnsiInstructions<'a> {
    escapes: Escapes<'a>,
    current: Option<Instructions>,
    options: DecoderOptions,
}

impl<'a> Iterator for AnsiInstructions<'a> {
    type Item = Decoded<'a>;

    fn next(&mut self) -> Option<Decoded<'a>> {
        loop {
            if let Some(instruction) = self.current.as_mut().and_then(|it| it.next()) {
                return Some(instruction.into());
            }
            self.current = None;

            match self.escapes.next()? {
                Segment::Text(text) => return Some(Decoded::Text(text)),
                Segment::Escape(escape) => {
                    self.current = Some(escape.instructions_with(self.options));
                }
            }
        }
    }
}

impl FusedIterator for AnsiInstructions<'_> {}
