//! A single control sequence and its decoder
//!
//! An [`Escape`] is one `ESC [ params letter` sequence. [`Escape::tokens`]
//! splits its parameters into [`Token`]s and [`Escape::instructions`] decodes
//! those tokens into [`Instruction`]s. Decoding is total: codes the decoder
//! does not understand come back as [`Instruction::Unsupported`].

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use tracing::{debug, trace};

use stransi_core::{Result, StransiError};

use crate::attribute::Attribute;
use crate::clear::Clear;
use crate::color::{Color, ColorRole, Rgb};
use crate::cursor::CursorMove;
use crate::instruction::Instruction;
use crate::token::Token;

/// Control Sequence Introducer
pub const CSI: &str = "\x1b[";

/// Whether `text` starts with the Control Sequence Introducer
pub fn is_escape(text: &str) -> bool {
    text.starts_with(CSI)
}

/// Knobs for the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderOptions {
    /// Emit a `debug` event for every unsupported token
    pub log_unsupported: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            log_unsupported: true,
        }
    }
}

/// A single well-formed CSI sequence borrowed from a larger text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Escape<'a> {
    raw: &'a str,
}

impl<'a> Escape<'a> {
    /// Parameter separator
    pub const SEPARATOR: char = ';';

    /// Wrap `raw`, which must match `ESC [ [0-9;]* [A-Za-z]` exactly
    pub fn new(raw: &'a str) -> Result<Self> {
        let well_formed = raw
            .strip_prefix(CSI)
            .and_then(|rest| rest.split_at_checked(rest.len().checked_sub(1)?))
            .is_some_and(|(params, last)| {
                params.bytes().all(|b| b.is_ascii_digit() || b == b';')
                    && last.bytes().all(|b| b.is_ascii_alphabetic())
            });

        if !well_formed {
            return Err(StransiError::MalformedEscape {
                text: raw.to_string(),
            });
        }
        Ok(Self { raw })
    }

    /// The raw sequence, introducer included
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Final character of the sequence
    pub fn kind(&self) -> char {
        // `new` guarantees a trailing ASCII letter.
        char::from(self.raw.as_bytes()[self.raw.len() - 1])
    }

    /// Raw parameter list between the introducer and the final character
    pub fn params(&self) -> &'a str {
        &self.raw[CSI.len()..self.raw.len() - 1]
    }

    /// Split the parameter list into tokens.
    ///
    /// Every parameter becomes one token, empty ones included, so
    /// `ESC[;1H` yields `H:0` then `H:1` and `ESC[H` yields a single `H:0`.
    pub fn tokens(&self) -> Tokens<'a> {
        Tokens {
            kind: self.kind(),
            params: self.params().split(Self::SEPARATOR),
        }
    }

    /// Decode this sequence with default options
    pub fn instructions(&self) -> Instructions {
        self.instructions_with(DecoderOptions::default())
    }

    /// Decode this sequence
    pub fn instructions_with(&self, options: DecoderOptions) -> Instructions {
        trace!(escape = ?self.raw, "Decoding escape sequence");
        Instructions {
            tokens: self.tokens().collect(),
            pos: 0,
            backlog: VecDeque::new(),
            options,
        }
    }
}

impl fmt::Display for Escape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

impl<'a> TryFrom<&'a str> for Escape<'a> {
    type Error = StransiError;

    fn try_from(raw: &'a str) -> Result<Self> {
        Escape::new(raw)
    }
}

/// Iterator over the tokens of an [`Escape`]
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    kind: char,
    params: std::str::Split<'a, char>,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.params
            .next()
            .map(|param| Token::from_param(self.kind, param))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Iterator over the instructions decoded from an [`Escape`].
///
/// Walks a cursor over the buffered tokens so that extended colors can read
/// ahead. A failed read-ahead queues one `Unsupported` per consumed token in
/// `backlog`, which drains before the next token is decoded.
#[derive(Debug, Clone)]
pub struct Instructions {
    tokens: Vec<Token>,
    pos: usize,
    backlog: VecDeque<Instruction>,
    options: DecoderOptions,
}

impl Instructions {
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    fn decode(&mut self, token: Token) -> Instruction {
        if token.is_sgr() {
            if let Ok(attribute) = Attribute::try_from(token.data) {
                return Instruction::SetAttribute(attribute);
            }
            if let Some(role) = ColorRole::from_code(token.data) {
                return self.decode_color(token, role);
            }
            return self.unsupported(token);
        }

        let steps = token.data.max(1);
        match token.kind {
            'A' => CursorMove::up(steps).into(),
            'B' => CursorMove::down(steps).into(),
            'C' => CursorMove::right(steps).into(),
            'D' => CursorMove::left(steps).into(),
            'H' | 'f' => {
                let row = self.advance().map_or(0, |t| t.data).max(1);
                // Sequence coordinates are 1-based.
                CursorMove::to(steps - 1, row - 1).into()
            }
            'J' => match Clear::screen(token.data) {
                Some(region) => region.into(),
                None => self.unsupported(token),
            },
            'K' => match Clear::line(token.data) {
                Some(region) => region.into(),
                None => self.unsupported(token),
            },
            _ => self.unsupported(token),
        }
    }

    fn decode_color(&mut self, token: Token, role: ColorRole) -> Instruction {
        let code = token.data;
        let color = if code == role.extended_code() {
            let start = self.pos - 1;
            match self.extended_color() {
                Some(color) => Some(color),
                None => return self.reject(start),
            }
        } else if code == role.default_code() {
            None
        } else {
            // The role's base code is also the palette origin; bright codes
            // sit 60 above the base and map to palette entries 8-15.
            let mut index = code - role.base();
            if code >= 90 {
                index -= 52;
            }
            u8::try_from(index).ok().map(Color::Ansi256)
        };

        Instruction::SetColor { role, color }
    }

    /// Read a `5;index` or `2;r;g;b` color spec following a 38/48 code
    fn extended_color(&mut self) -> Option<Color> {
        let selector = self.advance()?;
        match selector.data {
            5 => {
                let index = self.advance()?;
                u8::try_from(index.data).ok().map(Color::Ansi256)
            }
            2 => {
                let red = self.advance()?;
                let green = self.advance()?;
                let blue = self.advance()?;
                Some(Color::Rgb(Rgb::from_bytes(
                    u8::try_from(red.data).ok()?,
                    u8::try_from(green.data).ok()?,
                    u8::try_from(blue.data).ok()?,
                )))
            }
            _ => None,
        }
    }

    /// Mark every token consumed since `start` as unsupported
    fn reject(&mut self, start: usize) -> Instruction {
        let consumed = self.tokens[start..self.pos].to_vec();
        for token in &consumed[1..] {
            let marker = self.unsupported(*token);
            self.backlog.push_back(marker);
        }
        self.unsupported(consumed[0])
    }

    fn unsupported(&self, token: Token) -> Instruction {
        if self.options.log_unsupported {
            debug!(kind = %token.kind, data = token.data, "Unsupported control sequence token");
        }
        Instruction::Unsupported(token)
    }
}

impl Iterator for Instructions {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        if let Some(instruction) = self.backlog.pop_front() {
            return Some(instruction);
        }
        let token = self.advance()?;
        Some(self.decode(token))
    }
}

impl FusedIterator for Instructions {}
