//! Regex-driven text splitting
//!
//! [`split`] walks a text and yields the runs between pattern matches,
//! optionally interleaved with the matches themselves. Empty pieces are
//! never yielded, so back-to-back matches or a match at either end of the
//! text do not produce blank runs.

use regex::{Matches, Regex};

/// One piece of a split text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'t> {
    /// Text between matches
    Text(&'t str),
    /// Text matched by the pattern
    Separator(&'t str),
}

impl<'t> Piece<'t> {
    /// The underlying slice of the original text
    pub fn as_str(&self) -> &'t str {
        match self {
            Piece::Text(s) | Piece::Separator(s) => s,
        }
    }
}

/// Lazy iterator returned by [`split`]
#[derive(Debug)]
pub struct Split<'r, 't> {
    text: &'t str,
    matches: Matches<'r, 't>,
    include_separators: bool,
    prev_end: usize,
    pending: Option<&'t str>,
    done: bool,
}

/// Split `text` on every match of `pattern`.
///
/// With `include_separators` the matches are yielded between the text runs
/// they separate; otherwise only the text runs are yielded.
pub fn split<'r, 't>(text: &'t str, pattern: &'r Regex, include_separators: bool) -> Split<'r, 't> {
    Split {
        text,
        matches: pattern.find_iter(text),
        include_separators,
        prev_end: 0,
        pending: None,
        done: false,
    }
}

impl<'r, 't> Iterator for Split<'r, 't> {
    type Item = Piece<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(sep) = self.pending.take() {
                return Some(Piece::Separator(sep));
            }
            if self.done {
                return None;
            }

            match self.matches.next() {
                Some(m) => {
                    let before = &self.text[self.prev_end..m.start()];
                    self.prev_end = m.end();
                    if self.include_separators && !m.as_str().is_empty() {
                        self.pending = Some(m.as_str());
                    }
                    if !before.is_empty() {
                        return Some(Piece::Text(before));
                    }
                }
                None => {
                    self.done = true;
                    let rest = &self.text[self.prev_end..];
                    if !rest.is_empty() {
                        return Some(Piece::Text(rest));
                    }
                }
            }
        }
    }
}
