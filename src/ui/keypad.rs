//! Keypad gestures and their text encoding.
//!
//! The terminal stands in for a button panel: every calculator button has
//! a single-character encoding, and an input line is a sequence of button
//! presses. A line is validated against the key-safe character class
//! before any of it is interpreted.

use lazy_static::lazy_static;
use regex::Regex;

use crate::calculator::Operator;

lazy_static! {
    /// Matches lines containing only key characters and whitespace:
    /// digits, the decimal point, the operator symbols and their aliases,
    /// equals, clear and delete.
    static ref KEY_SAFE_CHARS: Regex = Regex::new(
        r"^[\d\s.+\-*x×/÷=cdCD]+$"
    ).unwrap();
}

/// One keypad gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Key {
    /// A digit button, `0`-`9`.
    Digit(char),
    /// The decimal point button.
    Decimal,
    /// One of the four operator buttons.
    Operator(Operator),
    /// The equals button.
    Equals,
    /// The all-clear button (`c`).
    Clear,
    /// The backspace button (`d`).
    Delete,
}

impl Key {
    /// Decode a single key character. Returns `None` for anything that is
    /// not a keypad button.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c)),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            'd' | 'D' => Some(Self::Delete),
            _ => Operator::from_symbol(c).map(Self::Operator),
        }
    }
}

/// Parse an input line into a sequence of key presses.
///
/// Whitespace between keys is skipped. Returns `None` when the line
/// contains any character outside the key-safe class, in which case none
/// of it is applied.
pub fn parse_line(line: &str) -> Option<Vec<Key>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !KEY_SAFE_CHARS.is_match(trimmed) {
        return None;
    }

    trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Key::from_char)
        .collect()
}
