//! Operand storage for the calculator.
//!
//! An operand is either text the user is still typing or the numeric
//! result of a computation. Keeping the two apart avoids the formatting
//! drift that comes from round-tripping every result through a string.

/// A single operand slot.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// Raw keyed-in text, exactly as typed (leading zeros and all).
    /// The empty string means nothing has been entered.
    Typing(String),
    /// The numeric result of a completed computation.
    Computed(f64),
}

impl Default for Operand {
    fn default() -> Self {
        Self::Typing(String::new())
    }
}

impl Operand {
    /// True when nothing has been entered. A computed result is never
    /// empty, even when it prints as a single digit.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Typing(text) => text.is_empty(),
            Self::Computed(_) => false,
        }
    }

    /// True when the operand's text form already contains a decimal point.
    pub fn has_decimal_point(&self) -> bool {
        match self {
            Self::Typing(text) => text.contains('.'),
            Self::Computed(value) => value.to_string().contains('.'),
        }
    }

    /// Parse the operand as a number.
    ///
    /// Returns `None` for the empty string and for text that is not a
    /// complete number; the state machine treats that as "not ready to
    /// evaluate" rather than an error.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Typing(text) => text.parse().ok(),
            Self::Computed(value) => Some(*value),
        }
    }

    /// The operand's undecorated text, without grouping separators.
    /// This is what goes to the clipboard.
    pub fn raw_text(&self) -> String {
        match self {
            Self::Typing(text) => text.clone(),
            Self::Computed(value) => value.to_string(),
        }
    }

    /// Append one character, collapsing a computed result into its text
    /// form first so further digits extend the printed number.
    pub fn push_char(&mut self, c: char) {
        self.make_text().push(c);
    }

    /// Drop the last character; no-op when already empty. A computed
    /// result is collapsed to text first, so deleting trims its digits.
    pub fn pop_char(&mut self) {
        self.make_text().pop();
    }

    fn make_text(&mut self) -> &mut String {
        if let Self::Computed(value) = *self {
            *self = Self::Typing(value.to_string());
        }
        match self {
            Self::Typing(text) => text,
            Self::Computed(_) => unreachable!("collapsed above"),
        }
    }
}
