//! Gesture dispatch.
//!
//! Maps keypad gestures onto the calculator's operations. The calculator
//! is passed in by the caller rather than held in module state, so the
//! handlers can be exercised directly in tests.

use crate::calculator::Calculator;

use super::keypad::Key;

/// Apply one gesture to the calculator.
pub fn handle_key(calc: &mut Calculator, key: Key) {
    match key {
        Key::Digit(c) => calc.append_digit(c),
        Key::Decimal => calc.append_digit('.'),
        Key::Operator(op) => calc.choose_operator(op),
        Key::Equals => calc.compute(),
        Key::Clear => calc.clear(),
        Key::Delete => calc.delete_last_char(),
    }
}

/// Apply a whole sequence of gestures in order.
pub fn handle_keys(calc: &mut Calculator, keys: &[Key]) {
    for &key in keys {
        handle_key(calc, key);
    }
}
