//! The operand/operator state machine.
//!
//! Holds the operand being typed, the operand captured before an operator
//! was chosen, and the pending operator. Five operations mutate the state;
//! everything else in the crate only reads it. Invalid or incomplete input
//! never fails loudly: every such case is a silent no-op, which is what
//! lets the user press an operator before finishing a number without
//! wedging the machine.

use tracing::debug;

use super::operand::Operand;
use super::operator::Operator;

/// The calculator state. One instance lives for the whole session and is
/// reset in place by [`Calculator::clear`].
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    current: Operand,
    previous: Operand,
    operator: Option<Operator>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The operand being typed, or the most recent result.
    pub fn current(&self) -> &Operand {
        &self.current
    }

    /// The operand captured when the pending operator was chosen.
    pub fn previous(&self) -> &Operand {
        &self.previous
    }

    /// The operator awaiting a second operand, if any.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Append a digit or decimal point to the current operand.
    ///
    /// Only `0`-`9` and `.` are accepted; anything else is ignored. A
    /// second decimal point is dropped while the rest of the input keeps
    /// flowing. Digits accumulate as typed, so leading zeros survive.
    pub fn append_digit(&mut self, token: char) {
        if token != '.' && !token.is_ascii_digit() {
            debug!(%token, "ignoring non-digit token");
            return;
        }
        if token == '.' && self.current.has_decimal_point() {
            return;
        }
        self.current.push_char(token);
    }

    /// Select the operator to apply once the next operand is entered.
    ///
    /// Does nothing while the current operand is empty. If an operation is
    /// already pending with both operands present, it is collapsed first,
    /// which gives left-to-right chaining without precedence: keying
    /// `4 + 3 * 2 =` evaluates `(4 + 3) * 2`.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.current.is_empty() {
            return;
        }
        if !self.previous.is_empty() {
            self.compute();
        }
        self.operator = Some(op);
        self.previous = std::mem::take(&mut self.current);
    }

    /// Apply the pending operator to the two operands.
    ///
    /// No-op unless an operator is set and both operands parse as numbers,
    /// so an unfinished expression simply stays put. On success the result
    /// becomes the current operand, and the pending operator and previous
    /// operand are cleared; a second press is then a no-op.
    pub fn compute(&mut self) {
        let Some(op) = self.operator else {
            return;
        };
        let (Some(lhs), Some(rhs)) = (self.previous.value(), self.current.value()) else {
            debug!("compute skipped, operands incomplete");
            return;
        };
        self.current = Operand::Computed(op.apply(lhs, rhs));
        self.operator = None;
        self.previous = Operand::default();
    }

    /// Reset everything to the initial empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Remove the last character of the current operand.
    ///
    /// Never touches the previous operand or the pending operator, so a
    /// chosen operator cannot be undone by backspacing.
    pub fn delete_last_char(&mut self) {
        self.current.pop_char();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_in(calc: &mut Calculator, digits: &str) {
        for c in digits.chars() {
            calc.append_digit(c);
        }
    }

    #[test]
    fn test_digits_accumulate_as_typed() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "007");
        assert_eq!(calc.current(), &Operand::Typing("007".into()));
    }

    #[test]
    fn test_second_decimal_point_dropped() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "1.5.2");
        assert_eq!(calc.current(), &Operand::Typing("1.52".into()));
    }

    #[test]
    fn test_non_digit_tokens_ignored() {
        let mut calc = Calculator::new();
        calc.append_digit('a');
        calc.append_digit('%');
        calc.append_digit('3');
        assert_eq!(calc.current(), &Operand::Typing("3".into()));
    }

    #[test]
    fn test_simple_addition() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "4");
        calc.choose_operator(Operator::Add);
        key_in(&mut calc, "3");
        calc.compute();
        assert_eq!(calc.current(), &Operand::Computed(7.0));
        assert!(calc.previous().is_empty());
        assert_eq!(calc.operator(), None);
    }

    #[test]
    fn test_chaining_has_no_precedence() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "4");
        calc.choose_operator(Operator::Add);
        key_in(&mut calc, "3");
        calc.choose_operator(Operator::Multiply);
        key_in(&mut calc, "2");
        calc.compute();
        // (4 + 3) * 2, not 4 + (3 * 2)
        assert_eq!(calc.current(), &Operand::Computed(14.0));
    }

    #[test]
    fn test_operator_with_empty_current_is_noop() {
        let mut calc = Calculator::new();
        calc.choose_operator(Operator::Add);
        assert_eq!(calc.operator(), None);
        assert!(calc.previous().is_empty());
    }

    #[test]
    fn test_compute_without_operator_is_noop() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "42");
        calc.compute();
        assert_eq!(calc.current(), &Operand::Typing("42".into()));
        assert!(calc.previous().is_empty());
    }

    #[test]
    fn test_compute_with_missing_second_operand_is_noop() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "4");
        calc.choose_operator(Operator::Add);
        calc.compute();
        // Expression left pending, untouched.
        assert_eq!(calc.operator(), Some(Operator::Add));
        assert_eq!(calc.previous(), &Operand::Typing("4".into()));
        assert!(calc.current().is_empty());
    }

    #[test]
    fn test_compute_is_idempotent_after_success() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "4");
        calc.choose_operator(Operator::Add);
        key_in(&mut calc, "3");
        calc.compute();
        let snapshot = calc.clone();
        calc.compute();
        assert_eq!(calc.current(), snapshot.current());
        assert_eq!(calc.operator(), None);
    }

    #[test]
    fn test_division_by_zero_yields_infinity() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "5");
        calc.choose_operator(Operator::Divide);
        key_in(&mut calc, "0");
        calc.compute();
        match calc.current() {
            Operand::Computed(value) => assert!(value.is_infinite()),
            other => panic!("expected computed result, got {other:?}"),
        }
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "12");
        calc.choose_operator(Operator::Multiply);
        key_in(&mut calc, "3");
        calc.clear();
        assert!(calc.current().is_empty());
        assert!(calc.previous().is_empty());
        assert_eq!(calc.operator(), None);
    }

    #[test]
    fn test_delete_shrinks_to_empty_then_noops() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "123");
        for _ in 0..3 {
            calc.delete_last_char();
        }
        assert!(calc.current().is_empty());
        calc.delete_last_char();
        assert!(calc.current().is_empty());
    }

    #[test]
    fn test_delete_never_touches_pending_operation() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "8");
        calc.choose_operator(Operator::Subtract);
        calc.delete_last_char();
        assert_eq!(calc.operator(), Some(Operator::Subtract));
        assert_eq!(calc.previous(), &Operand::Typing("8".into()));
    }

    #[test]
    fn test_digits_extend_a_computed_result() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "4");
        calc.choose_operator(Operator::Add);
        key_in(&mut calc, "3");
        calc.compute();
        key_in(&mut calc, "5");
        assert_eq!(calc.current(), &Operand::Typing("75".into()));
    }

    #[test]
    fn test_chaining_onto_a_result() {
        let mut calc = Calculator::new();
        key_in(&mut calc, "4");
        calc.choose_operator(Operator::Add);
        key_in(&mut calc, "3");
        calc.compute();
        calc.choose_operator(Operator::Multiply);
        key_in(&mut calc, "2");
        calc.compute();
        assert_eq!(calc.current(), &Operand::Computed(14.0));
    }
}
