//! Display formatting for operands.
//!
//! The display convention is fixed: comma-grouped integer part, fractional
//! digits reattached exactly as entered. Grouping never rounds and never
//! invents decimals of its own.

use super::operand::Operand;
use super::operator::Operator;

/// Format an operand for the display surface.
///
/// The text form is split on the first decimal point. An integer part
/// that does not parse (the empty operand, or a bare `.`) renders as the
/// empty string; otherwise it gets thousand separators. Any fractional
/// part is appended verbatim after a literal `.`. Non-finite results
/// render as `∞`, `-∞` or `NaN`.
pub fn format_for_display(operand: &Operand) -> String {
    if let Operand::Computed(value) = operand {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value.is_sign_positive() { "∞" } else { "-∞" }.to_string();
        }
    }
    format_number_text(&operand.raw_text())
}

/// Format the previous-operand line: the operand followed by the pending
/// operator symbol, or the empty string when no operator is set.
pub fn format_history(previous: &Operand, operator: Option<Operator>) -> String {
    match operator {
        Some(op) => format!("{} {}", format_for_display(previous), op.symbol()),
        None => String::new(),
    }
}

fn format_number_text(text: &str) -> String {
    let (integer_part, fraction) = match text.split_once('.') {
        Some((integer_part, fraction)) => (integer_part, Some(fraction)),
        None => (text, None),
    };

    // An unparseable integer part (empty operand, lone ".") displays as
    // nothing; the fraction still shows so typing ".5" reads as ".5".
    let integer_display = match integer_part.parse::<f64>() {
        Ok(value) => format_with_separators(value),
        Err(_) => String::new(),
    };

    match fraction {
        Some(fraction) => format!("{integer_display}.{fraction}"),
        None => integer_display,
    }
}

/// Render an integral value with a comma every three digits.
fn format_with_separators(value: f64) -> String {
    let digits = format!("{value:.0}");
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let grouped: String = grouped.chars().rev().collect();
    format!("{sign}{grouped}")
}
