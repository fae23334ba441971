//! The two-line display surface.
//!
//! A calculator display has two text areas: the previous operand with
//! its pending operator above, the operand being typed below. A
//! [`DisplaySink`] stands in for one such text area, and a [`Readout`]
//! carries both rendered strings.

use serde::Serialize;

use crate::calculator::{Calculator, format_for_display, format_history};

/// A surface that can render one line of display text.
pub trait DisplaySink {
    fn show(&mut self, text: &str);
}

/// Both display lines, rendered.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Readout {
    /// The previous operand followed by the pending operator, or empty.
    pub previous: String,
    /// The operand being typed, or the most recent result.
    pub current: String,
}

impl Readout {
    /// Render the calculator's state into the two display strings.
    pub fn from_calculator(calc: &Calculator) -> Self {
        Self {
            previous: format_history(calc.previous(), calc.operator()),
            current: format_for_display(calc.current()),
        }
    }
}

/// Push the rendered state into the two display sinks. Called after every
/// batch of gestures so the display always reflects the latest state.
pub fn present(
    calc: &Calculator,
    previous_sink: &mut dyn DisplaySink,
    current_sink: &mut dyn DisplaySink,
) {
    let readout = Readout::from_calculator(calc);
    previous_sink.show(&readout.previous);
    current_sink.show(&readout.current);
}
