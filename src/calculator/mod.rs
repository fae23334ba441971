//! The calculator core.
//!
//! This module provides:
//! - The operand/operator state machine driven by keypad gestures
//! - Display formatting with thousand separators
//! - Copying results to the clipboard

mod clipboard;
mod format;
mod operand;
mod operator;
mod state;

pub use clipboard::copy_to_clipboard;
pub use format::{format_for_display, format_history};
pub use operand::Operand;
pub use operator::Operator;
pub use state::Calculator;
