pub mod display;
pub mod keypad;
pub mod session;
pub mod terminal;

pub use display::{DisplaySink, Readout, present};
pub use keypad::{Key, parse_line};
pub use session::{handle_key, handle_keys};
