//! The interactive terminal adapter.
//!
//! Stands in for a button panel: each stdin line is a batch of
//! key presses, and the two display lines are re-rendered after every
//! batch. Besides keypad input, the loop understands the word commands
//! `copy` (current operand to the clipboard) and `quit`.

use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::calculator::{Calculator, Operand, copy_to_clipboard};
use crate::config::Config;

use super::display::{DisplaySink, present};
use super::keypad::{Key, parse_line};
use super::session::handle_keys;

/// A display sink that prints one prefixed line to stdout.
struct ConsoleLine {
    prefix: String,
}

impl DisplaySink for ConsoleLine {
    fn show(&mut self, text: &str) {
        println!("{}{}", self.prefix, text);
    }
}

/// Run the interactive loop until EOF or `quit`.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut calc = Calculator::new();
    let mut previous_sink = ConsoleLine {
        prefix: "  ".to_string(),
    };
    let mut current_sink = ConsoleLine {
        prefix: config.prompt.clone(),
    };

    present(&calc, &mut previous_sink, &mut current_sink);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "copy" => {
                copy_current(&calc);
                continue;
            }
            text => match parse_line(text) {
                Some(keys) => {
                    handle_keys(&mut calc, &keys);
                    if config.auto_copy && keys.contains(&Key::Equals) {
                        if let Operand::Computed(_) = calc.current() {
                            copy_current(&calc);
                        }
                    }
                }
                None => {
                    debug!(input = text, "line rejected by keypad");
                    println!("unrecognized input (keys: 0-9 . + - * / ÷ = c d)");
                    continue;
                }
            },
        }
        present(&calc, &mut previous_sink, &mut current_sink);
    }

    Ok(())
}

fn copy_current(calc: &Calculator) {
    let text = calc.current().raw_text();
    match copy_to_clipboard(&text) {
        Ok(()) => println!("copied: {text}"),
        Err(err) => warn!(%err, "failed to copy to clipboard"),
    }
}
