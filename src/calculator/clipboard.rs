//! Clipboard functionality for copying calculator results.

use arboard::Clipboard;

/// Copy the current operand's raw (ungrouped) text to the system
/// clipboard.
pub fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
