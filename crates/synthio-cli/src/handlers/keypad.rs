//! Keypad command handler

use std::io::Write;

use console::Style;
use synthio_engine::keypad::{ButtonKind, Keypad, KeypadButton};

use crate::error::CliResult;

/// Renders the keypad, styling buttons by family when colors are on
#[must_use]
pub fn render_keypad(keypad: &Keypad, use_color: bool) -> String {
    if !use_color {
        return keypad.render_text();
    }
    (0..keypad.row_count())
        .filter_map(|r| keypad.row(r))
        .map(|row| row.iter().map(styled).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

fn styled(button: &KeypadButton) -> String {
    let style = match button.kind() {
        ButtonKind::Digit => Style::new(),
        ButtonKind::Operator => Style::new().cyan(),
        ButtonKind::Function => Style::new().yellow(),
        ButtonKind::Equals => Style::new().green().bold(),
    };
    format!("[ {} ]", style.force_styling(true).apply_to(button.glyph()))
}

/// Execute the keypad command
pub fn execute_keypad<W: Write>(out: &mut W, use_color: bool) -> CliResult<()> {
    writeln!(out, "{}", render_keypad(&Keypad::watch(), use_color))?;
    Ok(())
}
