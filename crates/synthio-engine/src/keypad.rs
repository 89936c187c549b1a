//! Watch keypad layout and key lookup
//!
//! A presentation layer maps whatever the user touched or typed to an
//! [`InputSymbol`] through here. The layout matches the watch face:
//!
//! ```text
//! [ C ] [ ± ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ]
//! ```

use crate::core::{Digit, InputSymbol, Operation};

/// Button families, for styling by a front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// `0`-`9` and `.`
    Digit,
    /// `+ − × ÷`
    Operator,
    /// `C ± %`
    Function,
    /// `=`
    Equals,
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The symbol this button sends to the engine
    pub symbol: InputSymbol,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button at a grid position
    #[must_use]
    pub const fn new(symbol: InputSymbol, row: usize, col: usize) -> Self {
        Self { symbol, row, col }
    }

    /// Returns the glyph printed on the button
    #[must_use]
    pub fn glyph(&self) -> String {
        self.symbol.label()
    }

    /// Returns the button family
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        match self.symbol {
            InputSymbol::Digit(_) | InputSymbol::DecimalPoint => ButtonKind::Digit,
            InputSymbol::Operator(_) => ButtonKind::Operator,
            InputSymbol::Equals => ButtonKind::Equals,
            InputSymbol::Clear | InputSymbol::SignToggle | InputSymbol::Percent => {
                ButtonKind::Function
            }
        }
    }
}

/// The watch keypad, row by row
#[derive(Debug, Clone)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::watch()
    }
}

impl Keypad {
    /// Creates the watch layout
    #[must_use]
    pub fn watch() -> Self {
        let [zero, one, two, three, four, five, six, seven, eight, nine] =
            Digit::ALL.map(InputSymbol::Digit);
        let layout = [
            vec![
                InputSymbol::Clear,
                InputSymbol::SignToggle,
                InputSymbol::Percent,
                InputSymbol::Operator(Operation::Divide),
            ],
            vec![seven, eight, nine, InputSymbol::Operator(Operation::Multiply)],
            vec![four, five, six, InputSymbol::Operator(Operation::Subtract)],
            vec![one, two, three, InputSymbol::Operator(Operation::Add)],
            vec![zero, InputSymbol::DecimalPoint, InputSymbol::Equals],
        ];

        let rows = layout
            .into_iter()
            .enumerate()
            .map(|(row, symbols)| {
                symbols
                    .into_iter()
                    .enumerate()
                    .map(|(col, symbol)| KeypadButton::new(symbol, row, col))
                    .collect()
            })
            .collect();

        Self { rows }
    }

    /// Returns the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the buttons of one row
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[KeypadButton]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Returns all buttons in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flatten()
    }

    /// Finds the button that sends a symbol
    #[must_use]
    pub fn find_by_symbol(&self, symbol: InputSymbol) -> Option<&KeypadButton> {
        self.buttons().find(|b| b.symbol == symbol)
    }

    /// Finds a button by glyph or keyboard alias
    #[must_use]
    pub fn find_by_glyph(&self, glyph: &str) -> Option<&KeypadButton> {
        Self::key_to_symbol(glyph).and_then(|symbol| self.find_by_symbol(symbol))
    }

    /// Maps a glyph or keyboard key to its symbol
    #[must_use]
    pub fn key_to_symbol(key: &str) -> Option<InputSymbol> {
        key.parse().ok()
    }

    /// Splits typed input into keys.
    ///
    /// Whitespace separates words. A word that is itself a key (`AC`,
    /// `Enter`, `+/-`) stays whole; any other word is split into
    /// characters, so `12+3=` yields `1 2 + 3 =`.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<&str> {
        let mut keys = Vec::new();
        for word in input.split_whitespace() {
            if Self::key_to_symbol(word).is_some() {
                keys.push(word);
            } else {
                keys.extend(
                    word.char_indices()
                        .map(|(i, ch)| &word[i..i + ch.len_utf8()]),
                );
            }
        }
        keys
    }

    /// Renders the layout as text, one row per line
    #[must_use]
    pub fn render_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|b| format!("[ {} ]", b.glyph()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
