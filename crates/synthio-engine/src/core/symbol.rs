//! Input symbols accepted by the engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Operation};

/// A decimal digit, guaranteed to be in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Every digit, indexed by its value
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, failing fast outside `0..=9`
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::invalid_input(format!(
                "digit {value} out of range 0-9"
            )))
        }
    }

    /// Parses an ASCII digit character
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One discrete key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSymbol {
    /// `0`-`9`
    Digit(Digit),
    /// `.`
    DecimalPoint,
    /// `±`
    SignToggle,
    /// `%`
    Percent,
    /// `+ − × ÷`
    Operator(Operation),
    /// `=`
    Equals,
    /// `C`
    Clear,
}

impl InputSymbol {
    /// Creates a digit symbol, failing fast outside `0..=9`
    pub fn digit(value: u8) -> CalcResult<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// Returns the glyph printed on the watch button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::SignToggle => "±".to_string(),
            Self::Percent => "%".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
        }
    }
}

impl fmt::Display for InputSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for InputSymbol {
    type Err = CalcError;

    /// Accepts the watch glyphs and their keyboard spellings
    fn from_str(key: &str) -> CalcResult<Self> {
        let symbol = match key {
            "." | "," => Self::DecimalPoint,
            "±" | "+/-" | "n" | "neg" => Self::SignToggle,
            "%" => Self::Percent,
            "+" => Self::Operator(Operation::Add),
            "−" | "-" => Self::Operator(Operation::Subtract),
            "×" | "*" | "x" | "X" => Self::Operator(Operation::Multiply),
            "÷" | "/" => Self::Operator(Operation::Divide),
            "=" | "Enter" => Self::Equals,
            "C" | "c" | "AC" | "Escape" => Self::Clear,
            _ => {
                let mut chars = key.chars();
                match (chars.next().and_then(Digit::from_char), chars.next()) {
                    (Some(digit), None) => Self::Digit(digit),
                    _ => return Err(CalcError::invalid_input(format!("unknown key '{key}'"))),
                }
            }
        };
        Ok(symbol)
    }
}
