//! Binary arithmetic for the four watch operators

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// The four operators on the watch keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operators in keypad order, top to bottom
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the glyph printed on the watch button
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns the ASCII keyboard equivalent
    #[must_use]
    pub const fn ascii(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

/// What division by zero produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroDivision {
    /// Quotient is 0 (the shipped watch behaviour)
    #[default]
    Zero,
    /// Reject with [`CalcError::UndefinedResult`]
    Reject,
}

/// Evaluates pending binary operations
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    policy: ZeroDivision,
}

impl Calculator {
    /// Creates a calculator with the default zero-division policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with an explicit zero-division policy
    #[must_use]
    pub const fn with_policy(policy: ZeroDivision) -> Self {
        Self { policy }
    }

    /// Returns the zero-division policy
    #[must_use]
    pub const fn policy(&self) -> ZeroDivision {
        self.policy
    }

    /// Performs an operation on two operands
    pub fn calculate(&self, a: f64, b: f64, op: Operation) -> CalcResult<f64> {
        match op {
            Operation::Add => Ok(Self::add(a, b)),
            Operation::Subtract => Ok(Self::subtract(a, b)),
            Operation::Multiply => Ok(Self::multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }

    /// Addition: a + b
    #[must_use]
    pub fn add(a: f64, b: f64) -> f64 {
        a + b
    }

    /// Subtraction: a - b
    #[must_use]
    pub fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    /// Multiplication: a * b
    #[must_use]
    pub fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    /// Division: a / b, with b == 0 handled by the policy
    pub fn divide(&self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return match self.policy {
                ZeroDivision::Zero => Ok(0.0),
                ZeroDivision::Reject => Err(CalcError::UndefinedResult),
            };
        }
        Ok(a / b)
    }
}
