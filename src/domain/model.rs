use std::fmt;
use thiserror::Error;

/// Arithmetic operation requested for one round.
///
/// Unrecognised symbols are kept as `Invalid` so the round can still read its
/// operands and report the problem afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Invalid(char),
}

impl Operation {
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '+' => Operation::Add,
            '-' => Operation::Subtract,
            '*' => Operation::Multiply,
            '/' => Operation::Divide,
            other => Operation::Invalid(other),
        }
    }

    /// Reads the operation from the first character of `token`.
    ///
    /// Returns the unread remainder, so `+5` yields `Add` and `"5"`.
    pub fn split_token(token: &str) -> Option<(Self, &str)> {
        let mut chars = token.chars();
        let symbol = chars.next()?;
        Some((Self::from_symbol(symbol), chars.as_str()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Sum",
            Operation::Subtract => "Difference",
            Operation::Multiply => "Product",
            Operation::Divide => "Quotient",
            Operation::Invalid(_) => "Invalid",
        }
    }

    pub fn evaluate(&self, first: f64, second: f64) -> Result<Calculation, EvalError> {
        let value = match self {
            Operation::Add => first + second,
            Operation::Subtract => first - second,
            Operation::Multiply => first * second,
            // exact comparison: any nonzero divisor is divided by, -0.0 is rejected
            Operation::Divide if second == 0.0 => return Err(EvalError::DivisionByZero),
            Operation::Divide => first / second,
            Operation::Invalid(symbol) => return Err(EvalError::InvalidOperation(*symbol)),
        };

        Ok(Calculation {
            operation: self.clone(),
            value,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub operation: Operation,
    pub value: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation.label(), format_fixed(self.value))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Division by zero is not allowed!")]
    DivisionByZero,

    #[error("Invalid operation '{0}'! Please use +, -, *, or /.")]
    InvalidOperation(char),
}

/// Parses an operand; only finite decimal values count as numbers.
pub fn parse_operand(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Fixed-point rendering with exactly two decimals.
pub fn format_fixed(value: f64) -> String {
    format!("{:.2}", value)
}
