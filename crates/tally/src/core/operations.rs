//! Arithmetic operations behind the engine's operator and function tokens.

use crate::core::{CalcError, CalcResult};

/// Binary operators resolved between a pending operand and the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl BinaryOp {
    /// Returns the operator symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operator to two operands.
    pub fn apply(&self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };
        check_finite(result)
    }
}

/// Unary functions applied immediately to the displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Percentage: x / 100
    Percent,
    /// Reciprocal: 1 / x
    Reciprocal,
    /// Square: x * x
    Square,
    /// Square root
    Sqrt,
    /// The constant pi, substituted as a literal
    Pi,
}

impl UnaryOp {
    /// Returns the keypad label for this function.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Reciprocal => "1/x",
            Self::Square => "x²",
            Self::Sqrt => "√",
            Self::Pi => "π",
        }
    }

    /// Applies the function to the operand. `Pi` ignores its operand.
    pub fn apply(&self, x: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Percent => x / 100.0,
            Self::Reciprocal => {
                if x == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                1.0 / x
            }
            Self::Square => x * x,
            Self::Sqrt => {
                if x < 0.0 {
                    return Err(CalcError::NegativeSqrt);
                }
                x.sqrt()
            }
            Self::Pi => std::f64::consts::PI,
        };
        check_finite(result)
    }
}

/// Rejects results that left the finite f64 range.
fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}
