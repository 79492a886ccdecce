//! Core calculator engine: operations, errors, and the token state machine.
//!
//! Everything in this module is headless. The terminal frontend in
//! [`crate::tui`] drives it exclusively through [`Engine::apply`] and
//! [`Engine::display`].

pub mod engine;
pub mod history;
mod operations;

pub use engine::{Engine, Token, ERROR_DISPLAY};
pub use history::{Tape, TapeEntry};
pub use operations::{BinaryOp, UnaryOp};

use thiserror::Error;

/// Result type for calculator arithmetic.
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error taxonomy.
///
/// Domain errors (`DivisionByZero`, `NegativeSqrt`) are raised by the
/// operations themselves; `Overflow` covers results that leave the finite
/// f64 range; `Parse` covers malformed display text, which cannot occur
/// while the engine is the sole mutator of the display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero, including reciprocal of zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Square root of a negative number.
    #[error("square root of negative number")]
    NegativeSqrt,
    /// Result is infinite or NaN.
    #[error("result out of range")]
    Overflow,
    /// Display text did not parse as a number.
    #[error("malformed number: {0}")]
    Parse(String),
}

/// Formats a value for the display.
///
/// Integral values print without a fraction (`42`, not `42.0`); other
/// values keep at most ten decimal places with trailing zeros trimmed.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
