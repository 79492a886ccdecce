//! Tally - an immediate-execution desktop-style calculator.
//!
//! The core is a token-driven state machine: digits, a decimal point,
//! the four arithmetic operators, a set of unary functions, negate,
//! backspace, clear, and equals. Operators resolve left to right with no
//! precedence, exactly as the buttons are pressed. Arithmetic faults put
//! the engine into an error state that entering a new number clears.
//!
//! # Example
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.apply(Token::Digit(5));
//! engine.apply(Token::Op(BinaryOp::Add));
//! engine.apply(Token::Digit(3));
//! engine.apply(Token::Equals);
//! assert_eq!(engine.display(), "8");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::{
        format_value, BinaryOp, CalcError, CalcResult, Engine, Tape, TapeEntry, Token, UnaryOp,
        ERROR_DISPLAY,
    };

    #[cfg(feature = "tui")]
    pub use crate::tui::{App, InputHandler, KeyAction, Keypad};
}
