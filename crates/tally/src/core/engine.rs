//! The immediate-execution engine: a small state machine that consumes
//! input tokens one at a time and derives the display string.
//!
//! Chained binary operators resolve strictly left to right with no
//! precedence (`2 + 3 * 4 =` is `20`, not `14`). That matches how simple
//! hardware calculators behave and is deliberate.

use tracing::{debug, warn};

use crate::core::{format_value, BinaryOp, CalcError, CalcResult, UnaryOp};

/// The fixed string shown while the engine is in the error state.
pub const ERROR_DISPLAY: &str = "Error";

/// One discrete user input, normalised from a button press or key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A digit 0-9.
    Digit(u8),
    /// The decimal point.
    Decimal,
    /// A binary operator.
    Op(BinaryOp),
    /// A unary function applied immediately to the display.
    Unary(UnaryOp),
    /// Resolve the pending computation.
    Equals,
    /// Toggle the sign of the displayed number.
    Negate,
    /// Remove the last character of the display.
    Backspace,
    /// Reset all state.
    Clear,
}

/// Token-driven calculator state machine.
///
/// State is exactly: the display text, an optional pending operand and
/// operator, whether a number entry is in progress, and the error flag.
/// Receiving a new operator before Equals resolves the previous pending
/// computation first.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Text currently shown; always parses as f64 outside the error state.
    display: String,
    /// Captured left-hand side of the pending computation.
    operand: Option<f64>,
    /// Pending binary operator, if any.
    op: Option<BinaryOp>,
    /// True while digits append to the display; false right after an
    /// operator, function, or equals, so the next digit starts fresh.
    entering: bool,
    /// True while the display shows [`ERROR_DISPLAY`].
    error: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in the idle state, displaying `"0"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            operand: None,
            op: None,
            entering: false,
            error: false,
        }
    }

    /// The string to render, verbatim.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The captured left-hand operand, if an operator is pending.
    #[must_use]
    pub fn pending_operand(&self) -> Option<f64> {
        self.operand
    }

    /// The pending binary operator, if any.
    #[must_use]
    pub fn pending_op(&self) -> Option<BinaryOp> {
        self.op
    }

    /// True while a number entry is in progress.
    #[must_use]
    pub fn is_entering(&self) -> bool {
        self.entering
    }

    /// True while the display shows the error string.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Consumes one token, mutating the engine state.
    pub fn apply(&mut self, token: Token) {
        debug!(?token, display = %self.display, "applying token");
        match token {
            Token::Digit(d) => self.digit(d),
            Token::Decimal => self.decimal(),
            Token::Op(op) => self.operator(op),
            Token::Unary(f) => self.unary(f),
            Token::Equals => self.equals(),
            Token::Negate => self.negate(),
            Token::Backspace => self.backspace(),
            Token::Clear => self.clear(),
        }
    }

    fn digit(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };
        if self.error || !self.entering {
            self.error = false;
            self.display = c.to_string();
            self.entering = true;
        } else if self.display == "0" {
            // leading zero collapses: "0" then "5" shows "5"
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
    }

    fn decimal(&mut self) {
        if self.error || !self.entering {
            self.error = false;
            self.display = "0.".to_string();
            self.entering = true;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn operator(&mut self, op: BinaryOp) {
        if self.error {
            return;
        }
        if self.op.is_some() && !self.entering {
            // chained operators without a new number: replace, no computation
            self.op = Some(op);
            return;
        }
        let value = match self.value() {
            Ok(v) => v,
            Err(e) => return self.fail(&e),
        };
        let lhs = match (self.operand, self.op) {
            (Some(lhs), Some(prev)) => match prev.apply(lhs, value) {
                Ok(result) => {
                    self.display = format_value(result);
                    result
                }
                Err(e) => return self.fail(&e),
            },
            _ => value,
        };
        self.operand = Some(lhs);
        self.op = Some(op);
        self.entering = false;
    }

    fn equals(&mut self) {
        if self.error {
            return;
        }
        let value = match self.value() {
            Ok(v) => v,
            Err(e) => return self.fail(&e),
        };
        if let (Some(lhs), Some(op)) = (self.operand, self.op) {
            match op.apply(lhs, value) {
                Ok(result) => {
                    self.display = format_value(result);
                    self.operand = None;
                    self.op = None;
                }
                Err(e) => return self.fail(&e),
            }
        } else {
            // no pending computation: renormalise, e.g. "5." shows "5"
            self.display = format_value(value);
        }
        self.entering = false;
    }

    fn unary(&mut self, f: UnaryOp) {
        // Pi substitutes a literal, so it is the one function that can
        // exit the error state; the others need a parseable display.
        if f == UnaryOp::Pi {
            self.error = false;
            self.display = format_value(std::f64::consts::PI);
            self.entering = false;
            return;
        }
        if self.error {
            return;
        }
        let value = match self.value() {
            Ok(v) => v,
            Err(e) => return self.fail(&e),
        };
        match f.apply(value) {
            Ok(result) => {
                self.display = format_value(result);
                self.entering = false;
            }
            Err(e) => self.fail(&e),
        }
    }

    fn negate(&mut self) {
        if self.error || self.display == "0" {
            return;
        }
        // textual toggle keeps an in-progress entry like "3." intact
        if let Some(stripped) = self.display.strip_prefix('-') {
            self.display = stripped.to_string();
        } else {
            self.display.insert(0, '-');
        }
    }

    fn backspace(&mut self) {
        if self.error {
            return;
        }
        self.display.pop();
        if self.display.is_empty() || self.display == "-" {
            self.display = "0".to_string();
            self.entering = false;
        }
    }

    fn clear(&mut self) {
        self.display = "0".to_string();
        self.operand = None;
        self.op = None;
        self.entering = false;
        self.error = false;
    }

    /// Parses the display as the next operand.
    fn value(&self) -> CalcResult<f64> {
        self.display
            .parse::<f64>()
            .map_err(|_| CalcError::Parse(self.display.clone()))
    }

    /// Enters the error state, dropping any pending computation.
    fn fail(&mut self, err: &CalcError) {
        warn!(%err, "calculation failed");
        self.display = ERROR_DISPLAY.to_string();
        self.operand = None;
        self.op = None;
        self.entering = false;
        self.error = true;
    }
}
