//! Application state: the engine, the session tape, the keypad
//! highlight, and the quit flag. The presentation layer holds no
//! calculation state of its own.

use tracing::debug;

use crate::core::{format_value, Engine, Tape, Token};
use crate::tui::input::KeyAction;
use crate::tui::keypad::Keypad;

/// Calculator application state.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    tape: Tape,
    keypad: Keypad,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates the application in its idle state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            tape: Tape::new(),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// The engine, for display and state queries.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The session tape.
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// The keypad, for rendering and hit testing.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Whether the event loop should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a key action.
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(token) => self.press(token),
            KeyAction::ClearTape => self.tape.clear(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Feeds one token to the engine, highlighting the matching keypad
    /// button and recording resolved computations on the tape.
    pub fn press(&mut self, token: Token) {
        let snapshot = if token == Token::Equals {
            self.pending_expression()
        } else {
            None
        };

        self.keypad.highlight(token);
        self.engine.apply(token);
        debug!(display = %self.engine.display(), "display updated");

        if let Some(expression) = snapshot {
            if let Ok(result) = self.engine.display().parse::<f64>() {
                self.tape.record(&expression, result);
            }
        }
    }

    /// The pending computation as entered, e.g. `"5 + 3"`.
    fn pending_expression(&self) -> Option<String> {
        let lhs = self.engine.pending_operand()?;
        let op = self.engine.pending_op()?;
        Some(format!(
            "{} {} {}",
            format_value(lhs),
            op.symbol(),
            self.engine.display()
        ))
    }

    /// The pending readout shown above the display, e.g. `"5 +"`.
    #[must_use]
    pub fn pending_readout(&self) -> String {
        match (self.engine.pending_operand(), self.engine.pending_op()) {
            (Some(lhs), Some(op)) => format!("{} {}", format_value(lhs), op.symbol()),
            _ => String::new(),
        }
    }
}
