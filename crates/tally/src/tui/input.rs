//! Keyboard handling: crossterm key events normalised to engine tokens.
//!
//! The mapping mirrors the on-screen keypad. Enter, Space and `=` all act
//! as Equals; Escape and `c` clear; `q` and Ctrl-C quit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{BinaryOp, Token, UnaryOp};

/// What a key event asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed one token to the engine.
    Input(Token),
    /// Clear the session tape.
    ClearTape,
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Maps key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::ClearTape,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::map_char(c),
            KeyCode::Enter => KeyAction::Input(Token::Equals),
            KeyCode::Backspace => KeyAction::Input(Token::Backspace),
            KeyCode::Esc => KeyAction::Input(Token::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a plain character to an action.
    #[must_use]
    pub fn map_char(c: char) -> KeyAction {
        match c {
            '0'..='9' => KeyAction::Input(Token::Digit(c as u8 - b'0')),
            '.' => KeyAction::Input(Token::Decimal),
            '+' => KeyAction::Input(Token::Op(BinaryOp::Add)),
            '-' => KeyAction::Input(Token::Op(BinaryOp::Subtract)),
            '*' => KeyAction::Input(Token::Op(BinaryOp::Multiply)),
            '/' => KeyAction::Input(Token::Op(BinaryOp::Divide)),
            '%' => KeyAction::Input(Token::Unary(UnaryOp::Percent)),
            'p' => KeyAction::Input(Token::Unary(UnaryOp::Pi)),
            'r' => KeyAction::Input(Token::Unary(UnaryOp::Reciprocal)),
            's' => KeyAction::Input(Token::Unary(UnaryOp::Square)),
            'v' => KeyAction::Input(Token::Unary(UnaryOp::Sqrt)),
            'n' => KeyAction::Input(Token::Negate),
            '=' | ' ' => KeyAction::Input(Token::Equals),
            'c' | 'C' => KeyAction::Input(Token::Clear),
            'q' | 'Q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
