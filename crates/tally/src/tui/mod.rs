//! Terminal frontend: keypad, keyboard handling, and rendering.
//!
//! The frontend owns no calculation state; it feeds tokens to the engine
//! in [`crate::core`] and draws whatever the engine reports.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::App;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI};
