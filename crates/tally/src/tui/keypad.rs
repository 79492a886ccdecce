//! On-screen keypad: a 6x4 grid of buttons, hit-testable for mouse
//! clicks and highlightable when the matching key is pressed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{BinaryOp, Token, UnaryOp};

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The label drawn on the button.
    pub label: &'static str,
    /// Whether the button is currently highlighted.
    pub pressed: bool,
    /// The token this button feeds to the engine.
    pub token: Token,
}

impl KeypadButton {
    /// Creates a button for a token with the given label.
    #[must_use]
    pub const fn new(label: &'static str, token: Token) -> Self {
        Self {
            label,
            pressed: false,
            token,
        }
    }

    /// Sets the highlight state.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout, matching a desktop calculator:
/// ```text
/// [ % ] [ π ] [ C ] [ ⌫ ]
/// [1/x] [x²] [ √ ] [ / ]
/// [ 7 ] [ 8 ] [ 9 ] [ * ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ ± ] [ 0 ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: % π C ⌫
            KeypadButton::new("%", Token::Unary(UnaryOp::Percent)),
            KeypadButton::new("π", Token::Unary(UnaryOp::Pi)),
            KeypadButton::new("C", Token::Clear),
            KeypadButton::new("⌫", Token::Backspace),
            // Row 2: 1/x x² √ /
            KeypadButton::new("1/x", Token::Unary(UnaryOp::Reciprocal)),
            KeypadButton::new("x²", Token::Unary(UnaryOp::Square)),
            KeypadButton::new("√", Token::Unary(UnaryOp::Sqrt)),
            KeypadButton::new("/", Token::Op(BinaryOp::Divide)),
            // Row 3: 7 8 9 *
            KeypadButton::new("7", Token::Digit(7)),
            KeypadButton::new("8", Token::Digit(8)),
            KeypadButton::new("9", Token::Digit(9)),
            KeypadButton::new("*", Token::Op(BinaryOp::Multiply)),
            // Row 4: 4 5 6 -
            KeypadButton::new("4", Token::Digit(4)),
            KeypadButton::new("5", Token::Digit(5)),
            KeypadButton::new("6", Token::Digit(6)),
            KeypadButton::new("-", Token::Op(BinaryOp::Subtract)),
            // Row 5: 1 2 3 +
            KeypadButton::new("1", Token::Digit(1)),
            KeypadButton::new("2", Token::Digit(2)),
            KeypadButton::new("3", Token::Digit(3)),
            KeypadButton::new("+", Token::Op(BinaryOp::Add)),
            // Row 6: ± 0 . =
            KeypadButton::new("±", Token::Negate),
            KeypadButton::new("0", Token::Digit(0)),
            KeypadButton::new(".", Token::Decimal),
            KeypadButton::new("=", Token::Equals),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 6,
        }
    }

    /// Number of buttons on the keypad.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions as (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Button by index, row-major.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Button by grid position.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Index of the button feeding the given token.
    #[must_use]
    pub fn find_button(&self, token: Token) -> Option<usize> {
        self.buttons.iter().position(|b| b.token == token)
    }

    /// Marks one button as pressed.
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Clears every highlight.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights exactly the button for this token, releasing the rest.
    pub fn highlight(&mut self, token: Token) {
        self.release_all();
        if let Some(idx) = self.find_button(token) {
            self.press_button(idx);
        }
    }

    /// Iterates over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Iterates over buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside the rendered area to the clicked
    /// button's token. The area must be the same Rect the widget was
    /// rendered into; the outer border is dead space.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Token> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // border is 1 char on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        self.get_button_at(row, col).map(|b| b.token)
    }
}

/// Keypad widget for rendering.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget borrowing the keypad state.
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.token {
            Token::Digit(_) | Token::Decimal => Style::default().fg(Color::White),
            Token::Op(_) => Style::default().fg(Color::Yellow),
            Token::Equals => Style::default().fg(Color::Green),
            Token::Clear | Token::Backspace => Style::default().fg(Color::Red),
            Token::Unary(_) | Token::Negate => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if (inner.width as usize) < cols || (inner.height as usize) < rows {
            return; // too small to render
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);
            let style = Self::button_style(btn);

            let label = format!("[{}]", btn.label);
            let width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
            }
        }
    }
}
