//! TUI rendering: pending readout, display, session tape, keypad, and a
//! help sidebar.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::App;
use super::keypad::KeypadWidget;

/// Renders the calculator UI to the frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUI::new(app);
    frame.render_widget(ui, area);
}

/// Splits the full frame area into (main, keypad, help) columns.
///
/// The event loop uses the keypad column for mouse hit testing, so this
/// must stay in lockstep with [`CalculatorUI`]'s layout.
#[must_use]
pub fn layout_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(35),    // Readout, display, tape
            Constraint::Length(22), // Keypad
            Constraint::Length(22), // Help sidebar
        ])
        .split(area)
        .to_vec()
}

/// The Rect the keypad is rendered into, for mouse hit testing.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    layout_columns(area)[1]
}

/// Calculator UI widget.
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a App,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget.
    #[must_use]
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    /// Splits the main column into readout, display, and tape rows.
    fn create_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Pending readout
                Constraint::Length(3), // Display
                Constraint::Min(5),    // Tape
            ])
            .split(area)
            .to_vec()
    }

    /// Renders the pending operand and operator, e.g. `5 +`.
    fn render_readout(&self, area: Rect, buf: &mut Buffer) {
        let readout = self.app.pending_readout();
        let paragraph = Paragraph::new(Span::styled(
            readout,
            Style::default().fg(Color::DarkGray),
        ))
        .right_aligned()
        .block(
            Block::default()
                .title(" Pending ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        paragraph.render(area, buf);
    }

    /// Renders the main display.
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.engine().display();

        let style = if self.app.engine().is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let paragraph = Paragraph::new(Span::styled(text, style))
            .right_aligned()
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        paragraph.render(area, buf);
    }

    /// Renders the session tape, newest first.
    fn render_tape(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .tape()
            .iter_rev()
            .take(10)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(&entry.expression, Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(
                        crate::core::format_value(entry.result),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Tape (newest first) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        list.render(area, buf);
    }

    /// Renders the keypad column.
    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        KeypadWidget::new(self.app.keypad()).render(area, buf);
    }

    /// Renders the help sidebar.
    fn render_help_sidebar(area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Shortcuts
                Constraint::Length(3), // Operators
            ])
            .split(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let shortcuts_list = List::new(shortcuts).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        shortcuts_list.render(chunks[0], buf);

        let ops = Paragraph::new(Span::styled(
            HELP_OPERATORS,
            Style::default().fg(Color::Cyan),
        ))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        ops.render(chunks[1], buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let columns = layout_columns(area);
        if columns.len() < 3 {
            return;
        }

        let rows = Self::create_layout(columns[0]);
        if rows.len() >= 3 {
            self.render_readout(rows[0], buf);
            self.render_display(rows[1], buf);
            self.render_tape(rows[2], buf);
        }

        self.render_keypad(columns[1], buf);
        Self::render_help_sidebar(columns[2], buf);
    }
}

/// Window title.
pub const TITLE: &str = " Tally ";

/// Keyboard shortcuts shown in the sidebar.
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter number"),
    ("+-*/", "Operator"),
    ("Enter", "Equals"),
    ("n", "Negate"),
    ("%", "Percent"),
    ("r s v", "1/x x\u{b2} \u{221a}"),
    ("p", "\u{3c0}"),
    ("Bksp", "Delete digit"),
    ("Esc/c", "Clear"),
    ("Ctrl+L", "Clear tape"),
    ("q", "Quit"),
];

/// Operator summary line.
pub const HELP_OPERATORS: &str = "Ops: + - * /  (left to right)";
