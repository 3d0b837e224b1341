//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::Transition;

/// Help text for the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Digits"),
    ("+-*/", "Operators"),
    ("Enter", "Equals"),
    ("Esc", "Clear"),
    ("Del", "Clear entry"),
    ("Bksp", "Backspace"),
    ("%", "Percent"),
    ("n", "Toggle sign"),
    ("m / M", "M+ / M-"),
    ("r / R", "MR / MC"),
    ("Ctrl+L", "Clear history"),
    ("q", "Quit"),
];

fn horizontal_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(30),    // Display and history
            Constraint::Length(26), // Keypad
            Constraint::Length(22), // Help sidebar
        ])
        .split(area)
        .to_vec()
}

/// Area the keypad occupies when the UI fills `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    horizontal_layout(area)[1]
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Expression + display
                Constraint::Min(3),    // History
                Constraint::Length(3), // Status
            ])
            .split(area)
            .to_vec()
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let calc = self.app.calculator();
        let display_style = if calc.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                calc.expression(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(calc.display(), display_style)),
        ];

        let mut block = Block::default()
            .title(format!(" {} ", calc.config().title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        if calc.features().memory && calc.memory().is_set() {
            let memory = calc.config().format.format(calc.memory().value());
            block = block.title_bottom(Line::from(Span::styled(
                format!(" M = {memory} "),
                Style::default().fg(Color::Magenta),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(block)
            .render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let calc = self.app.calculator();
        let block = Block::default()
            .title(format!(
                " History {}/{} ",
                calc.history().len(),
                calc.history().max_entries()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));

        if !calc.features().history {
            Paragraph::new(Span::styled(
                "not kept by this variant",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let format = &calc.config().format;
        let items: Vec<ListItem> = calc
            .history()
            .iter_rev()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.as_str(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(format.format(entry.result), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let style = match self.app.last_transition() {
            Some(Transition::Failed(_)) => Style::default().fg(Color::Red),
            Some(Transition::Ignored) => Style::default().fg(Color::DarkGray),
            _ => Style::default().fg(Color::Green),
        };
        Paragraph::new(Span::styled(self.app.status_line(), style))
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .render(area, buf);
    }

    fn render_help_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" calc-keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let h_chunks = horizontal_layout(area);
        let chunks = self.create_layout(h_chunks[0]);

        self.render_display(chunks[0], buf);
        self.render_history(chunks[1], buf);
        self.render_status(chunks[2], buf);
        KeypadWidget::new(self.app.keypad()).render(h_chunks[1], buf);
        self.render_help_sidebar(h_chunks[2], buf);
    }
}
