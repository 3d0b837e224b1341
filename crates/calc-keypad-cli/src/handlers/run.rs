//! Interactive terminal calculator

use std::io;

use calc_keypad::tui::{keypad_area, render, CalculatorApp};
use calc_keypad::variant::VariantConfig;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info};

use crate::commands::RunArgs;
use crate::config::load_variant;
use crate::error::CliResult;

/// Execute the run command
///
/// The terminal is restored even when the event loop fails.
pub fn execute_run(args: &RunArgs) -> CliResult<()> {
    let variant = load_variant(&args.variant)?;
    info!(variant = %variant.name, "starting interactive calculator");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, variant);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, variant: VariantConfig) -> CliResult<()> {
    let mut app = CalculatorApp::with_config(variant);
    let mut keypad_rect = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            keypad_rect = keypad_area(frame.area());
            render(&app, frame);
        })?;
        handle_event(&mut app, event::read()?, keypad_rect);
    }

    debug!(display = app.calculator().display(), "calculator closed");
    Ok(())
}

/// Routes one terminal event to the app
fn handle_event(app: &mut CalculatorApp, event: Event, keypad_rect: Rect) {
    match event {
        // Only presses; some platforms also report releases
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            app.handle_key(key);
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            app.click_at(keypad_rect, column, row);
        }
        _ => {}
    }
}
