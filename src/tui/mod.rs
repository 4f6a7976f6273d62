// Module declarations
pub mod widgets;
pub mod components;

pub mod action;
pub mod effects;
pub mod focus;
pub mod keys;
pub mod layout;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod wiring;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use effects::Effect;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::config::Config;

/// Main entry point for TUI mode
pub async fn run(config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut runtime = Runtime::new(AppState::new(config));

    let result = event_loop(&mut terminal, &mut runtime);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    loop {
        // Process callback results FIRST so the frame shows them
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        if runtime.should_quit() {
            tracing::debug!("ACTION: Quitting application");
            return Ok(());
        }

        terminal.draw(|f| {
            let area = f.area();
            runtime.draw(area, f.buffer_mut());
        })?;

        if actions_processed > 0 {
            continue;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                runtime.handle_key(key);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                runtime.handle_pointer_down(mouse.column, mouse.row);
            }
            _ => {}
        }
    }
}
