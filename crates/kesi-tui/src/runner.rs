//! Synchronous run loop: draw, poll, update.

use ratatui::DefaultTerminal;

use kesi_app::{update, AppState, Message, Settings};
use kesi_core::prelude::*;
use kesi_core::Registry;

use crate::{event, render, terminal};

/// Run the console until the user quits.
///
/// Initializes the terminal, mounts the application state (the sidebar
/// default comes from the terminal width at this point), then loops:
/// draw a frame, poll for input, dispatch messages. The terminal is
/// restored before returning.
pub fn run(registry: Registry, settings: Settings, start_path: Option<&str>) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let size = term
        .size()
        .map_err(|e| Error::terminal(format!("failed to read terminal size: {e}")))?;

    let mut state = AppState::new(registry, settings, size.width, start_path);
    info!(start_path = %state.path(), width = size.width, "console mounted");

    let result = run_loop(&mut term, &mut state);

    ratatui::restore();
    info!("console stopped");
    result
}

fn run_loop(term: &mut DefaultTerminal, state: &mut AppState) -> Result<()> {
    loop {
        term.draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            dispatch(state, message);
        }

        if state.should_quit {
            return Ok(());
        }
    }
}

/// Dispatch a message and any follow-up messages it produces.
fn dispatch(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        next = update(state, msg).message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kesi_app::InputKey;

    fn state() -> AppState {
        AppState::new(Registry::standard(), Settings::default(), 120, None)
    }

    #[test]
    fn test_dispatch_runs_follow_up_messages() {
        let mut state = state();
        // Tab produces NextPlatform, which produces SelectPlatform, which
        // lands on the next platform's first entry.
        dispatch(&mut state, Message::Key(InputKey::Tab));
        assert_eq!(state.path(), "/business/dashboard");
    }

    #[test]
    fn test_dispatch_quit_sets_flag() {
        let mut state = state();
        dispatch(&mut state, Message::Key(InputKey::Char('q')));
        assert!(state.should_quit);
    }

    #[test]
    fn test_tick_is_inert() {
        let mut state = state();
        let path = state.path().to_string();
        dispatch(&mut state, Message::Tick);
        assert_eq!(state.path(), path);
        assert!(!state.should_quit);
    }
}
