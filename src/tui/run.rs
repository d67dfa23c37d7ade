//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! A key reader thread forwards crossterm events into an mpsc channel.
//! The loop renders, blocks on the next event, applies `update`, repeats,
//! so every state change is drawn before the next event is handled.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::editor::Caret;
use crate::types::{Direction, Domain};

use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('f') => Some(Action::SetDirection(Direction::Forward)),
            KeyCode::Char('b') => Some(Action::SetDirection(Direction::Backward)),
            KeyCode::Char('u') => Some(Action::ClearField),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Convert),

        // Fields
        KeyCode::Tab | KeyCode::BackTab => Some(Action::FocusNext),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Left => Some(Action::MoveCaret(Caret::Left)),
        KeyCode::Right => Some(Action::MoveCaret(Caret::Right)),
        KeyCode::Home => Some(Action::MoveCaret(Caret::Home)),
        KeyCode::End => Some(Action::MoveCaret(Caret::End)),

        // Tabs
        KeyCode::F(1) => Some(Action::SelectTab(Domain::Weight)),
        KeyCode::F(2) => Some(Action::SelectTab(Domain::Distance)),
        KeyCode::F(3) => Some(Action::SelectTab(Domain::Temperature)),
        KeyCode::PageDown => Some(Action::NextTab),
        KeyCode::PageUp => Some(Action::PrevTab),

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => Some(Action::Input(c)),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
///
/// Raw mode is undone if any later step fails, so an error never leaves
/// the shell in raw mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let terminal = io::stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    undo_on_error(terminal, restore_terminal)
}

/// Pass `result` through, running `undo` first when it is an error.
/// The original error wins over any error from `undo`.
fn undo_on_error<T>(
    result: io::Result<T>,
    undo: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if result.is_err() {
        let _ = undo();
    }
    result
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                // Release/repeat events would double every keystroke on Windows.
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    let _ = tx.send(AppEvent::InputError(e.to_string()));
                    break;
                }
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the user quits.
pub fn run(initial_tab: Domain) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, App::new(initial_tab));
    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    info!(tab = %app.page.tab, "starting converter");

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    loop {
        // Quit leaves no page behind, so check before drawing.
        if app.should_quit {
            break;
        }

        terminal.draw(|frame| render(&app, frame))?;

        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    handle_action(&mut app, &action);
                }
            }
            AppEvent::Resize => {}
            AppEvent::InputError(message) => {
                warn!(%message, "terminal input failed, quitting");
                app.should_quit = true;
            }
        }
    }

    info!("converter closed");
    Ok(())
}

/// Apply one action to the app, logging the parts worth tracing.
fn handle_action(app: &mut App, action: &Action) {
    let previous_tab = app.page.tab;
    let page = std::mem::take(&mut app.page);

    match update(page, action) {
        Transition::Page(page) => app.page = page,
        Transition::Quit => app.should_quit = true,
    }

    if !app.should_quit && app.page.tab != previous_tab {
        info!(from = %previous_tab, to = %app.page.tab, "switched tab");
    }
    if *action == Action::Convert {
        let form = &app.page.form;
        debug!(
            direction = ?form.direction,
            single = ?form.results.single,
            array = ?form.results.array,
            "converted"
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
