//! TUI state algebra: pure types, zero effects.
//!
//! The container holds exactly one mounted form, the one for the active
//! tab. Switching tabs replaces it with a fresh form, so a hidden tab
//! never keeps inputs or results.

use crossterm::event::KeyEvent;

use crate::editor::Caret;
use crate::form::ConversionForm;
use crate::types::{Direction, Domain};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Terminal was resized; only triggers a redraw.
    Resize,
    /// The reader thread hit an error and stopped.
    InputError(String),
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Active tab and its mounted form.
    pub page: Page,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// Container state: the selected tab plus the form rendered for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub tab: Domain,
    pub form: ConversionForm,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Type a character at the caret of the focused field.
    Input(char),
    /// Delete the character before the caret.
    Backspace,
    /// Delete the character under the caret.
    Delete,
    /// Move the caret within the focused field.
    MoveCaret(Caret),
    /// Empty the focused field.
    ClearField,
    /// Move focus to the other input field.
    FocusNext,
    /// Press one of the two direction buttons.
    SetDirection(Direction),
    /// Press a tab button.
    SelectTab(Domain),
    /// Cycle to the next tab.
    NextTab,
    /// Cycle to the previous tab.
    PrevTab,
    /// Press the Convert button.
    Convert,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this page (may be the same or a different tab).
    Page(Page),
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App showing `tab` with a blank form.
    pub fn new(tab: Domain) -> Self {
        App {
            page: Page::mount(tab),
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(Domain::default())
    }
}

impl Page {
    /// Mount `tab` with freshly reset form state.
    pub fn mount(tab: Domain) -> Self {
        Page {
            tab,
            form: ConversionForm::for_domain(tab),
        }
    }
}

/// Placeholder used while a page is moved through `update`.
impl Default for Page {
    fn default() -> Self {
        Page::mount(Domain::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================
