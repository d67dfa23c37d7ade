//! Pure state transitions: (Page, Action) → Transition.
//!
//! Fully testable without a terminal. Form edits are delegated to
//! `ConversionForm`; tab actions decide whether the form survives.

use crate::types::Domain;

use super::state::{Action, Page, Transition};

/// Pure state transition function.
pub fn update(page: Page, action: &Action) -> Transition {
    match action {
        Action::Quit => Transition::Quit,
        Action::SelectTab(tab) => Transition::Page(select_tab(page, *tab)),
        Action::NextTab => {
            let next = page.tab.next();
            Transition::Page(select_tab(page, next))
        }
        Action::PrevTab => {
            let prev = page.tab.prev();
            Transition::Page(select_tab(page, prev))
        }
        _ => Transition::Page(update_form(page, action)),
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Selecting the active tab keeps its form. Any other tab mounts fresh.
fn select_tab(page: Page, tab: Domain) -> Page {
    if page.tab == tab {
        page
    } else {
        Page::mount(tab)
    }
}

/// Actions that stay inside the mounted form.
fn update_form(mut page: Page, action: &Action) -> Page {
    let form = &mut page.form;
    match action {
        Action::Input(c) => form.insert_char(*c),
        Action::Backspace => form.backspace(),
        Action::Delete => form.delete(),
        Action::MoveCaret(caret) => form.move_caret(*caret),
        Action::ClearField => form.clear_field(),
        Action::FocusNext => form.focus_next(),
        Action::SetDirection(direction) => form.set_direction(*direction),
        Action::Convert => form.convert(),
        Action::Quit | Action::SelectTab(_) | Action::NextTab | Action::PrevTab => {}
    }
    page
}

// ============================================================================
// TESTS
// ============================================================================
