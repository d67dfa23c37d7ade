//! TUI module for the interactive converter.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Page, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `theme`: Style constants
//! - `run`: Effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
