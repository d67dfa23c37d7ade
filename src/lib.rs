//! unit-converter: Convert weight, distance and temperature in the terminal.

pub mod convert;
pub mod editor;
pub mod error;
pub mod form;
pub mod logging;
pub mod numeric;
pub mod report;
pub mod tui;
pub mod types;
