//! The generic bidirectional conversion form.
//!
//! One `ConversionForm` per mounted tab. It owns both text inputs (text
//! and caret), the selected direction and the last computed results.
//! Editing inputs or switching direction never touches the results;
//! only [`ConversionForm::convert`] does.

use crate::editor::{Caret, Edit, TextInput};
use crate::numeric::{format_fixed, parse_number};
use crate::types::{Direction, Domain, FormConfig};

/// Delimiter between the input and output unit in a direction label.
pub const UNIT_ARROW: char = '→';

/// Separator between entries of the list input.
pub const LIST_SEPARATOR: char = ',';

/// Separator between formatted list results.
pub const RESULT_SEPARATOR: &str = ", ";

/// Text input that receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    SingleValue,
    ArrayValues,
}

impl Field {
    /// The other field. Two fields, so next and previous coincide.
    pub fn toggled(self) -> Field {
        match self {
            Field::SingleValue => Field::ArrayValues,
            Field::ArrayValues => Field::SingleValue,
        }
    }
}

/// Last computed results. None means "nothing to display".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormResults {
    pub single: Option<String>,
    pub array: Option<String>,
}

/// State of one conversion form.
#[derive(Debug, Clone)]
pub struct ConversionForm {
    config: FormConfig,
    pub single_input: TextInput,
    pub array_input: TextInput,
    pub direction: Direction,
    pub focus: Field,
    pub results: FormResults,
}

impl PartialEq for ConversionForm {
    // Config is fixed per domain; compare the mutable state only.
    fn eq(&self, other: &Self) -> bool {
        self.config.forward_label == other.config.forward_label
            && self.config.precision == other.config.precision
            && self.single_input == other.single_input
            && self.array_input == other.array_input
            && self.direction == other.direction
            && self.focus == other.focus
            && self.results == other.results
    }
}

impl ConversionForm {
    /// A freshly mounted form: empty inputs, forward direction, no results.
    pub fn new(config: FormConfig) -> Self {
        ConversionForm {
            config,
            single_input: TextInput::default(),
            array_input: TextInput::default(),
            direction: Direction::default(),
            focus: Field::default(),
            results: FormResults::default(),
        }
    }

    /// A fresh form bound to `domain`.
    pub fn for_domain(domain: Domain) -> Self {
        Self::new(domain.form_config())
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Label of the active direction.
    pub fn active_label(&self) -> &'static str {
        self.config.label(self.direction)
    }

    /// Unit typed into the single-value field.
    pub fn input_unit(&self) -> &'static str {
        unit_names(self.active_label()).0
    }

    /// Unit shown after the single result.
    pub fn output_unit(&self) -> &'static str {
        unit_names(self.active_label()).1
    }

    // ------------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------------

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn set_single(&mut self, text: impl Into<String>) {
        self.single_input = TextInput::new(text);
    }

    pub fn set_array(&mut self, text: impl Into<String>) {
        self.array_input = TextInput::new(text);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.toggled();
    }

    /// Insert a typed character at the caret of the focused field.
    pub fn insert_char(&mut self, c: char) {
        self.focused_input_mut().apply(Edit::Insert(c));
    }

    /// Remove the character before the caret.
    pub fn backspace(&mut self) {
        self.focused_input_mut().apply(Edit::Backspace);
    }

    /// Remove the character under the caret.
    pub fn delete(&mut self) {
        self.focused_input_mut().apply(Edit::Delete);
    }

    pub fn move_caret(&mut self, caret: Caret) {
        self.focused_input_mut().apply(Edit::Move(caret));
    }

    /// Empty the focused field.
    pub fn clear_field(&mut self) {
        self.focused_input_mut().clear();
    }

    pub fn input(&self, field: Field) -> &TextInput {
        match field {
            Field::SingleValue => &self.single_input,
            Field::ArrayValues => &self.array_input,
        }
    }

    /// Raw text of `field`.
    pub fn text(&self, field: Field) -> &str {
        self.input(field).text()
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            Field::SingleValue => &mut self.single_input,
            Field::ArrayValues => &mut self.array_input,
        }
    }

    // ------------------------------------------------------------------------
    // Convert
    // ------------------------------------------------------------------------

    /// Recompute both results from the current inputs and direction.
    ///
    /// Empty inputs clear their result instead of converting 0.
    pub fn convert(&mut self) {
        let convert = self.config.converter.select(self.direction);
        let precision = self.config.precision;

        let single_text = self.single_input.text();
        let single = if single_text.is_empty() {
            None
        } else {
            Some(format_fixed(convert(parse_number(single_text)), precision))
        };

        let array_text = self.array_input.text();
        let array = if array_text.is_empty() {
            None
        } else {
            let formatted: Vec<String> = array_text
                .split(LIST_SEPARATOR)
                .map(|entry| format_fixed(convert(parse_number(entry.trim())), precision))
                .collect();
            Some(formatted.join(RESULT_SEPARATOR))
        };

        self.results = FormResults { single, array };
    }
}

/// Split a direction label into (input unit, output unit).
///
/// `"Kilograms → Pounds"` gives `("Kilograms", "Pounds")`. Both halves are
/// trimmed. A label without an arrow is all input unit.
pub fn unit_names(label: &str) -> (&str, &str) {
    match label.split_once(UNIT_ARROW) {
        Some((from, to)) => (from.trim(), to.trim()),
        None => (label.trim(), ""),
    }
}

// ============================================================================
// TESTS
// ============================================================================
