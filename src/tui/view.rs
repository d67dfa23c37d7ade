//! Pure rendering: map App state to ratatui widget trees.
//!
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::{ConversionForm, Field};
use crate::types::{Direction, Domain};

use super::state::{App, Page};
use super::theme;

pub const TITLE: &str = "Unit Converter";
pub const SINGLE_PLACEHOLDER: &str = "Enter a value";
pub const ARRAY_PLACEHOLDER: &str = "e.g., 1, 2, 3, 4";
pub const ARRAY_TITLE: &str = "Array Values (comma-separated)";

/// Footer key hints: (keys, what they do).
const HELP: [(&str, &str); 6] = [
    ("Enter", "convert"),
    ("Tab", "field"),
    ("^F/^B", "direction"),
    ("F1-F3/PgUp/PgDn", "tab"),
    ("^U", "clear"),
    ("Esc", "quit"),
];

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole app to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // tabs
        Constraint::Length(1),
        Constraint::Min(0), // form
        Constraint::Length(1), // help
    ])
    .split(frame.area());

    frame.render_widget(render_title(), chunks[0]);
    frame.render_widget(render_tabs(app.page.tab), chunks[1]);
    render_page(&app.page, frame, chunks[3]);
    frame.render_widget(Paragraph::new(help_line()), chunks[4]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(TITLE, theme::STYLE_TITLE)))
}

/// Key hints in the interactive color, descriptions dimmed.
fn help_line() -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (keys, what)) in HELP.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("[{}]", keys), theme::STYLE_INTERACTIVE));
        spans.push(Span::styled(format!(" {}", what), theme::STYLE_DIM));
    }
    Line::from(spans)
}

/// One button per domain; the active one is highlighted.
fn render_tabs(active: Domain) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (i, tab) in Domain::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if tab == active {
            theme::STYLE_ACTIVE
        } else {
            theme::STYLE_TAB
        };
        spans.push(Span::styled(format!(" F{} {} ", i + 1, tab.title()), style));
    }
    Paragraph::new(Line::from(spans))
}

// ============================================================================
// FORM
// ============================================================================

fn render_page(page: &Page, frame: &mut Frame, area: Rect) {
    let form = &page.form;
    let chunks = Layout::vertical([
        Constraint::Length(1), // direction buttons
        Constraint::Length(1),
        Constraint::Length(3), // single input
        Constraint::Length(1), // single result
        Constraint::Length(3), // array input
        Constraint::Length(1), // array result
        Constraint::Length(1),
        Constraint::Length(1), // convert button
        Constraint::Min(0),
    ])
    .split(area);

    frame.render_widget(render_directions(form), chunks[0]);

    let single_title = format!("Single Value ({})", form.input_unit());
    render_input(form, Field::SingleValue, single_title, SINGLE_PLACEHOLDER, frame, chunks[2]);
    if let Some(single) = &form.results.single {
        let line = format!("Result: {} {}", single, form.output_unit());
        frame.render_widget(Paragraph::new(Span::styled(line, theme::STYLE_RESULT)), chunks[3]);
    }

    render_input(
        form,
        Field::ArrayValues,
        ARRAY_TITLE.to_string(),
        ARRAY_PLACEHOLDER,
        frame,
        chunks[4],
    );
    if let Some(array) = &form.results.array {
        let line = format!("Results: {}", array);
        frame.render_widget(Paragraph::new(Span::styled(line, theme::STYLE_RESULT)), chunks[5]);
    }

    let convert = Line::from(Span::styled("  Convert [Enter]  ", theme::STYLE_CONVERT)).centered();
    frame.render_widget(Paragraph::new(convert), chunks[7]);
}

/// The two direction buttons, labelled with the domain's descriptions.
fn render_directions(form: &ConversionForm) -> Paragraph<'static> {
    let config = form.config();
    let button = |direction: Direction, key: &str| {
        let style = if form.direction == direction {
            theme::STYLE_ACTIVE
        } else {
            theme::STYLE_BUTTON
        };
        Span::styled(format!(" {} {} ", key, config.label(direction)), style)
    };
    Paragraph::new(Line::from(vec![
        button(Direction::Forward, "^F"),
        Span::raw("  "),
        button(Direction::Backward, "^B"),
    ]))
}

/// A bordered text input; shows the placeholder when empty and puts the
/// terminal cursor on the caret of the focused field.
fn render_input(
    form: &ConversionForm,
    field: Field,
    title: String,
    placeholder: &'static str,
    frame: &mut Frame,
    area: Rect,
) {
    let focused = form.focus == field;
    let border = if focused {
        theme::STYLE_FOCUSED
    } else {
        theme::STYLE_UNFOCUSED
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title);

    let input = form.input(field);
    let text = input.text();
    let content = if text.is_empty() {
        Span::styled(placeholder, theme::STYLE_PLACEHOLDER)
    } else {
        Span::raw(text.to_string())
    };
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    if focused {
        frame.set_cursor_position(cursor_position(input.before_caret(), area));
    }
}

/// Cursor cell just after `before_caret` inside a bordered input at `area`.
fn cursor_position(before_caret: &str, area: Rect) -> Position {
    let inner_width = area.width.saturating_sub(2);
    let text_width = u16::try_from(Span::raw(before_caret).width()).unwrap_or(u16::MAX);
    Position::new(
        area.x + 1 + text_width.min(inner_width.saturating_sub(1)),
        area.y + 1,
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::editor::Caret;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(100, 24);
        Terminal::new(backend).unwrap()
    }

    fn rendered(app: &App) -> String {
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn blank_app_renders_controls() {
        let content = rendered(&App::default());
        assert!(content.contains(TITLE));
        assert!(content.contains("Weight"));
        assert!(content.contains("Distance"));
        assert!(content.contains("Temperature"));
        assert!(content.contains("Kilograms → Pounds"));
        assert!(content.contains("Pounds → Kilograms"));
        assert!(content.contains("Single Value (Kilograms)"));
        assert!(content.contains(ARRAY_TITLE));
        assert!(content.contains("Convert"));
    }

    #[test]
    fn empty_inputs_show_placeholders_and_no_results() {
        let content = rendered(&App::default());
        assert!(content.contains(SINGLE_PLACEHOLDER));
        assert!(content.contains(ARRAY_PLACEHOLDER));
        assert!(!content.contains("Result:"));
        assert!(!content.contains("Results:"));
    }

    #[test]
    fn results_render_with_output_unit() {
        let mut app = App::default();
        app.page.form.set_single("1");
        app.page.form.set_array("1, 2, 3");
        app.page.form.convert();

        let content = rendered(&app);
        assert!(content.contains("Result: 2.20 Pounds"));
        assert!(content.contains("Results: 2.20, 4.41, 6.61"));
    }

    #[test]
    fn nan_result_renders_literally() {
        let mut app = App::default();
        app.page.form.set_single("abc");
        app.page.form.convert();
        assert!(rendered(&app).contains("Result: NaN Pounds"));
    }

    #[test]
    fn unit_labels_follow_direction() {
        let mut app = App::new(Domain::Temperature);
        app.page.form.set_direction(Direction::Backward);
        let content = rendered(&app);
        assert!(content.contains("Single Value (Fahrenheit)"));
    }

    #[test]
    fn active_tab_is_highlighted() {
        let mut terminal = make_terminal();
        let app = App::new(Domain::Distance);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let row: Vec<_> = (0..buffer.area.width)
            .map(|x| buffer[(x, 1)].clone())
            .collect();
        let text: String = row.iter().map(|cell| cell.symbol().to_string()).collect();
        let start = text.find("Distance").expect("tab row should name Distance");
        assert_eq!(row[start].bg, theme::STYLE_ACTIVE.bg.unwrap());

        let weight = text.find("Weight").expect("tab row should name Weight");
        assert_ne!(row[weight].bg, theme::STYLE_ACTIVE.bg.unwrap());
    }

    #[test]
    fn all_tabs_render_without_panic() {
        for tab in Domain::ALL {
            let mut terminal = make_terminal();
            let app = App::new(tab);
            terminal
                .draw(|frame| render(&app, frame))
                .expect("every tab should render without panic");
        }
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        let mut app = App::default();
        app.page.form.set_single("123456789012345");
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
    }

    fn help_row(app: &App) -> Vec<ratatui::buffer::Cell> {
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let y = buffer.area.height - 1;
        (0..buffer.area.width).map(|x| buffer[(x, y)].clone()).collect()
    }

    #[test]
    fn help_lists_every_tab_binding() {
        let row = help_row(&App::default());
        let text: String = row.iter().map(|cell| cell.symbol().to_string()).collect();
        assert!(text.contains("[F1-F3/PgUp/PgDn] tab"));
        assert!(text.contains("[Esc] quit"));
    }

    #[test]
    fn help_keys_stand_out_from_descriptions() {
        let row = help_row(&App::default());
        let text: String = row.iter().map(|cell| cell.symbol().to_string()).collect();
        let key = text.find("Enter").expect("help should name Enter");
        let what = text.find("convert").expect("help should describe Enter");
        assert_eq!(Some(row[key].fg), theme::STYLE_INTERACTIVE.fg);
        assert_eq!(Some(row[what].fg), theme::STYLE_DIM.fg);
    }

    #[test]
    fn help_fits_default_width() {
        let width = help_line().width();
        assert!(width <= 100, "help is {} columns", width);
    }

    #[test]
    fn cursor_follows_caret() {
        let mut terminal = make_terminal();
        let mut app = App::default();
        app.page.form.set_single("1234");
        app.page.form.move_caret(Caret::Left);
        app.page.form.move_caret(Caret::Left);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        // Single input box starts at row 5; text starts one cell in.
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(3, 6));
    }

    #[test]
    fn cursor_sits_after_text() {
        let area = Rect::new(0, 5, 20, 3);
        assert_eq!(cursor_position("", area), Position::new(1, 6));
        assert_eq!(cursor_position("12", area), Position::new(3, 6));
        // Clamped to the last inner cell.
        assert_eq!(cursor_position(&"9".repeat(40), area), Position::new(18, 6));
    }
}
