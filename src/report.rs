//! One-shot conversion: build a form, convert, format the outcome.
//!
//! `run_conversion` is the CLI counterpart of pressing Convert in the TUI.
//! `format_report` is pure — (ConversionReport, OutputFormat) → String.

use crate::error::Result;
use crate::form::ConversionForm;
use crate::types::{ConversionReport, Direction, Domain, OutputFormat};

/// Run a fresh form for `domain` once and capture what it would display.
///
/// `single` and `values` are the raw texts of the two inputs; None is the
/// same as leaving the field empty.
pub fn run_conversion(
    domain: Domain,
    direction: Direction,
    single: Option<&str>,
    values: Option<&str>,
) -> ConversionReport {
    let mut form = ConversionForm::for_domain(domain);
    form.set_direction(direction);
    form.set_single(single.unwrap_or_default());
    form.set_array(values.unwrap_or_default());
    form.convert();

    ConversionReport {
        domain,
        direction,
        label: form.active_label().to_string(),
        input_unit: form.input_unit().to_string(),
        output_unit: form.output_unit().to_string(),
        single: form.results.single,
        array: form.results.array,
    }
}

/// Format a conversion report for output.
pub fn format_report(report: &ConversionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(report)),
        OutputFormat::Json => format_json(report),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(report: &ConversionReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", report.label));

    if let Some(single) = &report.single {
        out.push_str(&format!("Result: {} {}\n", single, report.output_unit));
    }
    if let Some(array) = &report.array {
        out.push_str(&format!("Results: {}\n", array));
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(report: &ConversionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

// ============================================================================
// TESTS
// ============================================================================
