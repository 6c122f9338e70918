//! One chat export in, one report out.

use crate::core::group::group_messages;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic, ReportOptions, ReportStats};
use crate::parser::{LineParser, read_chat_file};
use crate::ui::messages::{info, warning};
use std::path::Path;

/// Counters of a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub ignored: usize,
    pub malformed: usize,
    pub invalid_extracted: usize,
    pub senders: usize,
    /// `None` when nothing was written (no records found).
    pub report: Option<ReportStats>,
}

/// Parses `input`, groups it and writes the report to `output`.
///
/// Fails only when the input cannot be read or the output cannot be
/// produced; bad lines and unwritable cells are logged and skipped.
pub fn run_report(
    input: &Path,
    output: &Path,
    format: ExportFormat,
    parser: &LineParser,
    opts: &ReportOptions,
) -> AppResult<RunSummary> {
    let chat = read_chat_file(input, parser)?;

    let mut summary = RunSummary {
        records: chat.records.len(),
        ignored: chat.ignored,
        malformed: chat.malformed,
        invalid_extracted: chat.invalid_extracted,
        ..Default::default()
    };

    info(format!(
        "{} message(s) accepted, {} malformed, {} other line(s) ignored",
        summary.records, summary.malformed, summary.ignored
    ));

    if chat.records.is_empty() {
        warning("No attendance messages found, no report written.");
        return Ok(summary);
    }

    let grouped = group_messages(&chat.records);
    summary.senders = grouped.len();

    info(format!(
        "Writing {} report for {} sender(s)",
        format.as_str(),
        summary.senders
    ));
    let stats = ExportLogic::export(&grouped, format, opts, output)?;

    info(format!(
        "{} sheet(s), {} row(s), {} time(s) written ({} adjusted, tolerance {} min)",
        stats.sheets, stats.rows, stats.cells, stats.adjusted, opts.tolerance_minutes
    ));
    if stats.skipped_dates > 0 || stats.skipped_cells > 0 {
        warning(format!(
            "{} date row(s) and {} cell(s) could not be written",
            stats.skipped_dates, stats.skipped_cells
        ));
    }

    summary.report = Some(stats);
    Ok(summary)
}
