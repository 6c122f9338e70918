// src/export/xlsx.rs

use crate::core::group::{GroupedMessages, SenderDays};
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{date_to_excel_serial, time_to_excel_serial};
use crate::export::sheet_name::SheetNamer;
use crate::export::{ReportOptions, ReportStats, notify_export_success};
use crate::ui::messages::{error, info, warning};
use crate::utils::date::format_date;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const DATE_COL_WIDTH: usize = 10;
const TIME_COL_WIDTH: usize = 5;

/// Excel limit for worksheet columns (A..XFD).
const MAX_COLUMNS: usize = 16_384;

/// Owns the workbook until it reaches the disk.
///
/// `finish` saves and reports errors; if the guard is dropped first (an early
/// `?` return) the workbook is still saved and failures are only logged.
struct ReportWorkbook<'a> {
    workbook: Workbook,
    path: &'a Path,
    saved: bool,
}

impl<'a> ReportWorkbook<'a> {
    fn create(path: &'a Path) -> Self {
        Self {
            workbook: Workbook::new(),
            path,
            saved: false,
        }
    }

    fn workbook_mut(&mut self) -> &mut Workbook {
        &mut self.workbook
    }

    fn finish(mut self) -> AppResult<()> {
        self.saved = true;
        self.workbook.save(self.path)?;
        Ok(())
    }
}

impl Drop for ReportWorkbook<'_> {
    fn drop(&mut self) {
        if self.saved {
            return;
        }
        self.saved = true;
        match self.workbook.save(self.path) {
            Ok(()) => warning(format!(
                "Report interrupted, partial workbook saved: {}",
                self.path.display()
            )),
            Err(e) => error(format!(
                "Failed to save partial workbook {}: {e}",
                self.path.display()
            )),
        }
    }
}

struct Styles {
    header: Format,
    date: [Format; 2],
    time: [Format; 2],
    adjusted: Format,
}

impl Styles {
    fn new() -> Self {
        let band = [Color::RGB(0xEAF3FB), Color::RGB(0xFFFFFF)];

        let cell = |bg: Color| {
            Format::new()
                .set_background_color(bg)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
        };

        Self {
            header: Format::new()
                .set_bold()
                .set_font_color(Color::RGB(0xFFFFFF))
                .set_background_color(Color::RGB(0x2F75B5))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center),
            date: band.map(|bg| cell(bg).set_num_format("dd/mm/yyyy")),
            time: band.map(|bg| {
                cell(bg)
                    .set_num_format("hh:mm")
                    .set_align(FormatAlign::Center)
            }),
            adjusted: Format::new()
                .set_bold()
                .set_font_color(Color::RGB(0x9C0006))
                .set_background_color(Color::RGB(0xFFEB9C))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
                .set_num_format("hh:mm")
                .set_align(FormatAlign::Center),
        }
    }
}

/// Export XLSX: un foglio per sender, una riga per data.
pub(crate) fn export_xlsx(
    grouped: &GroupedMessages,
    opts: &ReportOptions,
    path: &Path,
) -> AppResult<ReportStats> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut report = ReportWorkbook::create(path);
    let mut stats = ReportStats::default();

    // ---------------------------
    // Caso dataset vuoto
    // ---------------------------
    if grouped.is_empty() {
        report
            .workbook_mut()
            .add_worksheet()
            .write(0, 0, "No data available")?;
        report.finish()?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(stats);
    }

    let styles = Styles::new();
    let mut namer = SheetNamer::default();

    for sender in grouped.senders() {
        let name = namer.unique(sender.name());
        let worksheet = report.workbook_mut().add_worksheet();
        worksheet.set_name(&name)?;

        write_sender_sheet(worksheet, &name, sender, opts, &styles, &mut stats);
        stats.sheets += 1;
    }

    report.finish()?;

    notify_export_success("XLSX", path);
    Ok(stats)
}

fn write_sender_sheet(
    worksheet: &mut Worksheet,
    sheet: &str,
    sender: &SenderDays,
    opts: &ReportOptions,
    styles: &Styles,
    stats: &mut ReportStats,
) {
    // ---------------------------
    // Header
    // ---------------------------
    // Slots past the last Excel column get no header; their cells are
    // reported one by one in the row loop.
    let mut headers = opts.header_labels(sender.max_entries());
    headers.truncate(MAX_COLUMNS);

    for (col, header) in headers.iter().enumerate() {
        let written = u16::try_from(col)
            .map_err(|e| e.to_string())
            .and_then(|c| {
                worksheet
                    .write_with_format(0, c, header.as_str(), &styles.header)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            });
        if let Err(e) = written {
            report_cell_error(sheet, 0, col, e, stats);
        }
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let col_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(c, h)| {
            let min = if c == 0 { DATE_COL_WIDTH } else { TIME_COL_WIDTH };
            UnicodeWidthStr::width(h.as_str()).max(min)
        })
        .collect();

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    let mut row: u32 = 1;

    for day in sender.days() {
        let Some(date_serial) = date_to_excel_serial(day.date) else {
            let e = AppError::InvalidGroupedDateKey(format_date(day.date));
            warning(format!("Sheet '{sheet}': {e}, row skipped"));
            stats.skipped_dates += 1;
            continue;
        };

        let band = ((row - 1) % 2) as usize;

        if let Err(e) = worksheet.write_with_format(row, 0, date_serial, &styles.date[band]) {
            report_cell_error(sheet, row, 0, e, stats);
        }

        for (i, entry) in day.entries.iter().enumerate() {
            let reconciled = entry.reconcile(opts.tolerance_minutes);
            let fmt = if reconciled.adjusted {
                &styles.adjusted
            } else {
                &styles.time[band]
            };

            let Some(col) = u16::try_from(i + 1).ok().filter(|&c| usize::from(c) < MAX_COLUMNS)
            else {
                report_cell_error(sheet, row, i + 1, "beyond the last Excel column", stats);
                continue;
            };

            match worksheet.write_with_format(row, col, time_to_excel_serial(reconciled.time), fmt)
            {
                Ok(_) => {
                    stats.cells += 1;
                    if reconciled.adjusted {
                        stats.adjusted += 1;
                    }
                }
                Err(e) => report_cell_error(sheet, row, i + 1, e, stats),
            }
        }

        stats.rows += 1;
        row += 1;
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        let Ok(col) = u16::try_from(c) else {
            break;
        };
        if let Err(e) = worksheet.set_column_width(col, *w as f64 + 2.0) {
            warning(format!("Sheet '{sheet}': cannot size column {}: {e}", c + 1));
        }
    }
}

fn report_cell_error<E: std::fmt::Display>(
    sheet: &str,
    row: u32,
    col: usize,
    e: E,
    stats: &mut ReportStats,
) {
    let err = AppError::RowWrite(format!("sheet '{sheet}', row {}, column {}: {e}", row + 1, col + 1));
    warning(err.to_string());
    stats.skipped_cells += 1;
}
