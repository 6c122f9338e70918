// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{SenderReport, stats_for};
use crate::export::{ReportOptions, ReportStats, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(report: &[SenderReport], path: &Path) -> AppResult<ReportStats> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)?;

    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(json_data.as_bytes())?;
    file.flush()?;

    notify_export_success("JSON", path);
    Ok(stats_for(report))
}

/// Export CSV: una riga per sender+data, slot riempiti fino alla giornata più lunga.
pub(crate) fn export_csv(
    report: &[SenderReport],
    opts: &ReportOptions,
    path: &Path,
) -> AppResult<ReportStats> {
    info(format!("Exporting to CSV: {}", path.display()));

    let max_entries = report
        .iter()
        .flat_map(|s| s.days.iter())
        .map(|d| d.times.len())
        .max()
        .unwrap_or(0);
    let headers = opts.header_labels(max_entries);
    let slots = headers.len() - 1;

    let mut wtr = csv::Writer::from_path(path)?;

    let mut header_row = vec!["Sender".to_string()];
    header_row.extend(headers);
    wtr.write_record(&header_row)?;

    for sender in report {
        for day in &sender.days {
            let mut record = Vec::with_capacity(2 + slots);
            record.push(sender.sender.clone());
            record.push(day.date.clone());
            record.extend(day.times.iter().map(|t| t.marked()));
            record.resize(2 + slots, String::new());
            wtr.write_record(&record)?;
        }
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(stats_for(report))
}
