// src/export/logic.rs

use crate::core::group::GroupedMessages;
use crate::errors::{AppError, AppResult};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::build_report;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ReportOptions, ReportStats};
use std::fs;
use std::path::Path;

/// Logica di alto livello per la scrittura del report.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes `grouped` to `path` in the requested format.
    ///
    /// The destination is created or overwritten, together with any missing
    /// parent directory.
    pub fn export(
        grouped: &GroupedMessages,
        format: ExportFormat,
        opts: &ReportOptions,
        path: &Path,
    ) -> AppResult<ReportStats> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir()
        {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Export(format!("Cannot create {}: {e}", parent.display()))
            })?;
        }

        match format {
            ExportFormat::Xlsx => export_xlsx(grouped, opts, path),
            ExportFormat::Csv => {
                let report = build_report(grouped, opts.tolerance_minutes);
                export_csv(&report, opts, path)
            }
            ExportFormat::Json => {
                let report = build_report(grouped, opts.tolerance_minutes);
                export_json(&report, path)
            }
        }
    }
}
