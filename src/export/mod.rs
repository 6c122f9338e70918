// src/export/mod.rs

mod excel_date;
pub(crate) mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
mod sheet_name;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{DayReport, SenderReport, TimeCell, build_report};
pub use sheet_name::{MAX_SHEET_NAME_LEN, SheetNamer};

use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} report completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Rendering parameters shared by every report format.
#[derive(Clone, Debug)]
pub struct ReportOptions {
    pub tolerance_minutes: u32,
    pub entrance_label: String,
    pub exit_label: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            tolerance_minutes: 2,
            entrance_label: "Entrance".to_string(),
            exit_label: "Exit".to_string(),
        }
    }
}

impl ReportOptions {
    /// `Date` followed by enough Entrance/Exit pairs for `max_entries` slots
    /// (always at least one pair).
    pub fn header_labels(&self, max_entries: usize) -> Vec<String> {
        let pairs = max_entries.div_ceil(2).max(1);
        let mut headers = Vec::with_capacity(1 + pairs * 2);
        headers.push("Date".to_string());
        for _ in 0..pairs {
            headers.push(self.entrance_label.clone());
            headers.push(self.exit_label.clone());
        }
        headers
    }
}

/// What ended up in the written report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub sheets: usize,
    pub rows: usize,
    pub cells: usize,
    pub adjusted: usize,
    pub skipped_dates: usize,
    pub skipped_cells: usize,
}
