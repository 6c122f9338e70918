// src/export/model.rs

use crate::core::group::GroupedMessages;
use crate::export::ReportStats;
use crate::utils::date::iso_date;
use crate::utils::time::format_time;
use serde::Serialize;

/// Struttura "piatta" di una cella oraria riconciliata.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TimeCell {
    pub time: String,
    pub adjusted: bool,
    pub logged: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayReport {
    pub date: String,
    pub times: Vec<TimeCell>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SenderReport {
    pub sender: String,
    pub days: Vec<DayReport>,
}

impl TimeCell {
    /// Text used by the CSV export: adjusted times carry a trailing `*`.
    pub fn marked(&self) -> String {
        if self.adjusted {
            format!("{}*", self.time)
        } else {
            self.time.clone()
        }
    }
}

/// Reconciles every entry, keeping sender, date and slot order.
pub fn build_report(grouped: &GroupedMessages, tolerance_minutes: u32) -> Vec<SenderReport> {
    grouped
        .senders()
        .iter()
        .map(|s| SenderReport {
            sender: s.name().to_string(),
            days: s
                .days()
                .iter()
                .map(|d| DayReport {
                    date: iso_date(d.date),
                    times: d
                        .entries
                        .iter()
                        .map(|e| {
                            let r = e.reconcile(tolerance_minutes);
                            TimeCell {
                                time: format_time(r.time),
                                adjusted: r.adjusted,
                                logged: format_time(e.time),
                            }
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

pub(crate) fn stats_for(report: &[SenderReport]) -> ReportStats {
    let mut stats = ReportStats {
        sheets: report.len(),
        ..Default::default()
    };
    for day in report.iter().flat_map(|s| s.days.iter()) {
        stats.rows += 1;
        stats.cells += day.times.len();
        stats.adjusted += day.times.iter().filter(|t| t.adjusted).count();
    }
    stats
}
