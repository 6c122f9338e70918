// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Excel serial of a date, or `None` when Excel cannot show it
/// (anything before 1900-01-01).
pub(crate) fn date_to_excel_serial(d: NaiveDate) -> Option<f64> {
    let first = NaiveDate::from_ymd_opt(1900, 1, 1)?;
    if d < first {
        return None;
    }

    // Excel counts the non-existent 1900-02-29, so serials from March on
    // are one day ahead of a plain day count from 1899-12-31.
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let leap_bug = NaiveDate::from_ymd_opt(1900, 3, 1)?;

    let mut days = (d - excel_epoch).num_days();
    if d < leap_bug {
        days -= 1;
    }

    Some(days as f64)
}

/// Fraction of a day, as Excel stores a time of day.
pub(crate) fn time_to_excel_serial(t: NaiveTime) -> f64 {
    let seconds = t.num_seconds_from_midnight() as f64;
    seconds / 86400.0
}
