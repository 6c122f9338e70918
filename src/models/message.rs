use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One accepted chat line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    pub date: NaiveDate,                   // ⇔ DD/MM/YYYY prefix
    pub time: NaiveTime,                   // ⇔ HH:MM prefix (send time)
    pub sender: String,                    // ⇔ text before the first ':' (trimmed)
    pub extracted_time: Option<NaiveTime>, // ⇔ first HH:MM token in the body
}

impl MessageRecord {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        sender: impl Into<String>,
        extracted_time: Option<NaiveTime>,
    ) -> Self {
        Self {
            date,
            time,
            sender: sender.into(),
            extracted_time,
        }
    }

    /// Leaf view used once sender and date have become grouping keys.
    pub fn entry(&self) -> TimeEntry {
        TimeEntry {
            time: self.time,
            extracted_time: self.extracted_time,
        }
    }
}

/// Time data kept for a record after grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeEntry {
    pub time: NaiveTime,
    pub extracted_time: Option<NaiveTime>,
}
