//! Sender → date → entries grouping, in arrival order.

use crate::models::{MessageRecord, TimeEntry};
use chrono::NaiveDate;
use std::collections::HashMap;

/// All entries of one sender on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntries {
    pub date: NaiveDate,
    pub entries: Vec<TimeEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct SenderDays {
    name: String,
    days: Vec<DayEntries>,
    index: HashMap<NaiveDate, usize>,
}

impl SenderDays {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn push(&mut self, date: NaiveDate, entry: TimeEntry) {
        let pos = match self.index.get(&date) {
            Some(&pos) => pos,
            None => {
                self.days.push(DayEntries {
                    date,
                    entries: Vec::new(),
                });
                self.index.insert(date, self.days.len() - 1);
                self.days.len() - 1
            }
        };
        self.days[pos].entries.push(entry);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dates in the order they first appeared.
    pub fn days(&self) -> &[DayEntries] {
        &self.days
    }

    pub fn entries(&self, date: NaiveDate) -> Option<&[TimeEntry]> {
        self.index
            .get(&date)
            .map(|&pos| self.days[pos].entries.as_slice())
    }

    /// Number of entries on the busiest date.
    pub fn max_entries(&self) -> usize {
        self.days.iter().map(|d| d.entries.len()).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GroupedMessages {
    senders: Vec<SenderDays>,
    index: HashMap<String, usize>,
}

impl GroupedMessages {
    /// Senders in the order they first appeared.
    pub fn senders(&self) -> &[SenderDays] {
        &self.senders
    }

    pub fn sender(&self, name: &str) -> Option<&SenderDays> {
        self.index.get(name).map(|&pos| &self.senders[pos])
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }

    /// Number of entries on the busiest date of any sender.
    pub fn max_entries(&self) -> usize {
        self.senders
            .iter()
            .map(SenderDays::max_entries)
            .max()
            .unwrap_or(0)
    }

    /// Keeps only the named sender (used by the console preview).
    pub fn only_sender(&self, name: &str) -> GroupedMessages {
        let mut out = GroupedMessages::default();
        if let Some(s) = self.sender(name) {
            out.index.insert(s.name.clone(), 0);
            out.senders.push(s.clone());
        }
        out
    }
}

/// Groups records by sender, then by date.
///
/// Records are only read; sender and date become keys and the leaves keep
/// just the time data.
pub fn group_messages(records: &[MessageRecord]) -> GroupedMessages {
    let mut grouped = GroupedMessages::default();

    for rec in records {
        let pos = match grouped.index.get(rec.sender.as_str()) {
            Some(&pos) => pos,
            None => {
                grouped.senders.push(SenderDays::new(&rec.sender));
                grouped
                    .index
                    .insert(rec.sender.clone(), grouped.senders.len() - 1);
                grouped.senders.len() - 1
            }
        };
        grouped.senders[pos].push(rec.date, rec.entry());
    }

    grouped
}
