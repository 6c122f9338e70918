//! Single-line grammar for exported chat logs.

use crate::errors::{AppError, AppResult};
use crate::models::{LineFormat, MessageRecord};
use crate::parser::extract::try_extract_time;
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

/// `DD/MM/YYYY HH:MM - Sender: Message`
static DASH_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}/\d{2}/\d{4}) (\d{2}:\d{2}) - ([^:]+):(.*)$").expect("valid dash line regex")
});

/// `[DD/MM, HH:MM] Sender: Message`
static BRACKET_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d{2}/\d{2}), (\d{2}:\d{2})\] ([^:]+):(.*)$")
        .expect("valid bracket line regex")
});

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// A matched line together with the non-fatal problem found in its body.
#[derive(Debug)]
pub struct ParsedLine {
    pub record: MessageRecord,
    /// Set when the first `HH:MM` token of the message was not a valid time.
    pub extract_error: Option<AppError>,
}

#[derive(Debug, Clone, Copy)]
pub struct LineParser {
    format: LineFormat,
    default_year: i32,
}

impl LineParser {
    /// `default_year` is only used by [`LineFormat::Bracket`], whose dates
    /// carry no year.
    pub fn new(format: LineFormat, default_year: i32) -> Self {
        Self {
            format,
            default_year,
        }
    }

    /// - `Ok(Some(record))` → line accepted
    /// - `Ok(None)` → not a message line (continuation, system notice, …)
    /// - `Err(MalformedTimestamp)` → shaped like a message but the date/time is impossible
    pub fn parse_line(&self, line: &str) -> AppResult<Option<MessageRecord>> {
        Ok(self.parse_line_detailed(line)?.map(|p| p.record))
    }

    pub fn parse_line_detailed(&self, line: &str) -> AppResult<Option<ParsedLine>> {
        let line = line.trim_start_matches('\u{feff}').trim_end_matches(['\r', '\n']);

        let (re, with_year) = match self.format {
            LineFormat::Dash => (&*DASH_LINE_RE, false),
            LineFormat::Bracket => (&*BRACKET_LINE_RE, true),
        };

        let Some(caps) = re.captures(line) else {
            return Ok(None);
        };

        let sender = caps[3].trim();
        if sender.is_empty() {
            return Ok(None);
        }

        let date_str = if with_year {
            format!("{}/{}", &caps[1], self.default_year)
        } else {
            caps[1].to_string()
        };
        let stamp = format!("{} {}", date_str, &caps[2]);

        let dt = NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT)
            .map_err(|_| AppError::MalformedTimestamp(stamp.clone()))?;

        let message = caps[4].trim();
        let (extracted_time, extract_error) = match try_extract_time(message) {
            Ok(t) => (t, None),
            Err(e) => (None, Some(e)),
        };

        Ok(Some(ParsedLine {
            record: MessageRecord::new(dt.date(), dt.time(), sender, extracted_time),
            extract_error,
        }))
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new(LineFormat::Dash, crate::utils::date::current_year())
    }
}
