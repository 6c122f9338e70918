//! Locates a self-reported `HH:MM` time inside a message body.

use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static MESSAGE_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2}:\d{2})\b").expect("valid message time regex"));

/// Returns the first `HH:MM` token of `message`, if it is a real time.
///
/// Only the first token is considered: `"chegada 08:32 confirmada 09:00"`
/// yields `08:32`, and `"99:99 then 08:00"` yields `None`.
pub fn extract_time(message: &str) -> Option<NaiveTime> {
    try_extract_time(message).ok().flatten()
}

/// Same as [`extract_time`] but reports a first token that looks like a
/// time yet is not one (e.g. `25:61`).
pub fn try_extract_time(message: &str) -> AppResult<Option<NaiveTime>> {
    let Some(caps) = MESSAGE_TIME_RE.captures(message) else {
        return Ok(None);
    };

    let token = &caps[1];
    parse_time(token)
        .map(Some)
        .ok_or_else(|| AppError::InvalidExtractedTime(token.to_string()))
}
