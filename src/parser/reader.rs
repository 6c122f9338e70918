use crate::errors::{AppError, AppResult};
use crate::models::MessageRecord;
use crate::parser::line::LineParser;
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::Path;

/// Outcome of reading a whole chat export.
#[derive(Debug, Default)]
pub struct ParsedChat {
    /// Accepted records, in file order.
    pub records: Vec<MessageRecord>,
    /// Lines that are not messages at all.
    pub ignored: usize,
    /// Message lines dropped because of an impossible date/time.
    pub malformed: usize,
    /// Accepted lines whose embedded time was unusable.
    pub invalid_extracted: usize,
}

/// Reads `path` and parses every line.
///
/// Only a file that cannot be opened or decoded is an error; every per-line
/// problem is reported on the console and skipped.
pub fn read_chat_file(path: &Path, parser: &LineParser) -> AppResult<ParsedChat> {
    let content = fs::read_to_string(path).map_err(|source| AppError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    info(format!("Reading chat export: {}", path.display()));

    Ok(parse_lines(content.lines(), parser))
}

/// Parses an already loaded sequence of lines.
pub fn parse_lines<'a, I>(lines: I, parser: &LineParser) -> ParsedChat
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = ParsedChat::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line_no = idx + 1;

        match parser.parse_line_detailed(line) {
            Ok(Some(parsed)) => {
                if let Some(e) = parsed.extract_error {
                    warning(format!("Line {line_no}: {e}, using the logged time"));
                    out.invalid_extracted += 1;
                }
                out.records.push(parsed.record);
            }
            Ok(None) => out.ignored += 1,
            Err(e) => {
                warning(format!("Line {line_no} skipped: {e}"));
                out.malformed += 1;
            }
        }
    }

    out
}
