// src/export/sheet_name.rs

use std::collections::HashSet;

/// Excel limit for worksheet names.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Hands out valid, workbook-unique worksheet names.
#[derive(Debug)]
pub struct SheetNamer {
    used: HashSet<String>,
}

impl Default for SheetNamer {
    fn default() -> Self {
        // "History" is reserved by Excel.
        Self {
            used: HashSet::from(["history".to_string()]),
        }
    }
}

impl SheetNamer {
    pub fn unique(&mut self, sender: &str) -> String {
        let base = sanitize(sender);

        if self.used.insert(base.to_lowercase()) {
            return base;
        }

        let mut n = 2usize;
        loop {
            let suffix = format!(" ({n})");
            let keep = MAX_SHEET_NAME_LEN - suffix.chars().count();
            let candidate = format!("{}{suffix}", truncate_chars(&base, keep).trim_end());
            if self.used.insert(candidate.to_lowercase()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Replaces forbidden characters and clips to [`MAX_SHEET_NAME_LEN`].
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) || c.is_control() { '_' } else { c })
        .collect();

    let clipped = truncate_chars(cleaned.trim_matches('\''), MAX_SHEET_NAME_LEN);
    let clipped = clipped.trim_matches('\'').trim();

    if clipped.is_empty() {
        "Sheet".to_string()
    } else {
        clipped.to_string()
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
