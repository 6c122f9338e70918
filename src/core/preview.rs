//! Console rendering of the reconciled report.

use crate::core::group::{GroupedMessages, SenderDays};
use crate::export::ReportOptions;
use crate::utils::date::format_date;
use crate::utils::table::{Cell, Table};
use crate::utils::time::format_time;
use ansi_term::Colour;

/// Table for one sender; adjusted times end with `*` and, when `color` is
/// set, are highlighted.
pub fn render_sender(sender: &SenderDays, opts: &ReportOptions, color: bool) -> String {
    let mut table = Table::new(opts.header_labels(sender.max_entries()));

    for day in sender.days() {
        let mut row = vec![Cell::plain(format_date(day.date))];

        for entry in &day.entries {
            let r = entry.reconcile(opts.tolerance_minutes);
            let text = format_time(r.time);

            row.push(match (r.adjusted, color) {
                (false, _) => Cell::plain(text),
                (true, false) => Cell::plain(format!("{text}*")),
                (true, true) => {
                    let marked = format!("{text}*");
                    let styled = Colour::Yellow.bold().paint(marked.as_str()).to_string();
                    Cell::styled(marked, styled)
                }
            });
        }

        table.add_row(row);
    }

    table.render()
}

/// All senders, each preceded by its name.
pub fn render_preview(grouped: &GroupedMessages, opts: &ReportOptions, color: bool) -> String {
    let mut out = String::new();

    for sender in grouped.senders() {
        let title = if color {
            Colour::Blue.bold().paint(sender.name()).to_string()
        } else {
            sender.name().to_string()
        };
        out.push_str(&format!("== {title}\n"));
        out.push_str(&render_sender(sender, opts, color));
        out.push('\n');
    }

    out
}
