use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::group::group_messages;
use crate::core::preview::render_preview;
use crate::errors::AppResult;
use crate::parser::read_chat_file;
use crate::ui::messages::{header, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview {
        source,
        sender,
        no_color,
    } = cmd
    {
        let mut cfg = cfg.clone();
        source.apply(&mut cfg);
        cfg.validate()?;

        let input = cfg.input_path();
        let chat = read_chat_file(&input, &cfg.line_parser())?;
        let mut grouped = group_messages(&chat.records);

        if let Some(name) = sender {
            grouped = grouped.only_sender(name);
            if grouped.is_empty() {
                warning(format!("No messages from '{name}'"));
                return Ok(());
            }
        } else if grouped.is_empty() {
            warning("No attendance messages found.");
            return Ok(());
        }

        header(format!(
            "Attendance preview (tolerance {} min)",
            cfg.tolerance_minutes
        ));
        print!(
            "{}",
            render_preview(&grouped, &cfg.report_options(), !no_color)
        );
    }
    Ok(())
}
