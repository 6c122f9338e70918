use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::run_report;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use std::fs::File;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        source,
        output,
        format,
        force,
    } = cmd
    {
        let mut cfg = cfg.clone();
        source.apply(&mut cfg);
        if let Some(out) = output {
            cfg.output = out.clone();
        }
        if let Some(f) = format {
            cfg.format = *f;
        }
        cfg.validate()?;

        let input = cfg.input_path();
        let output = cfg.output_path();

        // An unreadable input must fail before any overwrite prompt.
        File::open(&input).map_err(|source| AppError::FileAccess {
            path: input.clone(),
            source,
        })?;
        ensure_writable(&output, *force)?;

        run_report(
            &input,
            &output,
            cfg.format,
            &cfg.line_parser(),
            &cfg.report_options(),
        )?;
    }
    Ok(())
}
