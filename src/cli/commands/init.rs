use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if config_path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            )));
        }

        let cfg = Config::default();
        cfg.save_to(config_path)?;

        success(format!("Config file: {}", config_path.display()));
        info(format!("Input:  {}", cfg.input));
        info(format!("Output: {}", cfg.output));
    }
    Ok(())
}
