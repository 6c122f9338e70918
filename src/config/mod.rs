use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ReportOptions};
use crate::models::LineFormat;
use crate::parser::LineParser;
use crate::utils::date::current_year;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Longest tolerance accepted: one full day.
const MAX_TOLERANCE_MINUTES: u32 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: String,
    pub output: String,
    pub tolerance_minutes: u32,
    pub line_format: LineFormat,
    pub default_year: i32,
    pub entrance_label: String,
    pub exit_label: String,
    pub format: ExportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: "./input/chat.txt".to_string(),
            output: "./output/attendance.xlsx".to_string(),
            tolerance_minutes: 2,
            line_format: LineFormat::Dash,
            default_year: current_year(),
            entrance_label: "Entrance".to_string(),
            exit_label: "Exit".to_string(),
            format: ExportFormat::Xlsx,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Missing file → defaults; missing fields → their defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.tolerance_minutes > MAX_TOLERANCE_MINUTES {
            return Err(AppError::Config(format!(
                "tolerance_minutes must be at most {MAX_TOLERANCE_MINUTES}, got {}",
                self.tolerance_minutes
            )));
        }
        if self.entrance_label.trim().is_empty() || self.exit_label.trim().is_empty() {
            return Err(AppError::Config(
                "entrance_label and exit_label must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn input_path(&self) -> PathBuf {
        expand_tilde(&self.input)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output)
    }

    pub fn line_parser(&self) -> LineParser {
        LineParser::new(self.line_format, self.default_year)
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            tolerance_minutes: self.tolerance_minutes,
            entrance_label: self.entrance_label.clone(),
            exit_label: self.exit_label.clone(),
        }
    }
}
