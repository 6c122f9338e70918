use crate::errors::AppError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout of the exported chat lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineFormat {
    /// `DD/MM/YYYY HH:MM - Sender: Message`
    #[default]
    Dash,
    /// `[DD/MM, HH:MM] Sender: Message` (year taken from the configuration)
    Bracket,
}

impl LineFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineFormat::Dash => "dash",
            LineFormat::Bracket => "bracket",
        }
    }
}

impl fmt::Display for LineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dash" => Ok(LineFormat::Dash),
            "bracket" => Ok(LineFormat::Bracket),
            other => Err(AppError::InvalidLineFormat(other.to_string())),
        }
    }
}
