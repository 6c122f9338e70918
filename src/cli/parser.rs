use crate::config::Config;
use crate::export::ExportFormat;
use crate::models::LineFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rattendance
/// CLI application that turns chat exports into attendance spreadsheets
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn exported chat logs into per-person attendance spreadsheets",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Only print warnings and errors
    #[arg(global = true, long, short = 'q')]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that reads a chat export.
#[derive(Args, Clone, Debug, Default)]
pub struct SourceArgs {
    /// Chat export to read (UTF-8 text)
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<String>,

    /// Minimum minutes a reported time must precede the send time to replace it
    #[arg(long, short = 't', value_name = "MIN")]
    pub tolerance: Option<u32>,

    /// Layout of the exported lines
    #[arg(long = "line-format", value_enum)]
    pub line_format: Option<LineFormat>,

    /// Year used for dates without one (bracket layout)
    #[arg(long, value_name = "YYYY")]
    pub year: Option<i32>,
}

impl SourceArgs {
    /// Command-line values take precedence over the configuration file.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(input) = &self.input {
            cfg.input = input.clone();
        }
        if let Some(t) = self.tolerance {
            cfg.tolerance_minutes = t;
        }
        if let Some(f) = self.line_format {
            cfg.line_format = f;
        }
        if let Some(y) = self.year {
            cfg.default_year = y;
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Build the attendance report from a chat export
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Destination file (created or overwritten)
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(long, short = 'f', help = "Overwrite the output without asking")]
        force: bool,
    },

    /// Print the reconciled times on the console
    Preview {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, help = "Show only this sender")]
        sender: Option<String>,

        #[arg(long = "no-color", help = "Disable highlighting of adjusted times")]
        no_color: bool,
    },
}
