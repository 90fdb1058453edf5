use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "fgrule-extract")]
#[command(about = "Extract firewall rule names from FortiGate 7.2.x configuration files")]
pub struct Cli {
    /// Path to the FortiGate configuration file.
    pub config_file: PathBuf,
    /// Output file path (default: stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Detailed)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Detailed,
    Csv,
}
