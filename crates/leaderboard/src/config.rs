use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Ranked badge and arcade leaderboard server", long_about = None)]
pub struct Cli {
    /// Spreadsheet or CSV file holding the participant table
    #[arg(long, env = "LEADERBOARD_SOURCE", default_value = "data.xlsx", global = true)]
    pub source: PathBuf,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the leaderboard data and display page over HTTP
    Serve(ServeArgs),
    /// Load the leaderboard once and print it
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Presentation page served at `/` and `/display.html`
    #[arg(long, env = "LEADERBOARD_DISPLAY", default_value = "display.html")]
    pub display: PathBuf,
}

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Print the snapshot as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
