use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a config file (default: nearest revload.toml walking up from cwd)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an example revload.toml into the current directory
    Init,

    /// Build the reviewer workload report from a JSON dump of pull requests
    Report(ReportArgs),

    /// Print various information about configuration and badges
    Print {
        #[command(subcommand)]
        command: PrintArgs,
    },
}

/// Arguments for the report command
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// JSON file with pull requests ('-' or omitted reads stdin).
    /// Either an array of PRs or an object with a "value" array.
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Count optional reviewers too (adds Optional and Total columns).
    /// Replaces config [report].required_only if provided.
    #[arg(long)]
    pub all_reviewers: bool,

    /// Minimum width of the name column.
    /// Replaces config [report].name_width if provided.
    #[arg(long)]
    pub name_width: Option<usize>,

    /// Seed for the badge pick, for reproducible output.
    /// Replaces config [report].seed if provided.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not feature a badge under the table
    #[arg(long)]
    pub no_badge: bool,

    /// Comma-separated repository globs; only matching PRs are counted.
    /// Replaces config [scope].repositories if provided.
    #[arg(long)]
    pub repositories: Option<String>,

    /// Only count PRs with this status (e.g. "active").
    /// Replaces config [scope].status if provided.
    #[arg(long)]
    pub status: Option<String>,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the print command
#[derive(Subcommand, Debug)]
pub enum PrintArgs {
    /// Print the effective global configuration
    Config(PrintConfigArgs),

    /// List the badges in precedence order with their conditions
    Badges(PrintBadgesArgs),
}

/// Arguments for the print config subcommand
#[derive(Parser, Debug)]
pub struct PrintConfigArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the print badges subcommand
#[derive(Parser, Debug)]
pub struct PrintBadgesArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}
