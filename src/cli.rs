use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
}

#[derive(Parser)]
#[command(name = "shelfsort")]
#[command(
    about = "A small, deterministic CLI for cleaning library catalog exports and deriving LC call number shelf order"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Show what would be done without executing
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean catalog fields and extract call numbers from availability strings
    Clean(CleanArgs),

    /// Clean catalog fields and add a shelf-order rank column
    Rank(RankArgs),

    /// Initialize a shelfsort.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Input catalog export (CSV)
    pub input: PathBuf,

    /// Output file path (defaults to the configured clean.output_file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RankArgs {
    /// Input catalog export (CSV)
    pub input: PathBuf,

    /// Output file path (defaults to the configured rank.output_file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the emitted rank column
    #[arg(long)]
    pub rank_field: Option<String>,

    /// Emit rows in shelf order instead of input order
    #[arg(long)]
    pub sorted: bool,

    /// Output results in JSON format (single line)
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory; if omitted and --stdout not set, prints error
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print completion script to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}
