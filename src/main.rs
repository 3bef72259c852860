use anyhow::Result;
use clap::Parser;
use shelfsort::cli::{AppContext, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so piped CSV output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::Clean(args) => shelfsort::cli_ext::clean_cmd::run(args, &ctx),
        Commands::Rank(args) => shelfsort::cli_ext::rank_cmd::run(args, &ctx),
        Commands::Init(args) => shelfsort::infra::config::init(args, &ctx),
        Commands::Completions(args) => shelfsort::completion::run(args, &ctx),
    }
}
