use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use costar_cli::{execute, OutputFormat, Overrides, Query, Session, Settings};

#[derive(Debug, Parser)]
#[command(name = "costar", version, about = "Co-star paths through a movie/cast dataset")]
struct Cli {
    /// JSON dataset: an array of {"title", "cast"} objects ("-" for stdin)
    #[arg(long, env = "COSTAR_DATASET")]
    dataset: Option<PathBuf>,

    /// Maximum relationship length, in edges
    #[arg(long, env = "COSTAR_MAX_LENGTH")]
    max_length: Option<usize>,

    /// Separator placed between vertices of a rendered path
    #[arg(long, env = "COSTAR_SEPARATOR")]
    separator: Option<String>,

    /// TOML settings file (defaults to ./costar.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    query: Query,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", level)).init();

    let overrides = Overrides {
        dataset: cli.dataset,
        max_length: cli.max_length,
        separator: cli.separator,
    };
    let settings = Settings::load(&overrides, cli.config.as_deref())?;
    let session = Session::load(&settings.dataset)?;

    let output = execute(&cli.query, &session, &settings, cli.format)?;
    println!("{}", output);
    Ok(())
}
