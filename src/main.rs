use anyhow::Context;
use clap::Parser;
use shelfdb::{menu, Catalog, LoadStatus, MenuExit, Options};
use std::io;
use std::path::PathBuf;

/// shelf: keep a small book catalog sorted by id in a JSON file
#[derive(Parser)]
#[command(name = "shelf")]
#[command(version)]
#[command(about = "Interactive book catalog backed by a JSON file")]
struct Cli {
    /// Catalog file to load at start and save on exit
    #[arg(short, long, default_value = shelfdb::config::DEFAULT_CATALOG_FILE)]
    file: PathBuf,

    /// Spaces of indentation in the saved file
    #[arg(long, default_value_t = shelfdb::config::DEFAULT_INDENT)]
    indent: usize,

    /// Fail instead of starting empty when the catalog file is missing
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = Options::new().path(&cli.file).indent(cli.indent).error_if_missing(cli.strict);
    let (mut catalog, status) = Catalog::open_with_status(options)
        .with_context(|| format!("failed to open catalog {}", cli.file.display()))?;

    if status == LoadStatus::StartedEmpty {
        println!("File not found. Starting with an empty library.");
    }

    let stdin = io::stdin();
    let exit = menu::run(&mut catalog, stdin.lock(), io::stdout())
        .with_context(|| format!("catalog session on {} failed", cli.file.display()))?;

    if exit == MenuExit::EndOfInput {
        log::warn!("Input closed before save; {} was not written", cli.file.display());
    }

    Ok(())
}
