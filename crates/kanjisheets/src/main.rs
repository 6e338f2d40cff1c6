//! Creates kanji study sheets from the lecture lists in `<root>/in`.

use clap::Parser;
use eyre::WrapErr;
use kanjisheets::{cli::Cli, config::Config};

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().wrap_err("Failed to get the current directory")?,
    };
    let config = Config::from_root(&root, cli.refresh)?;
    tracing::debug!("{config:#?}");

    kanjisheets::run(&config)
}
