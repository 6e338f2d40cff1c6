use clap::Parser;
use std::path::PathBuf;

/// Builds kanji study sheets from the lecture lists in `<root>/in`.
#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// The directory containing `in/` and `out/`. Defaults to the current directory.
    #[arg(short, long, env = "KANJISHEETS_ROOT")]
    pub root: Option<PathBuf>,
    /// Fetch KANJIDIC2 again even if a cached copy exists.
    #[arg(long)]
    pub refresh: bool,
}
