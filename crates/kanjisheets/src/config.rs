//! Resolved paths for a run.

use crate::format::ImageTemplate;
use eyre::WrapErr;
use kanjidata::CachePaths;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub cache: CachePaths,
    pub image_template: ImageTemplate,
    pub refresh: bool,
}

impl Config {
    /// Lays out the conventional directories below `root`:
    /// lecture lists in `in/`, sheets and the cache in `out/`,
    /// and KanjiVG checked out next to `root`.
    pub fn from_root(root: &Path, refresh: bool) -> eyre::Result<Self> {
        let root = absolute(root)?;
        let output_dir = root.join("out");
        let kanjivg_dir = root
            .parent()
            .unwrap_or(&root)
            .join("kanjivg")
            .join("kanji");
        Ok(Self {
            input_dir: root.join("in"),
            cache: CachePaths::in_dir(&output_dir),
            output_dir,
            image_template: ImageTemplate::new(kanjivg_dir),
            refresh,
        })
    }
}

fn absolute(path: &Path) -> eyre::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().wrap_err("Failed to get the current directory")?;
        Ok(cwd.join(path))
    }
}
