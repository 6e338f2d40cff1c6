//! The on-disk cache of the reference dictionary.

use crate::dictionary::ReferenceDictionary;
use eyre::WrapErr;
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Where the dictionary and the license of its source are cached.
#[derive(Debug, Clone)]
pub struct CachePaths {
    pub dictionary: PathBuf,
    pub license: PathBuf,
}

impl CachePaths {
    /// `kanjidata.json` and `kanjidata.license.html` in the given directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            dictionary: dir.join("kanjidata.json"),
            license: dir.join("kanjidata.license.html"),
        }
    }
}

pub fn read(path: &Path) -> eyre::Result<ReferenceDictionary> {
    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open cache at '{}'", path.display()))?;
    let dictionary = serde_json::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("Failed to deserialize cache at '{}'", path.display()))?;
    Ok(dictionary)
}

pub fn write(path: &Path, dictionary: &ReferenceDictionary) -> eyre::Result<()> {
    create_parent(path)?;
    let file = File::create(path)
        .wrap_err_with(|| format!("Failed to create cache at '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, dictionary)?;
    writer.flush()?;
    Ok(())
}

pub fn write_license(path: &Path, license: &str) -> eyre::Result<()> {
    create_parent(path)?;
    fs::write(path, license)
        .wrap_err_with(|| format!("Failed to write license to '{}'", path.display()))?;
    Ok(())
}

fn create_parent(path: &Path) -> eyre::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    Ok(())
}
