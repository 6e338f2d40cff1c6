//! Scans and parses the lecture lists, the user's lists of kanji to study.
//!
//! Each list is a `;`-separated table without a header:
//! `kanji;german meaning;on readings;kun readings`, where the readings may be left empty.

use eyre::{eyre, WrapErr};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FIELDS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub kanji: String,
    pub meaning_de: String,
    pub on_raw: String,
    pub kun_raw: String,
}

#[derive(Debug, Clone)]
pub struct Lecture {
    pub path: PathBuf,
    pub rows: Vec<InputRow>,
}

/// Parses every regular file below `input_root`.
/// Files are visited depth-first, in file name order within a directory.
pub fn scan(input_root: &Path) -> eyre::Result<Vec<Lecture>> {
    let mut files = vec![];
    collect_files(input_root, &mut files);

    let mut lectures = vec![];
    for path in files {
        // files that vanished or can't be read are treated as absent
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::debug!("skipping {}: {err}", path.display());
                continue;
            }
        };
        let contents = String::from_utf8(contents)
            .wrap_err_with(|| format!("'{}' is not valid UTF-8", path.display()))?;
        let rows = parse(&contents)
            .wrap_err_with(|| format!("Failed to parse lecture '{}'", path.display()))?;
        tracing::debug!("read {} rows from {}", rows.len(), path.display());
        lectures.push(Lecture { path, rows });
    }
    Ok(lectures)
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    let mut entries = entries.filter_map(Result::ok).collect::<Vec<_>>();
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        // skip hidden entries such as .DS_Store or .git
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        match entry.file_type() {
            Ok(ft) if ft.is_dir() => collect_files(&path, files),
            // symlinks are followed to files but not to directories
            Ok(_) if path.is_file() => files.push(path),
            _ => {}
        }
    }
}

/// Parses the contents of a single lecture list.
pub fn parse(contents: &str) -> eyre::Result<Vec<InputRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.trim().as_bytes());

    let mut rows = vec![];
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        if record.len() != FIELDS {
            return Err(eyre!(
                "line {line}: expected {FIELDS} fields, found {}",
                record.len()
            ));
        }
        rows.push(InputRow {
            kanji: record[0].to_string(),
            meaning_de: record[1].to_string(),
            on_raw: record[2].to_string(),
            kun_raw: record[3].to_string(),
        });
    }
    Ok(rows)
}
