//! Writes the study sheets.

use crate::enrich::OutputRow;
use eyre::WrapErr;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const ALL: &str = "all";

/// A finished sheet for one lecture list.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub source: PathBuf,
    pub rows: Vec<OutputRow>,
}

/// Writes `<stem>.csv` for every sheet and `all.csv` with every row, in order.
/// Existing files are overwritten.
pub fn write(sheets: &[Sheet], output_dir: &Path) -> eyre::Result<()> {
    fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("Failed to create directory '{}'", output_dir.display()))?;

    for sheet in sheets {
        let stem = sheet
            .source
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        write_csv(&output_dir.join(format!("{stem}.csv")), &sheet.rows)?;
    }

    let all = sheets
        .iter()
        .flat_map(|s| &s.rows)
        .cloned()
        .collect::<Vec<_>>();
    write_csv(&output_dir.join(format!("{ALL}.csv")), &all)?;
    tracing::info!(
        "wrote {} sheets with {} rows to {}",
        sheets.len() + 1,
        all.len(),
        output_dir.display()
    );
    Ok(())
}

fn write_csv(path: &Path, rows: &[OutputRow]) -> eyre::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)
        .wrap_err_with(|| format!("Failed to create '{}'", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
