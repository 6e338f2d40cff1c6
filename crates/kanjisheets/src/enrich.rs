//! Joins lecture rows with the reference dictionary.

use crate::{
    format::{format_kun, format_on, ImageTemplate},
    lecture::InputRow,
};
use kanjidata::ReferenceDictionary;
use serde::Serialize;
use std::path::Path;

/// A row of a study sheet. Serialized in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub kanji: String,
    pub on: String,
    pub kun: String,
    pub meaning_de: String,
    pub meaning_en: String,
    pub image_path: String,
}

/// Takes the readings and English meaning from the dictionary.
/// Kanji missing from the dictionary keep the readings from the lecture list and get no English meaning.
pub fn enrich(
    row: &InputRow,
    source: &Path,
    dictionary: &ReferenceDictionary,
    image_template: &ImageTemplate,
) -> OutputRow {
    let (on, kun, meaning_en) = match dictionary.get(&row.kanji) {
        Some(record) => (
            format_on(&record.on),
            format_kun(&record.kun),
            record.meaning.clone(),
        ),
        None => {
            tracing::warn!(
                "{}: Not found! (in {}), on: {}, kun: {}",
                row.kanji,
                source.display(),
                row.on_raw,
                row.kun_raw
            );
            let on = split(&row.on_raw);
            let kun = split(&row.kun_raw);
            (format_on(&on), format_kun(&kun), String::new())
        }
    };

    OutputRow {
        kanji: row.kanji.clone(),
        on,
        kun,
        meaning_de: row.meaning_de.clone(),
        meaning_en,
        image_path: image_template.path_for(&row.kanji),
    }
}

fn split(readings: &str) -> Vec<String> {
    readings.split_whitespace().map(String::from).collect()
}
