//! The reference dictionary that study sheets are cross-referenced against.

use crate::kanjidic2::{Character, Kanjidic2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Readings and English meanings of a single kanji.
///
/// The meanings are kept joined the way they appear on a sheet.
/// In the cache file the readings are stored as single space-separated strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiRecord {
    pub kanji: String,
    #[serde(with = "joined::spaces")]
    pub on: Vec<String>,
    #[serde(with = "joined::spaces")]
    pub kun: Vec<String>,
    pub meaning: String,
}

impl KanjiRecord {
    pub fn from_character(character: &Character) -> Self {
        Self {
            kanji: character.literal.clone(),
            on: character.readings("ja_on").map(String::from).collect(),
            kun: character.readings("ja_kun").map(String::from).collect(),
            meaning: character
                .english_meanings()
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Maps kanji to their records.
/// Ordered by kanji so that the cache file is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceDictionary {
    records: BTreeMap<String, KanjiRecord>,
}

impl ReferenceDictionary {
    /// Inserts a record, replacing and returning any earlier record for the same kanji.
    pub fn insert(&mut self, record: KanjiRecord) -> Option<KanjiRecord> {
        self.records.insert(record.kanji.clone(), record)
    }

    pub fn get(&self, kanji: &str) -> Option<&KanjiRecord> {
        self.records.get(kanji)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KanjiRecord> {
        self.records.values()
    }

    pub fn from_kanjidic2(kd2: &Kanjidic2) -> Self {
        let mut dictionary = Self::default();
        for (idx, character) in kd2.character.iter().enumerate() {
            dictionary.insert(KanjiRecord::from_character(character));
            if (idx + 1) % 1000 == 0 {
                tracing::debug!("extracted {} characters", idx + 1);
            }
        }
        tracing::info!(
            "extracted {} characters ({} unique)",
            kd2.character.len(),
            dictionary.len()
        );
        dictionary
    }
}

impl FromIterator<KanjiRecord> for ReferenceDictionary {
    fn from_iter<T: IntoIterator<Item = KanjiRecord>>(iter: T) -> Self {
        let mut dictionary = Self::default();
        for record in iter {
            dictionary.insert(record);
        }
        dictionary
    }
}

/// (De)serializes readings as a single space-separated string.
mod joined {
    pub mod spaces {
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(values: &[String], s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&values.join(" "))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
            let joined = String::deserialize(d)?;
            Ok(joined.split_whitespace().map(String::from).collect())
        }
    }
}
