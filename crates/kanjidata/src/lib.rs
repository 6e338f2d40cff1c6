//! Provides the KANJIDIC2-based reference dictionary for kanji study sheets.

pub mod cache;
pub mod dictionary;
pub mod kanjidic2;
pub mod loader;

pub use cache::CachePaths;
pub use dictionary::{KanjiRecord, ReferenceDictionary};
pub use loader::load;
