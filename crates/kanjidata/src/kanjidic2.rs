//! Models the parts of the KANJIDIC2 file that are needed for study sheets.
//! See <https://www.edrdg.org/wiki/index.php/KANJIDIC_Project>
//!
//! Elements and attributes that are not modeled here (header, codepoints, radicals, nanori...)
//! are skipped during deserialization.

use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Clone, Deserialize)]
pub struct Kanjidic2 {
    #[serde(default)]
    pub character: Vec<Character>,
}

impl Kanjidic2 {
    pub fn from_reader<R: Read>(r: R) -> eyre::Result<Self> {
        let kd2 = serde_xml_rs::from_reader(r)?;
        Ok(kd2)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    pub literal: String,
    pub reading_meaning: Option<ReadingMeaning>,
}

impl Character {
    /// All readings of the given type (`ja_on`, `ja_kun`, `pinyin`...) in document order.
    pub fn readings<'a>(&'a self, r_type: &'a str) -> impl Iterator<Item = &'a str> {
        self.rmgroups()
            .flat_map(|rmg| &rmg.reading)
            .filter(move |r| r.r_type == r_type)
            .map(|r| r.text.as_str())
    }

    /// English meanings, i.e. the ones without an `m_lang` attribute.
    pub fn english_meanings(&self) -> impl Iterator<Item = &str> {
        self.rmgroups()
            .flat_map(|rmg| &rmg.meaning)
            .filter(|m| m.m_lang.is_none())
            .map(|m| m.text.as_str())
    }

    fn rmgroups(&self) -> impl Iterator<Item = &Rmgroup> {
        self.reading_meaning.iter().flat_map(|rm| &rm.rmgroup)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadingMeaning {
    #[serde(default)]
    pub rmgroup: Vec<Rmgroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rmgroup {
    #[serde(default)]
    pub reading: Vec<Reading>,
    #[serde(default)]
    pub meaning: Vec<Meaning>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reading {
    #[serde(rename = "@r_type")]
    pub r_type: String,
    #[serde(rename = "#text")]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meaning {
    #[serde(rename = "@m_lang")]
    pub m_lang: Option<String>,
    #[serde(rename = "#text")]
    pub text: String,
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    pub(crate) const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kanjidic2>
<header>
<file_version>4</file_version>
<database_version>2024-123</database_version>
<date_of_creation>2024-05-02</date_of_creation>
</header>
<character>
<literal>食</literal>
<codepoint>
<cp_value cp_type="ucs">98df</cp_value>
</codepoint>
<misc>
<grade>2</grade>
<stroke_count>9</stroke_count>
</misc>
<reading_meaning>
<rmgroup>
<reading r_type="pinyin">shi2</reading>
<reading r_type="ja_on">ショク</reading>
<reading r_type="ja_on">ジキ</reading>
<reading r_type="ja_kun">く.う</reading>
<reading r_type="ja_kun">た.べる</reading>
<meaning>eat</meaning>
<meaning>food</meaning>
<meaning m_lang="fr">manger</meaning>
</rmgroup>
<nanori>け</nanori>
</reading_meaning>
</character>
<character>
<literal>〆</literal>
<codepoint>
<cp_value cp_type="ucs">3006</cp_value>
</codepoint>
<misc>
<stroke_count>2</stroke_count>
</misc>
</character>
</kanjidic2>
"#;

    #[test]
    fn parses_sample() {
        let kd2 = Kanjidic2::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(kd2.character.len(), 2);

        let eat = &kd2.character[0];
        assert_eq!(eat.literal, "食");
        assert_eq!(
            eat.readings("ja_on").collect::<Vec<_>>(),
            vec!["ショク", "ジキ"]
        );
        assert_eq!(
            eat.readings("ja_kun").collect::<Vec<_>>(),
            vec!["く.う", "た.べる"]
        );
        assert_eq!(
            eat.english_meanings().collect::<Vec<_>>(),
            vec!["eat", "food"]
        );
    }

    #[test]
    fn handles_missing_reading_meaning() {
        let kd2 = Kanjidic2::from_reader(SAMPLE.as_bytes()).unwrap();
        let shime = &kd2.character[1];
        assert_eq!(shime.readings("ja_on").count(), 0);
        assert_eq!(shime.english_meanings().count(), 0);
    }
}
