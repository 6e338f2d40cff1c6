//! Formats readings and stroke-order image paths for the sheets.

use std::path::PathBuf;

const SEPARATOR: &str = "; ";

pub fn format_on(on: &[String]) -> String {
    on.join(SEPARATOR)
}

/// Underlines the stem of kun readings that have okurigana,
/// e.g. `た.べる` becomes `<u>た</u>べる`.
pub fn format_kun(kun: &[String]) -> String {
    kun.iter()
        .map(|kun| match kun.split_once('.') {
            Some((stem, okurigana)) => format!("<u>{stem}</u>{okurigana}"),
            None => kun.clone(),
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Points to the KanjiVG stroke-order diagrams, which are named after the kanji's code point.
#[derive(Debug, Clone)]
pub struct ImageTemplate {
    dir: PathBuf,
}

impl ImageTemplate {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Empty if `kanji` is.
    pub fn path_for(&self, kanji: &str) -> String {
        match kanji.chars().next() {
            Some(c) => {
                let file = format!("0{:x}.svg", c as u32);
                self.dir.join(file).display().to_string()
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn joins_on() {
        assert_eq!(format_on(&strings(&["ショク", "ジキ"])), "ショク; ジキ");
        assert_eq!(format_on(&[]), "");
    }

    #[test]
    fn underlines_kun_stem() {
        assert_eq!(format_kun(&strings(&["食.べる"])), "<u>食</u>べる");
        assert_eq!(format_kun(&strings(&["見る"])), "見る");
        assert_eq!(
            format_kun(&strings(&["食.べる", "見る"])),
            "<u>食</u>べる; 見る"
        );
    }

    #[test]
    fn splits_kun_on_first_dot() {
        assert_eq!(format_kun(&strings(&["あ.い.う"])), "<u>あ</u>い.う");
        assert_eq!(format_kun(&strings(&["-た.べる"])), "<u>-た</u>べる");
    }

    #[test]
    fn names_image_after_code_point() {
        let template = ImageTemplate::new(PathBuf::from("kanjivg").join("kanji"));
        let path = template.path_for("食");
        assert!(path.ends_with("098df.svg"), "{path}");
        assert!(path.starts_with("kanjivg"));

        // five hex digits outside the BMP
        assert!(template.path_for("𠮟").ends_with("020b9f.svg"));
        assert_eq!(template.path_for(""), "");
    }
}
