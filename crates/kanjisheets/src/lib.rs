//! Builds kanji study sheets: lecture lists of kanji are cross-referenced with KANJIDIC2
//! and written out as `;`-separated tables with readings, meanings and stroke-order images.

pub mod cli;
pub mod config;
pub mod enrich;
pub mod format;
pub mod lecture;
pub mod output;

use config::Config;
use output::Sheet;

/// Runs the whole pipeline: load the dictionary, scan the lectures, enrich and write the sheets.
pub fn run(config: &Config) -> eyre::Result<()> {
    let dictionary = kanjidata::load(&config.cache, config.refresh)?;

    tracing::info!("scanning {}", config.input_dir.display());
    let lectures = lecture::scan(&config.input_dir)?;

    let sheets = lectures
        .into_iter()
        .map(|lecture| {
            let rows = lecture
                .rows
                .iter()
                .map(|row| {
                    enrich::enrich(row, &lecture.path, &dictionary, &config.image_template)
                })
                .collect();
            Sheet {
                source: lecture.path,
                rows,
            }
        })
        .collect::<Vec<_>>();

    output::write(&sheets, &config.output_dir)
}

#[cfg(test)]
mod test {
    use super::*;
    use kanjidata::{cache, KanjiRecord, ReferenceDictionary};
    use std::fs;

    #[test]
    fn builds_sheets_from_cached_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("kanji");
        let config = Config::from_root(&root, false).unwrap();

        let dictionary = [
            KanjiRecord {
                kanji: "食".to_string(),
                on: vec!["ショク".to_string()],
                kun: vec!["た.べる".to_string()],
                meaning: "eat, food".to_string(),
            },
            KanjiRecord {
                kanji: "見".to_string(),
                on: vec!["ケン".to_string()],
                kun: vec!["み.る".to_string()],
                meaning: "see".to_string(),
            },
        ]
        .into_iter()
        .collect::<ReferenceDictionary>();
        cache::write(&config.cache.dictionary, &dictionary).unwrap();

        fs::create_dir_all(config.input_dir.join("week2")).unwrap();
        fs::write(
            config.input_dir.join("a.txt"),
            "食;essen;;\n見;sehen;;\n",
        )
        .unwrap();
        fs::write(
            config.input_dir.join("week2").join("b.txt"),
            "見;sehen;;\n龘;Drache;トウ;\n食;essen;;",
        )
        .unwrap();

        run(&config).unwrap();

        let read = |name: &str| fs::read_to_string(config.output_dir.join(name)).unwrap();
        assert_eq!(read("a.csv").lines().count(), 2);
        assert_eq!(read("b.csv").lines().count(), 3);

        let all = read("all.csv");
        let kanji = all
            .lines()
            .map(|l| l.split(';').next().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(kanji, vec!["食", "見", "見", "龘", "食"]);

        let first = all.lines().next().unwrap();
        let svg = root
            .parent()
            .unwrap()
            .join("kanjivg")
            .join("kanji")
            .join("098df.svg");
        assert_eq!(
            first,
            format!("食;ショク;<u>た</u>べる;essen;eat, food;{}", svg.display())
        );
        assert!(all.contains("龘;トウ;;Drache;;"));
    }
}
