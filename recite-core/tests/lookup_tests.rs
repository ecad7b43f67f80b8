//! Dictionary, provider chaining and export integration tests

use recite_core::export::{write_csv, CharacterTable};
use recite_core::lookup::{Chain, HanziDictionary, Memoized, PinyinReadings, Transliterator};
use recite_core::text::unique_ideographs;
use recite_core::{Config, Error, ReciteProcessor};
use std::io::Cursor;
use std::sync::Arc;

const DICTIONARY: &str = r#"{"character":"山","definition":"mountain","pinyin":["shān"],"decomposition":"？","radical":"山"}
{"character":"水","definition":"water","pinyin":["shuǐ"],"radical":"水","etymology":{"type":"pictographic","hint":"A river"}}
{"character":"好","pinyin":["hǎo"],"radical":"女","matches":[[0],[0],[1]]}
"#;

fn dictionary() -> HanziDictionary {
    HanziDictionary::from_reader(Cursor::new(DICTIONARY)).unwrap()
}

#[test]
fn test_dictionary_file_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");
    std::fs::write(&path, DICTIONARY).unwrap();

    let dictionary = HanziDictionary::from_path(&path).unwrap();
    assert_eq!(dictionary.len(), 3);
    assert_eq!(dictionary.skipped_lines(), 0);
    assert_eq!(dictionary.radical_of('水').as_deref(), Some("水"));
    assert_eq!(dictionary.romanize('水').as_deref(), Some("shui"));
}

#[test]
fn test_missing_dictionary_is_unavailable() {
    let result = HanziDictionary::from_path("/nonexistent/recite/dictionary.txt");
    assert!(matches!(result, Err(Error::DictionaryUnavailable(_))));
}

#[test]
fn test_chain_falls_back_to_builtin_readings() {
    let chain = Chain::new(dictionary(), PinyinReadings);

    assert_eq!(chain.radical_of('好').as_deref(), Some("女"));
    assert_eq!(chain.romanize('山').as_deref(), Some("shan"));
    assert_eq!(chain.romanize('你').as_deref(), Some("ni"));
    assert_eq!(chain.radical_of('你'), None);
}

#[test]
fn test_shared_memoized_provider() {
    let provider: Arc<dyn Transliterator> = Arc::new(Memoized::new(Chain::new(
        dictionary(),
        PinyinReadings,
    )));

    let romanized = ReciteProcessor::with_shared_provider(Config::default(), provider.clone()).unwrap();
    let radical = ReciteProcessor::with_shared_provider(
        Config::builder().mode("radical").build().unwrap(),
        provider,
    )
    .unwrap();

    assert_eq!(romanized.process("山水").unwrap().display_text(), "shsh");
    assert_eq!(
        radical.process("好山").unwrap().tokens[0],
        recite_core::Token::RadicalGlyph("女".into())
    );
}

#[test]
fn test_export_flattens_records() {
    let table = CharacterTable::build("山水 好！", &dictionary());

    assert_eq!(
        table.headers(),
        vec![
            "character",
            "radical",
            "romanization",
            "decomposition",
            "definition",
            "etymology.hint",
            "etymology.type",
            "matches",
            "pinyin",
        ]
    );
    assert_eq!(table.rows().len(), 4);
    assert_eq!(table.rows()[1].fields["etymology.hint"], "A river");
    assert_eq!(table.rows()[2].fields["matches"], "[[0],[0],[1]]");
    assert!(table.rows()[3].fields.is_empty());
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("radicals.csv");
    let file = std::fs::File::create(&path).unwrap();

    let rows = write_csv("山水山", &dictionary(), file).unwrap();
    assert_eq!(rows, 2);

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn test_unique_ideographs() {
    assert_eq!(unique_ideographs("山水山，水好。ok"), vec!['山', '水', '好']);
}
