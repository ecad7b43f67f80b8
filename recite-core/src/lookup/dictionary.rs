//! Line-oriented character dictionary
//!
//! One JSON object per line, keyed by a single character, in the layout of the
//! Make Me a Hanzi `dictionary.txt`:
//!
//! ```text
//! {"character":"你","pinyin":["nǐ"],"radical":"亻","etymology":{"type":"pictophonetic"}}
//! ```
//!
//! Fields other than `character`, `radical` and `pinyin` are kept verbatim for
//! tabular export.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::readings::strip_tones;
use super::Transliterator;
use crate::error::{Error, Result};

/// One dictionary record
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HanziRecord {
    /// The character this record describes
    pub character: String,
    /// Radical of the character
    #[serde(default)]
    pub radical: Option<String>,
    /// Tone-marked readings, primary first
    #[serde(default, deserialize_with = "one_or_many")]
    pub pinyin: Vec<String>,
    /// Remaining fields (definition, decomposition, etymology, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(reading)) => vec![reading],
        Some(OneOrMany::Many(readings)) => readings,
    })
}

impl HanziRecord {
    /// The record key as a single character
    pub fn key(&self) -> Option<char> {
        let mut chars = self.character.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }

    /// Primary reading without tone marks
    pub fn plain_reading(&self) -> Option<String> {
        self.pinyin
            .first()
            .map(|reading| strip_tones(reading))
            .filter(|reading| !reading.is_empty())
    }

    /// The whole record as a JSON value
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Character dictionary loaded from a record store
#[derive(Debug, Clone, Default)]
pub struct HanziDictionary {
    records: HashMap<char, HanziRecord>,
    skipped: usize,
}

impl HanziDictionary {
    /// Load from a file, skipping malformed lines
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::DictionaryUnavailable(format!("{}: {}", path.display(), e))
        })?;

        let dictionary = Self::from_reader(BufReader::new(file))?;
        log::info!(
            "Loaded {} dictionary records from {} ({} lines skipped)",
            dictionary.len(),
            path.display(),
            dictionary.skipped
        );
        Ok(dictionary)
    }

    /// Load from a reader, skipping malformed lines with a warning
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut dictionary = Self::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            match parse_line(index + 1, &line) {
                Ok(Some(record)) => dictionary.insert(record),
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Skipping dictionary record: {e}");
                    dictionary.skipped += 1;
                }
            }
        }

        Ok(dictionary)
    }

    fn insert(&mut self, record: HanziRecord) {
        if let Some(key) = record.key() {
            // First record wins, matching lookup order in the source file
            self.records.entry(key).or_insert(record);
        }
    }

    /// Record for a character
    pub fn get(&self, ch: char) -> Option<&HanziRecord> {
        self.records.get(&ch)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dictionary holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of malformed lines skipped while loading
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }
}

fn parse_line(line_number: usize, line: &str) -> Result<Option<HanziRecord>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let record: HanziRecord = serde_json::from_str(line).map_err(|e| Error::Dictionary {
        line: line_number,
        message: e.to_string(),
    })?;

    if record.key().is_none() {
        return Err(Error::Dictionary {
            line: line_number,
            message: format!("key {:?} is not a single character", record.character),
        });
    }

    Ok(Some(record))
}

impl Transliterator for HanziDictionary {
    fn romanize(&self, ch: char) -> Option<String> {
        self.get(ch).and_then(HanziRecord::plain_reading)
    }

    fn radical_of(&self, ch: char) -> Option<String> {
        self.get(ch)
            .and_then(|record| record.radical.clone())
            .filter(|radical| !radical.is_empty())
    }

    fn record(&self, ch: char) -> Option<Value> {
        self.get(ch).map(HanziRecord::to_value)
    }
}
