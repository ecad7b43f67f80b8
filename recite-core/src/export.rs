//! Tabular export of per-character lookups
//!
//! One row per distinct non-whitespace character with its radical, its
//! romanization and every other field of its source record. Nested objects
//! are flattened to dotted keys; lists are written as JSON text.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::io::Write;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::lookup::Transliterator;
use crate::text::unique_characters;

/// Leading columns, always present and in this order
pub const FIXED_COLUMNS: [&str; 3] = ["character", "radical", "romanization"];

const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

/// One exported row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRow {
    /// The character
    pub character: char,
    /// Radical, empty when unknown
    pub radical: String,
    /// Toneless romanization, empty when unknown
    pub romanization: String,
    /// Flattened record fields
    pub fields: BTreeMap<String, String>,
}

/// Rows for every distinct character of a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterTable {
    rows: Vec<CharacterRow>,
    extra_columns: BTreeSet<String>,
}

impl CharacterTable {
    /// Look up every distinct non-whitespace character of `text`
    pub fn build(text: &str, provider: &dyn Transliterator) -> Self {
        let mut table = Self::default();

        for character in unique_characters(text) {
            let mut fields = BTreeMap::new();
            if let Some(Value::Object(record)) = provider.record(character) {
                flatten_into(&mut fields, "", &record);
            }
            for column in FIXED_COLUMNS {
                fields.remove(column);
            }
            table.extra_columns.extend(fields.keys().cloned());

            table.rows.push(CharacterRow {
                character,
                radical: provider.radical_of(character).unwrap_or_default(),
                romanization: provider.romanize(character).unwrap_or_default(),
                fields,
            });
        }

        table
    }

    /// Exported rows, in first-seen order
    pub fn rows(&self) -> &[CharacterRow] {
        &self.rows
    }

    /// Header: the fixed columns followed by record fields in sorted order
    pub fn headers(&self) -> Vec<&str> {
        FIXED_COLUMNS
            .iter()
            .copied()
            .chain(self.extra_columns.iter().map(String::as_str))
            .collect()
    }

    /// Write the table as BOM-prefixed UTF-8 CSV
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(BYTE_ORDER_MARK)?;

        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(self.headers())?;

        for row in &self.rows {
            let mut record = vec![
                row.character.to_string(),
                row.radical.clone(),
                row.romanization.clone(),
            ];
            record.extend(
                self.extra_columns
                    .iter()
                    .map(|column| row.fields.get(column).cloned().unwrap_or_default()),
            );
            csv.write_record(&record)?;
        }

        csv.flush()?;
        Ok(())
    }
}

/// Export every distinct character of `text`; returns the number of rows
pub fn write_csv<W: Write>(text: &str, provider: &dyn Transliterator, writer: W) -> Result<usize> {
    let table = CharacterTable::build(text, provider);
    table.write_to(writer)?;
    log::debug!(
        "Exported {} rows with {} columns",
        table.rows.len(),
        table.headers().len()
    );
    Ok(table.rows.len())
}

fn flatten_into(fields: &mut BTreeMap<String, String>, prefix: &str, object: &Map<String, Value>) {
    for (key, value) in object {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::Object(nested) => flatten_into(fields, &name, nested),
            Value::Null => {
                fields.insert(name, String::new());
            }
            Value::String(text) => {
                fields.insert(name, text.clone());
            }
            other => {
                fields.insert(name, other.to_string());
            }
        }
    }
}
