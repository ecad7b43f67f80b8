//! Read-through memoization for providers

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use serde_json::Value;

use super::{PinyinReadings, Transliterator};

type Table = RwLock<HashMap<char, Option<String>>>;

/// Process-wide memoized built-in readings
static BUILTIN: OnceLock<Memoized<PinyinReadings>> = OnceLock::new();

/// Built-in readings shared by the whole process, initialized on first use
pub fn builtin() -> &'static Memoized<PinyinReadings> {
    BUILTIN.get_or_init(|| Memoized::new(PinyinReadings))
}

/// Per-character cache in front of another provider
///
/// Entries are only ever inserted. Misses are cached too. A poisoned lock
/// degrades to uncached lookups.
#[derive(Debug)]
pub struct Memoized<P> {
    inner: P,
    romanized: Table,
    radicals: Table,
}

impl<P: Transliterator> Memoized<P> {
    /// Wrap a provider
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            romanized: RwLock::new(HashMap::new()),
            radicals: RwLock::new(HashMap::new()),
        }
    }

    /// The wrapped provider
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of cached entries across both tables
    pub fn cached_entries(&self) -> usize {
        let len = |table: &Table| table.read().map(|map| map.len()).unwrap_or(0);
        len(&self.romanized) + len(&self.radicals)
    }

    fn read_through(
        table: &Table,
        ch: char,
        lookup: impl FnOnce() -> Option<String>,
    ) -> Option<String> {
        if let Ok(map) = table.read() {
            if let Some(hit) = map.get(&ch) {
                return hit.clone();
            }
        }

        let value = lookup();
        if let Ok(mut map) = table.write() {
            map.entry(ch).or_insert_with(|| value.clone());
        }
        value
    }
}

impl<P: Transliterator> Transliterator for Memoized<P> {
    fn romanize(&self, ch: char) -> Option<String> {
        Self::read_through(&self.romanized, ch, || self.inner.romanize(ch))
    }

    fn radical_of(&self, ch: char) -> Option<String> {
        Self::read_through(&self.radicals, ch, || self.inner.radical_of(ch))
    }

    // Records are only read by export, once per character
    fn record(&self, ch: char) -> Option<Value> {
        self.inner.record(ch)
    }
}
