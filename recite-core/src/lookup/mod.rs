//! Transliteration providers
//!
//! Providers answer per-character romanization and radical queries. A miss is
//! `None` and never an error; callers substitute placeholders.

mod cache;
mod dictionary;
mod readings;

pub use cache::{builtin, Memoized};
pub use dictionary::{HanziDictionary, HanziRecord};
pub use readings::{strip_tones, PinyinReadings};

use std::sync::Arc;

use serde_json::Value;

/// Per-character lookup of romanization and radicals
pub trait Transliterator: Send + Sync {
    /// Primary pronunciation of an ideograph in toneless romanization
    fn romanize(&self, ch: char) -> Option<String>;

    /// Radical or structural component of an ideograph
    fn radical_of(&self, ch: char) -> Option<String>;

    /// Full source record for a character, for export
    fn record(&self, _ch: char) -> Option<Value> {
        None
    }
}

impl<T: Transliterator + ?Sized> Transliterator for &T {
    fn romanize(&self, ch: char) -> Option<String> {
        (**self).romanize(ch)
    }

    fn radical_of(&self, ch: char) -> Option<String> {
        (**self).radical_of(ch)
    }

    fn record(&self, ch: char) -> Option<Value> {
        (**self).record(ch)
    }
}

impl<T: Transliterator + ?Sized> Transliterator for Arc<T> {
    fn romanize(&self, ch: char) -> Option<String> {
        (**self).romanize(ch)
    }

    fn radical_of(&self, ch: char) -> Option<String> {
        (**self).radical_of(ch)
    }

    fn record(&self, ch: char) -> Option<Value> {
        (**self).record(ch)
    }
}

/// Consults `primary` first and `fallback` on a miss, per operation
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    primary: A,
    fallback: B,
}

impl<A, B> Chain<A, B> {
    /// Chain two providers
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: Transliterator, B: Transliterator> Transliterator for Chain<A, B> {
    fn romanize(&self, ch: char) -> Option<String> {
        self.primary
            .romanize(ch)
            .or_else(|| self.fallback.romanize(ch))
    }

    fn radical_of(&self, ch: char) -> Option<String> {
        self.primary
            .radical_of(ch)
            .or_else(|| self.fallback.radical_of(ch))
    }

    fn record(&self, ch: char) -> Option<Value> {
        self.primary.record(ch).or_else(|| self.fallback.record(ch))
    }
}
