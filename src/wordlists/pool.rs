//! Word pool provider
//!
//! Supplies random target words and definitions for a level.

use super::{Level, embedded, loader::entries_from_slice};
use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fmt;

/// A pool word together with its definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: Word,
    definition: String,
}

impl WordEntry {
    #[must_use]
    pub fn new(word: Word, definition: impl Into<String>) -> Self {
        Self {
            word,
            definition: definition.into(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }
}

/// The requested level has no words configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolError {
    pub level: Level,
}

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No words configured for level {}", self.level.key())
    }
}

impl std::error::Error for EmptyPoolError {}

/// Source of target words for a game
pub trait WordProvider {
    /// Pick a uniformly random entry from the level's pool
    ///
    /// # Errors
    /// Returns `EmptyPoolError` if the level has no entries.
    fn random_word(&mut self, level: Level) -> Result<WordEntry, EmptyPoolError>;

    /// Definition of `word` within the level's pool, if it is there
    fn definition(&self, word: &Word, level: Level) -> Option<&str>;

    /// Switch the active pool
    fn set_level(&mut self, level: Level);
}

/// Static per-level word pools with a random source
pub struct WordPool<R = StdRng> {
    pools: FxHashMap<Level, Vec<WordEntry>>,
    level: Level,
    rng: R,
}

impl WordPool<StdRng> {
    /// Pool with the built-in words for every level, seeded from the OS
    #[must_use]
    pub fn embedded() -> Self {
        Self::embedded_with_rng(StdRng::from_os_rng())
    }

    /// Pool with the built-in words and a fixed seed
    ///
    /// # Examples
    /// ```
    /// use wordle_levels::wordlists::{Level, WordPool, WordProvider};
    ///
    /// let mut a = WordPool::embedded_seeded(7);
    /// let mut b = WordPool::embedded_seeded(7);
    /// assert_eq!(
    ///     a.random_word(Level::Eiken3).unwrap(),
    ///     b.random_word(Level::Eiken3).unwrap()
    /// );
    /// ```
    #[must_use]
    pub fn embedded_seeded(seed: u64) -> Self {
        Self::embedded_with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: rand::Rng> WordPool<R> {
    /// Empty pool using the given random source
    pub fn new(rng: R) -> Self {
        Self {
            pools: FxHashMap::default(),
            level: Level::default(),
            rng,
        }
    }

    /// Pool with the built-in words and the given random source
    pub fn embedded_with_rng(rng: R) -> Self {
        let mut pool = Self::new(rng);
        for level in Level::ALL {
            pool.replace_level(level, entries_from_slice(embedded::raw_entries(level)));
        }
        pool
    }

    /// Replace every entry of a level's pool
    pub fn replace_level(&mut self, level: Level, entries: Vec<WordEntry>) {
        tracing::debug!(level = level.key(), count = entries.len(), "Configured word pool");
        self.pools.insert(level, entries);
    }

    /// Number of entries in a level's pool
    #[must_use]
    pub fn len(&self, level: Level) -> usize {
        self.entries(level).len()
    }

    /// Check whether a level's pool has no entries
    #[must_use]
    pub fn is_empty(&self, level: Level) -> bool {
        self.entries(level).is_empty()
    }

    #[must_use]
    pub fn entries(&self, level: Level) -> &[WordEntry] {
        self.pools.get(&level).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub const fn active_level(&self) -> Level {
        self.level
    }
}

impl<R: rand::Rng> WordProvider for WordPool<R> {
    fn random_word(&mut self, level: Level) -> Result<WordEntry, EmptyPoolError> {
        let entries = self.pools.get(&level).map_or(&[][..], Vec::as_slice);
        entries
            .choose(&mut self.rng)
            .cloned()
            .ok_or(EmptyPoolError { level })
    }

    fn definition(&self, word: &Word, level: Level) -> Option<&str> {
        self.entries(level)
            .iter()
            .find(|entry| entry.word() == word)
            .map(WordEntry::definition)
    }

    fn set_level(&mut self, level: Level) {
        if self.level != level {
            tracing::info!(from = self.level.key(), to = level.key(), "Switching word pool");
        }
        self.level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, definition: &str) -> WordEntry {
        WordEntry::new(Word::new(word).unwrap(), definition)
    }

    #[test]
    fn every_level_has_embedded_words() {
        let pool = WordPool::embedded_seeded(1);
        for level in Level::ALL {
            assert!(!pool.is_empty(level), "{} has no words", level.key());
            assert_eq!(pool.len(level), embedded::raw_entries(level).len());
        }
    }

    #[test]
    fn embedded_entries_have_definitions() {
        let pool = WordPool::embedded_seeded(1);
        for level in Level::ALL {
            for entry in pool.entries(level) {
                assert!(
                    !entry.definition().is_empty(),
                    "'{}' in {} has no definition",
                    entry.word(),
                    level.key()
                );
            }
        }
    }

    #[test]
    fn random_word_comes_from_requested_level() {
        let mut pool = WordPool::embedded_seeded(42);
        for _ in 0..20 {
            let picked = pool.random_word(Level::Eiken1).unwrap();
            assert!(pool.entries(Level::Eiken1).contains(&picked));
        }
    }

    #[test]
    fn random_word_covers_pool() {
        let mut pool = WordPool::new(StdRng::seed_from_u64(3));
        pool.replace_level(Level::Jhs1, vec![entry("apple", "a"), entry("bread", "b")]);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(pool.random_word(Level::Jhs1).unwrap().word().text().to_string());
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn empty_level_fails() {
        let mut pool = WordPool::new(StdRng::seed_from_u64(0));
        assert_eq!(
            pool.random_word(Level::Eiken2),
            Err(EmptyPoolError {
                level: Level::Eiken2
            })
        );
    }

    #[test]
    fn definition_lookup() {
        let mut pool = WordPool::new(StdRng::seed_from_u64(0));
        pool.replace_level(Level::Jhs1, vec![entry("apple", "a round fruit")]);

        let apple = Word::new("APPLE").unwrap();
        assert_eq!(pool.definition(&apple, Level::Jhs1), Some("a round fruit"));
        assert_eq!(pool.definition(&apple, Level::Jhs2), None);
        assert_eq!(pool.definition(&Word::new("zebra").unwrap(), Level::Jhs1), None);
    }

    #[test]
    fn set_level_switches_active_pool() {
        let mut pool = WordPool::new(StdRng::seed_from_u64(0));
        pool.replace_level(Level::Eiken4, vec![entry("ocean", "salt water")]);

        assert_eq!(pool.active_level(), Level::Jhs1);
        pool.set_level(Level::Eiken4);
        assert_eq!(pool.active_level(), Level::Eiken4);
    }
}
