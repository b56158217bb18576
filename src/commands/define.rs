//! Definition lookup command

use crate::core::{Word, WordError};
use crate::wordlists::{Level, WordProvider};

/// Result of looking up a word
pub struct DefineResult {
    pub word: Word,
    pub level: Level,
    pub definition: Option<String>,
}

/// Look up the definition of `word` in `level`'s pool
///
/// A word missing from the pool is not an error.
///
/// # Errors
///
/// Returns `WordError` if `word` is not a valid 5-letter word.
pub fn define_word<P: WordProvider>(
    provider: &P,
    word: &str,
    level: Level,
) -> Result<DefineResult, WordError> {
    let word = Word::new(word)?;
    let definition = provider.definition(&word, level).map(str::to_string);
    Ok(DefineResult {
        word,
        level,
        definition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordPool;

    #[test]
    fn define_known_and_unknown_words() {
        let pool = WordPool::embedded_seeded(0);

        let known = define_word(&pool, "Apple", Level::Jhs1).unwrap();
        assert!(known.definition.is_some_and(|d| d.contains("fruit")));

        let unknown = define_word(&pool, "apple", Level::Eiken1).unwrap();
        assert!(unknown.definition.is_none());

        assert!(define_word(&pool, "ab", Level::Jhs1).is_err());
    }
}
