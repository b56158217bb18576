//! Level listing command

use crate::wordlists::{Level, WordPool};

/// One row of the level listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    pub level: Level,
    pub word_count: usize,
    pub selected: bool,
}

/// Summarise every level in the pool, easiest first
///
/// The pool's active level is marked as selected.
#[must_use]
pub fn list_levels<R: rand::Rng>(pool: &WordPool<R>) -> Vec<LevelSummary> {
    let selected = pool.active_level();
    Level::ALL
        .into_iter()
        .map(|level| LevelSummary {
            level,
            word_count: pool.len(level),
            selected: level == selected,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordProvider;

    #[test]
    fn lists_every_level_once() {
        let mut pool = WordPool::embedded_seeded(0);
        pool.set_level(Level::Eiken3);
        let summaries = list_levels(&pool);

        assert_eq!(summaries.len(), Level::ALL.len());
        assert!(summaries.iter().all(|s| s.word_count > 0));
        assert_eq!(
            summaries.iter().filter(|s| s.selected).map(|s| s.level).collect::<Vec<_>>(),
            vec![Level::Eiken3]
        );
    }
}
