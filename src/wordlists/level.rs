//! Difficulty levels
//!
//! Each level selects one word pool: junior high school year levels and
//! Eiken proficiency exam grades.

use std::fmt;
use std::str::FromStr;

/// A named word-pool preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Level {
    #[default]
    Jhs1,
    Jhs2,
    Jhs3,
    Eiken5,
    Eiken4,
    Eiken3,
    EikenPre2,
    Eiken2,
    EikenPre1,
    Eiken1,
}

/// Error returned when parsing an unknown level key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelError(pub String);

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = Level::ALL.iter().map(|l| l.key()).collect();
        write!(
            f,
            "Unknown level '{}' (expected one of: {})",
            self.0,
            keys.join(", ")
        )
    }
}

impl std::error::Error for LevelError {}

impl Level {
    /// All levels, easiest first
    pub const ALL: [Self; 10] = [
        Self::Jhs1,
        Self::Jhs2,
        Self::Jhs3,
        Self::Eiken5,
        Self::Eiken4,
        Self::Eiken3,
        Self::EikenPre2,
        Self::Eiken2,
        Self::EikenPre1,
        Self::Eiken1,
    ];

    /// Stable key used on the command line and for data file names
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Jhs1 => "jhs1",
            Self::Jhs2 => "jhs2",
            Self::Jhs3 => "jhs3",
            Self::Eiken5 => "eiken5",
            Self::Eiken4 => "eiken4",
            Self::Eiken3 => "eiken3",
            Self::EikenPre2 => "eiken-pre2",
            Self::Eiken2 => "eiken2",
            Self::EikenPre1 => "eiken-pre1",
            Self::Eiken1 => "eiken1",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jhs1 => "JHS Year 1",
            Self::Jhs2 => "JHS Year 2",
            Self::Jhs3 => "JHS Year 3",
            Self::Eiken5 => "Eiken 5",
            Self::Eiken4 => "Eiken 4",
            Self::Eiken3 => "Eiken 3",
            Self::EikenPre2 => "Eiken Pre-2",
            Self::Eiken2 => "Eiken 2",
            Self::EikenPre1 => "Eiken Pre-1",
            Self::Eiken1 => "Eiken 1",
        }
    }

    /// Game title for this level, e.g. "Eiken 3 Wordle"
    #[must_use]
    pub fn title(self) -> String {
        format!("{} Wordle", self.label())
    }

    /// Position in `Level::ALL`
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&l| l == self).unwrap_or_default()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.key() == key)
            .ok_or_else(|| LevelError(s.to_string()))
    }
}
