//! Level word pools
//!
//! Provides the built-in pools compiled into the binary, plus loading of
//! replacement pools from TSV files.

mod embedded;
mod level;
pub mod loader;
mod pool;

pub use embedded::raw_entries;
pub use level::{Level, LevelError};
pub use pool::{EmptyPoolError, WordEntry, WordPool, WordProvider};
