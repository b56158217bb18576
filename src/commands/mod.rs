//! Command implementations

pub mod check;
pub mod define;
pub mod levels;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use define::{DefineResult, define_word};
pub use levels::{LevelSummary, list_levels};
pub use simple::run_simple;
