//! Embedded level word pools
//!
//! Pools compiled into the binary at build time.

use super::Level;

// Include generated pools from build script
include!(concat!(env!("OUT_DIR"), "/levels.rs"));

/// Raw `(word, definition)` pairs for a level
#[must_use]
pub const fn raw_entries(level: Level) -> &'static [(&'static str, &'static str)] {
    match level {
        Level::Jhs1 => JHS1,
        Level::Jhs2 => JHS2,
        Level::Jhs3 => JHS3,
        Level::Eiken5 => EIKEN5,
        Level::Eiken4 => EIKEN4,
        Level::Eiken3 => EIKEN3,
        Level::EikenPre2 => EIKEN_PRE2,
        Level::Eiken2 => EIKEN2,
        Level::EikenPre1 => EIKEN_PRE1,
        Level::Eiken1 => EIKEN1,
    }
}
