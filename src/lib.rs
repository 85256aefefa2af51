//! fated: roll Fate dice from the command line.
//!
//! [`core`] rolls, scores and renders dice; [`tui`] wraps it in a
//! full-screen session that re-rolls on demand.

pub mod core;
pub mod tui;

/// Compile-time build metadata, filled in by `build.rs`.
pub mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const COMMIT: &str = env!("FATED_COMMIT");
    pub const BUILD_DATE: &str = env!("FATED_BUILD_DATE");

    /// `fated <version> (commit <sha>, built <date>)`
    pub fn version_line() -> String {
        format!("fated {VERSION} (commit {COMMIT}, built {BUILD_DATE})")
    }
}
