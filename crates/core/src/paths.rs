// crates/core/src/paths.rs
//! Default location of the stats cache file.
//!
//! The path is a configuration value: callers resolve it once here and pass
//! it explicitly into the store and watcher at construction. Nothing in this
//! crate reads a global.

use std::path::PathBuf;

/// Default stats cache file written by the producer:
/// `~/Library/Developer/Xcode/CodingAssistant/ClaudeAgentConfig/stats-cache.json`.
///
/// Returns `None` when the home directory cannot be determined.
pub fn stats_cache_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join("Library")
            .join("Developer")
            .join("Xcode")
            .join("CodingAssistant")
            .join("ClaudeAgentConfig")
            .join("stats-cache.json")
    })
}
