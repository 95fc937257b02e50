// crates/store/src/store.rs
//! Holder of the latest decoded snapshot.
//!
//! Three states: nothing loaded yet, a snapshot, or a user-facing error
//! message. Every load is a synchronous whole-file read followed by one
//! decode; the result replaces the previous state atomically. A failed
//! reload after a prior success discards the stale snapshot: consumers see
//! the error, not last-known-good.
//!
//! All mutation happens on the caller's (single) execution context; the
//! watcher only delivers signals, it never touches the store directly.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use agentbar_core::snapshot::{decode_snapshot, StatsSnapshot};
use agentbar_core::LoadError;

/// Result of one load attempt.
pub type LoadResult = Result<StatsSnapshot, LoadError>;

/// Current store state. Exactly one of snapshot/error is observable at
/// steady state; `Empty` exists only before the first load attempt.
#[derive(Debug, Clone)]
pub enum StoreState {
    Empty,
    Loaded(Arc<StatsSnapshot>),
    Failed(String),
}

/// Orchestrates loads of the stats cache and holds the latest result.
///
/// The loader is injected at construction so tests can substitute canned
/// results; [`StatsStore::new`] wires up the real file loader over a path.
pub struct StatsStore {
    loader: Box<dyn Fn() -> LoadResult + Send>,
    state: StoreState,
}

impl StatsStore {
    /// A store that loads from `path` on each [`load_stats`](Self::load_stats).
    pub fn new(path: PathBuf) -> Self {
        Self::with_loader(move || load_snapshot(&path))
    }

    /// A store with a custom load function.
    pub fn with_loader(loader: impl Fn() -> LoadResult + Send + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            state: StoreState::Empty,
        }
    }

    /// Run one load and replace the current state with the outcome. Also
    /// the manual retry entry point.
    pub fn load_stats(&mut self) {
        match (self.loader)() {
            Ok(snapshot) => {
                debug!(
                    version = snapshot.version,
                    sessions = snapshot.total_sessions,
                    "stats cache loaded"
                );
                self.state = StoreState::Loaded(Arc::new(snapshot));
            }
            Err(err) => {
                // The specific diagnostic stays in the log; the state holds
                // only the user-facing message.
                warn!(error = %err, "failed to load stats cache");
                self.state = StoreState::Failed(err.user_message().to_string());
            }
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// The current snapshot, if the last load succeeded.
    pub fn snapshot(&self) -> Option<Arc<StatsSnapshot>> {
        match &self.state {
            StoreState::Loaded(snapshot) => Some(Arc::clone(snapshot)),
            _ => None,
        }
    }

    /// The current user-facing error message, if the last load failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            StoreState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Read and decode the stats cache at `path`.
///
/// A missing file is reported distinctly from read and decode failures so
/// the store can surface "No stats file found" on its own.
pub fn load_snapshot(path: &Path) -> LoadResult {
    if !path.exists() {
        return Err(LoadError::not_found(path));
    }
    let bytes = std::fs::read(path).map_err(|e| LoadError::io(path, e))?;
    decode_snapshot(&bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Loader that replays a fixed sequence of results.
    fn scripted_loader(results: Vec<LoadResult>) -> impl Fn() -> LoadResult + Send + 'static {
        let queue = RefCell::new(VecDeque::from(results));
        move || {
            queue
                .borrow_mut()
                .pop_front()
                .expect("loader called more times than scripted")
        }
    }

    #[test]
    fn starts_empty() {
        let store = StatsStore::with_loader(|| Ok(StatsSnapshot::sample()));
        assert!(matches!(store.state(), StoreState::Empty));
        assert!(store.snapshot().is_none());
        assert!(store.error().is_none());
    }

    #[test]
    fn successful_load_exposes_snapshot_only() {
        let mut store = StatsStore::with_loader(|| Ok(StatsSnapshot::sample()));
        store.load_stats();

        assert!(store.snapshot().is_some());
        assert!(store.error().is_none());
    }

    #[test]
    fn not_found_maps_to_distinct_message() {
        let mut store =
            StatsStore::with_loader(|| Err(LoadError::not_found("/nowhere/stats-cache.json")));
        store.load_stats();

        assert_eq!(store.error(), Some("No stats file found"));
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn failed_reload_discards_stale_snapshot() {
        let mut store = StatsStore::with_loader(scripted_loader(vec![
            Ok(StatsSnapshot::sample()),
            Err(LoadError::not_found("/nowhere/stats-cache.json")),
        ]));

        store.load_stats();
        assert!(store.snapshot().is_some());

        store.load_stats();
        assert!(store.snapshot().is_none());
        assert_eq!(store.error(), Some("No stats file found"));
    }

    #[test]
    fn recovery_after_failure() {
        let mut store = StatsStore::with_loader(scripted_loader(vec![
            Err(LoadError::not_found("/nowhere/stats-cache.json")),
            Ok(StatsSnapshot::sample()),
        ]));

        store.load_stats();
        assert!(store.error().is_some());

        store.load_stats();
        assert!(store.error().is_none());
        assert_eq!(store.snapshot().unwrap().total_sessions, 42);
    }

    #[test]
    fn reload_replaces_snapshot_wholesale() {
        let mut store = StatsStore::with_loader(scripted_loader(vec![
            Ok(StatsSnapshot::sample()),
            Ok({
                let mut next = StatsSnapshot::sample();
                next.total_sessions = 43;
                next
            }),
        ]));

        store.load_stats();
        let first = store.snapshot().unwrap();

        store.load_stats();
        let second = store.snapshot().unwrap();

        assert_eq!(first.total_sessions, 42);
        assert_eq!(second.total_sessions, 43);
    }
}
