// crates/store/src/watcher.rs
//! File system watcher for the stats cache file.
//!
//! Watches a single path for write events and forwards a unit signal per
//! detected write. There is no payload; the store re-reads the whole file on each
//! signal. The OS notification arrives on the watcher's internal thread and
//! is marshaled into the store's single execution context through the
//! provided `mpsc::Sender`.
//!
//! The watch is bound to the inode open at start time. If the file is
//! deleted and recreated the watch goes quiet; the producer edits the cache
//! in place, so no re-open on deletion is attempted.

use std::path::Path;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Owns one OS watch handle between `start` and `stop`/drop.
pub struct StatsWatcher {
    watcher: Option<RecommendedWatcher>,
}

impl StatsWatcher {
    /// Begin observing `path` for writes, sending `()` on `tx` per event.
    ///
    /// An unwatchable path (missing file, permissions) is not an error: the
    /// watcher degrades to never notifying, logged at debug. The channel is
    /// used with `try_send`, so a full channel drops the signal, which is safe
    /// because a reload is already pending for the receiver.
    pub fn start(path: &Path, tx: mpsc::Sender<()>) -> Self {
        let mut watcher =
            match notify::recommended_watcher(move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        let _ = tx.try_send(());
                    }
                }
                Err(e) => {
                    warn!(error = %e, "stats watcher error");
                }
            }) {
                Ok(w) => w,
                Err(e) => {
                    warn!(error = %e, "could not create stats watcher; live refresh disabled");
                    return Self { watcher: None };
                }
            };

        match watcher.watch(path, RecursiveMode::NonRecursive) {
            Ok(()) => {
                debug!(path = %path.display(), "watching stats cache for writes");
                Self {
                    watcher: Some(watcher),
                }
            }
            Err(e) => {
                // Missing file or unreadable path degrades to "never
                // notifies"; a permissions problem shows up only as stats
                // that never refresh.
                debug!(path = %path.display(), error = %e, "stats cache not watchable; live refresh disabled");
                Self { watcher: None }
            }
        }
    }

    /// Whether an OS watch is currently held.
    pub fn is_active(&self) -> bool {
        self.watcher.is_some()
    }

    /// Release the OS watch handle. Idempotent; also runs on drop. No
    /// further signals are delivered after this returns.
    pub fn stop(&mut self) {
        if self.watcher.take().is_some() {
            debug!("stats watcher stopped");
        }
    }
}
