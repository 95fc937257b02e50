// crates/app/src/main.rs
//! agentbar terminal shell.
//!
//! Thin host around the stats pipeline: one initial load, then a reload per
//! watcher signal, re-rendering the summary each time. Runs on a
//! current-thread runtime so every store mutation happens on one execution
//! context; the watcher marshals OS events in through a channel.

mod render;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use agentbar_core::paths;
use agentbar_store::{StatsStore, StatsWatcher};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Quiet logging; user-facing output goes through the renderer.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let path = paths::stats_cache_path()
        .ok_or_else(|| anyhow::anyhow!("could not determine home directory"))?;

    eprintln!(
        "\nagentbar v{} \u{2014} {}\n",
        env!("CARGO_PKG_VERSION"),
        path.display()
    );

    let mut store = StatsStore::new(path.clone());
    store.load_stats();
    render::print_summary(&store);

    let (tx, mut rx) = mpsc::channel(8);
    let mut watcher = StatsWatcher::start(&path, tx);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            signal = rx.recv() => match signal {
                Some(()) => {
                    tracing::debug!("stats cache changed; reloading");
                    store.load_stats();
                    render::print_summary(&store);
                }
                None => break,
            },
        }
    }

    watcher.stop();
    Ok(())
}
