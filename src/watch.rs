//! Items file watcher
//!
//! Polls the modification time of the items file and sends a freshly
//! loaded collection whenever it changes. Each successful load is a new
//! collection, so the list clears its selection on every file change.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::list::{ItemCollection, LoadError};

/// Messages sent from the watcher to the UI
#[derive(Debug)]
pub enum WatchMessage {
    /// File changed and loaded cleanly
    Replaced(ItemCollection),
    /// File changed but could not be loaded
    Failed(LoadError),
}

/// Spawn a task watching `path` every `interval`.
///
/// `last_modified` is the modification time observed before the caller
/// loaded the file; any later change is sent, including one made before
/// the task first runs. The task ends when the receiving side is dropped.
pub fn spawn_items_watcher(
    path: PathBuf,
    last_modified: Option<SystemTime>,
    interval: Duration,
    tx: mpsc::Sender<WatchMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move { watch_items(path, last_modified, interval, tx).await })
}

async fn watch_items(
    path: PathBuf,
    mut last_modified: Option<SystemTime>,
    interval: Duration,
    tx: mpsc::Sender<WatchMessage>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    tracing::info!("Watching items file {}", path.display());

    loop {
        ticker.tick().await;

        if tx.is_closed() {
            break;
        }

        let current = modified(&path).await;
        if current.is_none() || current == last_modified {
            continue;
        }
        last_modified = current;

        let msg = match ItemCollection::load(&path) {
            Ok(items) => {
                tracing::info!("Items file changed, loaded {} items", items.len());
                WatchMessage::Replaced(items)
            }
            Err(e) => {
                tracing::error!("Items file changed but failed to load: {}", e);
                WatchMessage::Failed(e)
            }
        };

        // Channel may be closed if the UI has exited
        if let Err(e) = tx.send(msg).await {
            tracing::warn!("Failed to send watch message: {}", e);
            break;
        }
    }
}

/// Modification time of `path`, if it can be read
pub async fn modified(path: &Path) -> Option<SystemTime> {
    match tokio::fs::metadata(path).await {
        Ok(meta) => meta.modified().ok(),
        Err(e) => {
            tracing::debug!("Cannot stat {}: {}", path.display(), e);
            None
        }
    }
}
