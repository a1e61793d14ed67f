use std::sync::Arc;
use tokio::sync::watch;

/// Latest-value broadcast of a full collection.
///
/// Subscribers only ever see whole snapshots; a slow subscriber skips
/// intermediate ones and wakes up on the most recent.
pub struct SnapshotFeed<T> {
    sender: watch::Sender<Arc<Vec<T>>>,
}

impl<T> Default for SnapshotFeed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SnapshotFeed<T> {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Arc::new(Vec::new()));
        Self { sender }
    }

    pub fn publish(&self, items: Vec<T>) {
        self.sender.send_replace(Arc::new(items));
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<T>>> {
        self.sender.subscribe()
    }

    pub fn latest(&self) -> Arc<Vec<T>> {
        self.sender.borrow().clone()
    }
}
