use std::sync::Arc;
use tokio::sync::{RwLock, watch};

use crate::modules::shifts::core::date_index::DateIndex;
use crate::modules::shifts::core::ports::Snapshot;
use crate::modules::shifts::core::shift::ShiftRecord;

/// Read side of the calendar: the date index of the latest store snapshot.
///
/// The projection is the only writer and always swaps in a freshly built
/// index, so readers holding an older `Arc` keep a consistent view.
#[derive(Default)]
pub struct DateIndexProjection {
    current: RwLock<Arc<DateIndex>>,
}

impl DateIndexProjection {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Arc<DateIndex> {
        self.current.read().await.clone()
    }

    pub async fn apply_snapshot(&self, records: &[ShiftRecord]) {
        let index = Arc::new(DateIndex::build(records.iter().cloned()));
        *self.current.write().await = index;
    }

    /// Rebuilds from whatever the receiver holds now and marks it seen.
    pub async fn catch_up(&self, receiver: &mut watch::Receiver<Snapshot>) {
        let snapshot = receiver.borrow_and_update().clone();
        self.apply_snapshot(&snapshot).await;
        tracing::debug!(records = snapshot.len(), "date index rebuilt");
    }

    /// Worker loop: rebuild on every pushed snapshot until the feed closes.
    pub async fn run(self: Arc<Self>, mut receiver: watch::Receiver<Snapshot>) {
        self.catch_up(&mut receiver).await;
        while receiver.changed().await.is_ok() {
            self.catch_up(&mut receiver).await;
        }
        tracing::info!("snapshot feed closed, date index projection stopped");
    }
}
