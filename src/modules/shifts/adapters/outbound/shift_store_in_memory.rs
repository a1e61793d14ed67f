// In memory implementation of the ShiftStore port.
//
// Purpose
// - Support handler tests and local development without a hosted document store.
//
// Responsibilities
// - Keep live records in creation order.
// - Evaluate admission rules under the write lock so check and insert are one step.
// - Push a full snapshot to subscribers after every committed write.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, watch};
use uuid::Uuid;

use crate::modules::shifts::core::admission::{Admission, AdmissionRule};
use crate::modules::shifts::core::ports::{Insertion, ShiftStore, Snapshot, StoreError};
use crate::modules::shifts::core::shift::{NewShift, ShiftDate, ShiftRecord};
use crate::shared::infrastructure::snapshot_feed::SnapshotFeed;

#[derive(Default)]
pub struct InMemoryShiftStore {
    records: RwLock<Vec<ShiftRecord>>,
    feed: SnapshotFeed<ShiftRecord>,
    delay_write_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryShiftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Holds the write lock this long before committing, to widen race windows in tests.
    pub fn set_delay_write_ms(&self, ms: u64) {
        self.delay_write_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Shift store offline".into()));
        }
        Ok(())
    }

    async fn write_delay(&self) {
        let ms = self.delay_write_ms.load(Ordering::Relaxed);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    fn new_record(shift: NewShift) -> ShiftRecord {
        ShiftRecord::from_new(
            Uuid::now_v7().to_string(),
            Utc::now().timestamp_millis(),
            shift,
        )
    }
}

#[async_trait]
impl ShiftStore for InMemoryShiftStore {
    async fn list(&self) -> Result<Vec<ShiftRecord>, StoreError> {
        self.ensure_online()?;
        Ok(self.records.read().await.clone())
    }

    async fn list_for_date(
        &self,
        date: &ShiftDate,
        user_id: Option<&str>,
    ) -> Result<Vec<ShiftRecord>, StoreError> {
        self.ensure_online()?;
        let guard = self.records.read().await;
        Ok(guard
            .iter()
            .filter(|r| &r.date == date)
            .filter(|r| user_id.is_none_or(|uid| r.user_id == uid))
            .cloned()
            .collect())
    }

    async fn create(&self, shift: NewShift) -> Result<ShiftRecord, StoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        self.write_delay().await;
        let record = Self::new_record(shift);
        guard.push(record.clone());
        self.feed.publish(guard.clone());
        Ok(record)
    }

    async fn create_admitted(
        &self,
        shift: NewShift,
        rule: AdmissionRule,
    ) -> Result<Insertion, StoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        self.write_delay().await;
        let day: Vec<ShiftRecord> = guard
            .iter()
            .filter(|r| r.date == shift.date)
            .cloned()
            .collect();
        if let Admission::Denied(denial) = rule(&day, &shift.user_id) {
            return Ok(Insertion::Denied(denial));
        }
        let record = Self::new_record(shift);
        guard.push(record.clone());
        self.feed.publish(guard.clone());
        Ok(Insertion::Inserted(record))
    }

    async fn replace_admitted(
        &self,
        id: &str,
        shift: NewShift,
        rule: AdmissionRule,
    ) -> Result<Insertion, StoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        self.write_delay().await;
        let position = guard
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let day: Vec<ShiftRecord> = guard
            .iter()
            .filter(|r| r.date == shift.date && r.id != id)
            .cloned()
            .collect();
        if let Admission::Denied(denial) = rule(&day, &shift.user_id) {
            return Ok(Insertion::Denied(denial));
        }
        let updated = guard[position].clone().replaced_with(shift);
        guard[position] = updated.clone();
        self.feed.publish(guard.clone());
        Ok(Insertion::Inserted(updated))
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        let position = guard
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        guard.remove(position);
        self.feed.publish(guard.clone());
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.feed.subscribe()
    }
}
