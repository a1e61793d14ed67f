// Ports define what the shifts core needs from the outside world.
//
// Purpose
// - Describe the store collaborator (a document store with push snapshots) as a trait.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
//
// Consistency
// - Writes that must respect admission go through `create_admitted` / `replace_admitted`,
//   which evaluate the rule and write in one critical section. A plain read followed by
//   `create` leaves a window where a competing post can slip in.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

use crate::modules::shifts::core::admission::{AdmissionRule, Denial};
use crate::modules::shifts::core::shift::{NewShift, ShiftDate, ShiftRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("shift not found: {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Full list of live records, ordered by creation time.
pub type Snapshot = Arc<Vec<ShiftRecord>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    Inserted(ShiftRecord),
    Denied(Denial),
}

#[async_trait]
pub trait ShiftStore: Send + Sync {
    async fn list(&self) -> Result<Vec<ShiftRecord>, StoreError>;

    async fn list_for_date(
        &self,
        date: &ShiftDate,
        user_id: Option<&str>,
    ) -> Result<Vec<ShiftRecord>, StoreError>;

    async fn create(&self, shift: NewShift) -> Result<ShiftRecord, StoreError>;

    async fn create_admitted(
        &self,
        shift: NewShift,
        rule: AdmissionRule,
    ) -> Result<Insertion, StoreError>;

    /// The rule sees the target day without the record being replaced.
    async fn replace_admitted(
        &self,
        id: &str,
        shift: NewShift,
        rule: AdmissionRule,
    ) -> Result<Insertion, StoreError>;

    async fn remove(&self, id: &str) -> Result<(), StoreError>;

    fn subscribe(&self) -> watch::Receiver<Snapshot>;
}
