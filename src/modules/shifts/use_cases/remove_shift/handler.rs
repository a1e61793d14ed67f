use std::sync::Arc;

use crate::modules::shifts::core::ports::{ShiftStore, StoreError};
use crate::modules::shifts::use_cases::errors::ApplicationError;

/// Removes a posting once the swap has been arranged. Removing an id that is
/// already gone succeeds.
pub struct RemoveShiftHandler<TStore>
where
    TStore: ShiftStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RemoveShiftHandler<TStore>
where
    TStore: ShiftStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, shift_id: &str) -> Result<(), ApplicationError> {
        match self.store.remove(shift_id).await {
            Ok(()) => {
                tracing::info!(%shift_id, "shift removed");
                Ok(())
            }
            Err(StoreError::NotFound(_)) => {
                tracing::debug!(%shift_id, "shift already removed");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, %shift_id, "failed to remove shift");
                Err(e.into())
            }
        }
    }
}
