use std::sync::Arc;

use crate::modules::shifts::core::admission::admit_on_day;
use crate::modules::shifts::core::ports::ShiftStore;
use crate::modules::shifts::use_cases::errors::ApplicationError;
use crate::modules::shifts::use_cases::post_shift::command::PostShift;
use crate::modules::shifts::use_cases::post_shift::decide::decide_post;
use crate::modules::shifts::use_cases::post_shift::decision::PostOutcome;

pub struct PostShiftHandler<TStore>
where
    TStore: ShiftStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> PostShiftHandler<TStore>
where
    TStore: ShiftStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: PostShift) -> Result<PostOutcome, ApplicationError> {
        let shift = decide_post(command)?;
        let (date, user_id) = (shift.date, shift.user_id.clone());

        let insertion = self
            .store
            .create_admitted(shift, admit_on_day)
            .await
            .inspect_err(|e| tracing::error!(error = %e, %date, "failed to post shift"))?;

        let outcome = PostOutcome::from(insertion);
        match &outcome {
            PostOutcome::Posted(record) => {
                tracing::info!(shift_id = %record.id, %date, %user_id, "shift posted")
            }
            PostOutcome::Denied { reason } => {
                tracing::warn!(%date, %user_id, %reason, "shift post denied")
            }
        }
        Ok(outcome)
    }
}
