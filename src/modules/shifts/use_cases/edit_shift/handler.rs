use std::sync::Arc;

use crate::modules::shifts::core::admission::admit_on_day;
use crate::modules::shifts::core::ports::ShiftStore;
use crate::modules::shifts::use_cases::errors::ApplicationError;
use crate::modules::shifts::use_cases::post_shift::command::PostShift;
use crate::modules::shifts::use_cases::post_shift::decide::decide_post;
use crate::modules::shifts::use_cases::post_shift::decision::PostOutcome;

/// Full replacement of a posting. Same validation and admission as a new post,
/// except the edited record does not count against its own day.
pub struct EditShiftHandler<TStore>
where
    TStore: ShiftStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> EditShiftHandler<TStore>
where
    TStore: ShiftStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        shift_id: &str,
        command: PostShift,
    ) -> Result<PostOutcome, ApplicationError> {
        let shift = decide_post(command)?;
        let date = shift.date;

        let insertion = self
            .store
            .replace_admitted(shift_id, shift, admit_on_day)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, %shift_id, "failed to edit shift"))?;

        let outcome = PostOutcome::from(insertion);
        match &outcome {
            PostOutcome::Posted(_) => tracing::info!(%shift_id, %date, "shift edited"),
            PostOutcome::Denied { reason } => {
                tracing::warn!(%shift_id, %date, %reason, "shift edit denied")
            }
        }
        Ok(outcome)
    }
}
