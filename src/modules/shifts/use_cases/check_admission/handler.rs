use std::sync::Arc;

use crate::modules::shifts::core::admission::{Admission, admit_on_day};
use crate::modules::shifts::core::ports::ShiftStore;
use crate::modules::shifts::core::shift::ShiftDate;
use crate::modules::shifts::core::validation::validate_user_id;
use crate::modules::shifts::use_cases::errors::ApplicationError;

/// Advisory check against a one-shot read of the day. Writes re-check inside
/// the store, so a stale answer here never lets a post through.
pub struct CheckAdmissionHandler<TStore>
where
    TStore: ShiftStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CheckAdmissionHandler<TStore>
where
    TStore: ShiftStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, date: &str, user_id: &str) -> Result<Admission, ApplicationError> {
        let date = ShiftDate::parse(date)?;
        let user_id = validate_user_id(user_id)?;
        let day = self.store.list_for_date(&date, None).await?;
        Ok(admit_on_day(&day, &user_id))
    }
}
