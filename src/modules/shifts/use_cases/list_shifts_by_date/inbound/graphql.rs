use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::shifts::core::admission::{Admission, DAY_CAPACITY};
use crate::modules::shifts::core::contact::whatsapp_link;
use crate::modules::shifts::core::shift::{ShiftDate, ShiftRecord};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlShift {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub time: String,
    pub phone: String,
    pub notes: Option<String>,
    pub created_at: i64,
    pub contact_link: String,
}

impl GqlShift {
    pub fn from_record(record: &ShiftRecord, phone_country_code: &str) -> Self {
        Self {
            id: record.id.clone(),
            user_id: record.user_id.clone(),
            name: record.name.clone(),
            date: record.date.to_string(),
            location: record.location.to_string(),
            time: record.time.to_string(),
            phone: record.phone.clone(),
            notes: record.notes.clone(),
            created_at: record.created_at,
            contact_link: whatsapp_link(record, phone_country_code),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlDay {
    pub date: String,
    pub shifts: Vec<GqlShift>,
    /// False once the day holds its maximum number of postings.
    pub can_add: bool,
}

impl GqlDay {
    fn new(date: &ShiftDate, day: &[ShiftRecord], phone_country_code: &str) -> Self {
        Self {
            date: date.to_string(),
            shifts: day
                .iter()
                .map(|r| GqlShift::from_record(r, phone_country_code))
                .collect(),
            can_add: day.len() < DAY_CAPACITY,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlAdmission {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl From<Admission> for GqlAdmission {
    fn from(admission: Admission) -> Self {
        Self {
            allowed: admission.is_allowed(),
            reason: admission.reason(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn shifts_by_date(
        &self,
        context: &Context<'_>,
        from: Option<String>,
        to: Option<String>,
    ) -> GqlResult<Vec<GqlDay>> {
        let state = context.data_unchecked::<AppState>();
        let from = from.as_deref().map(ShiftDate::parse).transpose()?;
        let to = to.as_deref().map(ShiftDate::parse).transpose()?;
        let index = state.projection.current().await;
        Ok(index
            .between(from, to)
            .iter()
            .map(|(date, day)| GqlDay::new(date, day, &state.config.phone_country_code))
            .collect())
    }

    async fn day(&self, context: &Context<'_>, date: String) -> GqlResult<GqlDay> {
        let state = context.data_unchecked::<AppState>();
        let date = ShiftDate::parse(&date)?;
        let index = state.projection.current().await;
        Ok(GqlDay::new(
            &date,
            index.day(&date),
            &state.config.phone_country_code,
        ))
    }

    async fn admission(
        &self,
        context: &Context<'_>,
        date: String,
        user_id: String,
    ) -> GqlResult<GqlAdmission> {
        let state = context.data_unchecked::<AppState>();
        let admission = state.admission_handler.handle(&date, &user_id).await?;
        Ok(admission.into())
    }
}
