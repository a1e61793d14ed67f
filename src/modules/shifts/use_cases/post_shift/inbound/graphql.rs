use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult, SimpleObject};

use crate::modules::shifts::use_cases::list_shifts_by_date::inbound::graphql::GqlShift;
use crate::modules::shifts::use_cases::post_shift::command::PostShift;
use crate::modules::shifts::use_cases::post_shift::decision::PostOutcome;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct ShiftInput {
    pub user_id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub time: String,
    pub phone: String,
    pub notes: Option<String>,
}

impl From<ShiftInput> for PostShift {
    fn from(input: ShiftInput) -> Self {
        Self {
            user_id: input.user_id,
            name: input.name,
            date: input.date,
            location: input.location,
            time: input.time,
            phone: input.phone,
            notes: input.notes,
        }
    }
}

/// Exactly one of `shift` and `denied_reason` is set.
#[derive(SimpleObject)]
pub struct GqlPostResult {
    pub shift: Option<GqlShift>,
    pub denied_reason: Option<String>,
}

impl GqlPostResult {
    fn from_outcome(outcome: PostOutcome, phone_country_code: &str) -> Self {
        match outcome {
            PostOutcome::Posted(record) => Self {
                shift: Some(GqlShift::from_record(&record, phone_country_code)),
                denied_reason: None,
            },
            PostOutcome::Denied { reason } => Self {
                shift: None,
                denied_reason: Some(reason.to_string()),
            },
        }
    }
}


pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn post_shift(
        &self,
        context: &Context<'_>,
        input: ShiftInput,
    ) -> GqlResult<GqlPostResult> {
        let state = context.data_unchecked::<AppState>();
        let outcome = state.post_handler.handle(input.into()).await?;
        state.refresh_projection().await;
        Ok(GqlPostResult::from_outcome(
            outcome,
            &state.config.phone_country_code,
        ))
    }

    async fn edit_shift(
        &self,
        context: &Context<'_>,
        id: ID,
        input: ShiftInput,
    ) -> GqlResult<GqlPostResult> {
        let state = context.data_unchecked::<AppState>();
        let outcome = state.edit_handler.handle(id.as_str(), input.into()).await?;
        state.refresh_projection().await;
        Ok(GqlPostResult::from_outcome(
            outcome,
            &state.config.phone_country_code,
        ))
    }

    async fn remove_shift(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.remove_handler.handle(id.as_str()).await?;
        state.refresh_projection().await;
        Ok(true)
    }
}
