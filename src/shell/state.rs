use std::sync::Arc;

use crate::modules::shifts::adapters::outbound::shift_store_in_memory::InMemoryShiftStore;
use crate::modules::shifts::core::ports::ShiftStore;
use crate::modules::shifts::use_cases::check_admission::handler::CheckAdmissionHandler;
use crate::modules::shifts::use_cases::edit_shift::handler::EditShiftHandler;
use crate::modules::shifts::use_cases::list_shifts_by_date::projection::DateIndexProjection;
use crate::modules::shifts::use_cases::post_shift::handler::PostShiftHandler;
use crate::modules::shifts::use_cases::remove_shift::handler::RemoveShiftHandler;
use crate::shell::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<InMemoryShiftStore>,
    pub post_handler: Arc<PostShiftHandler<InMemoryShiftStore>>,
    pub edit_handler: Arc<EditShiftHandler<InMemoryShiftStore>>,
    pub remove_handler: Arc<RemoveShiftHandler<InMemoryShiftStore>>,
    pub admission_handler: Arc<CheckAdmissionHandler<InMemoryShiftStore>>,
    pub projection: Arc<DateIndexProjection>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<InMemoryShiftStore>) -> Self {
        Self {
            config: Arc::new(config),
            post_handler: Arc::new(PostShiftHandler::new(store.clone())),
            edit_handler: Arc::new(EditShiftHandler::new(store.clone())),
            remove_handler: Arc::new(RemoveShiftHandler::new(store.clone())),
            admission_handler: Arc::new(CheckAdmissionHandler::new(store.clone())),
            projection: Arc::new(DateIndexProjection::new()),
            store,
        }
    }

    /// Rebuilds the date index from the store's latest snapshot so reads after
    /// a write see it without waiting for the worker.
    pub async fn refresh_projection(&self) {
        let mut receiver = self.store.subscribe();
        self.projection.catch_up(&mut receiver).await;
    }
}
