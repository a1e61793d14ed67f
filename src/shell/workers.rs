use tokio::task::JoinHandle;

use crate::modules::shifts::core::ports::ShiftStore;
use crate::shell::state::AppState;

/// Keeps the date index in step with the store's snapshot feed.
pub fn spawn_projection(state: &AppState) -> JoinHandle<()> {
    let receiver = state.store.subscribe();
    tokio::spawn(state.projection.clone().run(receiver))
}
