use std::sync::Arc;

use axum::http::StatusCode;
use tracing::error;

use chirp_core::{AccountService, MessageService};
use chirp_db::Store;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub accounts: AccountService,
    pub messages: MessageService,
}

impl AppStateInner {
    /// Wires both services to the same store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            accounts: AccountService::new(store.clone()),
            messages: MessageService::new(store),
        }
    }
}

/// Runs a service call off the async runtime; storage calls block.
pub(crate) async fn blocking<F, T>(state: &AppState, f: F) -> Result<T, StatusCode>
where
    F: FnOnce(&AppStateInner) -> T + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
