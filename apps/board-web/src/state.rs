//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::ports::PostApi;

use crate::views::Views;

/// Shared application state.
///
/// Holds no post data: every page fetches its own copy.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn PostApi>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(api: Arc<dyn PostApi>) -> Result<Self, tera::Error> {
        let views = Arc::new(Views::new()?);
        tracing::info!("Application state initialized");
        Ok(Self { api, views })
    }
}
