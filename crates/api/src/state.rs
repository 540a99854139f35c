use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to handlers and extractors through `State<AppState>`.
/// Cloned per request; both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: confera_db::DbPool,
    pub config: Arc<ServerConfig>,
}
