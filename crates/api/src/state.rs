use std::sync::Arc;

use formkit_core::validation::MessageCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Message catalog attached to every field the handlers build.
    pub catalog: Arc<MessageCatalog>,
}
