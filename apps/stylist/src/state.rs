use std::sync::Arc;

use tokio::sync::Mutex;

use crate::backend::StyleBackend;
use crate::config::Config;
use crate::session::SessionState;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn StyleBackend>,
    /// The single session record the page is rendered from.
    pub session: Arc<Mutex<SessionState>>,
    pub config: Config,
}

impl AppState {
    pub fn new(backend: Arc<dyn StyleBackend>, config: Config) -> Self {
        Self {
            backend,
            session: Arc::new(Mutex::new(SessionState::default())),
            config,
        }
    }
}
