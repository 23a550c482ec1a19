use std::time::Instant;

use axum::{extract::State, response::Html};

use crate::render::{render_admin, render_index};
use crate::state::AppState;

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(&session, Instant::now(), state.config.notification_ttl))
}

/// GET /admin
pub async fn handle_admin(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_admin(&session, Instant::now(), state.config.notification_ttl))
}
