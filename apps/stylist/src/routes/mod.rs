pub mod forms;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(pages::handle_index))
        .route("/admin", get(pages::handle_admin))
        // Form & action panel
        .route("/recommendation", post(forms::handle_recommendation))
        .route("/trends", post(forms::handle_trends))
        // Style quiz dialog
        .route("/quiz/open", post(forms::handle_quiz_open))
        .route("/quiz/cancel", post(forms::handle_quiz_cancel))
        .route("/quiz/submit", post(forms::handle_quiz_submit))
        // New-data dialog
        .route("/new-data/open", post(forms::handle_new_data_open))
        .route("/new-data/cancel", post(forms::handle_new_data_cancel))
        .route("/new-data/submit", post(forms::handle_new_data_submit))
        .route(
            "/notification/dismiss",
            post(forms::handle_dismiss_notification),
        )
        // Image analysis and knowledge base
        .route("/upload", post(forms::handle_upload))
        .route("/admin/knowledge", post(forms::handle_update_knowledge))
        .with_state(state)
}
