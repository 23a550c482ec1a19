//! Actions the web front end dispatches against the session record.
//!
//! Each action snapshots its inputs, releases the lock for the network call,
//! then re-locks to apply the result. When the same action overlaps with
//! itself, whichever response resolves last is what ends up displayed.
use std::time::Instant;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::backend::{ImageUpload, StyleBackend, TrainRequest};
use crate::knowledge::reshape_form_fields;
use crate::models::quiz::QUESTION_COUNT;
use crate::session::SessionState;

pub const NEW_DATA_FAILURE: &str =
    "Error submitting new data. Please check the format and try again.";
pub const KNOWLEDGE_FAILURE: &str = "An error occurred while updating the knowledge base.";

pub async fn get_recommendation(backend: &dyn StyleBackend, session: &Mutex<SessionState>) {
    let req = session.lock().await.recommendation_request();
    match backend.style_recommendation(&req).await {
        Ok(resp) => session.lock().await.recommendation = resp.message,
        Err(e) => error!("Error fetching style recommendation: {e}"),
    }
}

pub async fn get_trend_analysis(backend: &dyn StyleBackend, session: &Mutex<SessionState>) {
    match backend.trend_analysis().await {
        Ok(resp) => session.lock().await.trends = resp.current_trends,
        Err(e) => error!("Error fetching trend analysis: {e}"),
    }
}

/// Sends the answers as they stand; unanswered questions go out empty.
/// The dialog only closes on success.
pub async fn submit_quiz(backend: &dyn StyleBackend, session: &Mutex<SessionState>) {
    let req = {
        let state = session.lock().await;
        debug!(
            "Submitting style quiz with {} of {} answers",
            state.quiz_answers.answered(),
            QUESTION_COUNT
        );
        state.quiz_request()
    };
    match backend.style_quiz(&req).await {
        Ok(result) => {
            let mut state = session.lock().await;
            state.quiz_result = result.summary();
            state.quiz_open = false;
        }
        Err(e) => error!("Error submitting style quiz: {e}"),
    }
}

/// Parses the dialog text as JSON and forwards it for training.
/// Text that does not parse never reaches the network.
pub async fn submit_new_data(backend: &dyn StyleBackend, session: &Mutex<SessionState>) {
    let text = session.lock().await.new_data.clone();

    let new_data: Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            error!("Error submitting new data: {e}");
            session.lock().await.notify(NEW_DATA_FAILURE, Instant::now());
            return;
        }
    };

    let outcome = backend.train_ai(&TrainRequest { new_data }).await;
    let mut state = session.lock().await;
    match outcome {
        Ok(resp) => {
            info!("New data accepted by backend");
            state.notify(resp.message, Instant::now());
            state.new_data_open = false;
        }
        Err(e) => {
            error!("Error submitting new data: {e}");
            state.notify(NEW_DATA_FAILURE, Instant::now());
        }
    }
}

pub async fn update_knowledge_base(
    backend: &dyn StyleBackend,
    session: &Mutex<SessionState>,
    fields: &[(String, String)],
) {
    let new_data = Value::Object(reshape_form_fields(fields));
    let outcome = backend.train_ai(&TrainRequest { new_data }).await;
    let message = match outcome {
        Ok(resp) => resp.message,
        Err(e) => {
            error!("Error updating knowledge base: {e}");
            KNOWLEDGE_FAILURE.to_string()
        }
    };
    session.lock().await.notify(message, Instant::now());
}

pub async fn analyze_image(
    backend: &dyn StyleBackend,
    session: &Mutex<SessionState>,
    image: ImageUpload,
) {
    match backend.upload_image(image).await {
        Ok(resp) => session.lock().await.image_style = Some(resp.style),
        Err(e) => error!("Error analyzing image: {e}"),
    }
}
