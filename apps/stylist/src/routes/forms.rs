use axum::{
    extract::{Multipart, State},
    response::Redirect,
    Form,
};
use serde::Deserialize;
use tracing::debug;

use crate::backend::ImageUpload;
use crate::errors::AppError;
use crate::models::{BodyType, StyleLabel};
use crate::session::{actions, SessionState};
use crate::state::AppState;

const ANSWER_PREFIX: &str = "answer_";

/// The three inputs of the main form. Every button of that form posts them,
/// so the session always mirrors what is on screen.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FieldsForm {
    pub occasion: String,
    pub preferred_color: String,
    pub body_type: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewDataForm {
    pub new_data: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DismissForm {
    pub return_to: String,
}

fn sync_fields(state: &mut SessionState, form: FieldsForm) -> Result<(), AppError> {
    let body_type = match form.body_type.trim() {
        "" => None,
        raw => Some(
            raw.parse::<BodyType>()
                .map_err(|e| AppError::Validation(e.to_string()))?,
        ),
    };
    state.occasion = form.occasion;
    state.preferred_color = form.preferred_color;
    state.body_type = body_type;
    Ok(())
}

/// Applies every `answer_<n>` pair to its own slot; other names are ignored.
fn apply_answers(state: &mut SessionState, pairs: &[(String, String)]) -> Result<(), AppError> {
    for (name, value) in pairs {
        let Some(index) = name
            .strip_prefix(ANSWER_PREFIX)
            .and_then(|i| i.parse::<usize>().ok())
        else {
            continue;
        };
        let label = value
            .parse::<StyleLabel>()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        state.set_answer(index, label);
    }
    Ok(())
}

/// POST /recommendation
pub async fn handle_recommendation(
    State(state): State<AppState>,
    Form(form): Form<FieldsForm>,
) -> Result<Redirect, AppError> {
    sync_fields(&mut *state.session.lock().await, form)?;
    actions::get_recommendation(state.backend.as_ref(), &state.session).await;
    Ok(Redirect::to("/"))
}

/// POST /trends
pub async fn handle_trends(
    State(state): State<AppState>,
    Form(form): Form<FieldsForm>,
) -> Result<Redirect, AppError> {
    sync_fields(&mut *state.session.lock().await, form)?;
    actions::get_trend_analysis(state.backend.as_ref(), &state.session).await;
    Ok(Redirect::to("/"))
}

/// POST /quiz/open
pub async fn handle_quiz_open(
    State(state): State<AppState>,
    Form(form): Form<FieldsForm>,
) -> Result<Redirect, AppError> {
    let mut session = state.session.lock().await;
    sync_fields(&mut session, form)?;
    session.open_quiz();
    Ok(Redirect::to("/"))
}

/// POST /quiz/cancel
/// Selections made before cancelling are kept for the next time the quiz opens.
pub async fn handle_quiz_cancel(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect, AppError> {
    let mut session = state.session.lock().await;
    apply_answers(&mut session, &pairs)?;
    session.cancel_quiz();
    Ok(Redirect::to("/"))
}

/// POST /quiz/submit
pub async fn handle_quiz_submit(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect, AppError> {
    apply_answers(&mut *state.session.lock().await, &pairs)?;
    actions::submit_quiz(state.backend.as_ref(), &state.session).await;
    Ok(Redirect::to("/"))
}

/// POST /new-data/open
pub async fn handle_new_data_open(
    State(state): State<AppState>,
    Form(form): Form<FieldsForm>,
) -> Result<Redirect, AppError> {
    let mut session = state.session.lock().await;
    sync_fields(&mut session, form)?;
    session.open_new_data();
    Ok(Redirect::to("/"))
}

/// POST /new-data/cancel
pub async fn handle_new_data_cancel(
    State(state): State<AppState>,
    Form(form): Form<NewDataForm>,
) -> Redirect {
    let mut session = state.session.lock().await;
    session.set_new_data_text(form.new_data);
    session.cancel_new_data();
    Redirect::to("/")
}

/// POST /new-data/submit
pub async fn handle_new_data_submit(
    State(state): State<AppState>,
    Form(form): Form<NewDataForm>,
) -> Redirect {
    state.session.lock().await.set_new_data_text(form.new_data);
    actions::submit_new_data(state.backend.as_ref(), &state.session).await;
    Redirect::to("/")
}

/// POST /notification/dismiss
pub async fn handle_dismiss_notification(
    State(state): State<AppState>,
    Form(form): Form<DismissForm>,
) -> Redirect {
    state.session.lock().await.dismiss_notification();
    match form.return_to.as_str() {
        "/admin" => Redirect::to("/admin"),
        _ => Redirect::to("/"),
    }
}

/// POST /upload
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut image = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;
        debug!("Received image '{file_name}' ({} bytes)", data.len());
        image = Some(ImageUpload {
            file_name,
            content_type,
            data,
        });
    }

    let image = image.ok_or_else(|| AppError::Validation("No file part".to_string()))?;
    actions::analyze_image(state.backend.as_ref(), &state.session, image).await;
    Ok(Redirect::to("/"))
}

/// POST /admin/knowledge
/// Blank inputs are left out so they do not overwrite existing entries.
pub async fn handle_update_knowledge(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Redirect {
    let fields: Vec<(String, String)> = pairs
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect();
    actions::update_knowledge_base(state.backend.as_ref(), &state.session, &fields).await;
    Redirect::to("/admin")
}
