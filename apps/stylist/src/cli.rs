//! Command-line front end. Each subcommand binds its arguments straight to
//! one backend request and prints the outcome; nothing is kept between runs.
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;
use serde_json::Value;
use tracing::{error, warn};

use crate::backend::{
    ImageUpload, QuizRequest, RecommendationRequest, StyleBackend, TrainRequest,
};
use crate::knowledge::reshape_form_fields;
use crate::models::quiz::QUESTION_COUNT;
use crate::models::{BodyType, QuizAnswers, StyleLabel};
use crate::session::actions::{KNOWLEDGE_FAILURE, NEW_DATA_FAILURE};

/// Whether a command with user-visible failures succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Failed,
}

pub async fn recommend(
    backend: &dyn StyleBackend,
    out: &mut dyn Write,
    occasion: String,
    preferred_color: String,
    body_type: Option<BodyType>,
) -> Result<Outcome> {
    let req = RecommendationRequest {
        occasion,
        preferred_color,
        body_type: body_type.map(|b| b.as_str().to_string()).unwrap_or_default(),
    };
    match backend.style_recommendation(&req).await {
        Ok(resp) => writeln!(out, "{}", resp.message)?,
        Err(e) => error!("Error fetching style recommendation: {e}"),
    }
    Ok(Outcome::Done)
}

pub async fn trends(backend: &dyn StyleBackend, out: &mut dyn Write) -> Result<Outcome> {
    match backend.trend_analysis().await {
        Ok(resp) => {
            writeln!(out, "Current Trends:")?;
            for trend in resp.current_trends {
                writeln!(out, "- {trend}")?;
            }
        }
        Err(e) => error!("Error fetching trend analysis: {e}"),
    }
    Ok(Outcome::Done)
}

pub async fn quiz(
    backend: &dyn StyleBackend,
    out: &mut dyn Write,
    answers: &[StyleLabel],
) -> Result<Outcome> {
    if answers.len() > QUESTION_COUNT {
        warn!(
            "Only the first {QUESTION_COUNT} answers are used, {} given",
            answers.len()
        );
    }
    let req = QuizRequest {
        answers: QuizAnswers::from(answers).to_wire(),
    };
    match backend.style_quiz(&req).await {
        Ok(result) => writeln!(out, "{}", result.summary())?,
        Err(e) => error!("Error submitting style quiz: {e}"),
    }
    Ok(Outcome::Done)
}

/// Sends hand-written JSON for training. Text that does not parse is never sent.
pub async fn train(backend: &dyn StyleBackend, out: &mut dyn Write, text: &str) -> Result<Outcome> {
    let new_data: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            error!("Error submitting new data: {e}");
            writeln!(out, "{NEW_DATA_FAILURE}")?;
            return Ok(Outcome::Failed);
        }
    };
    match backend.train_ai(&TrainRequest { new_data }).await {
        Ok(resp) => {
            writeln!(out, "{}", resp.message)?;
            Ok(Outcome::Done)
        }
        Err(e) => {
            error!("Error submitting new data: {e}");
            writeln!(out, "{NEW_DATA_FAILURE}")?;
            Ok(Outcome::Failed)
        }
    }
}

pub async fn admin(
    backend: &dyn StyleBackend,
    out: &mut dyn Write,
    fields: &[(String, String)],
) -> Result<Outcome> {
    let new_data = Value::Object(reshape_form_fields(fields));
    match backend.train_ai(&TrainRequest { new_data }).await {
        Ok(resp) => {
            writeln!(out, "{}", resp.message)?;
            Ok(Outcome::Done)
        }
        Err(e) => {
            error!("Error: {e}");
            writeln!(out, "{KNOWLEDGE_FAILURE}")?;
            Ok(Outcome::Failed)
        }
    }
}

pub async fn upload(backend: &dyn StyleBackend, out: &mut dyn Write, path: &Path) -> Result<Outcome> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image '{}'", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let image = ImageUpload {
        content_type: image_content_type(path).map(str::to_string),
        file_name,
        data: Bytes::from(data),
    };
    match backend.upload_image(image).await {
        Ok(resp) => writeln!(out, "Analyzed style: {}", resp.style)?,
        Err(e) => error!("Error: {e}"),
    }
    Ok(Outcome::Done)
}

fn image_content_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}
