use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use super::{
    BackendError, ImageStyle, ImageUpload, MessageResponse, QuizRequest, QuizResult,
    RecommendationRequest, StyleBackend, TrainRequest, TrendAnalysis, RECOMMENDATION_PATH,
    STYLE_QUIZ_PATH, TRAIN_AI_PATH, TREND_ANALYSIS_PATH, UPLOAD_IMAGE_PATH,
};

/// Multipart field name the backend reads the image from.
const IMAGE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the FashionStyleAI backend.
/// One request per call: no retries, no client-side timeout.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!("POST {path}");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        decode(response).await
    }
}

/// Turns a backend response into `T`, or into `BackendError::Api` for non-2xx
/// statuses, keeping the backend's `{"error": ...}` message when there is one.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        return Err(BackendError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}

#[async_trait]
impl StyleBackend for BackendClient {
    async fn style_recommendation(
        &self,
        req: &RecommendationRequest,
    ) -> Result<MessageResponse, BackendError> {
        self.post_json(RECOMMENDATION_PATH, req).await
    }

    async fn trend_analysis(&self) -> Result<TrendAnalysis, BackendError> {
        debug!("GET {TREND_ANALYSIS_PATH}");
        let response = self
            .client
            .get(self.url(TREND_ANALYSIS_PATH))
            .send()
            .await?;
        decode(response).await
    }

    async fn style_quiz(&self, req: &QuizRequest) -> Result<QuizResult, BackendError> {
        self.post_json(STYLE_QUIZ_PATH, req).await
    }

    async fn train_ai(&self, req: &TrainRequest) -> Result<MessageResponse, BackendError> {
        self.post_json(TRAIN_AI_PATH, req).await
    }

    async fn upload_image(&self, image: ImageUpload) -> Result<ImageStyle, BackendError> {
        let mut part = multipart::Part::bytes(image.data.to_vec()).file_name(image.file_name);
        if let Some(content_type) = image.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }
        let form = multipart::Form::new().part(IMAGE_FIELD, part);

        debug!("POST {UPLOAD_IMAGE_PATH}");
        let response = self
            .client
            .post(self.url(UPLOAD_IMAGE_PATH))
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }
}
