//! Request contract with the FashionStyleAI backend.
//!
//! Both front ends (the web session and the command-line bindings) talk to the
//! backend only through `StyleBackend`. `BackendClient` is the HTTP
//! implementation; tests substitute an in-memory one.
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub mod client;

pub use client::BackendClient;

pub const RECOMMENDATION_PATH: &str = "/api/style_recommendation";
pub const TREND_ANALYSIS_PATH: &str = "/api/trend_analysis";
pub const STYLE_QUIZ_PATH: &str = "/api/style_quiz";
pub const TRAIN_AI_PATH: &str = "/api/train_ai";
pub const UPLOAD_IMAGE_PATH: &str = "/upload_image";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationRequest {
    pub occasion: String,
    pub preferred_color: String,
    /// Empty when no body type has been selected yet.
    pub body_type: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TrendAnalysis {
    pub current_trends: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuizRequest {
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QuizResult {
    pub dominant_style: String,
    pub description: String,
}

impl QuizResult {
    pub fn summary(&self) -> String {
        format!(
            "Your dominant style is {}: {}",
            self.dominant_style, self.description
        )
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrainRequest {
    pub new_data: Value,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ImageStyle {
    pub style: String,
}

/// An image to send to the style analyzer.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[async_trait]
pub trait StyleBackend: Send + Sync {
    async fn style_recommendation(
        &self,
        req: &RecommendationRequest,
    ) -> Result<MessageResponse, BackendError>;

    async fn trend_analysis(&self) -> Result<TrendAnalysis, BackendError>;

    async fn style_quiz(&self, req: &QuizRequest) -> Result<QuizResult, BackendError>;

    async fn train_ai(&self, req: &TrainRequest) -> Result<MessageResponse, BackendError>;

    async fn upload_image(&self, image: ImageUpload) -> Result<ImageStyle, BackendError>;
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Records every call and answers from canned results.
    #[derive(Default)]
    pub struct FakeBackend {
        pub calls: Mutex<Vec<String>>,
        pub trained: Mutex<Vec<Value>>,
        pub recommendations: Mutex<Vec<RecommendationRequest>>,
        pub quizzes: Mutex<Vec<QuizRequest>>,
        pub fail: bool,
        pub message: String,
        pub trends: Vec<String>,
        pub quiz: Option<QuizResult>,
        pub style: String,
    }

    impl FakeBackend {
        pub fn ok() -> Self {
            Self {
                message: "Wear a navy blazer".to_string(),
                trends: vec!["Oversized blazers".to_string(), "Sheer fabrics".to_string()],
                quiz: Some(QuizResult {
                    dominant_style: "classic".to_string(),
                    description: "Timeless pieces".to_string(),
                }),
                style: "bohemian".to_string(),
                ..Default::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn record(&self, name: &str) -> Result<(), BackendError> {
            self.calls.lock().unwrap().push(name.to_string());
            if self.fail {
                Err(BackendError::Api {
                    status: 500,
                    message: "boom".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl StyleBackend for FakeBackend {
        async fn style_recommendation(
            &self,
            req: &RecommendationRequest,
        ) -> Result<MessageResponse, BackendError> {
            self.recommendations.lock().unwrap().push(req.clone());
            self.record("style_recommendation")?;
            Ok(MessageResponse {
                message: self.message.clone(),
            })
        }

        async fn trend_analysis(&self) -> Result<TrendAnalysis, BackendError> {
            self.record("trend_analysis")?;
            Ok(TrendAnalysis {
                current_trends: self.trends.clone(),
            })
        }

        async fn style_quiz(&self, req: &QuizRequest) -> Result<QuizResult, BackendError> {
            self.quizzes.lock().unwrap().push(req.clone());
            self.record("style_quiz")?;
            Ok(self.quiz.clone().unwrap_or(QuizResult {
                dominant_style: String::new(),
                description: String::new(),
            }))
        }

        async fn train_ai(&self, req: &TrainRequest) -> Result<MessageResponse, BackendError> {
            self.trained.lock().unwrap().push(req.new_data.clone());
            self.record("train_ai")?;
            Ok(MessageResponse {
                message: "AI model updated and retrained successfully".to_string(),
            })
        }

        async fn upload_image(&self, _image: ImageUpload) -> Result<ImageStyle, BackendError> {
            self.record("upload_image")?;
            Ok(ImageStyle {
                style: self.style.clone(),
            })
        }
    }
}
