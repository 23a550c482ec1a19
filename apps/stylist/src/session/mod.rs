use std::time::{Duration, Instant};

use crate::backend::{QuizRequest, RecommendationRequest};
use crate::models::{BodyType, QuizAnswers, StyleLabel};

pub mod actions;

/// Transient message shown after a submission.
#[derive(Debug, Clone, Default)]
pub struct Notification {
    pub message: String,
    pub open: bool,
    pub shown_at: Option<Instant>,
}

impl Notification {
    /// Open and younger than `ttl`.
    pub fn is_visible(&self, now: Instant, ttl: Duration) -> bool {
        match self.shown_at {
            Some(shown_at) if self.open => now.saturating_duration_since(shown_at) < ttl,
            _ => false,
        }
    }
}

/// Everything the web front end displays. One record per running server,
/// owned by `AppState` and handed to the renderer by reference.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub occasion: String,
    pub preferred_color: String,
    pub body_type: Option<BodyType>,

    pub recommendation: String,
    pub trends: Vec<String>,
    pub quiz_result: String,
    pub image_style: Option<String>,

    pub quiz_open: bool,
    pub quiz_answers: QuizAnswers,

    pub new_data_open: bool,
    pub new_data: String,

    pub notification: Notification,
}

impl SessionState {
    pub fn open_quiz(&mut self) {
        self.quiz_open = true;
    }

    pub fn cancel_quiz(&mut self) {
        self.quiz_open = false;
    }

    pub fn set_answer(&mut self, index: usize, label: StyleLabel) {
        self.quiz_answers.set(index, label);
    }

    pub fn open_new_data(&mut self) {
        self.new_data_open = true;
    }

    pub fn cancel_new_data(&mut self) {
        self.new_data_open = false;
    }

    pub fn set_new_data_text(&mut self, text: impl Into<String>) {
        self.new_data = text.into();
    }

    pub fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.notification = Notification {
            message: message.into(),
            open: true,
            shown_at: Some(now),
        };
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.open = false;
    }

    pub fn recommendation_request(&self) -> RecommendationRequest {
        RecommendationRequest {
            occasion: self.occasion.clone(),
            preferred_color: self.preferred_color.clone(),
            body_type: self
                .body_type
                .map(|b| b.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn quiz_request(&self) -> QuizRequest {
        QuizRequest {
            answers: self.quiz_answers.to_wire(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_toggles() {
        let mut state = SessionState::default();
        state.open_quiz();
        state.open_new_data();
        assert!(state.quiz_open && state.new_data_open);
        state.cancel_quiz();
        assert!(!state.quiz_open);
        assert!(state.new_data_open);
        state.cancel_new_data();
        assert!(!state.new_data_open);
    }

    #[test]
    fn test_cancel_keeps_quiz_answers() {
        let mut state = SessionState::default();
        state.open_quiz();
        state.set_answer(2, StyleLabel::Minimalist);
        state.cancel_quiz();
        assert_eq!(state.quiz_answers.get(2), Some(StyleLabel::Minimalist));
    }

    #[test]
    fn test_notification_expires() {
        let mut state = SessionState::default();
        let ttl = Duration::from_secs(6);
        let t0 = Instant::now();
        assert!(!state.notification.is_visible(t0, ttl));

        state.notify("saved", t0);
        assert!(state.notification.is_visible(t0 + Duration::from_secs(5), ttl));
        assert!(!state.notification.is_visible(t0 + Duration::from_secs(6), ttl));
    }

    #[test]
    fn test_dismissed_notification_hidden() {
        let mut state = SessionState::default();
        let t0 = Instant::now();
        state.notify("saved", t0);
        state.dismiss_notification();
        assert!(!state.notification.is_visible(t0, Duration::from_secs(6)));
        assert_eq!(state.notification.message, "saved");
    }

    #[test]
    fn test_recommendation_request_without_body_type() {
        let state = SessionState {
            occasion: "interview".to_string(),
            preferred_color: "grey".to_string(),
            ..Default::default()
        };
        let req = state.recommendation_request();
        assert_eq!(req.body_type, "");
        assert_eq!(req.occasion, "interview");
    }

    #[test]
    fn test_quiz_request_sends_partial_answers() {
        let mut state = SessionState::default();
        state.set_answer(4, StyleLabel::Romantic);
        assert_eq!(state.quiz_request().answers, vec!["", "", "", "", "romantic"]);
    }
}
