use thiserror::Error;

use crate::backend::ChatBackend;
use crate::fallback::fallback_recommendations;
use crate::models::{RecommendationItem, TripPreferences};
use crate::parser::parse_recommendations;
use crate::prompt::build_prompt;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlannerError {
    #[error("No previous preferences found. Submit the form first.")]
    NoPreviousPreferences,
}

/// Form controller: runs the recommendation pipeline and remembers the last
/// submission so it can be regenerated.
pub struct TripPlanner<B> {
    backend: B,
    last_submission: Option<TripPreferences>,
}

impl<B: ChatBackend> TripPlanner<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            last_submission: None,
        }
    }

    pub fn last_submission(&self) -> Option<&TripPreferences> {
        self.last_submission.as_ref()
    }

    pub async fn submit(&mut self, prefs: TripPreferences) -> Vec<RecommendationItem> {
        self.last_submission = Some(prefs.clone());
        self.recommend(&prefs).await
    }

    pub async fn regenerate(&self) -> Result<Vec<RecommendationItem>, PlannerError> {
        let prefs = self
            .last_submission
            .as_ref()
            .ok_or(PlannerError::NoPreviousPreferences)?;
        Ok(self.recommend(prefs).await)
    }

    /// Never empty; backend failures fall back to the static list.
    async fn recommend(&self, prefs: &TripPreferences) -> Vec<RecommendationItem> {
        let prompt = build_prompt(prefs);
        match self.backend.chat(&prompt).await {
            Ok(text) => parse_recommendations(&text),
            Err(err) => {
                tracing::warn!(error = %err, "AI backend error, showing fallback recommendations");
                fallback_recommendations()
            }
        }
    }
}
