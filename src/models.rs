use serde::{Deserialize, Serialize};

pub const MAX_TITLE_CHARS: usize = 60;
pub const MAX_CONTENT_CHARS: usize = 2000;

/// What the user typed into the plan-my-trip form. Nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripPreferences {
    pub destination: String,
    pub travel_date: String,
    pub travellers: String,
    pub trip_type: String,
    pub budget: String,
    pub hotel_nearby: bool,
    pub best_places: bool,
}

/// One card in the results panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationItem {
    title: String,
    content: String,
}

impl RecommendationItem {
    pub fn new(title: impl AsRef<str>, content: impl AsRef<str>) -> Self {
        Self {
            title: truncate_chars(title.as_ref(), MAX_TITLE_CHARS),
            content: truncate_chars(content.as_ref(), MAX_CONTENT_CHARS),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
