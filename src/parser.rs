//! Turns the model's reply into recommendation cards.
//!
//! Models are asked for plain text with headings, but some answer with JSON.
//! [`classify`] picks out replies that carry explicit `title`/`content`
//! fields; everything else goes through [`split_paragraphs`].

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::fallback::fallback_recommendations;
use crate::models::RecommendationItem;

const MAX_CHUNKS: usize = 10;

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());

#[derive(Debug, PartialEq, Eq)]
pub enum ParsedResponse<'a> {
    Structured(Vec<RecommendationItem>),
    Unstructured(&'a str),
}

/// Never returns an empty list.
pub fn parse_recommendations(text: &str) -> Vec<RecommendationItem> {
    if text.is_empty() {
        return fallback_recommendations();
    }

    let items = match classify(text) {
        ParsedResponse::Structured(items) => items,
        ParsedResponse::Unstructured(text) => split_paragraphs(text),
    };

    if items.is_empty() {
        tracing::debug!("model reply produced no cards, using fallback");
        return fallback_recommendations();
    }
    items
}

pub fn classify(text: &str) -> ParsedResponse<'_> {
    let Ok(json) = serde_json::from_str::<Value>(text) else {
        return ParsedResponse::Unstructured(text);
    };

    match json {
        Value::Array(elements) => {
            ParsedResponse::Structured(elements.iter().map(item_from_element).collect())
        }
        Value::Object(ref map) => {
            match (
                map.get("title").and_then(truthy_text),
                map.get("content").and_then(truthy_text),
            ) {
                (Some(title), Some(content)) => {
                    ParsedResponse::Structured(vec![RecommendationItem::new(title, content)])
                }
                _ => ParsedResponse::Unstructured(text),
            }
        }
        _ => ParsedResponse::Unstructured(text),
    }
}

/// Blank-line separated paragraphs, first line of each as the title.
pub fn split_paragraphs(text: &str) -> Vec<RecommendationItem> {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|chunk| !chunk.is_empty())
        .take(MAX_CHUNKS)
        .filter_map(|chunk| {
            let lines: Vec<&str> = LINE_BREAK
                .split(chunk.trim())
                .filter(|line| !line.is_empty())
                .collect();

            match lines.as_slice() {
                [] => None,
                [title] => Some(RecommendationItem::new(title, "")),
                [title, rest @ ..] => Some(RecommendationItem::new(title, rest.join(" "))),
            }
        })
        .collect()
}

fn item_from_element(element: &Value) -> RecommendationItem {
    let title = element
        .get("title")
        .and_then(truthy_text)
        .unwrap_or_else(|| "Info".to_string());
    let content = element
        .get("content")
        .and_then(truthy_text)
        .unwrap_or_else(|| stringify(element));
    RecommendationItem::new(title, content)
}

// Null, false, 0 and "" count as absent.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(stringify(other)),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
