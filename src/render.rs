use std::time::{SystemTime, UNIX_EPOCH};

use html_escape::encode_quoted_attribute;

use crate::models::RecommendationItem;

/// The recommendations container, one card per item.
pub fn render_cards(items: &[RecommendationItem]) -> String {
    let mut html = String::from("<div id=\"recommendationsContainer\">\n");
    for item in items {
        html.push_str(&format!(
            "  <div class=\"recommendation-item\">\
             <div class=\"recommendation-title\">{}</div>\
             <div class=\"recommendation-content\">{}</div>\
             </div>\n",
            encode_quoted_attribute(item.title()),
            encode_quoted_attribute(item.content())
        ));
    }
    html.push_str("</div>\n");
    html
}

/// Standalone page for printing or PDF conversion.
pub fn render_page(items: &[RecommendationItem]) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Your Trip Plan</title>\n</head>\n<body>\n<h1>Your Trip Plan</h1>\n{}</body>\n</html>\n",
        render_cards(items)
    )
}

pub fn default_export_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("trip-plan-{millis}.html")
}
