use crate::models::RecommendationItem;

/// Shown whenever the AI pipeline can't give us anything usable.
pub fn fallback_recommendations() -> Vec<RecommendationItem> {
    vec![
        RecommendationItem::new(
            "Recommended Destination",
            "Ranchi - The capital city with scenic beauty.",
        ),
        RecommendationItem::new("Top Attractions", "Ranchi Hill, Tagore Hill, Pahari Mandir"),
        RecommendationItem::new("Best Time to Visit", "October to March"),
    ]
}
