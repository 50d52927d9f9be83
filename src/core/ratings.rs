use crate::domain::model::RatedItem;

pub const MIN_RATING: f64 = 4.0;

/// Keeps items rated at least `MIN_RATING`, in their original order.
pub fn filter_by_rating(items: &[RatedItem]) -> Vec<RatedItem> {
    filter_by_min_rating(items, MIN_RATING)
}

pub fn filter_by_min_rating(items: &[RatedItem], min_rating: f64) -> Vec<RatedItem> {
    // NaN compares false, so it never passes.
    let kept: Vec<RatedItem> = items
        .iter()
        .filter(|item| item.rating >= min_rating)
        .cloned()
        .collect();

    tracing::debug!(
        "Rating filter (>= {}): kept {} of {} items",
        min_rating,
        kept.len(),
        items.len()
    );
    kept
}
