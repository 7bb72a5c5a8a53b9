use chrono::Timelike;

use factura_core::BillCategory;

use crate::datetime::parse_time_of_day;
use crate::util::similarity;

/// Minimum similarity for a fuzzy taxonomy match.
pub const FUZZY_CUTOFF: f64 = 0.3;

/// Maps a free-text category (plus an optional time of day) onto the fixed
/// taxonomy.
///
/// Upstream reports food inconsistently (sometimes a meal name, sometimes
/// literally "Food"), so anything food-like is sub-classified by the hour
/// instead of by text, and only non-food categories go through fuzzy
/// matching. Nothing above the cutoff falls back to General.
pub fn classify(category: &str, time: Option<&str>) -> BillCategory {
    let category = category.trim().to_lowercase();

    if category.contains("food") {
        return classify_food_by_time(time);
    }

    let mut best: Option<(f64, BillCategory)> = None;
    for candidate in BillCategory::ALL {
        let score = similarity(&category, &candidate.as_str().to_lowercase());
        if best.is_none_or(|(top, _)| score > top) {
            best = Some((score, candidate));
        }
    }

    match best {
        Some((score, candidate)) if score >= FUZZY_CUTOFF => candidate,
        _ => BillCategory::General,
    }
}

fn classify_food_by_time(time: Option<&str>) -> BillCategory {
    let Some(time) = time else {
        return BillCategory::Dinner;
    };
    let Some(parsed) = parse_time_of_day(time) else {
        tracing::warn!(value = %time, "unparsable time for food category, defaulting to Dinner");
        return BillCategory::Dinner;
    };

    match parsed.hour() {
        5..=10 => BillCategory::Breakfast,
        11..=15 => BillCategory::Lunch,
        16..=18 => BillCategory::EveningSnacks,
        19..=22 => BillCategory::Dinner,
        // Late night and small hours still count as dinner.
        _ => BillCategory::Dinner,
    }
}
