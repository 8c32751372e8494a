use crate::services::mood_index::FoodFrequencyMap;

/// How many foods a single mood query surfaces
pub const TOP_FOOD_COUNT: usize = 3;

/// Ranks all counted foods by descending frequency.
///
/// Ties break by ascending food name. The tie order carries no meaning; it
/// exists only so a fixed map always ranks the same way.
pub fn rank_foods(counts: &FoodFrequencyMap) -> Vec<String> {
    let mut entries: Vec<(&String, &u32)> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries.into_iter().map(|(food, _)| food.clone()).collect()
}

/// The top foods for a mood, at most [`TOP_FOOD_COUNT`] of them
pub fn top_foods(counts: &FoodFrequencyMap) -> Vec<String> {
    let mut ranked = rank_foods(counts);
    ranked.truncate(TOP_FOOD_COUNT);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, u32)]) -> FoodFrequencyMap {
        entries
            .iter()
            .map(|(food, count)| (food.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_rank_orders_by_descending_count() {
        let counts = map(&[("pizza", 3), ("soup", 1), ("chocolate", 5)]);
        assert_eq!(rank_foods(&counts), vec!["chocolate", "pizza", "soup"]);
    }

    #[test]
    fn test_top_foods_truncates_to_three() {
        let counts = map(&[("a", 4), ("b", 3), ("c", 2), ("d", 1)]);
        assert_eq!(top_foods(&counts), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_fewer_than_three_keys() {
        let counts = map(&[("pizza", 1)]);
        assert_eq!(top_foods(&counts), vec!["pizza"]);
        assert!(top_foods(&FoodFrequencyMap::new()).is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let counts = map(&[("pizza", 2), ("soup", 2)]);
        let foods = top_foods(&counts);
        let mut deduped = foods.clone();
        deduped.dedup();
        assert_eq!(foods, deduped);
    }

    #[test]
    fn test_deterministic_across_reruns() {
        let counts = map(&[("pizza", 2), ("soup", 2), ("chip", 2), ("candy", 1)]);
        let first = top_foods(&counts);
        for _ in 0..10 {
            assert_eq!(top_foods(&counts), first);
        }
        // Equal counts fall back to name order.
        assert_eq!(first, vec!["chip", "pizza", "soup"]);
    }
}
