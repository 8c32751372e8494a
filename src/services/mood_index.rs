use std::collections::{HashMap, HashSet};

use crate::models::SurveyRecord;
use crate::services::text::{normalize, Lemmatizer};

/// Counts of food terms across the survey records matching one mood.
/// A key is present only if its count is at least 1.
pub type FoodFrequencyMap = HashMap<String, u32>;

/// Scans the survey table and counts comfort foods named by respondents whose
/// stated reasons include the given mood keyword.
///
/// The stopword check intentionally sees each token *before* punctuation
/// stripping and lowercasing, so "The" or "and," slip past the filter.
/// Reordering the check changes which records match; kept as-is until the
/// survey corpus is re-audited (see DESIGN.md).
pub fn food_frequencies(
    mood: &str,
    surveys: &[SurveyRecord],
    stopwords: &HashSet<String>,
    lemmatizer: &dyn Lemmatizer,
) -> FoodFrequencyMap {
    let mut counts = FoodFrequencyMap::new();

    for record in surveys {
        let reasons: Vec<String> = record
            .comfort_food_reasons()
            .split(' ')
            .filter(|raw| {
                let trimmed = raw.trim();
                !trimmed.is_empty() && !stopwords.contains(trimmed)
            })
            .map(normalize)
            .collect();

        if !reasons.iter().any(|reason| reason == mood) {
            continue;
        }

        for raw in record.comfort_food().split(',') {
            let trimmed = raw.trim();
            if trimmed.is_empty() || stopwords.contains(trimmed) {
                continue;
            }
            let food = lemmatizer.lemmatize(&normalize(raw));
            // Each mention counts, even repeats within one record.
            *counts.entry(food).or_insert(0) += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::text::{english_stopwords, DictionaryLemmatizer};

    fn count(mood: &str, surveys: &[SurveyRecord]) -> FoodFrequencyMap {
        food_frequencies(mood, surveys, &english_stopwords(), &DictionaryLemmatizer)
    }

    #[test]
    fn test_matching_record_counts_each_food() {
        let surveys = vec![SurveyRecord::new("pizza, ice cream", "I feel happy")];
        let counts = count("happy", &surveys);
        assert_eq!(counts.get("pizza"), Some(&1));
        assert_eq!(counts.get("ice cream"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_unmatched_mood_yields_empty_map() {
        let surveys = vec![SurveyRecord::new("pizza", "I feel happy")];
        assert!(count("sad", &surveys).is_empty());
    }

    #[test]
    fn test_counts_accumulate_across_records() {
        let surveys = vec![
            SurveyRecord::new("pizza, chocolate", "happy days"),
            SurveyRecord::new("pizza", "so happy lately"),
        ];
        let counts = count("happy", &surveys);
        assert_eq!(counts.get("pizza"), Some(&2));
        assert_eq!(counts.get("chocolate"), Some(&1));
    }

    #[test]
    fn test_repeated_mention_in_one_record_counts_twice() {
        let surveys = vec![SurveyRecord::new("pizza, pizza", "happy")];
        let counts = count("happy", &surveys);
        assert_eq!(counts.get("pizza"), Some(&2));
    }

    #[test]
    fn test_reason_tokens_are_normalized_before_matching() {
        // "HAPPY.," trims and lowercases to "happy" after the stopword check.
        let surveys = vec![SurveyRecord::new("soup", "feeling HAPPY., today")];
        let counts = count("happy", &surveys);
        assert_eq!(counts.get("soup"), Some(&1));
    }

    #[test]
    fn test_stopword_reasons_are_ignored_for_matching() {
        // "the" is filtered out of the reason list, so a mood called "the"
        // can never match.
        let surveys = vec![SurveyRecord::new("pizza", "the happy one")];
        assert!(count("the", &surveys).is_empty());
    }

    #[test]
    fn test_capitalized_stopword_survives_the_filter() {
        // The stopword check runs on the raw trimmed token; "The" is not in
        // the lowercase set, normalizes to "the", and then matches.
        let surveys = vec![SurveyRecord::new("pizza", "The reason")];
        let counts = count("the", &surveys);
        assert_eq!(counts.get("pizza"), Some(&1));
    }

    #[test]
    fn test_foods_are_lemmatized() {
        let surveys = vec![SurveyRecord::new("cookies, chips", "sad and stressed")];
        let counts = count("sad", &surveys);
        assert_eq!(counts.get("cooky"), Some(&1));
        assert_eq!(counts.get("chip"), Some(&1));
    }

    #[test]
    fn test_missing_cells_do_not_match_or_panic() {
        let surveys = vec![SurveyRecord::default()];
        assert!(count("happy", &surveys).is_empty());
        // The placeholder itself is matchable text, not a crash.
        let counts = count("nan", &surveys);
        assert_eq!(counts.get("nan"), Some(&1));
    }

    #[test]
    fn test_empty_survey_table() {
        assert!(count("happy", &[]).is_empty());
    }
}
