use serde::Deserialize;

/// Placeholder for cells that are absent from the survey export. Mirrors the
/// stringified missing-value marker the upstream data frame produced, so
/// downstream tokenization sees the same text either way.
const MISSING_VALUE: &str = "nan";

/// One survey respondent's comfort-food answers
///
/// Only the two free-text columns the recommender reads are kept; the survey
/// export carries dozens of others, all ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SurveyRecord {
    /// Comma-separated food item names (e.g. "pizza, ice cream")
    #[serde(default)]
    comfort_food: Option<String>,
    /// Free-text, whitespace-separated mood words (e.g. "stress and boredom")
    #[serde(default)]
    comfort_food_reasons: Option<String>,
}

impl SurveyRecord {
    /// Creates a record from raw answer text
    pub fn new(comfort_food: impl Into<String>, comfort_food_reasons: impl Into<String>) -> Self {
        Self {
            comfort_food: Some(comfort_food.into()),
            comfort_food_reasons: Some(comfort_food_reasons.into()),
        }
    }

    /// The comfort-food answer, with missing/empty cells coerced to "nan"
    pub fn comfort_food(&self) -> &str {
        coerce(self.comfort_food.as_deref())
    }

    /// The mood-reason answer, with missing/empty cells coerced to "nan"
    pub fn comfort_food_reasons(&self) -> &str {
        coerce(self.comfort_food_reasons.as_deref())
    }
}

fn coerce(cell: Option<&str>) -> &str {
    match cell {
        Some(text) if !text.is_empty() => text,
        _ => MISSING_VALUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = SurveyRecord::new("pizza, ice cream", "I feel happy");
        assert_eq!(record.comfort_food(), "pizza, ice cream");
        assert_eq!(record.comfort_food_reasons(), "I feel happy");
    }

    #[test]
    fn test_missing_cells_coerced() {
        let record = SurveyRecord::default();
        assert_eq!(record.comfort_food(), "nan");
        assert_eq!(record.comfort_food_reasons(), "nan");
    }

    #[test]
    fn test_empty_cells_coerced() {
        let record = SurveyRecord::new("", "");
        assert_eq!(record.comfort_food(), "nan");
        assert_eq!(record.comfort_food_reasons(), "nan");
    }

    #[test]
    fn test_csv_deserialization_ignores_extra_columns() {
        let data = "id,comfort_food,comfort_food_reasons,gpa\n\
                    1,\"chips, cookies\",boredom and stress,3.2\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let records: Vec<SurveyRecord> = reader.deserialize().map(Result::unwrap).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].comfort_food(), "chips, cookies");
        assert_eq!(records[0].comfort_food_reasons(), "boredom and stress");
    }

    #[test]
    fn test_csv_empty_cell_becomes_placeholder() {
        let data = "comfort_food,comfort_food_reasons\n,sadness\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let records: Vec<SurveyRecord> = reader.deserialize().map(Result::unwrap).collect();
        assert_eq!(records[0].comfort_food(), "nan");
        assert_eq!(records[0].comfort_food_reasons(), "sadness");
    }
}
