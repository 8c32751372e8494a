//! Tokenization capabilities shared by the recommendation pipeline
//!
//! The stopword set and the lemmatizer are injected into the engine rather
//! than reached for globally, so tests can swap in tiny substitutes.

use std::collections::HashSet;

/// Common English function words, matching the usual NLP stopword list
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Bare punctuation tokens filtered alongside the function words
const PUNCTUATION_TOKENS: &[&str] = &[
    ".", ",", "\"", "'", "?", "!", ":", ";", "(", ")", "[", "]", "{", "}",
];

/// Builds the default stopword set: English function words plus punctuation
pub fn english_stopwords() -> HashSet<String> {
    ENGLISH_STOPWORDS
        .iter()
        .chain(PUNCTUATION_TOKENS)
        .map(|word| word.to_string())
        .collect()
}

/// Normalizes a raw token: trims whitespace, drops periods and commas,
/// lowercases. Other punctuation is left in place.
pub fn normalize(token: &str) -> String {
    token
        .trim()
        .replace('.', "")
        .replace(',', "")
        .to_lowercase()
}

/// Maps an inflected word to its dictionary lemma
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;
}

/// Known plural/inflected food words and their lemmas. "cookies" maps to
/// "cooky", matching the dictionary form downstream cuisine lookups key on.
const FOOD_LEMMAS: &[(&str, &str)] = &[
    ("cookies", "cooky"),
    ("chips", "chip"),
    ("candies", "candy"),
    ("chocolates", "chocolate"),
    ("burgers", "burger"),
    ("pizzas", "pizza"),
    ("soups", "soup"),
    ("fries", "fry"),
    ("brownies", "brownie"),
    ("donuts", "donut"),
    ("doughnuts", "doughnut"),
    ("noodles", "noodle"),
    ("pretzels", "pretzel"),
    ("sandwiches", "sandwich"),
    ("tacos", "taco"),
    ("wings", "wing"),
];

/// Dictionary-backed lemmatizer
///
/// Only single words found in the lemma table are rewritten; multi-word
/// phrases and unknown words pass through unchanged, so "mac and cheese" and
/// "mcdonalds" survive intact.
pub struct DictionaryLemmatizer;

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if !word.contains(' ') {
            if let Some((_, lemma)) = FOOD_LEMMAS.iter().find(|(plural, _)| *plural == word) {
                return lemma.to_string();
            }
        }
        word.to_string()
    }
}
