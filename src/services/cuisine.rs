use crate::models::Restaurant;

/// How many restaurants each food item contributes
pub const RESTAURANTS_PER_FOOD: usize = 3;

/// Hand-curated mapping from lemmatized comfort-food names to the cuisine
/// label searched for in restaurant cuisine lists. Foods missing from this
/// table contribute no restaurants.
const FOOD_TO_CUISINE: &[(&str, &str)] = &[
    ("pizza", "pizza"),
    ("ice cream", "ice cream"),
    ("chicken wings", "mughlai"),
    ("chinese", "chinese"),
    ("chip", "bakery"),
    ("chocolate", "bakery"),
    ("candy", "bakery"),
    ("mcdonalds", "burger"),
    ("burger", "burger"),
    ("cooky", "bakery"),
    ("mac and cheese", "american"),
    ("pasta", "italian"),
    ("soup", "chinese"),
    ("dark chocolate", "bakery"),
    ("terra chips", "bakery"),
    ("reese's cups(dark chocolate)", "bakery"),
];

/// Looks up the cuisine label for a food item
pub fn cuisine_for(food: &str) -> Option<&'static str> {
    FOOD_TO_CUISINE
        .iter()
        .find(|(item, _)| *item == food)
        .map(|(_, cuisine)| *cuisine)
}

/// Finds the top-rated restaurants for each food item, in input order.
///
/// Per food item: restaurants whose cuisine list contains the mapped cuisine
/// label (case-insensitive substring), sorted by rating descending, top 3.
/// A venue matching several food items appears once per match.
pub fn match_restaurants(food_items: &[String], restaurants: &[Restaurant]) -> Vec<Restaurant> {
    let mut matched = Vec::new();

    for food in food_items {
        let Some(cuisine) = cuisine_for(food) else {
            continue;
        };

        let mut candidates: Vec<&Restaurant> = restaurants
            .iter()
            .filter(|restaurant| restaurant.cuisines.to_lowercase().contains(cuisine))
            .collect();
        candidates.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(RESTAURANTS_PER_FOOD);

        matched.extend(candidates.into_iter().cloned());
    }

    matched
}
