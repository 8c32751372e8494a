use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the comfort-food survey CSV
    #[serde(default = "default_survey_data_path")]
    pub survey_data_path: String,

    /// Path to the restaurant directory CSV
    #[serde(default = "default_restaurant_data_path")]
    pub restaurant_data_path: String,

    /// Country code the restaurant table is narrowed to at load time
    #[serde(default = "default_country_code")]
    pub country_code: u32,

    /// City the restaurant table is narrowed to at load time
    #[serde(default = "default_city")]
    pub city: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_survey_data_path() -> String {
    "data/food_choices.csv".to_string()
}

fn default_restaurant_data_path() -> String {
    "data/zomato.csv".to_string()
}

fn default_country_code() -> u32 {
    1
}

fn default_city() -> String {
    "New Delhi".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config =
            envy::from_iter(std::iter::empty::<(String, String)>()).unwrap();
        assert_eq!(config.survey_data_path, "data/food_choices.csv");
        assert_eq!(config.restaurant_data_path, "data/zomato.csv");
        assert_eq!(config.country_code, 1);
        assert_eq!(config.city, "New Delhi");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }
}
