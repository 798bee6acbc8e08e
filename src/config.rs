use std::path::PathBuf;

/// Environment variable overriding the store root directory.
pub const DATA_DIR_ENV: &str = "TRENDS_DATA_DIR";

/// Geo code meaning "worldwide". Maps to an empty geo filter.
pub const WORLD_GEO: &str = "WORLD";

/// Default list key inside the topic entities file.
pub const DEFAULT_ENTITY_KEY: &str = "terms";

/// Upper bound on rows kept in the growth rates artifact.
pub const MAX_GROWTH_ROWS: usize = 1000;

pub const TOPIC_ENTITIES_KEY: &str = "output/topic_entities.json";
pub const GROWTH_RATES_KEY: &str = "output/growth_rates.json";
pub const TREND_SCORES_INITIAL_KEY: &str = "input/trend_scores_initial.csv";
pub const TREND_SCORES_UPDATE_KEY: &str = "input/trend_scores_update.csv";
pub const NEWS_VOLUME_INITIAL_KEY: &str = "input/news_volume_initial.csv";
pub const NEWS_VOLUME_UPDATE_KEY: &str = "input/news_volume_update.csv";

/// Store key of the terms document for a topic.
pub fn terms_document_key(topic: &str) -> String {
    format!("trends/{}.json", topic)
}

pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    if let Some(cache) = dirs::cache_dir() {
        cache.join("trends-sdk")
    } else {
        PathBuf::from(".trends-sdk-data")
    }
}
