//! Shared test fixtures for the trends SDK integration tests.
//!
//! Provides `setup_sample_store()` which creates an SDK backed by a temporary
//! data directory populated with small sample artifacts (topic entities,
//! a terms document, trend score and news volume CSVs, growth rates).

use trends_sdk::TrendsSdk;

/// Create a `TrendsSdk` over a temporary directory holding sample artifacts.
///
/// Returns `(TrendsSdk, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test.
pub fn setup_sample_store() -> (TrendsSdk, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let sdk = TrendsSdk::builder().data_dir(tmp_dir.path()).build().unwrap();

    // -- output/topic_entities.json -------------------------------------------
    write_topic_entities(&sdk);

    // -- trends/databases.json ------------------------------------------------
    write_terms_document(&sdk);

    // -- input/*.csv ----------------------------------------------------------
    write_trend_scores(&sdk);
    write_news_volume(&sdk);

    // -- output/growth_rates.json ---------------------------------------------
    write_growth_rates(&sdk);

    (sdk, tmp_dir)
}

/// Create an SDK over an empty temporary directory.
pub fn setup_empty_store() -> (TrendsSdk, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let sdk = TrendsSdk::builder().data_dir(tmp_dir.path()).build().unwrap();
    (sdk, tmp_dir)
}

fn write_topic_entities(sdk: &TrendsSdk) {
    let entities = serde_json::json!({
        "terms": [
            {"Name": "PostgreSQL"},
            {"Name": "Amazon DynamoDB - key-value store"},
            {"Name": "Redis, in-memory db"}
        ],
        "companies": [
            {"Name": "Cockroach Labs"}
        ],
        "geos": ["WORLD", "US", "DE"]
    });
    sdk.store()
        .write_json("output/topic_entities.json", &entities)
        .unwrap();
}

fn write_terms_document(sdk: &TrendsSdk) {
    let doc = serde_json::json!({
        "terms": [
            {
                "name": "PostgreSQL",
                "data": [
                    {
                        "name": "PostgreSQL",
                        "geo": "US",
                        "score": 81.0,
                        "dailyChange": 1.5,
                        "weeklyChange": -2.0,
                        "monthlyChange": 7.25,
                        "lastUpdate": "2024-03-01"
                    },
                    {
                        "name": "PostgreSQL",
                        "geo": "DE",
                        "score": 64.0,
                        "lastUpdate": "2024-03-01"
                    }
                ]
            },
            {
                "name": "Redis",
                "data": []
            }
        ]
    });
    sdk.store().write_json("trends/databases.json", &doc).unwrap();
}

fn write_trend_scores(sdk: &TrendsSdk) {
    let csv = "WORLD,PostgreSQL,2024-02-28,79\n\
               WORLD,PostgreSQL,2024-02-29,80\n\
               US,PostgreSQL,2024-02-29,83\n\
               WORLD,Redis,2024-02-29,55\n";
    sdk.store()
        .write_blob("input/trend_scores_update.csv", csv.as_bytes())
        .unwrap();
}

fn write_news_volume(sdk: &TrendsSdk) {
    let csv = "PostgreSQL,20240228T000000Z,120,0.5\n\
               PostgreSQL,20240229T000000Z,140,0.75\n\
               Redis,20240229T000000Z,60,0.25\n";
    sdk.store()
        .write_blob("input/news_volume_update.csv", csv.as_bytes())
        .unwrap();
}

fn write_growth_rates(sdk: &TrendsSdk) {
    let rates = serde_json::json!([
        {
            "name": "PostgreSQL",
            "date": "2024-02-29",
            "growth_rate": 0.12,
            "trends_growth": 0.08,
            "news_growth": 0.2
        },
        {
            "name": "Redis",
            "date": "2024-02-29",
            "growth_rate": null,
            "trends_growth": -0.05,
            "news_growth": null
        }
    ]);
    sdk.store()
        .write_json("output/growth_rates.json", &rates)
        .unwrap();
}
