//! Term-name normalization and the derived keyword and query forms.
//!
//! Entity names arrive as free text (`"Kubernetes - container orchestration"`).
//! Downstream artifacts need a compact display name, a comma-free CSV form,
//! a search keyword and a URL-encoded news query.

use chrono::{Duration, NaiveDate};

use crate::config::WORLD_GEO;

/// Compact an entity name into a term name.
///
/// Dashes become spaces, and only pieces longer than two characters are kept,
/// with commas removed. Pieces are joined with single spaces.
pub fn normalize_term_name(name: &str) -> String {
    name.replace('-', " ")
        .split(' ')
        .filter(|piece| piece.chars().count() > 2)
        .map(|piece| piece.replace(',', ""))
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a URL-encoded news search query from a term.
pub fn news_query(term: &str) -> String {
    term.split(' ')
        .map(|word| {
            word.to_lowercase()
                .replace([',', '.', '(', ')'], "")
                .replace("aka", "")
                .replace('-', " ")
        })
        .filter(|word| word.chars().count() > 2)
        .map(|word| word.replace(' ', "%20"))
        .collect::<Vec<_>>()
        .join("%20")
}

/// Search keyword for a term within a topic, e.g. `"rust language"`.
pub fn trends_keyword(term: &str, topic_singular: &str) -> String {
    format!("{} {}", term, topic_singular)
}

/// Geo filter for a geo code. `WORLD` means no filter.
pub fn geo_param(geo: &str) -> &str {
    if geo == WORLD_GEO {
        ""
    } else {
        geo
    }
}

/// The term with commas stripped, safe for a CSV field.
pub fn csv_term(term: &str) -> String {
    term.replace(',', "")
}

/// Day stamp in the `YYYYMMDDT000000Z` form used by news volume rows.
pub fn news_day_stamp(date: NaiveDate) -> String {
    format!("{}T000000Z", date.format("%Y%m%d"))
}

/// Day stamp for the day before `today`.
pub fn previous_day_stamp(today: NaiveDate) -> String {
    news_day_stamp(today - Duration::days(1))
}
