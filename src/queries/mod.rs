//! Query modules for the trends SDK.
//!
//! Each module provides a query struct that borrows from a [`Store`](crate::store::Store)
//! and exposes typed methods returning `Result<T>`.

pub mod entities;
pub mod growth;
pub mod news;
pub mod scores;
pub mod terms;

pub use entities::EntityQuery;
pub use growth::GrowthQuery;
pub use news::{latest_only, NewsQuery};
pub use scores::ScoreQuery;
pub use terms::TermQuery;
