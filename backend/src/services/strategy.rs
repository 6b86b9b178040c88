//! Government response strategies
//!
//! Built-in guideline records are always returned; documents from the
//! guideline feed are appended when the feed answers.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::strategies::default_strategies;
use shared::StrategyRecord;

use crate::external::GuidelineFeed;

/// Country the guideline feed is searched for
pub const GUIDELINE_COUNTRY: &str = "India";
pub const GUIDELINE_FORMAT: &str = "guidelines";
pub const GUIDELINE_LIMIT: u32 = 10;

#[derive(Clone)]
pub struct StrategyService {
    feed: Arc<dyn GuidelineFeed>,
}

impl StrategyService {
    pub fn new(feed: Arc<dyn GuidelineFeed>) -> Self {
        Self { feed }
    }

    /// Strategies for a disaster type name. Never fails: feed problems
    /// leave only the built-in records.
    pub async fn get_strategies(&self, disaster_type: &str, today: NaiveDate) -> Vec<StrategyRecord> {
        let mut strategies = default_strategies(disaster_type, today);
        let query = disaster_type.trim().to_lowercase();

        match self
            .feed
            .search(GUIDELINE_COUNTRY, &query, GUIDELINE_FORMAT, GUIDELINE_LIMIT)
            .await
        {
            Ok(documents) if !documents.is_empty() => {
                tracing::debug!(
                    disaster_type,
                    count = documents.len(),
                    "Appending guideline documents"
                );
                strategies.extend(documents.into_iter().map(StrategyRecord::from));
            }
            Ok(_) => {
                tracing::debug!(disaster_type, "Guideline feed returned no documents");
            }
            Err(e) => {
                tracing::warn!(disaster_type, error = %e, "Guideline feed unavailable, using built-in strategies");
            }
        }

        strategies
    }
}
