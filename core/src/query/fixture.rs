//! Fixed-result query service
//!
//! Answers every query with the same `QueryPlanResult`. Used for offline runs
//! (`vizagent --fixture plan.json`) and as a test double.

use super::{QueryPlanResult, QueryService};
use crate::error::Result;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct FixtureQueryService {
    result: QueryPlanResult,
    calls: AtomicUsize,
}

impl FixtureQueryService {
    pub fn new(result: QueryPlanResult) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    /// Load the result from a JSON file in the service's wire format
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let result: QueryPlanResult = serde_json::from_str(&content)?;
        Ok(Self::new(result))
    }

    /// Number of queries answered so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl QueryService for FixtureQueryService {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn plan(&self, _query: &str) -> QueryPlanResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
