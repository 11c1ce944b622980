//! Query service capability
//!
//! The agent delegates interpretation of the user's utterance to an external
//! query-planning service. `QueryService` is the seam; `HttpQueryClient` is
//! the live implementation and `FixtureQueryService` replays a fixed result.

pub mod client;
pub mod fixture;
pub mod types;

pub use client::{HttpQueryClient, DEFAULT_QUERY_URL};
pub use fixture::FixtureQueryService;
pub use types::{QueryPlanResult, QueryType};

/// Turns a natural-language query into a classified plan result
///
/// Implementations never fail: service and transport problems come back as
/// a result with `success == false` and a `message`.
#[async_trait::async_trait]
pub trait QueryService: Send + Sync {
    fn name(&self) -> &'static str;

    async fn plan(&self, query: &str) -> QueryPlanResult;
}
