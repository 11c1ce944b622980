//! HTTP client for the query-planning service
//!
//! One request/response exchange per call. A fresh `reqwest::Client` is built
//! for every call and dropped when it returns; nothing is pooled across turns.

use super::{QueryPlanResult, QueryService};
use crate::config::QueryServiceConfig;
use crate::error::{AgentError, Result};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default endpoint of the local query-planning service
pub const DEFAULT_QUERY_URL: &str = "http://localhost:5000/api/query";

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// Query service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpQueryClient {
    url: String,
    timeout: Option<Duration>,
}

impl HttpQueryClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &QueryServiceConfig) -> Self {
        let client = Self::new(config.url.clone());
        match config.timeout_secs {
            Some(secs) => client.with_timeout(Duration::from_secs(secs)),
            None => client,
        }
    }

    /// Bound the whole exchange; without this the call waits indefinitely
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_http_client(&self) -> Result<HttpClient> {
        let mut builder = HttpClient::builder().user_agent(concat!("vizagent/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(|e| AgentError::Http(e.to_string()))
    }

    fn transport_error(&self, err: reqwest::Error) -> AgentError {
        match (AgentError::from(err), self.timeout) {
            (AgentError::Timeout { .. }, Some(duration)) => AgentError::Timeout { duration },
            (other, _) => other,
        }
    }

    /// Perform the exchange, reporting every failure as an error
    pub async fn try_plan(&self, query: &str) -> Result<QueryPlanResult> {
        let http_client = self.build_http_client()?;
        let started = Instant::now();

        let response = http_client
            .post(&self.url)
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        match response.status() {
            StatusCode::OK => {
                let text = response.text().await.map_err(|e| self.transport_error(e))?;
                debug!(elapsed = ?started.elapsed(), bytes = text.len(), "query service answered");
                serde_json::from_str(&text).map_err(|e| AgentError::InvalidResponse {
                    reason: e.to_string(),
                })
            }
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(AgentError::ProviderError {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

impl Default for HttpQueryClient {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_URL)
    }
}

#[async_trait::async_trait]
impl QueryService for HttpQueryClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn plan(&self, query: &str) -> QueryPlanResult {
        match self.try_plan(query).await {
            Ok(result) => result,
            Err(e) => {
                warn!(url = %self.url, error = %e, "query service call failed");
                QueryPlanResult::failure(e.user_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryType;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    async fn spawn_service(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/query", addr)
    }

    async fn echo_answer(Json(body): Json<Value>) -> Json<Value> {
        Json(json!({
            "success": true,
            "query_type": "answer",
            "answer_text": body["query"],
        }))
    }

    #[tokio::test]
    async fn test_posts_query_as_json_body() {
        let url = spawn_service(Router::new().route("/api/query", post(echo_answer))).await;
        let client = HttpQueryClient::new(url);

        let result = client.plan("total sales in May").await;
        assert!(result.success);
        assert_eq!(result.query_type, Some(QueryType::Answer));
        assert_eq!(result.answer_text.as_deref(), Some("total sales in May"));
    }

    #[tokio::test]
    async fn test_non_200_becomes_http_status_failure() {
        let router = Router::new().route(
            "/api/query",
            post(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "planner crashed") }),
        );
        let client = HttpQueryClient::new(spawn_service(router).await);

        let err = client.try_plan("anything").await.unwrap_err();
        assert!(matches!(err, AgentError::ProviderError { status: 500, .. }));

        let result = client.plan("anything").await;
        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("HTTP 500"));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_failure() {
        let router = Router::new().route("/api/query", post(|| async { "not json" }));
        let client = HttpQueryClient::new(spawn_service(router).await);

        let err = client.try_plan("q").await.unwrap_err();
        assert!(matches!(err, AgentError::InvalidResponse { .. }));
        assert!(!client.plan("q").await.success);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_failure_not_panic() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpQueryClient::new(format!("http://{}/api/query", addr));
        let result = client.plan("q").await;
        assert!(!result.success);
        assert!(result.message.is_some());
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let router = Router::new().route(
            "/api/query",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"success": true}))
            }),
        );
        let client = HttpQueryClient::new(spawn_service(router).await)
            .with_timeout(Duration::from_millis(100));

        let err = client.try_plan("slow").await.unwrap_err();
        assert!(matches!(err, AgentError::Timeout { duration } if duration == Duration::from_millis(100)));
    }

    #[test]
    fn test_from_config() {
        let config = QueryServiceConfig {
            url: "http://planner:8080/api/query".to_string(),
            timeout_secs: Some(30),
        };
        let client = HttpQueryClient::from_config(&config);
        assert_eq!(client.url(), "http://planner:8080/api/query");
        assert_eq!(client.timeout, Some(Duration::from_secs(30)));
        assert_eq!(HttpQueryClient::default().url(), DEFAULT_QUERY_URL);
    }
}
