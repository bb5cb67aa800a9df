//! HTTP transport for `POST /query`

use super::types::{AnswerBody, ErrorBody, QueryBody, QueryError, QueryReply, QueryRequest};
use crate::constants::QUERY_PATH;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Anything that can answer a query
#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn ask(&self, query: &str) -> Result<String, QueryError>;
}

/// JSON-over-HTTP client for the answering service
#[derive(Clone)]
pub struct HttpQueryClient {
    url: String,
    http: Client,
}

impl HttpQueryClient {
    pub fn new(endpoint: &str) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: &str, http: Client) -> Self {
        Self {
            url: build_url(endpoint, QUERY_PATH),
            http,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Build URL from endpoint and path
pub fn build_url(endpoint: &str, path: &str) -> String {
    let base = endpoint.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[async_trait]
impl QueryTransport for HttpQueryClient {
    async fn ask(&self, query: &str) -> Result<String, QueryError> {
        info!(url = self.url.as_str(), chars = query.chars().count(), "Sending query");

        let response = self
            .http
            .post(&self.url)
            .json(&QueryBody { query })
            .send()
            .await
            .map_err(|e| QueryError::network(&self.url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QueryError::network(&self.url, e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Query endpoint returned failure status");
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.is_empty());
            return Err(match message {
                Some(message) => QueryError::server(status, message),
                None => QueryError::status(status),
            });
        }

        let parsed: AnswerBody = serde_json::from_str(&body)
            .map_err(|e| QueryError::invalid_response(&self.url, e.to_string()))?;
        debug!(chars = parsed.answer.chars().count(), "Received answer");
        Ok(parsed.answer)
    }
}

/// Run one request and package its outcome with the request id
pub async fn dispatch<T>(transport: &T, request: QueryRequest) -> QueryReply
where
    T: QueryTransport + ?Sized,
{
    match transport.ask(&request.query).await {
        Ok(answer) => QueryReply::answered(request.request_id, answer),
        Err(err) => {
            warn!(request_id = %request.request_id, error = %err, "Query failed");
            QueryReply::failed(request.request_id, err)
        }
    }
}
