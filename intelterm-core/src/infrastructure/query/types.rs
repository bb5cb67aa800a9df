//! Query request, reply and error types

use crate::constants::{CONNECTION_FAILURE, TRANSMISSION_ERROR_PREFIX};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// One accepted submission, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub request_id: Uuid,
    pub query: String,
}

/// Outcome of a request, routed back to the session by id
#[derive(Debug)]
pub struct QueryReply {
    pub request_id: Uuid,
    pub outcome: Result<String, QueryError>,
}

impl QueryReply {
    pub fn answered(request_id: Uuid, answer: impl Into<String>) -> Self {
        Self {
            request_id,
            outcome: Ok(answer.into()),
        }
    }

    pub fn failed(request_id: Uuid, error: QueryError) -> Self {
        Self {
            request_id,
            outcome: Err(error),
        }
    }
}

/// Wire body of `POST /query`
#[derive(Debug, Serialize)]
pub(crate) struct QueryBody<'a> {
    pub query: &'a str,
}

/// Wire body of a successful answer
#[derive(Debug, Deserialize)]
pub(crate) struct AnswerBody {
    pub answer: String,
}

/// Wire body the service may attach to a failure status
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

/// Query transport errors
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("server returned {status}: {message}")]
    Server { status: StatusCode, message: String },
    #[error("server returned {status} without an error message")]
    Status { status: StatusCode },
    #[error("network error calling '{endpoint}': {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid response from '{endpoint}': {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}

impl QueryError {
    pub fn server(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self::Status { status }
    }

    pub fn network(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn invalid_response(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Text shown in the terminal for this failure
    pub fn user_message(&self) -> String {
        match self {
            QueryError::Server { message, .. } => {
                format!("{TRANSMISSION_ERROR_PREFIX} {message}")
            }
            QueryError::Status { status } => format!(
                "{TRANSMISSION_ERROR_PREFIX} HTTP error! status: {}",
                status.as_u16()
            ),
            QueryError::Network { .. } | QueryError::InvalidResponse { .. } => {
                CONNECTION_FAILURE.to_string()
            }
        }
    }
}
