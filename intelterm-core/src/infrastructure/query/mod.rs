//! Query transport
//!
//! - types.rs: request/reply envelopes, wire bodies and [`QueryError`]
//! - client.rs: [`QueryTransport`] and its HTTP implementation

mod client;
mod types;

pub use client::{HttpQueryClient, QueryTransport, build_url, dispatch};
pub use types::{QueryError, QueryReply, QueryRequest};
