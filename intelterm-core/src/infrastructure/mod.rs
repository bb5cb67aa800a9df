pub mod query;

pub use query::{HttpQueryClient, QueryError, QueryReply, QueryRequest, QueryTransport};
