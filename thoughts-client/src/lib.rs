//! Native HTTP client for the external thoughts backend.

mod error;
mod http_client;

pub use error::ApiError;
pub use http_client::ThoughtsClient;
