use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error(transparent)]
    Request(#[from] gloo_net::Error),
}

impl ApiError {
    /// Map a non-2xx response: JSON `message`/`error` field if there is one,
    /// otherwise the status text.
    pub async fn from_response(response: gloo_net::http::Response) -> Self {
        let status = response.status();
        let fallback = response.status_text();
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .or_else(|| body.get("error"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or(fallback);
        ApiError::Http { status, message }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}
