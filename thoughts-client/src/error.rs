use serde_json::Value;
use thiserror::Error;

/// Failure talking to the thoughts backend. Any non-2xx response becomes
/// `Api` with the status and whatever message the error body carried;
/// transport-level problems stay as `Request`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<Value>,
    },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    /// Translate a non-2xx response. The body is tried as JSON with a
    /// `message` (or `error`) field; otherwise the canonical status reason
    /// stands in.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let fallback = status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();

        let details: Option<Value> = response.json().await.ok();
        let message = details
            .as_ref()
            .and_then(|body| {
                body.get("message")
                    .or_else(|| body.get("error"))
                    .and_then(Value::as_str)
            })
            .map(str::to_string)
            .unwrap_or(fallback);

        ApiError::Api {
            status: status.as_u16(),
            message,
            details,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_validation(&self) -> bool {
        self.status() == Some(400)
    }
}
