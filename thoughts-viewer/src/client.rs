use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thoughts_domain::Thought;
use uuid::Uuid;

use crate::error::ApiError;

/// Browser-side client for the public viewer endpoints.
#[derive(Clone)]
pub struct ViewerApi {
    base_url: String,
}

impl ViewerApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.ok() {
            response.json().await.map_err(ApiError::from)
        } else {
            Err(ApiError::from_response(response).await)
        }
    }

    pub async fn random_thought(&self) -> Result<Thought, ApiError> {
        let url = format!("{}/thoughts/random", self.base_url);
        let response = Request::get(&url).send().await?;
        Self::decode(response).await
    }

    pub async fn thumbs_up(&self, id: Uuid) -> Result<Thought, ApiError> {
        let url = format!("{}/thoughts/thumbsup/{}", self.base_url, id);
        let response = Request::post(&url).send().await?;
        Self::decode(response).await
    }

    pub async fn thumbs_down(&self, id: Uuid) -> Result<Thought, ApiError> {
        let url = format!("{}/thoughts/thumbsdown/{}", self.base_url, id);
        let response = Request::post(&url).send().await?;
        Self::decode(response).await
    }
}
