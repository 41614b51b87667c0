use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thoughts_domain::{CreateThoughtRequest, Thought, UpdateThoughtRequest};
use uuid::Uuid;

use crate::error::ApiError;

/// Typed client for the `/thoughts` REST endpoints.
#[derive(Clone)]
pub struct ThoughtsClient {
    client: Client,
    base_url: String,
}

impl ThoughtsClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(ApiError::from_response(response).await)
        }
    }

    pub async fn list_thoughts(&self, page: u32, size: u32) -> Result<Vec<Thought>, ApiError> {
        tracing::debug!(page, size, "listing thoughts");
        let response = self
            .client
            .get(format!("{}/thoughts", self.base_url))
            .query(&[("page", page), ("size", size)])
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn get_thought(&self, id: Uuid) -> Result<Thought, ApiError> {
        let response = self
            .client
            .get(format!("{}/thoughts/{}", self.base_url, id))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn create_thought(
        &self,
        request: &CreateThoughtRequest,
    ) -> Result<Thought, ApiError> {
        let response = self
            .client
            .post(format!("{}/thoughts", self.base_url))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn update_thought(
        &self,
        id: Uuid,
        request: &UpdateThoughtRequest,
    ) -> Result<Thought, ApiError> {
        let response = self
            .client
            .put(format!("{}/thoughts/{}", self.base_url, id))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Delete a thought. The backend answers `204 No Content` on success.
    pub async fn delete_thought(&self, id: Uuid) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/thoughts/{}", self.base_url, id))
            .send()
            .await?;
        // 204 No Content counts as success with an empty result
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::from_response(response).await)
        }
    }

    /// Fetch one random approved thought.
    pub async fn random_thought(&self) -> Result<Thought, ApiError> {
        let response = self
            .client
            .get(format!("{}/thoughts/random", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn thumbs_up(&self, id: Uuid) -> Result<Thought, ApiError> {
        let response = self
            .client
            .post(format!("{}/thoughts/thumbsup/{}", self.base_url, id))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn thumbs_down(&self, id: Uuid) -> Result<Thought, ApiError> {
        let response = self
            .client
            .post(format!("{}/thoughts/thumbsdown/{}", self.base_url, id))
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slashes() {
        let client = ThoughtsClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");

        let client = ThoughtsClient::new("http://localhost:8080").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
