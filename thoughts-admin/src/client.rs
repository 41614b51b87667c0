use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thoughts_domain::{CreateThoughtRequest, Thought, UpdateThoughtRequest};
use uuid::Uuid;

use crate::error::ApiError;

/// Browser-side client for the admin CRUD endpoints.
#[derive(Clone)]
pub struct AdminApi {
    base_url: String,
}

impl AdminApi {
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

    pub async fn list_thoughts(&self, page: u32, size: u32) -> Result<Vec<Thought>, ApiError> {
        let url = format!("{}/thoughts?page={}&size={}", self.base_url, page, size);
        let response = Request::get(&url).send().await?;
        Self::decode(response).await
    }

    pub async fn get_thought(&self, id: Uuid) -> Result<Thought, ApiError> {
        let url = format!("{}/thoughts/{}", self.base_url, id);
        let response = Request::get(&url).send().await?;
        Self::decode(response).await
    }

    pub async fn create_thought(&self, request: &CreateThoughtRequest) -> Result<Thought, ApiError> {
        let url = format!("{}/thoughts", self.base_url);
        let response = Request::post(&url).json(request)?.send().await?;
        Self::decode(response).await
    }

    pub async fn update_thought(
        &self,
        id: Uuid,
        request: &UpdateThoughtRequest,
    ) -> Result<Thought, ApiError> {
        let url = format!("{}/thoughts/{}", self.base_url, id);
        let response = Request::put(&url).json(request)?.send().await?;
        Self::decode(response).await
    }

    /// `204 No Content` on success, nothing to decode.
    pub async fn delete_thought(&self, id: Uuid) -> Result<(), ApiError> {
        let url = format!("{}/thoughts/{}", self.base_url, id);
        let response = Request::delete(&url).send().await?;
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::from_response(response).await)
        }
    }
}
