use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::{Category, CategoryListResponse};
use contracts::shared::response::MessageResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{bearer, join_url, ApiError};
use crate::shared::config::config;

/// Catalogue service: category endpoints
#[async_trait(?Send)]
pub trait CategoryApi {
    /// Fetch every category, in server order
    async fn fetch_all(&self) -> Result<Vec<Category>, ApiError>;

    /// Delete a category. A non-success status comes back as
    /// [`ApiError::Status`] carrying the server message.
    async fn delete(&self, id: &str, token: &str) -> Result<MessageResponse, ApiError>;
}

/// [`CategoryApi`] over `fetch`
#[derive(Debug, Clone)]
pub struct HttpCategoryApi {
    base: String,
}

impl HttpCategoryApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_config() -> Self {
        Self::new(config().api.category_base.clone())
    }

    fn delete_url(&self, id: &str) -> String {
        join_url(
            &self.base,
            &format!("/deleteCategory/{}", urlencoding::encode(id)),
        )
    }
}

#[async_trait(?Send)]
impl CategoryApi for HttpCategoryApi {
    async fn fetch_all(&self) -> Result<Vec<Category>, ApiError> {
        let response = Request::get(&join_url(&self.base, "/showAllCategory"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                message: None,
            });
        }

        response
            .json::<CategoryListResponse>()
            .await
            .map(CategoryListResponse::into_categories)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn delete(&self, id: &str, token: &str) -> Result<MessageResponse, ApiError> {
        let response = Request::delete(&self.delete_url(id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status,
                message: body.message,
            });
        }

        Ok(body)
    }
}
