use async_trait::async_trait;
use contracts::shared::response::MessageResponse;
use contracts::system::signup::SignupRequest;
use gloo_net::http::Request;

use crate::shared::api_utils::{join_url, ApiError};
use crate::shared::config::config;

/// Account service
#[async_trait(?Send)]
pub trait SignupApi {
    /// Register a new user. The decoded reply is returned whatever the
    /// status; only transport and decode failures are errors.
    async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, ApiError>;
}

/// [`SignupApi`] over `fetch`
#[derive(Debug, Clone)]
pub struct HttpSignupApi {
    base: String,
}

impl HttpSignupApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_config() -> Self {
        Self::new(config().api.signup_base.clone())
    }
}

#[async_trait(?Send)]
impl SignupApi for HttpSignupApi {
    async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, ApiError> {
        let response = Request::post(&join_url(&self.base, "/signup"))
            .json(request)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if !response.ok() {
            log::warn!("Signup answered with status {}: {:?}", status, body.message);
        }

        Ok(body)
    }
}
