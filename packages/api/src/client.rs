//! # HTTP client for the account API
//!
//! [`HttpAccountApi`] implements [`AccountApi`] over `reqwest`, which compiles
//! both natively and to WASM (where it rides on the browser's `fetch`). Every
//! call is a single attempt: no retries, no timeouts beyond the platform's own.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::models::{Credentials, LoginResponse, ProfileRecord, RegistrationPayload, ServerMessage};
use crate::{AccountApi, ApiError};

/// `reqwest`-backed [`AccountApi`].
#[derive(Clone, Debug)]
pub struct HttpAccountApi {
    client: Client,
    base_url: String,
}

impl HttpAccountApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &store::ClientConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-ok response into an [`ApiError`], keeping the server's `msg`
/// when the body has one.
async fn rejection(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let msg = response
        .json::<ServerMessage>()
        .await
        .ok()
        .and_then(|body| body.msg);
    tracing::debug!(status, has_msg = msg.is_some(), "account api rejected request");
    ApiError::from_status(status, msg)
}

async fn json_or_rejection<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        Ok(response.json::<T>().await?)
    } else {
        Err(rejection(response).await)
    }
}

impl AccountApi for HttpAccountApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.url("/login"))
            .json(credentials)
            .send()
            .await?;
        let status = response.status();
        // Any body that is not JSON, whatever the status, is a transport failure.
        let body: LoginResponse = response.json().await?;

        match body.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ if status.is_success() => Err(ApiError::MissingToken { msg: body.msg }),
            _ => Err(ApiError::from_status(status.as_u16(), body.msg)),
        }
    }

    async fn register(&self, payload: &RegistrationPayload) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/register"))
            .json(payload)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }

    async fn fetch_account(&self, token: &str) -> Result<ProfileRecord, ApiError> {
        let response = self
            .client
            .get(self.url("/account"))
            .bearer_auth(token)
            .send()
            .await?;
        json_or_rejection(response).await
    }

    async fn update_account(
        &self,
        token: &str,
        profile: &ProfileRecord,
    ) -> Result<ProfileRecord, ApiError> {
        let response = self
            .client
            .post(self.url("/update"))
            .bearer_auth(token)
            .json(profile)
            .send()
            .await?;
        json_or_rejection(response).await
    }
}
