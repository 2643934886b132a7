/**
 * API Client
 *
 * Async HTTP client for the `/api/users` and `/api/profile` endpoints.
 * Every call sends the stored bearer token when there is one.
 *
 * Failed calls come back as `ClientError::Api` carrying the decoded error
 * body: the field-keyed map for form errors, or the raw JSON for
 * `{"error", "status"}` style responses.
 */

use reqwest::{header::AUTHORIZATION, Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::client::config::ClientConfig;
use crate::shared::{
    CurrentUserResponse, DeleteAccountResponse, EducationRequest, ExperienceRequest, FieldErrors,
    LoginRequest, LoginResponse, Profile, ProfileRequest, RegisterRequest, UserResponse,
};

/// Decoded body of a failed response
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// Field-keyed messages
    Fields(FieldErrors),
    /// Any other JSON (or `Null` when the body was not JSON)
    Other(Value),
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got a response
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("request failed with status {status}")]
    Api { status: u16, body: ErrorBody },

    /// The success body did not have the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured server URL cannot carry a request path
    #[error("invalid server url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    fn from_response(status: u16, bytes: &[u8]) -> Self {
        let body = match serde_json::from_slice::<FieldErrors>(bytes) {
            Ok(fields) if !fields.is_empty() => ErrorBody::Fields(fields),
            _ => ErrorBody::Other(serde_json::from_slice(bytes).unwrap_or(Value::Null)),
        };
        ClientError::Api { status, body }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Messages to show next to the form
    ///
    /// Non-field failures are reported under the `error` key.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            ClientError::Api { body: ErrorBody::Fields(fields), .. } => fields.clone(),
            ClientError::Api { body: ErrorBody::Other(value), status } => {
                let message = value
                    .get("error")
                    .and_then(Value::as_str)
                    .map(String::from)
                    .unwrap_or_else(|| format!("Request failed with status {}", status));
                FieldErrors::single("error", message)
            }
            other => FieldErrors::single("error", other.to_string()),
        }
    }
}

/// HTTP client for the DevConnect API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Use a bearer token for subsequent calls
    pub fn set_token(&mut self, token: Option<String>) {
        self.config.set_token(token);
    }

    pub fn clear_token(&mut self) {
        self.config.clear_token();
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let request = match self.config.token() {
            Some(token) => request.header(AUTHORIZATION, token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            tracing::debug!("Request failed with {}", status);
            return Err(ClientError::from_response(status.as_u16(), &bytes));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.config.api_url(path))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.config.api_url(path))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.config.api_url(path))
    }

    /// URL of `path` with `segment` appended as one percent-encoded segment
    fn segment_url(&self, path: &str, segment: &str) -> Result<Url, ClientError> {
        let raw = self.config.api_url(path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(raw.clone()))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// POST /api/users/register
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserResponse, ClientError> {
        self.send(self.post("/api/users/register").json(request)).await
    }

    /// POST /api/users/login
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.send(self.post("/api/users/login").json(request)).await
    }

    /// GET /api/users/current
    pub async fn current_user(&self) -> Result<CurrentUserResponse, ClientError> {
        self.send(self.get("/api/users/current")).await
    }

    /// GET /api/profile
    ///
    /// The server answers `{}` when the user has no profile yet; that maps
    /// to `None`.
    pub async fn get_current_profile(&self) -> Result<Option<Profile>, ClientError> {
        let value: Value = self.send(self.get("/api/profile")).await?;
        match &value {
            Value::Object(map) if map.is_empty() => Ok(None),
            Value::Null => Ok(None),
            _ => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    /// GET /api/profile/handle/{handle}
    pub async fn get_profile_by_handle(&self, handle: &str) -> Result<Option<Profile>, ClientError> {
        let url = self.segment_url("/api/profile/handle", handle)?;
        self.send(self.http.get(url)).await
    }

    /// GET /api/profile/user/{user_id}
    pub async fn get_profile_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, ClientError> {
        self.send(self.get(&format!("/api/profile/user/{}", user_id))).await
    }

    /// GET /api/profile/all
    pub async fn get_profiles(&self) -> Result<Vec<Profile>, ClientError> {
        self.send(self.get("/api/profile/all")).await
    }

    /// POST /api/profile
    pub async fn create_profile(&self, request: &ProfileRequest) -> Result<Profile, ClientError> {
        self.send(self.post("/api/profile").json(request)).await
    }

    /// POST /api/profile/education
    pub async fn add_education(&self, request: &EducationRequest) -> Result<Profile, ClientError> {
        self.send(self.post("/api/profile/education").json(request)).await
    }

    /// POST /api/profile/experience
    pub async fn add_experience(&self, request: &ExperienceRequest) -> Result<Profile, ClientError> {
        self.send(self.post("/api/profile/experience").json(request)).await
    }

    /// DELETE /api/profile/education/{id}
    pub async fn delete_education(&self, id: Uuid) -> Result<Profile, ClientError> {
        self.send(self.delete(&format!("/api/profile/education/{}", id))).await
    }

    /// DELETE /api/profile/experience/{id}
    pub async fn delete_experience(&self, id: Uuid) -> Result<Profile, ClientError> {
        self.send(self.delete(&format!("/api/profile/experience/{}", id))).await
    }

    /// DELETE /api/profile
    pub async fn delete_account(&self) -> Result<DeleteAccountResponse, ClientError> {
        self.send(self.delete("/api/profile")).await
    }
}
