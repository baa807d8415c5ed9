use std::sync::LazyLock;

use common::{api_config::ApiConfig, credential::Credential, file_version::ServerMessage};
use reqwest::{RequestBuilder, Response, StatusCode, header::AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// One connection pool for every `FilesApiClient`, whatever credential it carries.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// HTTP client bound to one backend and one credential.
///
/// Cheap to create and clone: all instances share one connection pool.
#[derive(Debug, Clone)]
pub struct FilesApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    credential: Credential,
}

impl FilesApiClient {
    pub fn new(config: ApiConfig, credential: Credential) -> Self {
        Self { http: HTTP_CLIENT.clone(), config, credential }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).header(AUTHORIZATION, self.credential.authorization_header_value())
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.http.post(url).header(AUTHORIZATION, self.credential.authorization_header_value())
    }

    pub(crate) async fn send(&self, url: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| {
            tracing::error!("{}: transport failure: {}", url, source);
            ApiError::Transport { url: url.to_string(), source }
        })?;
        ensure_success(url, response).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::info!("GET {}", url);
        let response = self.send(url, self.get(url)).await?;
        read_json(url, response).await
    }
}

async fn ensure_success(url: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    tracing::warn!("{}: backend answered {}", url, status);
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Unauthorized { status: status.as_u16() });
    }
    let body = response.text().await.unwrap_or_default();
    if status == StatusCode::BAD_REQUEST {
        if let Ok(ServerMessage { message }) = serde_json::from_str::<ServerMessage>(&body) {
            return Err(ApiError::Rejected { message });
        }
    }
    Err(ApiError::Status { status: status.as_u16(), body })
}

async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|source| ApiError::Transport { url: url.to_string(), source })?;
    tracing::debug!("{}: response body: {}", url, text);
    serde_json::from_str(&text).map_err(|source| {
        tracing::error!("{}: malformed response body: {}", url, source);
        ApiError::MalformedBody { url: url.to_string(), source }
    })
}
