//! Semgrep API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::models::{
    Deployment, DeploymentsResponse, ManagedScanConfig, ProjectDetail, ProjectDetailResponse,
    ProjectEntry, ProjectsResponse,
};
use super::{SemgrepApi, endpoints};
use crate::config::DEFAULT_API_URL;
use crate::error::{ApiError, ConfigError, Error, Result};

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Semgrep API client
pub struct SemgrepClient {
    http: HttpClient,
    base_url: Url,
    api_token: String,
}

impl SemgrepClient {
    /// Create a new client against `api_url`, or the public Semgrep API when `None`.
    pub fn new(api_token: impl Into<String>, api_url: Option<&str>) -> Result<Self> {
        let raw = api_url.unwrap_or(DEFAULT_API_URL);
        let base_url = Url::parse(raw)
            .map_err(|e| ConfigError::Invalid(format!("Invalid API URL '{}': {}", raw, e)))?;

        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("enable-sms/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_token: api_token.into(),
        })
    }

    /// Attach the headers every Semgrep call carries
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header(ACCEPT, "application/json")
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .authorized(self.http.get(url.clone()))
            .send()
            .await
            .map_err(ApiError::from)?;
        let response = check_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| {
            Error::from(ApiError::InvalidResponse(format!(
                "Unexpected response format from {}: {}",
                url.path(),
                e
            )))
        })
    }
}

/// Map a non-2xx response to an [`ApiError`], consuming the body for context.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!("API returned {}: {}", status, body);

    let err = match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(or_default(body, "Resource not found")),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(or_default(body, "Bad request"))
        }
        status if status.is_server_error() => {
            let fallback = format!("Server error: {}", status);
            ApiError::ServerError(or_default(body, &fallback))
        }
        status => ApiError::UnexpectedStatus(status, body),
    };
    Err(err.into())
}

fn or_default(body: String, fallback: &str) -> String {
    if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body
    }
}

#[async_trait]
impl SemgrepApi for SemgrepClient {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn list_deployments(&self) -> Result<Vec<Deployment>> {
        let url = endpoints::deployments(&self.base_url)?;
        let response: DeploymentsResponse = self.get_json(url).await?;
        Ok(response.into_deployments())
    }

    async fn list_projects(&self, deployment: &str) -> Result<Vec<ProjectEntry>> {
        let url = endpoints::projects(&self.base_url, deployment)?;
        let response: ProjectsResponse = self.get_json(url).await?;
        Ok(response.into_entries())
    }

    async fn get_project(&self, deployment: &str, project: &str) -> Result<ProjectDetail> {
        let url = endpoints::project(&self.base_url, deployment, project)?;
        let response: ProjectDetailResponse = self.get_json(url).await?;
        Ok(response.into_detail())
    }

    async fn update_managed_scan(
        &self,
        deployment: &str,
        project: &str,
        config: &ManagedScanConfig,
    ) -> Result<()> {
        let url = endpoints::managed_scan(&self.base_url, deployment, project)?;
        debug!("PATCH {}", url);

        let response = self
            .authorized(self.http.patch(url))
            .json(config)
            .send()
            .await
            .map_err(ApiError::from)?;
        check_status(response).await?;

        Ok(())
    }
}
