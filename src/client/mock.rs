//! Mock Semgrep API client for testing
//!
//! Provides a mock implementation of [`SemgrepApi`] for unit testing
//! without making real API calls.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use tokio::sync::Mutex;

use super::SemgrepApi;
use super::models::{Deployment, ManagedScanConfig, ProjectDetail, ProjectEntry};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockSemgrepClient::new()
///     .with_deployments(vec![deployment("acme")])
///     .await;
///
/// let deployments = mock.list_deployments().await?;
/// assert_eq!(deployments.len(), 1);
/// ```
pub struct MockSemgrepClient {
    base_url: Url,
    /// Deployments to return from list_deployments
    deployments: Arc<Mutex<Vec<Deployment>>>,
    /// Entries to return from list_projects
    projects: Arc<Mutex<Vec<ProjectEntry>>>,
    /// Project details keyed by project name
    details: Arc<Mutex<HashMap<String, ProjectDetail>>>,
    /// Projects whose updates fail with a server error
    failing_updates: Arc<Mutex<HashSet<String>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured PATCH calls for test assertions
    captured_updates: Arc<Mutex<Vec<CapturedUpdate>>>,
}

impl Default for MockSemgrepClient {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://semgrep.test/api/v1").expect("static URL"),
            deployments: Arc::new(Mutex::new(Vec::new())),
            projects: Arc::new(Mutex::new(Vec::new())),
            details: Arc::new(Mutex::new(HashMap::new())),
            failing_updates: Arc::new(Mutex::new(HashSet::new())),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_updates: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_deployments: usize,
    pub list_projects: usize,
    pub get_project: usize,
    pub update_managed_scan: usize,
}

/// A captured PATCH call
#[derive(Debug, Clone)]
pub struct CapturedUpdate {
    pub deployment: String,
    pub project: String,
    pub config: ManagedScanConfig,
}

impl MockSemgrepClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure deployments to return from list_deployments.
    pub async fn with_deployments(self, deployments: Vec<Deployment>) -> Self {
        *self.deployments.lock().await = deployments;
        self
    }

    /// Configure entries to return from list_projects.
    pub async fn with_projects(self, projects: Vec<ProjectEntry>) -> Self {
        *self.projects.lock().await = projects;
        self
    }

    /// Configure the detail returned for one project name.
    /// Names without a detail answer `get_project` with NotFound.
    pub async fn with_detail(self, name: &str, detail: ProjectDetail) -> Self {
        self.details.lock().await.insert(name.to_string(), detail);
        self
    }

    /// Make PATCH calls for this project fail.
    pub async fn with_failing_update(self, name: &str) -> Self {
        self.failing_updates.lock().await.insert(name.to_string());
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured PATCH calls.
    pub async fn captured_updates(&self) -> Vec<CapturedUpdate> {
        self.captured_updates.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl SemgrepApi for MockSemgrepClient {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn list_deployments(&self) -> Result<Vec<Deployment>> {
        self.call_count.lock().await.list_deployments += 1;
        self.check_error().await?;

        Ok(self.deployments.lock().await.clone())
    }

    async fn list_projects(&self, _deployment: &str) -> Result<Vec<ProjectEntry>> {
        self.call_count.lock().await.list_projects += 1;
        self.check_error().await?;

        Ok(self.projects.lock().await.clone())
    }

    async fn get_project(&self, _deployment: &str, project: &str) -> Result<ProjectDetail> {
        self.call_count.lock().await.get_project += 1;
        self.check_error().await?;

        self.details
            .lock()
            .await
            .get(project)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("project {}", project)).into())
    }

    async fn update_managed_scan(
        &self,
        deployment: &str,
        project: &str,
        config: &ManagedScanConfig,
    ) -> Result<()> {
        self.call_count.lock().await.update_managed_scan += 1;
        self.captured_updates.lock().await.push(CapturedUpdate {
            deployment: deployment.to_string(),
            project: project.to_string(),
            config: config.clone(),
        });
        self.check_error().await?;

        if self.failing_updates.lock().await.contains(project) {
            return Err(ApiError::ServerError("mock update failure".to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_deployments() {
        let mock = MockSemgrepClient::new()
            .with_deployments(vec![Deployment {
                slug: Some("acme".to_string()),
                ..Default::default()
            }])
            .await;

        let deployments = mock.list_deployments().await.unwrap();
        assert_eq!(deployments[0].slug.as_deref(), Some("acme"));
        assert_eq!(mock.call_counts().await.list_deployments, 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockSemgrepClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        assert!(mock.list_deployments().await.is_err());
        assert!(mock.list_deployments().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_unknown_project_is_not_found() {
        let mock = MockSemgrepClient::new();
        let err = mock.get_project("acme", "ghost").await.unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[tokio::test]
    async fn test_mock_captures_updates() {
        let mock = MockSemgrepClient::new().with_failing_update("bad").await;

        let config = ManagedScanConfig::fully_enabled();
        assert!(mock.update_managed_scan("acme", "good", &config).await.is_ok());
        assert!(mock.update_managed_scan("acme", "bad", &config).await.is_err());

        let captured = mock.captured_updates().await;
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].project, "good");
        assert_eq!(captured[0].deployment, "acme");
        assert_eq!(captured[0].config, config);
    }
}
