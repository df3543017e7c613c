//! Semgrep API client

use async_trait::async_trait;
use reqwest::Url;

use crate::error::Result;

pub mod endpoints;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod semgrep;

#[cfg(test)]
pub use mock::MockSemgrepClient;
pub use models::{Deployment, ManagedScanConfig, ProjectDetail, ProjectEntry};
pub use semgrep::SemgrepClient;

/// The slice of the Semgrep API needed to manage SMS settings
#[async_trait]
pub trait SemgrepApi: Send + Sync {
    /// Base URL every endpoint is built from
    fn base_url(&self) -> &Url;

    /// List deployments visible to the token
    async fn list_deployments(&self) -> Result<Vec<Deployment>>;

    /// List the projects of a deployment
    async fn list_projects(&self, deployment: &str) -> Result<Vec<ProjectEntry>>;

    /// Fetch a single project's details, including its managed scan config
    async fn get_project(&self, deployment: &str, project: &str) -> Result<ProjectDetail>;

    /// PATCH the managed scan switches of a project
    async fn update_managed_scan(
        &self,
        deployment: &str,
        project: &str,
        config: &ManagedScanConfig,
    ) -> Result<()>;
}
