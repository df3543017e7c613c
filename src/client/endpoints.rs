//! Semgrep API endpoint URLs
//!
//! Every dynamic piece (deployment slug, project name) is pushed as a single
//! path segment, so characters like spaces and `/` are percent-encoded
//! instead of changing the shape of the path.

use reqwest::Url;

use crate::error::{ConfigError, Result};

/// `GET /deployments`
pub fn deployments(base: &Url) -> Result<Url> {
    join(base, &["deployments"])
}

/// `GET /deployments/{slug}/projects`
pub fn projects(base: &Url, deployment: &str) -> Result<Url> {
    join(base, &["deployments", deployment, "projects"])
}

/// `GET /deployments/{slug}/projects/{name}`
pub fn project(base: &Url, deployment: &str, project: &str) -> Result<Url> {
    join(base, &["deployments", deployment, "projects", project])
}

/// `PATCH /deployments/{slug}/projects/{name}/managed-scan`
pub fn managed_scan(base: &Url, deployment: &str, project: &str) -> Result<Url> {
    join(
        base,
        &["deployments", deployment, "projects", project, "managed-scan"],
    )
}

fn join(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ConfigError::Invalid(format!("API URL cannot be used as a base: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
