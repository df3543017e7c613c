//! Semgrep API data models

mod deployment;
mod project;

pub use deployment::Deployment;
pub(crate) use deployment::DeploymentsResponse;
pub(crate) use project::{ProjectDetailResponse, ProjectsResponse};
pub use project::{ManagedScanConfig, ProjectDetail, ProjectEntry};
#[cfg(test)]
pub use project::ScanToggle;
