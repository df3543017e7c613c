//! Run report: what happened to each project

use std::fmt;

use serde::Serialize;

use crate::error::Error;

/// Final state of a project after the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Both switches were already on; nothing sent
    AlreadyEnabled,
    /// PATCH succeeded
    Enabled,
    /// Dry run; PATCH suppressed
    WouldEnable,
    /// A request for this project failed
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::AlreadyEnabled => "already enabled",
            Outcome::Enabled => "enabled",
            Outcome::WouldEnable => "would enable",
            Outcome::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Which request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    FetchDetails,
    EnableManagedScan,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::FetchDetails => f.write_str("fetch project details"),
            Step::EnableManagedScan => f.write_str("enable managed scans"),
        }
    }
}

/// Outcome for one project
#[derive(Debug, Clone, Serialize)]
pub struct ProjectOutcome {
    pub project: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Step>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProjectOutcome {
    fn new(project: &str, outcome: Outcome) -> Self {
        Self {
            project: project.to_string(),
            outcome,
            step: None,
            error: None,
        }
    }

    pub fn already_enabled(project: &str) -> Self {
        Self::new(project, Outcome::AlreadyEnabled)
    }

    pub fn enabled(project: &str) -> Self {
        Self::new(project, Outcome::Enabled)
    }

    pub fn would_enable(project: &str) -> Self {
        Self::new(project, Outcome::WouldEnable)
    }

    pub fn failed(project: &str, step: Step, err: &Error) -> Self {
        Self {
            step: Some(step),
            error: Some(err.to_string()),
            ..Self::new(project, Outcome::Failed)
        }
    }
}

/// Summary of a whole run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Deployment the run operated on
    pub deployment: String,
    pub dry_run: bool,
    /// One entry per named project, in listing order
    pub projects: Vec<ProjectOutcome>,
    /// List entries skipped because no project name could be found
    pub unnamed_entries: usize,
}

impl RunReport {
    /// Number of projects with the given outcome
    pub fn count(&self, outcome: Outcome) -> usize {
        self.projects.iter().filter(|p| p.outcome == outcome).count()
    }

    pub fn failures(&self) -> usize {
        self.count(Outcome::Failed)
    }
}
