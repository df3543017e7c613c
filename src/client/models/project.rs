//! Project and managed-scan models

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One element of the project list.
///
/// The list endpoint has been seen returning bare names as well as objects,
/// so both are accepted. Anything else is kept raw for the warning message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectEntry {
    Name(String),
    Object(ProjectObject),
    Other(serde_json::Value),
}

/// Object form of a project list entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl ProjectEntry {
    /// Project identifier used in URLs: `name`, then `project_name`, then `slug`.
    pub fn name(&self) -> Option<&str> {
        let candidate = match self {
            Self::Name(name) => Some(name.as_str()),
            Self::Object(obj) => [&obj.name, &obj.project_name, &obj.slug]
                .into_iter()
                .filter_map(|v| v.as_deref())
                .find(|v| !v.is_empty()),
            Self::Other(_) => None,
        };
        candidate.filter(|v| !v.is_empty())
    }

    /// Compact JSON rendering for diagnostics
    pub fn describe(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// `GET /deployments/{slug}/projects` response, bare or wrapped
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProjectsResponse {
    Bare(Vec<ProjectEntry>),
    Wrapped { projects: Vec<ProjectEntry> },
}

impl ProjectsResponse {
    pub(crate) fn into_entries(self) -> Vec<ProjectEntry> {
        match self {
            Self::Bare(list) => list,
            Self::Wrapped { projects } => projects,
        }
    }
}

/// Project detail payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Managed scan switches; absent on projects that never had SMS configured
    #[serde(default)]
    pub managed_scan_config: Option<ManagedScanConfig>,
}

impl ProjectDetail {
    /// True only when both diff and full scans are explicitly enabled.
    pub fn sms_enabled(&self) -> bool {
        self.managed_scan_config
            .as_ref()
            .is_some_and(ManagedScanConfig::is_fully_enabled)
    }
}

/// `GET /deployments/{slug}/projects/{name}` response, wrapped or bare.
///
/// When a `project` key is present its value must be a valid detail; it is
/// never reinterpreted as a bare payload.
#[derive(Debug)]
pub(crate) struct ProjectDetailResponse(ProjectDetail);

impl<'de> Deserialize<'de> for ProjectDetailResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        let detail = match value.get_mut("project").map(serde_json::Value::take) {
            Some(project) => project,
            None => value,
        };
        ProjectDetail::deserialize(detail)
            .map(Self)
            .map_err(D::Error::custom)
    }
}

impl ProjectDetailResponse {
    pub(crate) fn into_detail(self) -> ProjectDetail {
        self.0
    }
}

/// Managed scan switches. Also the PATCH body for the managed-scan endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedScanConfig {
    #[serde(default)]
    pub diff_scan: Option<ScanToggle>,

    #[serde(default)]
    pub full_scan: Option<ScanToggle>,
}

/// A single on/off switch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanToggle {
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl ScanToggle {
    fn on() -> Self {
        Self {
            enabled: Some(true),
        }
    }

    fn is_on(&self) -> bool {
        self.enabled == Some(true)
    }
}

impl ManagedScanConfig {
    /// Body that turns on both diff and full scans
    pub fn fully_enabled() -> Self {
        Self {
            diff_scan: Some(ScanToggle::on()),
            full_scan: Some(ScanToggle::on()),
        }
    }

    pub fn is_fully_enabled(&self) -> bool {
        let on = |t: &Option<ScanToggle>| t.as_ref().is_some_and(ScanToggle::is_on);
        on(&self.diff_scan) && on(&self.full_scan)
    }
}
