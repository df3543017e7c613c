//! Deployment models

use serde::{Deserialize, Serialize};

/// Deployment (account/tenant) resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deployment {
    /// Deployment slug, used in every project URL
    #[serde(default)]
    pub slug: Option<String>,

    /// Deployment ID (numeric in practice, kept loose)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `GET /deployments` response, wrapped or bare
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum DeploymentsResponse {
    Bare(Vec<Deployment>),
    Wrapped {
        #[serde(default)]
        deployments: Option<Vec<Deployment>>,
    },
}

impl DeploymentsResponse {
    pub(crate) fn into_deployments(self) -> Vec<Deployment> {
        match self {
            Self::Bare(list) => list,
            Self::Wrapped { deployments } => deployments.unwrap_or_default(),
        }
    }
}
