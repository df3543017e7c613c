//! Project outcome display model

use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::models::report::ProjectOutcome;

/// Longest error detail shown in a table cell
const MAX_DETAIL_LEN: usize = 80;

/// One row of the per-project report table.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OutcomeDisplay {
    #[tabled(rename = "PROJECT")]
    pub project: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    /// Failing step and error, empty on success
    #[tabled(rename = "DETAIL")]
    pub detail: String,
}

impl From<&ProjectOutcome> for OutcomeDisplay {
    fn from(outcome: &ProjectOutcome) -> Self {
        let detail = match (&outcome.step, &outcome.error) {
            (Some(step), Some(error)) => format!("{}: {}", step, error),
            (None, Some(error)) => error.clone(),
            _ => String::new(),
        };

        Self {
            project: outcome.project.clone(),
            status: outcome.outcome.to_string(),
            detail: truncate_string(&detail, MAX_DETAIL_LEN),
        }
    }
}
