//! Options resolved from the command line
//!
//! Consolidates the parsed flags into one struct so the run does not depend
//! on clap types directly.

use crate::cli::{Cli, OutputFormat};
use crate::config::non_empty;

/// Command-line options passed to the run.
///
/// # Precedence
///
/// For token, slug and API URL the precedence is: CLI flag > environment
/// variable > config file > default. This struct captures the CLI/env layer;
/// config file values are merged later in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Skip PATCH calls, print what would be done
    pub dry_run: bool,

    /// API token from `--api-token` or `SEMGREP_API_TOKEN`
    pub api_token: Option<String>,

    /// Deployment slug from `--deployment-slug`
    pub deployment_slug: Option<String>,

    /// Report format
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.semgrep-sms/config.yaml)
    pub config: Option<String>,

    /// Custom API base URL for development/testing
    pub api_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct. Blank values count as unset.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            dry_run: cli.dry_run,
            api_token: non_empty(cli.api_token.clone()),
            deployment_slug: non_empty(cli.deployment_slug.clone()),
            format: cli.format,
            config: non_empty(cli.config.clone()),
            api_url: non_empty(cli.api_url.clone()),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
