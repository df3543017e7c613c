//! CLI definition and command handlers

use clap::Parser;

pub mod args;
pub mod context;
pub mod enable;

pub use args::OutputFormat;
pub use context::CommandContext;

/// Enable Semgrep Managed Scans (SMS) for all projects in a deployment
/// that don't already have SMS enabled.
#[derive(Parser, Debug)]
#[command(name = "enable-sms")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    enable-sms --dry-run                        # Preview, first deployment\n  \
    enable-sms --deployment-slug acme-corp      # Enable for one deployment\n  \
    enable-sms --format table                   # Per-project report")]
pub struct Cli {
    /// Do not send PATCH requests, only print what would be done
    #[arg(long)]
    pub dry_run: bool,

    /// Semgrep API token
    #[arg(long, env = "SEMGREP_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Deployment slug (e.g. 'acme-corp'); defaults to the first deployment
    #[arg(long)]
    pub deployment_slug: Option<String>,

    /// Report format (pretty, table, json)
    #[arg(
        long,
        env = "SEMGREP_SMS_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, env = "SEMGREP_SMS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, env = "SEMGREP_SMS_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Override the API base URL
    #[arg(long, env = "SEMGREP_API_URL", hide = true)]
    pub api_url: Option<String>,
}
