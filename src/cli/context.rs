//! Command execution context
//!
//! Merges command-line options with the config file and builds the API
//! client, so the run itself only deals with resolved values.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::SemgrepClient;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Settings after applying precedence: flag/env first, then config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_token: String,
    pub deployment_slug: Option<String>,
    pub api_url: Option<String>,
}

impl Settings {
    /// Resolve settings, failing when no source provides an API token.
    pub fn resolve(opts: &GlobalOptions, config: Config) -> Result<Self> {
        let api_token = opts
            .api_token
            .clone()
            .or(config.api_token)
            .ok_or(ConfigError::MissingApiToken)?;

        Ok(Self {
            api_token,
            deployment_slug: opts.deployment_slug.clone().or(config.deployment_slug),
            api_url: opts.api_url.clone().or(config.api_url),
        })
    }
}

/// Everything a run needs: the client plus the resolved run options.
pub struct CommandContext {
    /// API client for the resolved base URL and token
    pub client: SemgrepClient,
    /// Explicit deployment, if any; otherwise the first one is used
    pub deployment_slug: Option<String>,
    /// Skip PATCH calls
    pub dry_run: bool,
    /// Report format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config, resolve settings, and build the client.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable, no API token is
    /// available, or the API URL is invalid. No request is made here.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let settings = Settings::resolve(opts, config)?;

        if let Some(ref url) = settings.api_url {
            debug!("Using custom API URL: {}", url);
        }

        let client = SemgrepClient::new(settings.api_token, settings.api_url.as_deref())?;

        Ok(Self {
            client,
            deployment_slug: settings.deployment_slug,
            dry_run: opts.dry_run,
            format: opts.format,
        })
    }
}
