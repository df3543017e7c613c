//! Enable managed scans across a deployment
//!
//! The run is two passes over the project list: first every project's
//! detail is fetched and evaluated, then the projects that still need SMS
//! are patched one by one. Every request is awaited before the next starts.

use std::collections::HashSet;

use colored::Colorize;
use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::{ManagedScanConfig, SemgrepApi, endpoints};
use crate::error::{ConfigError, Error, Result};
use crate::models::{ProjectOutcome, RunReport, Step};
use crate::output::Formattable;

/// What the evaluator decided for one project
enum Evaluation {
    /// Nothing left to do (already enabled, or the detail fetch failed)
    Done(ProjectOutcome),
    /// At least one switch is off or missing
    NeedsEnable,
}

/// Project names from the listing, plus how many entries had none
struct ProjectListing {
    names: Vec<String>,
    unnamed: usize,
}

/// Run the command: resolve context, enable SMS, print the report.
///
/// Fails after printing the report when any project could not be processed.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let report = enable_all(&ctx.client, ctx.deployment_slug.as_deref(), ctx.dry_run).await?;
    report.print(ctx.format)?;

    match report.failures() {
        0 => Ok(()),
        n => Err(Error::Other(format!(
            "{} project(s) could not be processed",
            n
        ))),
    }
}

/// Enable SMS for every project of a deployment that doesn't have it yet.
pub async fn enable_all<C: SemgrepApi + ?Sized>(
    client: &C,
    explicit_slug: Option<&str>,
    dry_run: bool,
) -> Result<RunReport> {
    if dry_run {
        eprintln!("{}", "DRY RUN - no changes will be made".yellow());
    }

    let deployment = resolve_deployment(client, explicit_slug).await?;
    let listing = list_project_names(client, &deployment).await?;

    let mut evaluations = Vec::with_capacity(listing.names.len());
    for name in listing.names {
        let evaluation = evaluate_project(client, &deployment, &name).await;
        evaluations.push((name, evaluation));
    }

    let pending = evaluations
        .iter()
        .filter(|(_, e)| matches!(e, Evaluation::NeedsEnable))
        .count();
    eprintln!("Projects to enable SMS on: {}", pending.to_string().bold());

    let mut projects = Vec::with_capacity(evaluations.len());
    for (name, evaluation) in evaluations {
        let outcome = match evaluation {
            Evaluation::Done(outcome) => outcome,
            Evaluation::NeedsEnable => enable_project(client, &deployment, &name, dry_run).await,
        };
        projects.push(outcome);
    }

    Ok(RunReport {
        deployment,
        dry_run,
        projects,
        unnamed_entries: listing.unnamed,
    })
}

/// Use the explicit slug, or the slug of the first deployment the token can see.
pub async fn resolve_deployment<C: SemgrepApi + ?Sized>(
    client: &C,
    explicit_slug: Option<&str>,
) -> Result<String> {
    if let Some(slug) = explicit_slug {
        eprintln!("Using provided deployment: {}", slug.bold());
        return Ok(slug.to_string());
    }

    let deployments = client.list_deployments().await.inspect_err(|_| {
        eprintln!("{} Failed to list deployments", "✗".red());
    })?;

    let first = deployments.first().ok_or(ConfigError::NoDeployments)?;
    if deployments.len() > 1 {
        eprintln!(
            "{} Multiple deployments found; using the first one. Pass --deployment-slug to choose another.",
            "⚠".yellow()
        );
    }

    let slug = first
        .slug
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingDeploymentSlug)?;

    debug!("First deployment: id={:?} name={:?}", first.id, first.name);
    match first.name.as_deref() {
        Some(name) => eprintln!("Auto-resolved deployment: {} ({})", slug.bold(), name),
        None => eprintln!("Auto-resolved deployment: {}", slug.bold()),
    }

    Ok(slug.to_string())
}

/// List project names, skipping unnamed entries and repeated names.
async fn list_project_names<C: SemgrepApi + ?Sized>(
    client: &C,
    deployment: &str,
) -> Result<ProjectListing> {
    eprintln!("Listing projects for deployment '{}'...", deployment);

    let entries = client.list_projects(deployment).await.inspect_err(|_| {
        eprintln!("{} Failed to list projects", "✗".red());
    })?;
    eprintln!("Found {} projects", entries.len());

    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(entries.len());
    let mut unnamed = 0;

    for entry in &entries {
        match entry.name() {
            Some(name) => {
                if seen.insert(name.to_string()) {
                    names.push(name.to_string());
                } else {
                    debug!("Project '{}' listed more than once, processing it once", name);
                }
            }
            None => {
                eprintln!(
                    "{} Could not determine project name from entry: {}",
                    "⚠".yellow(),
                    entry.describe()
                );
                unnamed += 1;
            }
        }
    }

    Ok(ProjectListing { names, unnamed })
}

/// Fetch one project's detail and decide whether it needs SMS.
async fn evaluate_project<C: SemgrepApi + ?Sized>(
    client: &C,
    deployment: &str,
    project: &str,
) -> Evaluation {
    match client.get_project(deployment, project).await {
        Err(err) => {
            eprintln!(
                "{} Failed to get project '{}' details: {}",
                "✗".red(),
                project,
                err
            );
            Evaluation::Done(ProjectOutcome::failed(project, Step::FetchDetails, &err))
        }
        Ok(detail) if detail.sms_enabled() => {
            eprintln!(
                "{} Project '{}' already has SMS enabled",
                "○".dimmed(),
                project
            );
            Evaluation::Done(ProjectOutcome::already_enabled(project))
        }
        Ok(detail) => {
            debug!(
                "Project '{}' (reported name {:?}) managed_scan_config: {:?}",
                project, detail.name, detail.managed_scan_config
            );
            eprintln!(
                "{} Project '{}' does NOT have SMS enabled",
                "→".cyan(),
                project
            );
            Evaluation::NeedsEnable
        }
    }
}

/// PATCH both switches on, or describe the call in dry-run mode.
async fn enable_project<C: SemgrepApi + ?Sized>(
    client: &C,
    deployment: &str,
    project: &str,
    dry_run: bool,
) -> ProjectOutcome {
    let body = ManagedScanConfig::fully_enabled();

    if dry_run {
        return match describe_patch(client, deployment, project, &body) {
            Ok(description) => {
                eprintln!("  Would {}", description);
                ProjectOutcome::would_enable(project)
            }
            Err(err) => ProjectOutcome::failed(project, Step::EnableManagedScan, &err),
        };
    }

    match client.update_managed_scan(deployment, project, &body).await {
        Ok(()) => {
            eprintln!("{} SMS enabled for '{}'", "✓".green(), project);
            ProjectOutcome::enabled(project)
        }
        Err(err) => {
            eprintln!(
                "{} Failed to enable SMS for '{}': {}",
                "✗".red(),
                project,
                err
            );
            ProjectOutcome::failed(project, Step::EnableManagedScan, &err)
        }
    }
}

fn describe_patch<C: SemgrepApi + ?Sized>(
    client: &C,
    deployment: &str,
    project: &str,
    body: &ManagedScanConfig,
) -> Result<String> {
    let url = endpoints::managed_scan(client.base_url(), deployment, project)?;
    let payload = serde_json::to_string(body)?;
    Ok(format!("PATCH {} with body={}", url, payload))
}
