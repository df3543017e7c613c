//! Human-readable run summary

use colored::Colorize;

use crate::models::{Outcome, RunReport};

/// Summarise a run as a few status lines.
pub fn format_report(report: &RunReport) -> String {
    let mut lines = Vec::new();

    let header = format!("{} {}", "Deployment:".bold(), report.deployment);
    if report.dry_run {
        lines.push(format!("{} {}", header, "(dry run)".yellow()));
    } else {
        lines.push(header);
    }

    if report.dry_run {
        lines.push(format!(
            "  {} {} would be enabled",
            "→".cyan(),
            report.count(Outcome::WouldEnable)
        ));
    } else {
        lines.push(format!(
            "  {} {} enabled",
            "✓".green(),
            report.count(Outcome::Enabled)
        ));
    }

    lines.push(format!(
        "  {} {} already enabled",
        "○".dimmed(),
        report.count(Outcome::AlreadyEnabled)
    ));

    let failures = report.failures();
    if failures > 0 {
        lines.push(format!("  {} {} failed", "✗".red(), failures));
        for failed in report
            .projects
            .iter()
            .filter(|p| p.outcome == Outcome::Failed)
        {
            let step = failed.step.map(|s| s.to_string()).unwrap_or_default();
            lines.push(format!(
                "      {} ({}): {}",
                failed.project,
                step,
                failed.error.as_deref().unwrap_or("unknown error")
            ));
        }
    }

    if report.unnamed_entries > 0 {
        lines.push(format!(
            "  {} {} list entries had no project name",
            "⚠".yellow(),
            report.unnamed_entries
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{ProjectOutcome, Step};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_summary_counts() {
        plain();
        let report = RunReport {
            deployment: "acme".to_string(),
            dry_run: false,
            projects: vec![
                ProjectOutcome::already_enabled("svc-a"),
                ProjectOutcome::enabled("svc-b"),
            ],
            unnamed_entries: 0,
        };

        let output = format_report(&report);
        assert!(output.contains("Deployment: acme"));
        assert!(output.contains("1 enabled"));
        assert!(output.contains("1 already enabled"));
        assert!(!output.contains("failed"));
        assert!(!output.contains("dry run"));
    }

    #[test]
    fn test_dry_run_summary() {
        plain();
        let report = RunReport {
            deployment: "acme".to_string(),
            dry_run: true,
            projects: vec![
                ProjectOutcome::would_enable("svc-b"),
                ProjectOutcome::would_enable("svc-c"),
            ],
            unnamed_entries: 1,
        };

        let output = format_report(&report);
        assert!(output.contains("(dry run)"));
        assert!(output.contains("2 would be enabled"));
        assert!(output.contains("1 list entries had no project name"));
    }

    #[test]
    fn test_failures_listed_with_step() {
        plain();
        let err = Error::Other("boom".to_string());
        let report = RunReport {
            deployment: "acme".to_string(),
            dry_run: false,
            projects: vec![ProjectOutcome::failed("svc-d", Step::FetchDetails, &err)],
            unnamed_entries: 0,
        };

        let output = format_report(&report);
        assert!(output.contains("1 failed"));
        assert!(output.contains("svc-d (fetch project details): Operation failed: boom"));
    }
}
