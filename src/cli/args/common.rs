//! Common CLI types

/// Output format for the final run report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized summary
    #[default]
    Pretty,
    /// Table format - one row per project
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}
