//! enable-sms - turn on Semgrep Managed Scans for every project in a deployment

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::Cli;
use cli::args::GlobalOptions;
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(&cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or everything from this crate with --debug.
fn init_logging(debug: bool) {
    let default_filter = if debug { "enable_sms=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: &Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(cli);
    cli::enable::run(&opts).await
}
