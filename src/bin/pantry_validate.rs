//! `pantry-validate`: maintainer CLI for the ingredient catalog.
//!
//! Compares the built-in catalog with TheMealDB's ingredient vocabulary and
//! lists upstream categories.
//!
//! Build: `cargo build --bin pantry-validate --features cli`

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pantry::Config;
use pantry::catalog::ValidationReport;

// ── CLI ─────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "pantry-validate", version, about = "check the pantry ingredient catalog against TheMealDB")]
struct Args {
    /// path to config.toml
    #[arg(short, long, env = "PANTRY_CONFIG")]
    config: Option<PathBuf>,

    /// override the upstream base URL
    #[arg(long, env = "PANTRY_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// diff the catalog against the upstream ingredient list
    Ingredients {
        /// print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// list upstream recipe categories
    Categories,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(url) = args.base_url {
        config.upstream.base_url = url;
    }
    let client = config.build_client()?;

    match args.command {
        Command::Ingredients { json } => {
            let report = client.validate_catalog().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            let code = report.exit_code();
            if code != 0 {
                process::exit(code);
            }
        }
        Command::Categories => {
            for category in client.fetch_categories().await? {
                println!("{category}");
            }
        }
    }
    Ok(())
}

fn print_report(report: &ValidationReport) {
    println!("missing ingredients ({}):", report.missing.len());
    for name in &report.missing {
        println!("  {name}");
    }
    println!("different names ({}):", report.different.len());
    for mismatch in &report.different {
        println!("  {:<20} → {}", mismatch.ours, mismatch.theirs.join(", "));
    }
}
