//! Sitewalk main entry point
//!
//! This is the command-line interface for the Sitewalk crawler.

use clap::Parser;
use sitewalk::config::{load_config_with_hash, Config};
use sitewalk::crawler::crawl;
use sitewalk::manifest::load_seeds;
use sitewalk::output::{print_summary, CrawlSummary};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Sitewalk: discover every page of a set of sites
///
/// Reads seed URLs from the sitemap manifest, crawls each seed's site
/// concurrently without leaving its host scope, and writes every discovered
/// URL to a newline-delimited file.
#[derive(Parser, Debug)]
#[command(name = "sitewalk")]
#[command(version)]
#[command(about = "Concurrent same-site crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Load config and manifest, show the seeds, and exit without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_crawl(&config, cli.verbose > 0, cli.quiet).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitewalk=info,warn"),
            1 => EnvFilter::new("sitewalk=debug,info"),
            2 => EnvFilter::new("sitewalk=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates inputs and shows what would be crawled
fn handle_dry_run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Sitewalk Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Fetch timeout: {}s", config.crawler.fetch_timeout_secs);
    match config.crawler.max_pages_per_seed {
        Some(max) => println!("  Max pages per seed: {}", max),
        None => println!("  Max pages per seed: unlimited"),
    }
    match config.crawler.max_seconds_per_seed {
        Some(max) => println!("  Max time per seed: {}s", max),
        None => println!("  Max time per seed: unlimited"),
    }

    println!("\nOutput:");
    println!("  URL list: {}", config.output.urls_path);
    println!("  Sorted: {}", config.output.sort);

    let seeds = load_seeds(Path::new(&config.input.manifest_path))?;
    println!("\nSeeds from {} ({}):", config.input.manifest_path, seeds.len());
    for seed in &seeds {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling {} seeds", seeds.len());

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(
    config: &Config,
    verbose: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting crawl of {}", config.input.manifest_path);

    match crawl(config).await {
        Ok(report) => {
            let summary = CrawlSummary::from_report(&report);
            if quiet {
                println!("{}", summary.headline());
            } else {
                print_summary(&summary, verbose);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
