//! sitecrawl CLI
//!
//! Local execution entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sitecrawl::{
    error::Result,
    frontier::StrategyKind,
    models::{Config, CrawlReport},
    pipeline::Crawler,
};

/// sitecrawl - same-domain web crawler
#[derive(Parser, Debug)]
#[command(
    name = "sitecrawl",
    version,
    about = "Same-domain web crawler with pluggable traversal strategies"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl a site starting from a URL
    Crawl {
        /// Absolute http(s) URL to start from
        url: String,

        /// Traversal strategy: recursive, bfs, dfs, or priority
        #[arg(short, long, default_value = "bfs")]
        strategy: StrategyKind,

        /// Keyword for relevance scoring (repeatable; priority strategy only)
        #[arg(short = 'k', long = "keyword")]
        keywords: Vec<String>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration files
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Crawl {
            url,
            strategy,
            keywords,
            json,
            output,
        } => {
            if !keywords.is_empty() && !strategy.is_scored() {
                log::warn!("Keywords only affect the priority strategy; ignoring them");
            }

            let crawler = Crawler::new(config)?;
            let report = crawler.run(&url, strategy, &keywords).await?;

            if let Some(path) = output {
                std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
                log::info!("Report written to {}", path.display());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("Config OK");
        }
    }

    Ok(())
}

/// Print a human-readable crawl summary.
fn print_report(report: &CrawlReport) {
    println!(
        "Visited {} page(s) from {} ({} strategy)",
        report.visited.len(),
        report.start_url,
        report.strategy
    );

    match &report.scores {
        Some(scores) => {
            // Highest relevance first, URL order for ties.
            let mut ranked: Vec<_> = scores.iter().collect();
            ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (url, score) in ranked {
                println!("{score:>8}  {url}");
            }
            for url in report.visited.iter().filter(|u| !scores.contains_key(*u)) {
                println!("       -  {url}");
            }
        }
        None => {
            for url in &report.visited {
                println!("  {url}");
            }
        }
    }

    let elapsed = (report.stats.finished_at - report.stats.started_at).num_milliseconds();
    println!(
        "{} link(s) discovered, {} fetch failure(s), {:.1}s",
        report.stats.links_discovered,
        report.stats.fetch_failures,
        elapsed as f64 / 1000.0
    );
}
