//! Newsletter generator
//!
//! Batch CLI that fetches newsletters from Sanity and writes either the RSS
//! feed file or a pre-rendered newsletter page. Intended for local runs and
//! scheduled CI jobs; any fatal error exits with status 1.

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use newsletter_core::config::{BATCH_FEED_LIMIT, PAGE_LIMIT};
use newsletter_core::{Config, NewsletterService, SanityClient};
use tracing_subscriber::EnvFilter;

/// Default location of the generated feed, relative to the site root
const DEFAULT_RSS_PATH: &str = "docs/newsletter/rss.xml";

#[derive(Debug, Parser)]
#[command(name = "newsletter-gen", version, about = "Generate newsletter pages and feeds from Sanity")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the RSS feed to a file
    Rss {
        /// Output file
        #[arg(short, long, default_value = DEFAULT_RSS_PATH)]
        output: PathBuf,
        /// Maximum number of issues in the feed
        #[arg(long, default_value_t = BATCH_FEED_LIMIT)]
        limit: usize,
    },
    /// Render the latest issue and archive into an HTML page template
    Page {
        /// Page containing the `latest-issue-container` and `archive-container` elements
        #[arg(short, long)]
        template: PathBuf,
        /// Output file (may be the template itself)
        #[arg(short, long)]
        output: PathBuf,
        /// Maximum number of issues to fetch
        #[arg(long, default_value_t = PAGE_LIMIT)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean for job runners
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env();
    let client = SanityClient::new(&config.sanity).context("Failed to build Sanity client")?;
    let service = NewsletterService::new(Arc::new(client), config.site);

    match cli.command {
        Command::Rss { output, limit } => commands::generate_rss(&service, &output, limit).await,
        Command::Page {
            template,
            output,
            limit,
        } => commands::render_page(&service, &template, &output, limit).await,
    }
}
