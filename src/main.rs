#![deny(clippy::all)]
use anyhow::Result;
use log::{debug, warn};
use owo_colors::OwoColorize;
use std::sync::Arc;
use walldrop_cli::clap::Parser;
use walldrop_cli::cli::Cli;
use walldrop_cli::config::Config;
use walldrop_cli::progress_bars::IndicatifProgressHandler;
use walldrop_core::{ManagedDirectories, SyncPipeline, SyncSummary};
use walldrop_extractors::{Auth, WallhavenClient};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    env_logger::builder().format_timestamp(None).init();

    let config = Config::load(&args)?;
    debug!("Using {:?}", config);

    let dirs = ManagedDirectories::from_base(&config.base_path);
    dirs.create_all().await?;

    let client = WallhavenClient::build_client(&config.server, config.timeout)?;
    let mut gallery = WallhavenClient::new(client, config.server.clone());

    if let Some(credentials) = &config.credentials {
        gallery.auth(credentials).await?;
        println!(
            "{} {}",
            "Logged in as".bold(),
            credentials.username.green().bold()
        );
    } else {
        warn!("No credentials configured, the subscriptions page will likely be unavailable");
    }

    println!(
        "{} {}",
        "Syncing into".bold(),
        dirs.unchecked.display().blue().italic()
    );

    let progress = Arc::new(IndicatifProgressHandler::new());

    let pipeline = SyncPipeline::new(gallery, dirs)
        .with_failure_policy(config.failure_policy)
        .with_progress_listener(progress);

    let summary = pipeline.run().await?;

    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &SyncSummary) {
    println!(
        "{} {} {} {} {}",
        summary.downloaded.to_string().bold().blue(),
        "wallpapers downloaded from".green().bold(),
        summary.tags_processed.to_string().bold().blue(),
        "tags in".green().bold(),
        format!("{} pages", summary.pages_requested).bold().blue(),
    );

    println!(
        "{} {} {} {} {} {}",
        summary.seen().to_string().bold(),
        "wallpapers seen:".bold(),
        summary.skipped_existing.to_string().bold(),
        "already known,".bold(),
        summary.skipped_purity.to_string().bold(),
        "filtered by purity".bold(),
    );

    if summary.has_failures() {
        println!(
            "{} {}",
            "Failed tags:".red().bold(),
            summary.failed_tags.join(", ").red()
        );
    }
}
