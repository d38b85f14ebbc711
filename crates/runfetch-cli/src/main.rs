use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::Cli;
use runfetch_core::{ArtifactFetcher, FetchRequest};
use runfetch_github::{GhClient, Repository};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (logs go to stderr)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runfetch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let repo: Repository = cli.repo.parse()?;

    let mut request =
        FetchRequest::new(repo, cli.workflow, cli.out_dir).with_search_limit(cli.limit);
    if let Some(artifact) = cli.artifact {
        request = request.with_artifact(artifact);
    }
    if let Some(branch) = cli.branch {
        request = request.with_branch(branch);
    }
    if let Some(event) = cli.event {
        request = request.with_event(event);
    }

    tracing::debug!("Fetch request: {:?}", request);

    let client = GhClient::new().with_program(cli.gh_bin);
    let result = ArtifactFetcher::new(client).fetch(&request).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("✓ Downloaded artifacts from run {}", result.run_id);
    println!("  Workflow: {} ({})", result.workflow, result.repo);
    println!("  Title: {}", result.run_title);
    println!("  Branch: {} [{}]", result.run_branch, result.run_event);
    println!("  Created: {}", result.created_at);
    println!("  URL: {}", result.run_url);
    println!("  Extracted:");
    for file in &result.extracted_files {
        println!("    {}", file.display());
    }

    Ok(())
}
