use crate::client::{RunQuery, WorkflowClient};
use crate::error::Result;
use crate::repository::Repository;
use crate::runner::CommandRunner;
use crate::workflow::WorkflowRun;
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, info};

/// Fields requested from `gh run list --json`.
const RUN_LIST_FIELDS: &str =
    "databaseId,headBranch,event,status,conclusion,createdAt,displayTitle,url";

/// GitHub access backed by the pre-authenticated `gh` CLI.
pub struct GhClient {
    runner: CommandRunner,
}

impl GhClient {
    pub fn new() -> Self {
        Self {
            runner: CommandRunner::new("gh".to_string()),
        }
    }

    /// Use a binary other than `gh` on the PATH.
    pub fn with_program(mut self, program: String) -> Self {
        self.runner = CommandRunner::new(program);
        self
    }
}

impl Default for GhClient {
    fn default() -> Self {
        Self::new()
    }
}

fn run_list_args(query: &RunQuery) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "list".to_string(),
        "--repo".to_string(),
        query.repo.full_name(),
        "--workflow".to_string(),
        query.workflow.clone(),
        "--limit".to_string(),
        query.limit.to_string(),
        "--json".to_string(),
        RUN_LIST_FIELDS.to_string(),
    ];
    if let Some(branch) = &query.branch {
        args.push("--branch".to_string());
        args.push(branch.clone());
    }
    if let Some(event) = &query.event {
        args.push("--event".to_string());
        args.push(event.clone());
    }
    args
}

fn run_download_args(
    repo: &Repository,
    run_id: u64,
    dir: &str,
    artifact: Option<&str>,
) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "download".to_string(),
        run_id.to_string(),
        "--repo".to_string(),
        repo.full_name(),
        "--dir".to_string(),
        dir.to_string(),
    ];
    if let Some(name) = artifact {
        args.push("--name".to_string());
        args.push(name.to_string());
    }
    args
}

#[async_trait]
impl WorkflowClient for GhClient {
    async fn list_runs(&self, query: &RunQuery) -> Result<Vec<WorkflowRun>> {
        debug!("Listing up to {} runs for {}", query.limit, query);

        let stdout = self.runner.run(&run_list_args(query), None).await?;
        let runs: Vec<WorkflowRun> = serde_json::from_str(&stdout)?;

        info!("Found {} runs for {}", runs.len(), query);

        Ok(runs)
    }

    async fn download_run(
        &self,
        repo: &Repository,
        run_id: u64,
        dir: &Path,
        artifact: Option<&str>,
    ) -> Result<()> {
        let dir = dir
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid output directory path"))?;

        info!("Downloading artifacts of run {} from {}", run_id, repo);
        self.runner
            .run(&run_download_args(repo, run_id, dir, artifact), None)
            .await?;

        Ok(())
    }
}
