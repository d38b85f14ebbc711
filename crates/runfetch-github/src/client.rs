use crate::error::Result;
use crate::repository::Repository;
use crate::workflow::WorkflowRun;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How many recent runs are scanned for a successful one by default.
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

/// Parameters of a run-list query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunQuery {
    pub repo: Repository,
    pub workflow: String,
    pub branch: Option<String>,
    pub event: Option<String>,
    pub limit: u32,
}

impl RunQuery {
    pub fn new(repo: Repository, workflow: String) -> Self {
        Self {
            repo,
            workflow,
            branch: None,
            event: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_branch(mut self, branch: String) -> Self {
        self.branch = Some(branch);
        self
    }

    pub fn with_event(mut self, event: String) -> Self {
        self.event = Some(event);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl std::fmt::Display for RunQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "workflow '{}' in repo '{}'", self.workflow, self.repo)?;
        if let Some(branch) = &self.branch {
            write!(f, " on branch '{}'", branch)?;
        }
        if let Some(event) = &self.event {
            write!(f, " with event '{}'", event)?;
        }
        Ok(())
    }
}

/// The two operations the artifact pipeline needs from GitHub.
#[async_trait]
pub trait WorkflowClient: Send + Sync {
    /// List recent runs of a workflow, newest first.
    async fn list_runs(&self, query: &RunQuery) -> Result<Vec<WorkflowRun>>;

    /// Download the artifact(s) of a run into a directory.
    async fn download_run(
        &self,
        repo: &Repository,
        run_id: u64,
        dir: &Path,
        artifact: Option<&str>,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> RunQuery {
        RunQuery::new(
            Repository::new("myorg".to_string(), "myrepo".to_string()),
            "backup.yaml".to_string(),
        )
    }

    #[test]
    fn test_query_defaults() {
        let query = query();

        assert_eq!(query.limit, DEFAULT_SEARCH_LIMIT);
        assert!(query.branch.is_none());
        assert!(query.event.is_none());
    }

    #[test]
    fn test_query_display_names_all_filters() {
        let query = query()
            .with_branch("master".to_string())
            .with_event("schedule".to_string());

        assert_eq!(
            query.to_string(),
            "workflow 'backup.yaml' in repo 'myorg/myrepo' on branch 'master' with event 'schedule'"
        );
    }

    #[test]
    fn test_query_display_without_filters() {
        assert_eq!(
            query().to_string(),
            "workflow 'backup.yaml' in repo 'myorg/myrepo'"
        );
    }
}
