use runfetch_github::{Repository, RunQuery, DEFAULT_SEARCH_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything needed to fetch the latest successful run's artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchRequest {
    pub repo: Repository,
    pub workflow: String,
    pub out_dir: PathBuf,
    pub artifact: Option<String>,
    pub branch: Option<String>,
    pub event: Option<String>,
    pub search_limit: u32,
}

impl FetchRequest {
    pub fn new(repo: Repository, workflow: String, out_dir: PathBuf) -> Self {
        Self {
            repo,
            workflow,
            out_dir,
            artifact: None,
            branch: None,
            event: None,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_artifact(mut self, artifact: String) -> Self {
        self.artifact = Some(artifact);
        self
    }

    pub fn with_branch(mut self, branch: String) -> Self {
        self.branch = Some(branch);
        self
    }

    pub fn with_event(mut self, event: String) -> Self {
        self.event = Some(event);
        self
    }

    pub fn with_search_limit(mut self, search_limit: u32) -> Self {
        self.search_limit = search_limit;
        self
    }

    /// The run-list query this request translates to.
    pub fn query(&self) -> RunQuery {
        let mut query =
            RunQuery::new(self.repo.clone(), self.workflow.clone()).with_limit(self.search_limit);
        if let Some(branch) = &self.branch {
            query = query.with_branch(branch.clone());
        }
        if let Some(event) = &self.event {
            query = query.with_event(event.clone());
        }
        query
    }
}
