use crate::request::FetchRequest;
use chrono::{DateTime, Utc};
use runfetch_github::WorkflowRun;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What was fetched: the selected run's metadata plus the extracted entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    pub repo: String,
    pub workflow: String,
    pub run_id: u64,
    pub run_url: String,
    pub run_title: String,
    pub run_branch: String,
    pub run_event: String,
    pub run_status: String,
    pub run_conclusion: Option<String>,
    pub created_at: DateTime<Utc>,
    pub extracted_files: Vec<PathBuf>,
}

impl FetchResult {
    pub fn new(request: &FetchRequest, run: &WorkflowRun, extracted_files: Vec<PathBuf>) -> Self {
        Self {
            repo: request.repo.full_name(),
            workflow: request.workflow.clone(),
            run_id: run.database_id,
            run_url: run.url.clone(),
            run_title: run.display_title.clone(),
            run_branch: run.head_branch.clone(),
            run_event: run.event.clone(),
            run_status: run.status.clone(),
            run_conclusion: run.conclusion.clone(),
            created_at: run.created_at,
            extracted_files,
        }
    }
}
