use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One workflow run as reported by `gh run list --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRun {
    pub database_id: u64,
    pub head_branch: String,
    pub event: String,
    pub status: String,
    pub conclusion: Option<String>,
    pub created_at: DateTime<Utc>,
    pub display_title: String,
    pub url: String,
}

impl WorkflowRun {
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }

    pub fn is_successful(&self) -> bool {
        self.conclusion.as_ref().map_or(false, |c| c == "success")
    }
}
