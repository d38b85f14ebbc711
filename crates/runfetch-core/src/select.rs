use runfetch_github::WorkflowRun;

/// First run whose conclusion is "success", in the order given (newest first).
pub fn first_successful(runs: &[WorkflowRun]) -> Option<&WorkflowRun> {
    runs.iter().find(|run| run.is_successful())
}
