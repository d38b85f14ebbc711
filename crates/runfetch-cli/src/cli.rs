use clap::Parser;
use runfetch_github::DEFAULT_SEARCH_LIMIT;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "runfetch")]
#[command(
    about = "Download artifacts from the latest successful GitHub Actions run",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Repository in owner/name form
    #[arg(long)]
    pub repo: String,

    /// Workflow name or file name (e.g. backup.yaml)
    #[arg(long)]
    pub workflow: String,

    /// Directory the artifact(s) are extracted into
    #[arg(long, default_value = "./artifacts")]
    pub out_dir: PathBuf,

    /// Only download the artifact with this name
    #[arg(long)]
    pub artifact: Option<String>,

    /// Only consider runs on this branch
    #[arg(long)]
    pub branch: Option<String>,

    /// Only consider runs triggered by this event (push, schedule, ...)
    #[arg(long)]
    pub event: Option<String>,

    /// How many recent runs to scan for a successful one
    #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub limit: u32,

    /// Path to the gh binary
    #[arg(long, env = "RUNFETCH_GH_BIN", default_value = "gh")]
    pub gh_bin: String,

    /// Print the result as pretty JSON
    #[arg(long)]
    pub json: bool,
}
