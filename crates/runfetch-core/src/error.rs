use runfetch_github::RunQuery;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No runs found for {query}")]
    NoRunsFound { query: RunQuery },

    #[error(
        "No successful runs found in the latest {limit} runs for {query}. Try increasing the search limit."
    )]
    NoSuccessfulRunFound { query: RunQuery, limit: u32 },

    #[error("GitHub error: {0}")]
    GitHub(#[from] runfetch_github::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
