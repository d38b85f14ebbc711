use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Command failed (exit {code}): {command}\n\nOutput:\n{stderr}")]
    CommandFailed {
        code: i32,
        command: String,
        stderr: String,
    },

    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid repository '{0}': expected owner/name")]
    InvalidRepository(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
