pub mod client;
pub mod gh;
pub mod repository;
pub mod runner;
pub mod workflow;
pub mod error;

// Re-exports
pub use client::{RunQuery, WorkflowClient, DEFAULT_SEARCH_LIMIT};
pub use error::{Error, Result};
pub use gh::GhClient;
pub use repository::Repository;
pub use runner::CommandRunner;
pub use workflow::WorkflowRun;
