use crate::error::{Error, Result};
use crate::request::FetchRequest;
use crate::result::FetchResult;
use crate::select;
use runfetch_github::WorkflowClient;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Drives the fetch pipeline: list recent runs, pick the latest successful
/// one, download its artifact(s) into a clean directory.
pub struct ArtifactFetcher<C> {
    client: C,
}

impl<C: WorkflowClient> ArtifactFetcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, request: &FetchRequest) -> Result<FetchResult> {
        let query = request.query();

        let runs = self.client.list_runs(&query).await?;
        if runs.is_empty() {
            return Err(Error::NoRunsFound { query });
        }

        let run = match select::first_successful(&runs) {
            Some(run) => run,
            None => {
                return Err(Error::NoSuccessfulRunFound {
                    limit: query.limit,
                    query,
                })
            }
        };

        info!(
            "Selected run {} ('{}', created {})",
            run.database_id, run.display_title, run.created_at
        );

        let out_dir = prepare_output_dir(&request.out_dir).await?;
        self.client
            .download_run(
                &request.repo,
                run.database_id,
                &out_dir,
                request.artifact.as_deref(),
            )
            .await?;

        let extracted_files = list_extracted_files(&out_dir).await?;
        info!(
            "Extracted {} entries into {}",
            extracted_files.len(),
            out_dir.display()
        );

        Ok(FetchResult::new(request, run, extracted_files))
    }
}

/// Recreate the output directory empty, then canonicalize it so the manifest
/// carries absolute paths.
async fn prepare_output_dir(path: &Path) -> Result<PathBuf> {
    if fs::metadata(path).await.is_ok() {
        fs::remove_dir_all(path).await?;
    }
    fs::create_dir_all(path).await?;

    Ok(fs::canonicalize(path).await?)
}

/// Top-level entries of the output directory, hidden ones excluded, sorted.
async fn list_extracted_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        files.push(entry.path());
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prepare_output_dir_clears_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("artifacts");
        std::fs::create_dir_all(&out_dir).unwrap();
        std::fs::write(out_dir.join("stale.txt"), "old").unwrap();

        let prepared = prepare_output_dir(&out_dir).await.unwrap();

        assert!(prepared.is_absolute());
        assert!(!prepared.join("stale.txt").exists());
        assert_eq!(std::fs::read_dir(&prepared).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_prepare_output_dir_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("nested").join("artifacts");

        let prepared = prepare_output_dir(&out_dir).await.unwrap();

        assert!(prepared.exists());
    }

    #[tokio::test]
    async fn test_list_extracted_files_skips_hidden_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join(".hidden"), "x").unwrap();

        let files = list_extracted_files(dir.path()).await.unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "nested"]);
    }
}
