use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::warn;

use crate::{error::WebhookError, util::random::generate_30_alphanumeric};

/// Hidden file next to its destination, so the final rename never crosses
/// a filesystem boundary.
#[derive(Debug)]
pub struct StagingFile {
    path: PathBuf,
}

impl StagingFile {
    pub fn new_in(directory: &Path) -> StagingFile {
        StagingFile {
            path: directory.join(format!(".{}.tmp", generate_30_alphanumeric())),
        }
    }

    pub fn get_path(&self) -> &Path {
        &self.path
    }

    pub async fn persist(self, destination: &Path) -> Result<(), WebhookError> {
        if let Err(err) = fs::rename(&self.path, destination).await {
            self.clean_up().await;
            return Err(err.into());
        }
        Ok(())
    }

    pub async fn clean_up(&self) {
        if let Err(err) = fs::remove_file(&self.path).await {
            warn!("Error occured, while deleting staging file {}: {}", self.path.display(), &err)
        }
    }
}
