use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

/// One training example: the prompt the model saw and the post-processed poem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub instruction: String,
    pub output: String,
}

/// Append-only JSONL writer.
///
/// The file is opened once and held for the whole run. Each record is written
/// as one complete UTF-8 line (non-ASCII kept literal) and flushed, so an
/// interrupted run leaves only whole records behind.
pub struct DatasetSink {
    file: File,
    path: PathBuf,
    written: usize,
}

impl DatasetSink {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .with_context(|| format!("Failed to open dataset file {}", path.display()))?;

        Ok(Self {
            file,
            path,
            written: 0,
        })
    }

    pub async fn append(&mut self, record: &DatasetRecord) -> Result<()> {
        let mut line = serde_json::to_string(record).context("Failed to serialize record")?;
        line.push('\n');

        self.file
            .write_all(line.as_bytes())
            .await
            .with_context(|| format!("Failed to append to {}", self.path.display()))?;
        self.file.flush().await?;
        self.written += 1;
        Ok(())
    }

    /// Records appended through this handle (not counting pre-existing lines).
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes and syncs the file, consuming the sink.
    pub async fn close(mut self) -> Result<()> {
        self.file.flush().await?;
        self.file
            .sync_all()
            .await
            .with_context(|| format!("Failed to sync {}", self.path.display()))?;
        Ok(())
    }
}
