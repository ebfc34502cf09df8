//! Append-only posting history.

use chrono::{DateTime, Utc};
use chronicle_core::PostRecord;
use chronicle_error::{ChronicleResult, JsonError, StorageError, StorageErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Persistence seam for posting history.
///
/// The workflow driver only talks to this trait, so the flat-file backend can
/// later be swapped for a proper datastore without touching workflow logic.
#[async_trait::async_trait]
pub trait HistoryStore: Send + Sync {
    /// All records, oldest first.
    async fn records(&self) -> ChronicleResult<Vec<PostRecord>>;

    /// Append one record. Fails on a duplicate day or a write error; exactly
    /// one append happens per successful publish.
    async fn append(&self, record: PostRecord) -> ChronicleResult<()>;

    /// The set of days that have a record.
    async fn posted_days(&self) -> ChronicleResult<BTreeSet<u32>> {
        Ok(self.records().await?.iter().map(|r| r.day).collect())
    }

    /// The most recent `count` records, oldest of them first.
    async fn recent(&self, count: usize) -> ChronicleResult<Vec<PostRecord>> {
        let records = self.records().await?;
        let skip = records.len().saturating_sub(count);
        Ok(records.into_iter().skip(skip).collect())
    }
}

/// On-disk shape of the history file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryFile {
    posted: Vec<PostRecord>,
    last_updated: Option<DateTime<Utc>>,
    total_posts: usize,
}

/// Flat-file history store backed by a single JSON document.
///
/// Every query rereads the file, so derived state (the next unposted day)
/// always reflects what is actually persisted. Writes go to a temp file
/// first, then rename, so a crash mid-write cannot corrupt existing history.
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    /// Create a store at the given path, creating the parent directory and
    /// an empty history file if none exists.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub async fn new(path: impl AsRef<Path>) -> ChronicleResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let store = Self { path };

        if !tokio::fs::try_exists(&store.path).await.unwrap_or(false) {
            store.write_file(&HistoryFile::default()).await?;
            tracing::info!(path = %store.path.display(), "Created empty history file");
        }

        Ok(store)
    }

    async fn read_file(&self) -> ChronicleResult<HistoryFile> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        let file = serde_json::from_str(&raw)
            .map_err(|e| StorageError::new(StorageErrorKind::Malformed(e.to_string())))?;
        Ok(file)
    }

    async fn write_file(&self, file: &HistoryFile) -> ChronicleResult<()> {
        let raw =
            serde_json::to_string_pretty(file).map_err(|e| JsonError::new(e.to_string()))?;

        // Temp file + rename keeps the previous history intact on a failed write.
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, raw).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Persistence(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Persistence(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl HistoryStore for JsonHistoryStore {
    #[tracing::instrument(skip(self))]
    async fn records(&self) -> ChronicleResult<Vec<PostRecord>> {
        Ok(self.read_file().await?.posted)
    }

    #[tracing::instrument(skip(self, record), fields(day = record.day))]
    async fn append(&self, record: PostRecord) -> ChronicleResult<()> {
        let mut file = self.read_file().await?;

        if file.posted.iter().any(|r| r.day == record.day) {
            return Err(StorageError::new(StorageErrorKind::DuplicateDay(record.day)).into());
        }

        let day = record.day;
        file.posted.push(record);
        file.total_posts = file.posted.len();
        file.last_updated = Some(Utc::now());

        self.write_file(&file).await?;

        tracing::info!(day, total = file.total_posts, "Recorded post");
        Ok(())
    }
}
