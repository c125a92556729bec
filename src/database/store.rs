use std::path::PathBuf;

use log::{debug, info};
use tokio::{fs, sync::RwLock};

use crate::database::model::score::{NewScore, Score};
use crate::errors::StoreError;

/// Scores held in memory and mirrored to a single JSON file.
///
/// The file is the durable copy and is rewritten wholesale on every append.
/// Appends hold the write lock across id assignment and the rewrite, so two
/// appends in the same process never see the same last id. Memory only
/// changes after the rewrite succeeds, so a failed or cancelled append never
/// leaves memory ahead of the file.
pub struct ScoreStore {
    records: RwLock<Vec<Score>>,
    path: PathBuf,
}

impl ScoreStore {
    /// Reads `path` as a JSON array of scores. A missing or corrupt file is an
    /// error; there is no fallback to an empty store.
    pub async fn load<P: Into<PathBuf>>(path: P) -> Result<Self, StoreError> {
        let path = path.into();
        let bytes = fs::read(&path).await.map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let records: Vec<Score> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?;

        info!("Loaded {} scores from {}", records.len(), path.display());
        Ok(Self {
            records: RwLock::new(records),
            path,
        })
    }

    #[cfg(test)]
    fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// All scores in insertion order.
    pub async fn list(&self) -> Vec<Score> {
        self.records.read().await.clone()
    }

    /// Stores `new` under the id following the last record's and rewrites the file.
    pub async fn append(&self, new: NewScore) -> Result<Score, StoreError> {
        let score = new.score.ok_or(StoreError::MissingScore)?;

        let mut records = self.records.write().await;
        let last_id = records.last().ok_or(StoreError::EmptyStore)?.id;
        let id = last_id
            .checked_add(1)
            .ok_or(StoreError::IdOverflow(last_id))?;

        let record = Score { id, score };
        let mut next = records.clone();
        next.push(record.clone());

        self.save(&next).await?;
        *records = next;
        Ok(record)
    }

    async fn save(&self, records: &[Score]) -> Result<(), StoreError> {
        let data = serde_json::to_vec(records).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, data)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!("Wrote {} scores to {}", records.len(), self.path.display());
        Ok(())
    }
}
