use crate::adapters::memory::StoreState;
use crate::core::{NewQuestion, Question, QuestionStore};
use crate::domain::model::{ChoiceId, QuestionId};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tokio::sync::Mutex;

type PathLocks = parking_lot::Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>;

/// One lock per data file, shared by every `FileStore` in the process.
fn lock_for(path: &Path) -> Arc<Mutex<()>> {
    static LOCKS: OnceLock<PathLocks> = OnceLock::new();

    let key = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    LOCKS
        .get_or_init(Default::default)
        .lock()
        .entry(key)
        .or_default()
        .clone()
}

/// Keeps every question in one pretty-printed JSON document.
///
/// Each operation re-reads the file under a per-path lock, so several
/// `FileStore`s pointing at the same path within one process observe each
/// other's writes. Saves go through a temp file and a rename, so readers never
/// see a half-written document. A missing file reads as empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock = lock_for(&path);
        Self { path, lock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<StoreState> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No data file at {}, starting empty", self.path.display());
                Ok(StoreState::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "polls.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
    }

    async fn save(&self, state: &StoreState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let data = serde_json::to_vec_pretty(state)?;
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, data).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        tracing::debug!(
            "Saved {} question(s) to {}",
            state.questions.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl QuestionStore for FileStore {
    async fn create(&self, question: NewQuestion) -> Result<Question> {
        let _guard = self.lock.lock().await;
        let mut state = self.load().await?;
        let created = state.insert(question);
        self.save(&state).await?;
        Ok(created)
    }

    async fn all(&self) -> Result<Vec<Question>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.questions)
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.get(id).cloned())
    }

    async fn record_vote(&self, id: QuestionId, choice_id: ChoiceId) -> Result<Question> {
        let _guard = self.lock.lock().await;
        let mut state = self.load().await?;
        let updated = state.vote(id, choice_id)?;
        self.save(&state).await?;
        Ok(updated)
    }
}
