use crate::config::WorkspaceConfig;
use crate::decision_store::DecisionStore;
use crate::error::StoreError;
use crate::storage::FileStorage;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

const QUORUM_DIR: &str = ".quorum";
const CONFIG_FILE: &str = "config.json";

/// A directory holding a `.quorum/` workspace.
///
/// Layout:
/// - `.quorum/config.json`    : [`WorkspaceConfig`]
/// - `.quorum/decisions.json` : the decision collection
pub struct Workspace {
    root: PathBuf,
    pub config: WorkspaceConfig,
    pub decisions: DecisionStore<FileStorage>,
}

impl Workspace {
    /// Create a workspace at `path` and seed its decisions.
    pub fn init(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = path.as_ref().to_path_buf();
        let quorum_dir = root.join(QUORUM_DIR);

        if quorum_dir.exists() {
            return Err(StoreError::WorkspaceExists(
                quorum_dir.display().to_string(),
            ));
        }

        fs::create_dir_all(&quorum_dir)?;
        let config = WorkspaceConfig::new(Utc::now());
        config.save(&quorum_dir.join(CONFIG_FILE))?;

        let decisions = DecisionStore::open(FileStorage::new(&quorum_dir))?;
        tracing::info!(root = %root.display(), "initialized workspace");
        Ok(Self {
            root,
            config,
            decisions,
        })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = path.as_ref().to_path_buf();
        let quorum_dir = root.join(QUORUM_DIR);

        if !quorum_dir.is_dir() {
            return Err(StoreError::WorkspaceNotFound(root.display().to_string()));
        }

        let config = WorkspaceConfig::load(&quorum_dir.join(CONFIG_FILE))?;
        let decisions = DecisionStore::open(FileStorage::new(&quorum_dir))?;
        Ok(Self {
            root,
            config,
            decisions,
        })
    }

    /// Search upward from `start` for a `.quorum/` directory and open it.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self, StoreError> {
        let mut current = start.as_ref().to_path_buf();
        loop {
            if current.join(QUORUM_DIR).is_dir() {
                tracing::debug!(root = %current.display(), "discovered workspace");
                return Self::open(&current);
            }
            if !current.pop() {
                return Err(StoreError::WorkspaceNotFound(
                    start.as_ref().display().to_string(),
                ));
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn quorum_dir(&self) -> PathBuf {
        self.root.join(QUORUM_DIR)
    }
}
