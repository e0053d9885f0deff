use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("core error: {0}")]
    Core(#[from] quorum_core::error::CoreError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("workspace not found (searched upward from {0})")]
    WorkspaceNotFound(String),

    #[error("workspace already exists at {0}")]
    WorkspaceExists(String),

    #[error("lock file conflict: {0}")]
    LockConflict(String),

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}
