use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_VERSION: u32 = 1;

/// Author used for discussion messages when nothing else is configured.
pub const DEFAULT_AUTHOR: &str = "Current User";

/// Environment variable overriding the configured author.
pub const AUTHOR_ENV: &str = "QUORUM_AUTHOR_NAME";

/// Contents of `.quorum/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkspaceConfig {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub author: Option<String>,
}

impl WorkspaceConfig {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            version: CONFIG_VERSION,
            created_at,
            author: None,
        }
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Pick the discussion author: explicit flag, then environment, then
    /// config, then [`DEFAULT_AUTHOR`]. Blank values are skipped.
    pub fn resolve_author(&self, explicit: Option<String>, env: Option<String>) -> String {
        [explicit, env, self.author.clone()]
            .into_iter()
            .flatten()
            .find(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = WorkspaceConfig::new(Utc::now());
        config.author = Some("Dana".into());
        config.save(&path).unwrap();
        assert_eq!(WorkspaceConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn author_missing_from_file_defaults_to_none() {
        let config: WorkspaceConfig =
            serde_json::from_str(r#"{"version":1,"created_at":"2024-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(config.author, None);
    }

    #[test]
    fn author_precedence() {
        let mut config = WorkspaceConfig::new(Utc::now());
        assert_eq!(config.resolve_author(None, None), DEFAULT_AUTHOR);

        config.author = Some("Config".into());
        assert_eq!(config.resolve_author(None, None), "Config");
        assert_eq!(config.resolve_author(None, Some("Env".into())), "Env");
        assert_eq!(
            config.resolve_author(Some("Flag".into()), Some("Env".into())),
            "Flag"
        );
        assert_eq!(config.resolve_author(Some("  ".into()), None), "Config");
    }
}
