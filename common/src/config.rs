use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Endpoint used when no configuration file or flag overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/evaluate";

/// Evaluator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub endpoint: String,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl EvaluatorConfig {
    /// Get config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?
            .join("venture");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir.join("config.json"))
    }

    /// Load configuration from the user config file; defaults when absent.
    pub async fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?).await
    }

    pub async fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = tokio::fs::read_to_string(path).await?;
            let config: EvaluatorConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the user config file.
    pub async fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?).await
    }

    pub async fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_local_evaluator() {
        assert_eq!(
            EvaluatorConfig::default().endpoint,
            "http://127.0.0.1:8000/evaluate"
        );
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EvaluatorConfig::load_from(&dir.path().join("config.json"))
            .await
            .unwrap();
        assert_eq!(config, EvaluatorConfig::default());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = EvaluatorConfig {
            endpoint: "http://10.0.0.5:9000/evaluate".to_string(),
        };
        config.save_to(&path).await.unwrap();
        let loaded = EvaluatorConfig::load_from(&path).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        tokio::fs::write(&path, "not json").await.unwrap();
        assert!(EvaluatorConfig::load_from(&path).await.is_err());
    }
}
