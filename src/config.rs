use crate::error::{AtsError, Result};
use ats_score_common::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ベースURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "ATS_SCORE_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    /// 送信前にヘルスチェックを行う
    pub check_health: bool,
    /// 対話モードで見出しアニメーションを表示
    pub animate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            check_health: false,
            animate: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AtsError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ats-score").join("config.json"))
    }

    /// 実際に使うベースURL（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> Result<String> {
        let env_value = std::env::var(BASE_URL_ENV).ok();
        let url = cli_override
            .map(str::to_string)
            .or(env_value.filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| self.base_url.clone());
        validate_base_url(&url)?;
        Ok(url.trim_end_matches('/').to_string())
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        validate_base_url(&url)?;
        self.base_url = url.trim_end_matches('/').to_string();
        self.save()
    }
}

fn validate_base_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(AtsError::Config(format!(
            "ベースURLは http:// または https:// で始まる必要があります: {}",
            url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(!config.check_health);
        assert!(config.animate);
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            base_url: "https://ats.example.com".into(),
            check_health: true,
            animate: false,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"check_health": true}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.check_health);
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_cli_override_wins_and_is_trimmed() {
        let config = Config::default();
        let url = config.resolve_base_url(Some("http://127.0.0.1:9000/")).unwrap();
        assert_eq!(url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = Config::default();
        let err = config.resolve_base_url(Some("localhost:8080")).unwrap_err();
        assert!(matches!(err, AtsError::Config(_)));
    }
}
