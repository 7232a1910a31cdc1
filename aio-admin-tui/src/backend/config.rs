//! 配置服务
//!
//! 配置保存在 `<config_dir>/aio-admin-tui/config.json`，
//! 环境变量 `AIO_ADMIN_API` 可覆盖 API 地址。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// 覆盖 API 地址的环境变量
pub const API_ENV_VAR: &str = "AIO_ADMIN_API";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";

/// 配置读写错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 后端地址
    pub api_base_url: String,
    /// 语言代码（en / zh），未设置时使用默认语言
    pub language: Option<String>,
    /// 账户列表每页条数
    pub page_size: u32,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            language: None,
            page_size: 10,
            request_timeout_secs: 30,
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// 应用环境变量覆盖
    pub fn with_env_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.api_base_url = url;
        }
        self
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aio-admin-tui")
}

/// 基于 JSON 文件的配置服务
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认位置的配置文件
    pub fn default_location() -> Self {
        Self::new(get_config_dir().join("config.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// 加载配置，失败时回退到默认值
pub fn load_or_default(store: &dyn ConfigService) -> AppConfig {
    match store.load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {e}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigService::new(dir.path().join("config.json"));
        assert_eq!(store.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigService::new(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            language: Some("zh".into()),
            theme: Theme::Light,
            ..AppConfig::default()
        };
        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"language":"en"}"#).unwrap();
        let config = FileConfigService::new(&path).load().unwrap();
        assert_eq!(config.language.as_deref(), Some("en"));
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn invalid_file_falls_back_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        let store = FileConfigService::new(&path);
        assert!(matches!(store.load(), Err(ConfigError::Parse(_))));
        assert_eq!(load_or_default(&store), AppConfig::default());
    }

    #[test]
    fn env_override_ignores_blank_values() {
        let config = AppConfig::default().with_env_override(Some("  ".into()));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        let config = AppConfig::default().with_env_override(Some("https://admin.example".into()));
        assert_eq!(config.api_base_url, "https://admin.example");
    }
}
