use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_save_dir")]
    pub save_dir: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// 설정 파일을 읽는다. 파일이 없으면 기본값을 사용한다.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = config_path.unwrap_or_else(|| Path::new("config.toml"));
        if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("설정 파일 읽기 실패: {}", path.display()))?;
            return Self::parse(&raw)
                .with_context(|| format!("설정 파일 파싱 실패: {}", path.display()));
        }
        Ok(AppConfig::default())
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            save_dir: default_save_dir(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            log_level: default_log_level(),
        }
    }
}

fn default_api_url() -> String {
    "https://moeuigo-api.vercel.app/api/download".to_string()
}

fn default_save_dir() -> String {
    "downloads".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("mock_exam_downloader/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
