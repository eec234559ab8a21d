use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use usersearch_core::ResponsePolicy;
use usersearch_engine::{
    EngineSettings, SearchSettings, DEFAULT_PER_PAGE, DEFAULT_QUIET_PERIOD, GITHUB_API_BASE_URL,
};
use usersearch_logging::{search_info, search_warn};

const CONFIG_FILENAME: &str = "usersearch.ron";
const CONFIG_PATH_ENV: &str = "USERSEARCH_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub(crate) enum PolicySetting {
    #[default]
    LastSettledWins,
    LatestIssuedOnly,
}

/// Optional settings read from `usersearch.ron`. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub api_base_url: String,
    pub per_page: u32,
    pub debounce_ms: u64,
    pub response_policy: PolicySetting,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: GITHUB_API_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            debounce_ms: DEFAULT_QUIET_PERIOD.as_millis() as u64,
            response_policy: PolicySetting::default(),
            log_file: PathBuf::from("./usersearch.log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            search: SearchSettings {
                api_base_url: self.api_base_url.clone(),
                per_page: self.per_page.max(1),
                ..SearchSettings::default()
            },
            quiet_period: Duration::from_millis(self.debounce_ms),
        }
    }

    pub(crate) fn response_policy(&self) -> ResponsePolicy {
        match self.response_policy {
            PolicySetting::LastSettledWins => ResponsePolicy::LastSettledWins,
            PolicySetting::LatestIssuedOnly => ResponsePolicy::LatestIssuedOnly,
        }
    }
}

/// `$USERSEARCH_CONFIG` if set, otherwise `usersearch.ron` in the working directory.
pub(crate) fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

pub(crate) fn load_config(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            search_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            search_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            search_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}
