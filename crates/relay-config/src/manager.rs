use crate::config::{Config, ConfigError, ConfigResult};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::info;

/// 配置管理器
///
/// Config is read once at startup; there is no reload.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: Option<PathBuf>,
    config: Config,
}

impl ConfigManager {
    /// 加载配置文件（文件必须存在）
    pub async fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::InvalidPath(format!(
                "Config file not found: {:?}",
                path
            )));
        }

        info!("Loading config from {:?}", path);
        let content = tokio::fs::read_to_string(path).await?;
        let content = Self::expand_env_vars(&content)?;
        let config: Config = serde_json::from_str(&content)?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            config,
        })
    }

    /// 从默认位置加载配置，文件不存在时使用默认值
    pub async fn load_default() -> ConfigResult<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load(&config_path).await
        } else {
            info!("No config file at {:?}, using defaults", config_path);
            Ok(Self::new(Config::default()))
        }
    }

    /// 获取默认配置路径 (~/.relay/config.json)
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        crate::default_config_path()
            .ok_or_else(|| ConfigError::InvalidPath("Could not find home directory".to_string()))
    }

    /// 使用内存中的配置创建（用于测试）
    pub fn new(config: Config) -> Self {
        Self { path: None, config }
    }

    pub fn get(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    /// 配置文件路径（使用默认值时为 None）
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 验证配置
    pub fn validate(config: &Config) -> ConfigResult<()> {
        if config.server.port == 0 {
            return Err(ConfigError::Validation(
                "Server port cannot be 0".to_string(),
            ));
        }

        if config.server.max_body_bytes == 0 {
            return Err(ConfigError::Validation(
                "Server max_body_bytes must be greater than 0".to_string(),
            ));
        }

        let url = config.upstream.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "Upstream url must be an http(s) URL, got '{}'",
                config.upstream.url
            )));
        }

        if config.upstream.model.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Upstream model cannot be empty".to_string(),
            ));
        }

        if config.upstream.timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout_seconds must be greater than 0".to_string(),
            ));
        }

        match config.upstream.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {}
            _ => {
                return Err(ConfigError::Validation(
                    "Upstream api_key is not set (use --api-key, RELAY_API_KEY or upstream.api_key)"
                        .to_string(),
                ))
            }
        }

        Ok(())
    }

    /// 展开环境变量 ${VAR} 或 ${VAR:-default}
    ///
    /// Values taken from the environment are JSON-escaped so they always land
    /// inside the surrounding string literal. Defaults are copied as written.
    fn expand_env_vars(content: &str) -> ConfigResult<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        let mut result = String::with_capacity(content.len());
        let mut last = 0;

        for cap in re.captures_iter(content) {
            let Some(full_match) = cap.get(0) else { continue };
            let var_expr = &cap[1];

            // 处理 ${VAR:-default} 语法
            let (var_name, default_value) = match var_expr.split_once(":-") {
                Some((name, default)) => (name, Some(default)),
                None => (var_expr, None),
            };

            let replacement = match std::env::var(var_name) {
                Ok(val) => Self::escape_json_str(&val)?,
                Err(_) => match default_value {
                    Some(default) => default.to_string(),
                    None => return Err(ConfigError::EnvVarNotFound(var_name.to_string())),
                },
            };

            result.push_str(&content[last..full_match.start()]);
            result.push_str(&replacement);
            last = full_match.end();
        }

        result.push_str(&content[last..]);
        Ok(result)
    }

    /// JSON-escape a string without the surrounding quotes
    fn escape_json_str(value: &str) -> ConfigResult<String> {
        let quoted = serde_json::to_string(value)?;
        Ok(quoted[1..quoted.len() - 1].to_string())
    }
}
