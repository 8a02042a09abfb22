//! dadamda-config - 配置加载库

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::Deserialize;
use thiserror::Error;

use secrecy::Secret;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

/// JWT 配置
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    /// 访问令牌有效期（秒）
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
    #[serde(default = "default_issuer")]
    pub issuer: String,
    #[serde(default = "default_audience")]
    pub audience: String,
}

fn default_expires_in() -> u64 {
    // 与登录会话保持一致: 1 天
    86400
}

fn default_issuer() -> String {
    "dadamda".to_string()
}

fn default_audience() -> String {
    "dadamda-web".to_string()
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 是否输出 JSON 日志，未设置时生产环境默认开启
    pub json_logs: Option<bool>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: None,
        }
    }
}

/// OAuth2 登录配置
#[derive(Debug, Clone, Deserialize)]
pub struct OAuth2Config {
    /// 登录成功后的前端跳转地址，令牌直接拼接在末尾
    pub login_redirect_url: String,
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    pub oauth2: OAuth2Config,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 优先级: 环境变量 > `{APP_ENV}.toml` > `default.toml`
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| default_app_env());
        Self::from_figment(Self::figment(config_dir, &env))
    }

    pub fn figment(config_dir: &str, env: &str) -> Figment {
        Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Serialized::default("app_env", env))
            .merge(Env::prefixed("APP_").split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }

    pub fn json_logs(&self) -> bool {
        self.telemetry.json_logs.unwrap_or_else(|| self.is_production())
    }
}

#[cfg(test)]
mod tests;
