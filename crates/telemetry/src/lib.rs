//! dadamda-telemetry - 可观测性库

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Failed to install Prometheus recorder: {0}")]
    Metrics(String),
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// 初始化 tracing
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// 初始化 JSON 格式的 tracing（生产环境）
pub fn init_tracing_json(log_level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}

/// 初始化 Prometheus metrics
pub fn init_metrics() -> Result<PrometheusHandle, TelemetryError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| TelemetryError::Metrics(e.to_string()))
}

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub healthy: bool,
    pub checks: Vec<HealthCheck>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn new() -> Self {
        Self {
            healthy: true,
            checks: Vec::new(),
        }
    }

    pub fn add_check(&mut self, name: impl Into<String>, healthy: bool, message: Option<String>) {
        if !healthy {
            self.healthy = false;
        }
        self.checks.push(HealthCheck {
            name: name.into(),
            healthy,
            message,
        });
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_check_marks_unhealthy() {
        let mut status = HealthStatus::new();
        status.add_check("database", true, None);
        assert!(status.healthy);

        status.add_check("database", false, Some("pool timed out".to_string()));
        assert!(!status.healthy);
        assert_eq!(status.checks.len(), 2);
    }
}
