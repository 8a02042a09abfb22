//! 基础设施资源管理

use std::sync::Arc;
use std::time::Duration;

use dadamda_adapter_postgres::{PostgresConfig, create_pool};
use dadamda_auth_core::TokenService;
use dadamda_common::{RetryPolicy, retry_async};
use dadamda_config::AppConfig;
use dadamda_errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

/// 基础设施资源容器
///
/// 由 bootstrap 统一初始化后交给服务组装路由
#[derive(Clone)]
pub struct Infrastructure {
    config: AppConfig,
    postgres_pool: PgPool,
    token_service: Arc<TokenService>,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（数据库连接带重试）
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let retry_policy = RetryPolicy::default();

        let pg_config = PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections)
            .with_connect_timeout(Duration::from_secs(config.database.connect_timeout_secs));
        let postgres_pool = retry_async(&retry_policy, "postgres", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;

        let token_service = Arc::new(TokenService::new(
            config.jwt.secret.expose_secret(),
            config.jwt.expires_in as i64,
            config.jwt.issuer.clone(),
            config.jwt.audience.clone(),
        ));
        info!(issuer = %config.jwt.issuer, "Token service created");

        Ok(Self {
            config,
            postgres_pool,
            token_service,
        })
    }

    /// 获取应用配置
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    /// 获取 Token 服务
    pub fn token_service(&self) -> Arc<TokenService> {
        self.token_service.clone()
    }
}
