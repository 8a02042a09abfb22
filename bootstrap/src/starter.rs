//! 服务启动器

use std::future::Future;

use axum::Router;
use axum::routing::get;
use dadamda_config::AppConfig;
use dadamda_errors::AppResult;
use dadamda_telemetry::init_metrics;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::infrastructure::Infrastructure;
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 1. 加载 `.env` 与配置
/// 2. 初始化日志与 Prometheus recorder
/// 3. 创建基础设施（带重试）
/// 4. 调用闭包构建业务路由
/// 5. 挂载 `/metrics` 与 TraceLayer，启动并等待关闭信号
///
/// ```ignore
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     dadamda_bootstrap::run_http("config", |infra| async move {
///         Ok(build_router(infra))
///     })
///     .await
/// }
/// ```
pub async fn run_http<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // .env 缺失不是错误
    let _ = dotenvy::dotenv();

    let config = AppConfig::load(config_dir)?;
    init_runtime(&config);
    info!("Starting {} service", config.app_name);

    let metrics_handle = init_metrics()?;
    let addr = config.server.bind_addr();

    let infra = Infrastructure::from_config(config).await?;
    let router = router_builder(infra)
        .await?
        .route(
            "/metrics",
            get(move || {
                let handle = metrics_handle.clone();
                async move { handle.render() }
            }),
        )
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "HTTP server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");
    Ok(())
}
