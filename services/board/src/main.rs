//! Board Service - 看板服务入口
//!
//! 使用 dadamda-bootstrap 统一启动模式

use std::sync::Arc;

use dadamda_adapter_postgres::MigrationManager;
use dadamda_board::api::{AppState, router};
use dadamda_board::application::BoardService;
use dadamda_board::infrastructure::persistence::{
    PostgresBoardRepository, PostgresUserRepository, migrations,
};
use dadamda_bootstrap::{Infrastructure, run_http};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_http("config", |infra: Infrastructure| async move {
        let pool = infra.postgres_pool();

        let applied = MigrationManager::new(pool.clone())
            .migrate(&migrations())
            .await?;
        info!(count = applied.len(), "Migrations applied");

        let board_repo = Arc::new(PostgresBoardRepository::new(pool.clone()));
        let user_repo = Arc::new(PostgresUserRepository::new(pool.clone()));
        let board_service = Arc::new(BoardService::new(board_repo, user_repo));

        let state = AppState::new(
            board_service,
            infra.token_service(),
            infra.config().oauth2.login_redirect_url.clone(),
        )
        .with_db(pool);

        Ok(router(state))
    })
    .await
}
