//! 路由共享状态

use std::sync::Arc;

use dadamda_auth_core::TokenService;
use sqlx::PgPool;

use crate::application::BoardService;

use super::oauth2::OAuth2SuccessHandler;

#[derive(Clone)]
pub struct AppState {
    pub board_service: Arc<BoardService>,
    pub token_service: Arc<TokenService>,
    pub oauth2: Arc<OAuth2SuccessHandler>,
    /// 就绪检查使用的连接池，内存存储时为空
    pub db: Option<PgPool>,
}

impl AppState {
    pub fn new(
        board_service: Arc<BoardService>,
        token_service: Arc<TokenService>,
        login_redirect_url: impl Into<String>,
    ) -> Self {
        let oauth2 = Arc::new(OAuth2SuccessHandler::new(
            token_service.clone(),
            login_redirect_url,
        ));
        Self {
            board_service,
            token_service,
            oauth2,
            db: None,
        }
    }

    pub fn with_db(mut self, pool: PgPool) -> Self {
        self.db = Some(pool);
        self
    }
}
