//! 用户仓储接口

use async_trait::async_trait;
use dadamda_common::UserId;
use dadamda_errors::AppResult;

use crate::domain::entities::User;

/// 用户仓储接口
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 根据邮箱查找未注销的用户
    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;
}
