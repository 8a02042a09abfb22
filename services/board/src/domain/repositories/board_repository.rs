//! 看板仓储接口

use async_trait::async_trait;
use dadamda_common::UserId;
use dadamda_errors::AppResult;
use uuid::Uuid;

use crate::domain::entities::Board;
use crate::domain::repositories::BoardSpec;
use crate::domain::value_objects::BoardId;

/// 看板仓储接口
///
/// 除 `find_by_id` 外，所有按用户限定的查询都排除已删除的看板
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// 保存新看板，返回存储分配的 ID
    async fn save(&self, board: &Board) -> AppResult<BoardId>;

    /// 更新已保存的看板
    async fn update(&self, board: &Board) -> AppResult<()>;

    /// 根据 ID 查找（包含已删除）
    async fn find_by_id(&self, id: BoardId) -> AppResult<Option<Board>>;

    async fn find_by_owner_and_id(
        &self,
        user_id: UserId,
        id: BoardId,
    ) -> AppResult<Option<Board>>;

    async fn find_by_owner_and_uuid(
        &self,
        user_id: UserId,
        uuid: Uuid,
    ) -> AppResult<Option<Board>>;

    async fn find_by_owner_and_title(
        &self,
        user_id: UserId,
        title: &str,
    ) -> AppResult<Option<Board>>;

    /// 按规格过滤并排序，返回 `[offset, offset + limit)` 区间
    async fn find_page(&self, spec: &BoardSpec, offset: u64, limit: u64) -> AppResult<Vec<Board>>;

    /// 统计用户未删除的看板数量
    async fn count_by_owner(&self, user_id: UserId) -> AppResult<i64>;

    async fn find_is_public_by_uuid(&self, user_id: UserId, uuid: Uuid) -> AppResult<Option<bool>>;

    async fn find_is_shared_by_uuid(&self, user_id: UserId, uuid: Uuid) -> AppResult<Option<bool>>;
}
