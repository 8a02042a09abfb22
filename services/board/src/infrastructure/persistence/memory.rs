//! 内存仓储实现
//!
//! 与 PostgreSQL 实现遵循相同的过滤与排序规则，用于测试与本地运行

use std::collections::BTreeMap;

use async_trait::async_trait;
use dadamda_common::UserId;
use dadamda_domain_core::SoftDeletable;
use dadamda_errors::{AppError, AppResult};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Board, User};
use crate::domain::repositories::{BoardRepository, BoardSpec, UserRepository};
use crate::domain::value_objects::BoardId;

// ============================================================================
// BoardRepository 实现
// ============================================================================

#[derive(Default)]
pub struct InMemoryBoardRepository {
    boards: RwLock<BTreeMap<BoardId, Board>>,
}

impl InMemoryBoardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入已带 ID 的看板（用于预置数据）
    pub async fn insert(&self, board: Board) -> AppResult<BoardId> {
        let id = board
            .board_id()
            .ok_or_else(|| AppError::internal("Seeded board must carry an id"))?;
        self.boards.write().await.insert(id, board);
        Ok(id)
    }

    async fn find_active<P>(&self, predicate: P) -> Option<Board>
    where
        P: Fn(&Board) -> bool,
    {
        self.boards
            .read()
            .await
            .values()
            .filter(|board| board.is_active())
            .find(|board| predicate(board))
            .cloned()
    }
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn save(&self, board: &Board) -> AppResult<BoardId> {
        let mut boards = self.boards.write().await;
        let next = boards.keys().next_back().map_or(1, |id| id.0 + 1);
        let id = BoardId(next);
        boards.insert(id, board.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, board: &Board) -> AppResult<()> {
        let id = board
            .board_id()
            .ok_or_else(|| AppError::internal("Cannot update a board that was never saved"))?;

        let mut boards = self.boards.write().await;
        match boards.get_mut(&id) {
            Some(stored) => {
                *stored = board.clone();
                Ok(())
            }
            None => Err(AppError::not_found("Board not found")),
        }
    }

    async fn find_by_id(&self, id: BoardId) -> AppResult<Option<Board>> {
        Ok(self.boards.read().await.get(&id).cloned())
    }

    async fn find_by_owner_and_id(
        &self,
        user_id: UserId,
        id: BoardId,
    ) -> AppResult<Option<Board>> {
        Ok(self
            .find_active(|b| b.is_owned_by(user_id) && b.board_id() == Some(id))
            .await)
    }

    async fn find_by_owner_and_uuid(
        &self,
        user_id: UserId,
        uuid: Uuid,
    ) -> AppResult<Option<Board>> {
        Ok(self
            .find_active(|b| b.is_owned_by(user_id) && b.uuid() == uuid)
            .await)
    }

    async fn find_by_owner_and_title(
        &self,
        user_id: UserId,
        title: &str,
    ) -> AppResult<Option<Board>> {
        Ok(self
            .find_active(|b| b.is_owned_by(user_id) && b.title() == title)
            .await)
    }

    async fn find_page(&self, spec: &BoardSpec, offset: u64, limit: u64) -> AppResult<Vec<Board>> {
        let boards = self.boards.read().await;
        let mut matched: Vec<&Board> = boards.values().filter(|b| spec.matches(b)).collect();
        matched.sort_by(|a, b| BoardSpec::compare(a, b));

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count_by_owner(&self, user_id: UserId) -> AppResult<i64> {
        let count = self
            .boards
            .read()
            .await
            .values()
            .filter(|b| b.is_owned_by(user_id) && b.is_active())
            .count();
        Ok(count as i64)
    }

    async fn find_is_public_by_uuid(&self, user_id: UserId, uuid: Uuid) -> AppResult<Option<bool>> {
        Ok(self
            .find_by_owner_and_uuid(user_id, uuid)
            .await?
            .map(|b| b.is_public()))
    }

    async fn find_is_shared_by_uuid(&self, user_id: UserId, uuid: Uuid) -> AppResult<Option<bool>> {
        Ok(self
            .find_by_owner_and_uuid(user_id, uuid)
            .await?
            .map(|b| b.is_shared()))
    }
}

// ============================================================================
// UserRepository 实现
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.user_id().0, user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.is_active() && u.email() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id.0).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::Tag;

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let repo = InMemoryBoardRepository::new();
        let first = repo
            .save(&Board::new(UserId(1), Tag::LifeShopping, "a", ""))
            .await
            .unwrap();
        let second = repo
            .save(&Board::new(UserId(1), Tag::LifeShopping, "b", ""))
            .await
            .unwrap();

        assert_eq!(first, BoardId(1));
        assert_eq!(second, BoardId(2));
        assert_eq!(repo.count_by_owner(UserId(1)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_deleted_board_only_visible_by_id() {
        let repo = InMemoryBoardRepository::new();
        let id = repo
            .save(&Board::new(UserId(1), Tag::HobbyTravel, "trip", ""))
            .await
            .unwrap();

        let mut board = repo.find_by_id(id).await.unwrap().unwrap();
        board.delete();
        repo.update(&board).await.unwrap();

        assert!(repo.find_by_owner_and_id(UserId(1), id).await.unwrap().is_none());
        assert!(repo.find_by_id(id).await.unwrap().is_some());
        assert_eq!(repo.count_by_owner(UserId(1)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_by_owner_and_title_skips_deleted() {
        let repo = InMemoryBoardRepository::new();
        let id = repo
            .save(&Board::new(UserId(1), Tag::KnowledgeTrend, "reading", "books"))
            .await
            .unwrap();

        let found = repo
            .find_by_owner_and_title(UserId(1), "reading")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.board_id(), Some(id));
        assert_eq!(found.description(), "books");
        assert!(repo
            .find_by_owner_and_title(UserId(2), "reading")
            .await
            .unwrap()
            .is_none());

        let mut board = found;
        board.delete();
        repo.update(&board).await.unwrap();
        assert!(repo
            .find_by_owner_and_title(UserId(1), "reading")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_user_lookup_by_id_includes_deleted() {
        use chrono::Utc;
        use dadamda_common::AuditInfo;

        use crate::domain::enums::{Provider, Role};

        let repo = InMemoryUserRepository::new();
        repo.insert(User::from_parts(
            UserId(3),
            "left".to_string(),
            "left@naver.com".to_string(),
            None,
            Some(Provider::Kakao),
            Role::User,
            Some(Utc::now()),
            AuditInfo::new(),
        ))
        .await;

        let user = repo.find_by_id(UserId(3)).await.unwrap().unwrap();
        assert_eq!(user.email(), "left@naver.com");
        assert!(repo.find_active_by_email("left@naver.com").await.unwrap().is_none());
        assert!(repo.find_by_id(UserId(4)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_page_applies_offset_and_limit() {
        let repo = InMemoryBoardRepository::new();
        for title in ["a", "b", "c"] {
            repo.save(&Board::new(UserId(1), Tag::LifeShopping, title, ""))
                .await
                .unwrap();
        }

        let spec = BoardSpec::for_owner(UserId(1));
        let page = repo.find_page(&spec, 1, 5).await.unwrap();
        assert_eq!(page.len(), 2);
    }
}
