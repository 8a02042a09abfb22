//! 看板业务处理
//!
//! 所有操作都以调用方邮箱解析出的用户为准，访问他人看板与看板不存在一样返回 NotFound

use std::sync::Arc;

use dadamda_common::{PageRequest, Slice};
use dadamda_errors::{AppError, AppResult};
use metrics::counter;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::{Board, User};
use crate::domain::enums::Tag;
use crate::domain::repositories::{BoardRepository, BoardSpec, UserRepository};
use crate::domain::value_objects::BoardId;

use super::commands::*;
use super::dto::*;
use super::queries::{ensure_valid_keyword, ensure_valid_page};

fn record_mutation(operation: &'static str) {
    counter!("board_mutations_total", "operation" => operation).increment(1);
}

pub struct BoardService {
    board_repo: Arc<dyn BoardRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl BoardService {
    pub fn new(board_repo: Arc<dyn BoardRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            board_repo,
            user_repo,
        }
    }

    async fn resolve_user(&self, email: &str) -> AppResult<User> {
        self.user_repo
            .find_active_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!(email, "User not found");
                AppError::not_found("User not found")
            })
    }

    async fn load_board(&self, user: &User, board_id: BoardId) -> AppResult<Board> {
        self.board_repo
            .find_by_owner_and_id(user.user_id(), board_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.user_id(), %board_id, "Board not found");
                AppError::not_found("Board not found")
            })
    }

    async fn load_board_by_uuid(&self, user: &User, board_uuid: Uuid) -> AppResult<Board> {
        self.board_repo
            .find_by_owner_and_uuid(user.user_id(), board_uuid)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.user_id(), %board_uuid, "Board not found");
                AppError::not_found("Board not found")
            })
    }

    async fn find_slice(&self, spec: BoardSpec, page: PageRequest) -> AppResult<Slice<BoardView>> {
        let rows = self
            .board_repo
            .find_page(&spec, page.offset(), page.fetch_limit())
            .await?;

        Ok(Slice::from_overfetch(rows, &page).map(|board| BoardView::from(&board)))
    }

    // ========== 创建与查询 ==========

    /// 创建看板
    pub async fn create_board(&self, email: &str, cmd: CreateBoardCommand) -> AppResult<BoardId> {
        info!(email, tag = %cmd.tag, "Creating board");

        let user = self.resolve_user(email).await?;
        cmd.validate()?;
        let tag = Tag::from_code(&cmd.tag)?;

        let board = Board::new(user.user_id(), tag, cmd.title, cmd.description);
        let board_id = self.board_repo.save(&board).await?;
        record_mutation("create");

        info!(user_id = %user.user_id(), %board_id, uuid = %board.uuid(), "Board created");
        Ok(board_id)
    }

    /// 获取看板
    pub async fn get_board(&self, email: &str, board_id: BoardId) -> AppResult<BoardView> {
        let user = self.resolve_user(email).await?;
        let board = self.load_board(&user, board_id).await?;
        Ok(BoardView::from(&board))
    }

    /// 统计未删除的看板数量
    pub async fn get_board_count(&self, email: &str) -> AppResult<i64> {
        let user = self.resolve_user(email).await?;
        self.board_repo.count_by_owner(user.user_id()).await
    }

    /// 获取看板内容，未设置时为 None
    pub async fn get_board_contents(
        &self,
        email: &str,
        board_uuid: Uuid,
    ) -> AppResult<BoardContentsView> {
        let user = self.resolve_user(email).await?;
        let board = self.load_board_by_uuid(&user, board_uuid).await?;
        Ok(BoardContentsView {
            contents: board.contents().map(str::to_string),
        })
    }

    /// 获取看板公开/共享状态
    pub async fn get_board_visibility(
        &self,
        email: &str,
        board_uuid: Uuid,
    ) -> AppResult<BoardVisibility> {
        let user = self.resolve_user(email).await?;
        let user_id = user.user_id();

        let is_public = self
            .board_repo
            .find_is_public_by_uuid(user_id, board_uuid)
            .await?;
        let is_shared = self
            .board_repo
            .find_is_shared_by_uuid(user_id, board_uuid)
            .await?;

        match (is_public, is_shared) {
            (Some(is_public), Some(is_shared)) => Ok(BoardVisibility {
                is_public,
                is_shared,
            }),
            _ => {
                warn!(%user_id, %board_uuid, "Board not found");
                Err(AppError::not_found("Board not found"))
            }
        }
    }

    // ========== 列表与搜索 ==========

    /// 分页获取看板列表
    pub async fn get_board_list(
        &self,
        email: &str,
        page: PageRequest,
    ) -> AppResult<Slice<BoardView>> {
        ensure_valid_page(&page)?;
        let user = self.resolve_user(email).await?;

        self.find_slice(BoardSpec::for_owner(user.user_id()), page)
            .await
    }

    /// 按标题关键字搜索看板
    pub async fn search_boards(
        &self,
        email: &str,
        keyword: &str,
        page: PageRequest,
    ) -> AppResult<Slice<BoardView>> {
        ensure_valid_keyword(keyword)?;
        ensure_valid_page(&page)?;
        let user = self.resolve_user(email).await?;

        let spec = BoardSpec::for_owner(user.user_id()).with_keyword(keyword);
        self.find_slice(spec, page).await
    }

    // ========== 修改 ==========

    /// 修改看板，内容相同时不写入
    pub async fn update_board(
        &self,
        email: &str,
        board_id: BoardId,
        cmd: UpdateBoardCommand,
    ) -> AppResult<()> {
        info!(email, %board_id, "Updating board");

        let user = self.resolve_user(email).await?;
        let mut board = self.load_board(&user, board_id).await?;
        cmd.validate()?;
        let tag = Tag::from_code(&cmd.tag)?;

        if !board.update(tag, &cmd.title, &cmd.description) {
            info!(%board_id, "Board unchanged, skipping update");
            return Ok(());
        }

        self.board_repo.update(&board).await?;
        record_mutation("update");
        Ok(())
    }

    /// 修改看板内容
    pub async fn update_board_contents(
        &self,
        email: &str,
        board_uuid: Uuid,
        cmd: UpdateBoardContentsCommand,
    ) -> AppResult<()> {
        info!(email, %board_uuid, "Updating board contents");

        let user = self.resolve_user(email).await?;
        let mut board = self.load_board_by_uuid(&user, board_uuid).await?;

        if !board.update_contents(&cmd.contents) {
            info!(%board_uuid, "Board contents unchanged, skipping update");
            return Ok(());
        }

        self.board_repo.update(&board).await?;
        record_mutation("update_contents");
        Ok(())
    }

    /// 切换置顶，返回切换后是否置顶
    pub async fn fix_board(&self, email: &str, board_id: BoardId) -> AppResult<bool> {
        info!(email, %board_id, "Toggling board fix");

        let user = self.resolve_user(email).await?;
        let mut board = self.load_board(&user, board_id).await?;

        let fixed = board.toggle_fixed();
        self.board_repo.update(&board).await?;
        record_mutation("fix");

        info!(%board_id, fixed, "Board fix toggled");
        Ok(fixed)
    }

    /// 软删除看板，重复删除返回 NotFound
    pub async fn delete_board(&self, email: &str, board_id: BoardId) -> AppResult<()> {
        info!(email, %board_id, "Deleting board");

        let user = self.resolve_user(email).await?;
        let mut board = self.load_board(&user, board_id).await?;

        board.delete();
        self.board_repo.update(&board).await?;
        record_mutation("delete");

        info!(%board_id, "Board deleted");
        Ok(())
    }
}
