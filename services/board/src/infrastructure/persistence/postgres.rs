//! PostgreSQL repository implementation

use async_trait::async_trait;
use dadamda_common::UserId;
use dadamda_domain_core::AggregateRoot;
use dadamda_errors::{AppError, AppResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Board, User};
use crate::domain::repositories::{BoardRepository, BoardSpec, UserRepository};
use crate::domain::value_objects::BoardId;

use super::converters::{board_from_row, user_from_row};
use super::rows::{BoardRow, UserRow};

const BOARD_COLUMNS: &str = r#"
    board_id, uuid, user_id, title, description, tag, contents, heart_cnt,
    is_public, is_shared, fixed_date, created_date, modified_date, deleted_date
"#;

fn to_i64(value: u64) -> AppResult<i64> {
    i64::try_from(value).map_err(|_| AppError::invalid("Page offset out of range"))
}

// ============================================================================
// BoardRepository 实现
// ============================================================================

pub struct PostgresBoardRepository {
    pool: PgPool,
}

impl PostgresBoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_optional(
        &self,
        query: sqlx::query::QueryAs<'_, sqlx::Postgres, BoardRow, sqlx::postgres::PgArguments>,
    ) -> AppResult<Option<Board>> {
        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to query board: {}", e)))?;

        row.map(board_from_row).transpose()
    }

    async fn find_flag(&self, column: &str, user_id: UserId, uuid: Uuid) -> AppResult<Option<bool>> {
        let sql = format!(
            "SELECT {} FROM boards WHERE user_id = $1 AND uuid = $2 AND deleted_date IS NULL",
            column
        );

        sqlx::query_scalar::<_, bool>(&sql)
            .bind(user_id.0)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to query board {}: {}", column, e)))
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    async fn save(&self, board: &Board) -> AppResult<BoardId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO boards (
                uuid, user_id, title, description, tag, contents, heart_cnt,
                is_public, is_shared, fixed_date, created_date, modified_date, deleted_date
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING board_id
            "#,
        )
        .bind(board.uuid())
        .bind(board.user_id().0)
        .bind(board.title())
        .bind(board.description())
        .bind(board.tag().code())
        .bind(board.contents())
        .bind(board.heart_cnt())
        .bind(board.is_public())
        .bind(board.is_shared())
        .bind(board.fixed_date())
        .bind(board.audit_info().created_at)
        .bind(board.modified_date())
        .bind(board.deleted_date())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save board: {}", e)))?;

        Ok(BoardId(id))
    }

    async fn update(&self, board: &Board) -> AppResult<()> {
        let id = board
            .board_id()
            .ok_or_else(|| AppError::internal("Cannot update a board that was never saved"))?;

        let result = sqlx::query(
            r#"
            UPDATE boards SET
                title = $1,
                description = $2,
                tag = $3,
                contents = $4,
                heart_cnt = $5,
                is_public = $6,
                is_shared = $7,
                fixed_date = $8,
                modified_date = $9,
                deleted_date = $10
            WHERE board_id = $11
            "#,
        )
        .bind(board.title())
        .bind(board.description())
        .bind(board.tag().code())
        .bind(board.contents())
        .bind(board.heart_cnt())
        .bind(board.is_public())
        .bind(board.is_shared())
        .bind(board.fixed_date())
        .bind(board.modified_date())
        .bind(board.deleted_date())
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update board: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Board not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: BoardId) -> AppResult<Option<Board>> {
        let sql = format!("SELECT {} FROM boards WHERE board_id = $1", BOARD_COLUMNS);
        self.fetch_optional(sqlx::query_as(&sql).bind(id.0)).await
    }

    async fn find_by_owner_and_id(
        &self,
        user_id: UserId,
        id: BoardId,
    ) -> AppResult<Option<Board>> {
        let sql = format!(
            "SELECT {} FROM boards WHERE user_id = $1 AND board_id = $2 AND deleted_date IS NULL",
            BOARD_COLUMNS
        );
        self.fetch_optional(sqlx::query_as(&sql).bind(user_id.0).bind(id.0))
            .await
    }

    async fn find_by_owner_and_uuid(
        &self,
        user_id: UserId,
        uuid: Uuid,
    ) -> AppResult<Option<Board>> {
        let sql = format!(
            "SELECT {} FROM boards WHERE user_id = $1 AND uuid = $2 AND deleted_date IS NULL",
            BOARD_COLUMNS
        );
        self.fetch_optional(sqlx::query_as(&sql).bind(user_id.0).bind(uuid))
            .await
    }

    async fn find_by_owner_and_title(
        &self,
        user_id: UserId,
        title: &str,
    ) -> AppResult<Option<Board>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM boards
            WHERE user_id = $1 AND title = $2 AND deleted_date IS NULL
            ORDER BY board_id DESC
            LIMIT 1
            "#,
            BOARD_COLUMNS
        );
        self.fetch_optional(sqlx::query_as(&sql).bind(user_id.0).bind(title))
            .await
    }

    async fn find_page(&self, spec: &BoardSpec, offset: u64, limit: u64) -> AppResult<Vec<Board>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM boards
            WHERE user_id = $1
              AND deleted_date IS NULL
              AND ($2::TEXT IS NULL OR title ILIKE $2 ESCAPE '\')
            ORDER BY fixed_date DESC NULLS LAST, modified_date DESC, board_id DESC
            LIMIT $3 OFFSET $4
            "#,
            BOARD_COLUMNS
        );

        let rows = sqlx::query_as::<_, BoardRow>(&sql)
            .bind(spec.owner().0)
            .bind(spec.like_pattern())
            .bind(to_i64(limit)?)
            .bind(to_i64(offset)?)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list boards: {}", e)))?;

        rows.into_iter().map(board_from_row).collect()
    }

    async fn count_by_owner(&self, user_id: UserId) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM boards WHERE user_id = $1 AND deleted_date IS NULL",
        )
        .bind(user_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to count boards: {}", e)))
    }

    async fn find_is_public_by_uuid(&self, user_id: UserId, uuid: Uuid) -> AppResult<Option<bool>> {
        self.find_flag("is_public", user_id, uuid).await
    }

    async fn find_is_shared_by_uuid(&self, user_id: UserId, uuid: Uuid) -> AppResult<Option<bool>> {
        self.find_flag("is_shared", user_id, uuid).await
    }
}

// ============================================================================
// UserRepository 实现
// ============================================================================

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, name, email, profile_url, provider, role,
                   created_date, modified_date, deleted_date
            FROM users
            WHERE email = $1 AND deleted_date IS NULL
            ORDER BY user_id ASC
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query user: {}", e)))?;

        row.map(user_from_row).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, name, email, profile_url, provider, role,
                   created_date, modified_date, deleted_date
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query user: {}", e)))?;

        row.map(user_from_row).transpose()
    }
}
