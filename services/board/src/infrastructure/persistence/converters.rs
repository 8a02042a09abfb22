//! 数据库行到领域对象的转换

use dadamda_common::{AuditInfo, UserId};
use dadamda_errors::{AppError, AppResult};

use crate::domain::entities::{Board, BoardParts, User};
use crate::domain::enums::{Provider, Role, Tag};
use crate::domain::value_objects::BoardId;

use super::rows::{BoardRow, UserRow};

/// 将 BoardRow 转换为 Board
pub fn board_from_row(row: BoardRow) -> AppResult<Board> {
    let tag = Tag::from_code(&row.tag).map_err(|_| {
        AppError::database(format!(
            "Board {} has unknown tag in storage: {}",
            row.board_id, row.tag
        ))
    })?;

    Ok(Board::from_parts(BoardParts {
        id: BoardId(row.board_id),
        uuid: row.uuid,
        user_id: UserId(row.user_id),
        title: row.title,
        description: row.description,
        tag,
        contents: row.contents,
        heart_cnt: row.heart_cnt,
        is_public: row.is_public,
        is_shared: row.is_shared,
        fixed_date: row.fixed_date,
        deleted_date: row.deleted_date,
        audit_info: AuditInfo::from_parts(row.created_date, row.modified_date),
    }))
}

/// 将 UserRow 转换为 User
pub fn user_from_row(row: UserRow) -> AppResult<User> {
    let role = Role::from_code(&row.role).ok_or_else(|| {
        AppError::database(format!(
            "User {} has unknown role in storage: {}",
            row.user_id, row.role
        ))
    })?;

    Ok(User::from_parts(
        UserId(row.user_id),
        row.name,
        row.email,
        row.profile_url,
        row.provider.as_deref().and_then(Provider::from_code),
        role,
        row.deleted_date,
        AuditInfo::from_parts(row.created_date, row.modified_date),
    ))
}
