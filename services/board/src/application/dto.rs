//! 响应投影

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::Board;
use crate::domain::enums::Tag;

/// 看板视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub board_id: i64,
    pub uuid: Uuid,
    pub title: String,
    pub description: String,
    pub tag: Tag,
    pub contents: Option<String>,
    pub heart_cnt: i64,
    pub is_fixed: bool,
    pub is_public: bool,
    pub is_shared: bool,
    pub fixed_date: Option<DateTime<Utc>>,
    pub modified_date: DateTime<Utc>,
}

impl From<&Board> for BoardView {
    fn from(board: &Board) -> Self {
        Self {
            board_id: board.board_id().map(|id| id.0).unwrap_or_default(),
            uuid: board.uuid(),
            title: board.title().to_string(),
            description: board.description().to_string(),
            tag: board.tag(),
            contents: board.contents().map(str::to_string),
            heart_cnt: board.heart_cnt(),
            is_fixed: board.is_fixed(),
            is_public: board.is_public(),
            is_shared: board.is_shared(),
            fixed_date: board.fixed_date(),
            modified_date: board.modified_date(),
        }
    }
}

/// 看板内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardContentsView {
    pub contents: Option<String>,
}

/// 看板公开/共享状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardVisibility {
    pub is_public: bool,
    pub is_shared: bool,
}

/// 创建结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatedBoard {
    pub board_id: i64,
}

/// 置顶结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixedBoard {
    pub board_id: i64,
    pub is_fixed: bool,
}
