//! 数据库行映射结构

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// 看板数据库行
#[derive(Debug, FromRow)]
pub struct BoardRow {
    pub board_id: i64,
    pub uuid: Uuid,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub tag: String,
    pub contents: Option<String>,
    pub heart_cnt: i64,
    pub is_public: bool,
    pub is_shared: bool,
    pub fixed_date: Option<DateTime<Utc>>,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    pub deleted_date: Option<DateTime<Utc>>,
}

/// 用户数据库行
#[derive(Debug, FromRow)]
pub struct UserRow {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub profile_url: Option<String>,
    pub provider: Option<String>,
    pub role: String,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    pub deleted_date: Option<DateTime<Utc>>,
}
