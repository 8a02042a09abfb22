//! 看板实体

use chrono::{DateTime, Utc};
use dadamda_common::{AuditInfo, UserId};
use dadamda_domain_core::{AggregateRoot, Entity, SoftDeletable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::enums::Tag;
use crate::domain::value_objects::BoardId;

/// 看板实体
///
/// 将收藏的网页内容归集到一个集合中，归属于单个用户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// 存储分配的 ID，保存前为空
    id: Option<BoardId>,
    /// 对外引用使用的 UUID，创建后不变
    uuid: Uuid,
    user_id: UserId,
    title: String,
    description: String,
    tag: Tag,
    contents: Option<String>,
    heart_cnt: i64,
    is_public: bool,
    is_shared: bool,
    /// 置顶时间，为空表示未置顶
    fixed_date: Option<DateTime<Utc>>,
    deleted_date: Option<DateTime<Utc>>,
    audit_info: AuditInfo,
}

/// 从存储重建看板时使用的完整字段
#[derive(Debug, Clone)]
pub struct BoardParts {
    pub id: BoardId,
    pub uuid: Uuid,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub tag: Tag,
    pub contents: Option<String>,
    pub heart_cnt: i64,
    pub is_public: bool,
    pub is_shared: bool,
    pub fixed_date: Option<DateTime<Utc>>,
    pub deleted_date: Option<DateTime<Utc>>,
    pub audit_info: AuditInfo,
}

impl Board {
    /// 创建看板
    pub fn new(
        user_id: UserId,
        tag: Tag,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            uuid: Uuid::new_v4(),
            user_id,
            title: title.into(),
            description: description.into(),
            tag,
            contents: None,
            heart_cnt: 0,
            is_public: false,
            is_shared: false,
            fixed_date: None,
            deleted_date: None,
            audit_info: AuditInfo::default(),
        }
    }

    pub fn from_parts(parts: BoardParts) -> Self {
        Self {
            id: Some(parts.id),
            uuid: parts.uuid,
            user_id: parts.user_id,
            title: parts.title,
            description: parts.description,
            tag: parts.tag,
            contents: parts.contents,
            heart_cnt: parts.heart_cnt.max(0),
            is_public: parts.is_public,
            is_shared: parts.is_shared,
            fixed_date: parts.fixed_date,
            deleted_date: parts.deleted_date,
            audit_info: parts.audit_info,
        }
    }

    /// 保存后回填存储分配的 ID
    pub fn with_id(mut self, id: BoardId) -> Self {
        self.id = Some(id);
        self
    }

    // ========== Getters ==========

    pub fn board_id(&self) -> Option<BoardId> {
        self.id
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn heart_cnt(&self) -> i64 {
        self.heart_cnt
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn is_shared(&self) -> bool {
        self.is_shared
    }

    pub fn fixed_date(&self) -> Option<DateTime<Utc>> {
        self.fixed_date
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed_date.is_some()
    }

    pub fn modified_date(&self) -> DateTime<Utc> {
        self.audit_info.modified_at
    }

    pub fn deleted_date(&self) -> Option<DateTime<Utc>> {
        self.deleted_date
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    // ========== Mutations ==========

    /// 修改标签、标题与描述
    ///
    /// 三项均与当前值相同时不做任何修改并返回 false
    pub fn update(&mut self, tag: Tag, title: &str, description: &str) -> bool {
        if self.tag == tag && self.title == title && self.description == description {
            return false;
        }

        self.tag = tag;
        self.title = title.to_string();
        self.description = description.to_string();
        self.audit_info.touch();
        true
    }

    /// 替换内容，相同内容不修改
    pub fn update_contents(&mut self, contents: &str) -> bool {
        if self.contents.as_deref() == Some(contents) {
            return false;
        }

        self.contents = Some(contents.to_string());
        self.audit_info.touch();
        true
    }

    /// 切换置顶状态，返回切换后是否置顶
    pub fn toggle_fixed(&mut self) -> bool {
        self.fixed_date = match self.fixed_date {
            Some(_) => None,
            None => Some(Utc::now()),
        };
        self.audit_info.touch();
        self.is_fixed()
    }

    /// 软删除，已删除时保持首次删除时间
    pub fn delete(&mut self) {
        if self.deleted_date.is_none() {
            self.deleted_date = Some(Utc::now());
            self.audit_info.touch();
        }
    }
}

impl Entity for Board {
    type Id = Uuid;

    fn id(&self) -> &Self::Id {
        &self.uuid
    }
}

impl AggregateRoot for Board {
    fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    fn audit_info_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit_info
    }
}

impl SoftDeletable for Board {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_date
    }
}
