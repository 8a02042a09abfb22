//! 实体基础 trait

use chrono::{DateTime, Utc};
use dadamda_common::AuditInfo;

/// 实体 trait
pub trait Entity {
    type Id;

    fn id(&self) -> &Self::Id;
}

/// 聚合根 trait
pub trait AggregateRoot: Entity {
    fn audit_info(&self) -> &AuditInfo;
    fn audit_info_mut(&mut self) -> &mut AuditInfo;
}

/// 软删除
///
/// 删除只写入时间戳，记录保留在存储中
pub trait SoftDeletable {
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }

    fn is_active(&self) -> bool {
        !self.is_deleted()
    }
}
