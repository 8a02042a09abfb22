//! domain-core - 跨实体共享的领域 trait

mod entity;

pub use entity::*;

// Re-export common types
pub use dadamda_common::{AuditInfo, UserId};
