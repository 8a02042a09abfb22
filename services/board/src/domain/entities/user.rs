//! 用户实体

use chrono::{DateTime, Utc};
use dadamda_common::{AuditInfo, UserId};
use dadamda_domain_core::{AggregateRoot, Entity, SoftDeletable};
use serde::{Deserialize, Serialize};

use crate::domain::enums::{Provider, Role};

/// 用户实体
///
/// 用户由上游 OAuth2 组件注册，本服务只读取并解析调用方身份
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    profile_url: Option<String>,
    provider: Option<Provider>,
    role: Role,
    deleted_date: Option<DateTime<Utc>>,
    audit_info: AuditInfo,
}

impl User {
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: UserId,
        name: String,
        email: String,
        profile_url: Option<String>,
        provider: Option<Provider>,
        role: Role,
        deleted_date: Option<DateTime<Utc>>,
        audit_info: AuditInfo,
    ) -> Self {
        Self {
            id,
            name,
            email,
            profile_url,
            provider,
            role,
            deleted_date,
            audit_info,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn profile_url(&self) -> Option<&str> {
        self.profile_url.as_deref()
    }

    pub fn provider(&self) -> Option<Provider> {
        self.provider
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn role_key(&self) -> &'static str {
        self.role.key()
    }

    /// 更新昵称与头像
    pub fn update(&mut self, name: &str, profile_url: Option<&str>) -> bool {
        if self.name == name && self.profile_url.as_deref() == profile_url {
            return false;
        }

        self.name = name.to_string();
        self.profile_url = profile_url.map(str::to_string);
        self.audit_info.touch();
        true
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for User {
    fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    fn audit_info_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit_info
    }
}

impl SoftDeletable for User {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_date
    }
}
