//! 通用类型定义

use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 用户 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// 审计信息
///
/// 实体通过组合持有，不使用继承
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl AuditInfo {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            modified_at: now,
        }
    }

    pub fn from_parts(created_at: DateTime<Utc>, modified_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            modified_at,
        }
    }

    /// 刷新修改时间
    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}

impl Default for AuditInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// 单页最大条数
pub const MAX_PAGE_SIZE: u32 = 100;

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 分页请求（页码从 0 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn of(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    /// 多取一行用于判断是否存在下一页
    pub fn fetch_limit(&self) -> u64 {
        u64::from(self.size) + 1
    }

    pub fn is_valid(&self) -> bool {
        self.size > 0 && self.size <= MAX_PAGE_SIZE
    }
}

/// 切片分页结果
///
/// 只携带是否存在下一页，不统计总数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub has_next: bool,
}

impl<T> Slice<T> {
    /// 由多取一行的查询结果构建切片
    ///
    /// `rows` 最多包含 `page.size + 1` 条；超出部分被丢弃并标记 `has_next`
    pub fn from_overfetch(mut rows: Vec<T>, page: &PageRequest) -> Self {
        let size = page.size as usize;
        let has_next = rows.len() > size;
        if has_next {
            rows.truncate(size);
        }

        Self {
            content: rows,
            page: page.page,
            size: page.size,
            has_next,
        }
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn map<U, F>(self, f: F) -> Slice<U>
    where
        F: FnMut(T) -> U,
    {
        Slice {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            has_next: self.has_next,
        }
    }
}
