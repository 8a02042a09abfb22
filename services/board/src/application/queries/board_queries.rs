//! Board queries

use dadamda_common::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
use dadamda_errors::{AppError, AppResult};
use serde::Deserialize;

/// 分页参数（页码从 0 开始）
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageQuery {
    pub fn to_page_request(&self) -> AppResult<PageRequest> {
        let page = PageRequest::of(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        );
        ensure_valid_page(&page)?;
        Ok(page)
    }
}

/// 关键字搜索参数
#[derive(Debug, Clone, Deserialize)]
pub struct SearchBoardsQuery {
    #[serde(default)]
    pub keyword: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl SearchBoardsQuery {
    pub fn page_query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            size: self.size,
        }
    }
}

pub fn ensure_valid_page(page: &PageRequest) -> AppResult<()> {
    if !page.is_valid() {
        return Err(AppError::invalid(format!(
            "Page size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(())
}

pub fn ensure_valid_keyword(keyword: &str) -> AppResult<()> {
    if keyword.trim().is_empty() {
        return Err(AppError::invalid("Search keyword must not be blank"));
    }
    Ok(())
}
