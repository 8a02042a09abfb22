//! 看板分类标签

use dadamda_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 看板分类标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tag {
    /// 娱乐/艺术
    EntertainmentArt,
    /// 生活/购物
    LifeShopping,
    /// 兴趣/旅行
    HobbyTravel,
    /// 知识/趋势
    KnowledgeTrend,
}

impl Tag {
    pub const ALL: [Tag; 4] = [
        Tag::EntertainmentArt,
        Tag::LifeShopping,
        Tag::HobbyTravel,
        Tag::KnowledgeTrend,
    ];

    /// 按编码精确匹配（区分大小写）
    pub fn from_code(code: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.code() == code)
            .ok_or_else(|| AppError::invalid(format!("Unknown board tag: {}", code)))
    }

    pub fn code(&self) -> &'static str {
        match self {
            Tag::EntertainmentArt => "ENTERTAINMENT_ART",
            Tag::LifeShopping => "LIFE_SHOPPING",
            Tag::HobbyTravel => "HOBBY_TRAVEL",
            Tag::KnowledgeTrend => "KNOWLEDGE_TREND",
        }
    }

    /// 展示名称
    pub fn description(&self) -> &'static str {
        match self {
            Tag::EntertainmentArt => "엔터테인먼트/예술",
            Tag::LifeShopping => "생활/쇼핑",
            Tag::HobbyTravel => "취미/여행",
            Tag::KnowledgeTrend => "지식/트렌드",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_exact() {
        assert_eq!(Tag::from_code("ENTERTAINMENT_ART").unwrap(), Tag::EntertainmentArt);
        assert_eq!(Tag::from_code("KNOWLEDGE_TREND").unwrap(), Tag::KnowledgeTrend);
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        for code in ["ENTERTAINMENT_ARTIST", "entertainment_art", "", " LIFE_SHOPPING"] {
            let err = Tag::from_code(code).unwrap_err();
            assert!(matches!(err, AppError::Invalid(_)), "code {:?}", code);
        }
    }

    #[test]
    fn test_code_matches_serde_name() {
        for tag in Tag::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.code()));
        }
    }
}
