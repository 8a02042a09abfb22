//! 看板查询规格

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use dadamda_common::UserId;
use dadamda_domain_core::SoftDeletable;

use crate::domain::entities::Board;

/// 看板查询规格
///
/// 总是限定所属用户并排除已删除的看板。
/// 排序固定为：置顶时间降序（未置顶在后）、修改时间降序、ID 降序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSpec {
    owner: UserId,
    keyword: Option<String>,
}

impl BoardSpec {
    pub fn for_owner(owner: UserId) -> Self {
        Self {
            owner,
            keyword: None,
        }
    }

    /// 标题关键字（不区分大小写的子串匹配）
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// SQL `LIKE` 模式，`%`、`_`、`\` 按字面匹配
    pub fn like_pattern(&self) -> Option<String> {
        self.keyword.as_deref().map(|keyword| {
            let mut pattern = String::with_capacity(keyword.len() + 2);
            pattern.push('%');
            for c in keyword.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }

    pub fn matches(&self, board: &Board) -> bool {
        if !board.is_owned_by(self.owner) || board.is_deleted() {
            return false;
        }

        match &self.keyword {
            Some(keyword) => board
                .title()
                .to_lowercase()
                .contains(&keyword.to_lowercase()),
            None => true,
        }
    }

    /// 列表排序比较
    pub fn compare(a: &Board, b: &Board) -> Ordering {
        compare_fixed(a.fixed_date(), b.fixed_date())
            .then_with(|| b.modified_date().cmp(&a.modified_date()))
            .then_with(|| b.board_id().cmp(&a.board_id()))
    }
}

fn compare_fixed(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BoardParts;
    use crate::domain::enums::Tag;
    use crate::domain::value_objects::BoardId;
    use chrono::TimeZone;
    use dadamda_common::AuditInfo;
    use uuid::Uuid;

    fn board(id: i64, title: &str, day: u32, fixed_hour: Option<u32>) -> Board {
        let modified = Utc.with_ymd_and_hms(2023, 1, day, 11, 11, 1).unwrap();
        Board::from_parts(BoardParts {
            id: BoardId(id),
            uuid: Uuid::new_v4(),
            user_id: UserId(1),
            title: title.to_string(),
            description: String::new(),
            tag: Tag::EntertainmentArt,
            contents: None,
            heart_cnt: 0,
            is_public: false,
            is_shared: false,
            fixed_date: fixed_hour.map(|h| Utc.with_ymd_and_hms(2023, 2, 1, h, 0, 0).unwrap()),
            deleted_date: None,
            audit_info: AuditInfo::from_parts(modified, modified),
        })
    }

    #[test]
    fn test_ordering_fixed_first_then_modified() {
        let mut boards = vec![
            board(1, "a", 1, None),
            board(2, "b", 2, Some(9)),
            board(3, "c", 3, None),
            board(4, "d", 4, Some(10)),
        ];
        boards.sort_by(BoardSpec::compare);

        let ids: Vec<i64> = boards.iter().filter_map(|b| b.board_id()).map(|id| id.0).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_ordering_ties_broken_by_id() {
        let mut boards = vec![board(7, "a", 5, None), board(8, "b", 5, None)];
        boards.sort_by(BoardSpec::compare);
        assert_eq!(boards[0].board_id(), Some(BoardId(8)));
    }

    #[test]
    fn test_keyword_matches_case_insensitive() {
        let spec = BoardSpec::for_owner(UserId(1)).with_keyword("BoArD");
        assert!(spec.matches(&board(1, "my board", 1, None)));
        assert!(!spec.matches(&board(2, "shopping", 1, None)));
    }

    #[test]
    fn test_other_owner_and_deleted_excluded() {
        let spec = BoardSpec::for_owner(UserId(2));
        assert!(!spec.matches(&board(1, "board", 1, None)));

        let mut deleted = board(1, "board", 1, None);
        deleted.delete();
        assert!(!BoardSpec::for_owner(UserId(1)).matches(&deleted));
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        let spec = BoardSpec::for_owner(UserId(1)).with_keyword(r"50%_off\");
        assert_eq!(spec.like_pattern().unwrap(), r"%50\%\_off\\%");
        assert_eq!(BoardSpec::for_owner(UserId(1)).like_pattern(), None);
    }
}
