//! 集成测试公共夹具

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use dadamda_auth_core::TokenService;
use dadamda_board::api::{AppState, router};
use dadamda_board::application::BoardService;
use dadamda_board::domain::{Board, BoardId, BoardParts, Provider, Role, Tag, User};
use dadamda_board::infrastructure::persistence::{
    InMemoryBoardRepository, InMemoryUserRepository,
};
use dadamda_common::{AuditInfo, UserId};
use uuid::Uuid;

pub const USER_EMAIL: &str = "1234@naver.com";
pub const OTHER_EMAIL: &str = "5678@naver.com";
pub const UNKNOWN_EMAIL: &str = "nobody@naver.com";

pub const BOARD1_UUID: &str = "30373832-6566-3438-2d61-3433392d3131";
pub const BOARD2_UUID: &str = "30373832-6566-3438-2d61-3433392d3132";
pub const OTHER_BOARD_ID: i64 = 6;

pub const LOGIN_REDIRECT_URL: &str = "http://localhost:3000/login/token?token=";

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, day, hour, 11, 1).unwrap()
}

pub fn board1_modified() -> DateTime<Utc> {
    at(1, 11)
}

pub fn board2_modified() -> DateTime<Utc> {
    at(2, 11)
}

pub fn parse_uuid(value: &str) -> Uuid {
    Uuid::parse_str(value).unwrap()
}

fn user(id: i64, email: &str) -> User {
    User::from_parts(
        UserId(id),
        "dadamda".to_string(),
        email.to_string(),
        None,
        Some(Provider::Naver),
        Role::User,
        None,
        AuditInfo::from_parts(at(1, 9), at(1, 9)),
    )
}

struct Seed {
    id: i64,
    uuid: Uuid,
    owner: i64,
    title: &'static str,
    contents: Option<&'static str>,
    fixed: Option<DateTime<Utc>>,
    modified: DateTime<Utc>,
    deleted: Option<DateTime<Utc>>,
}

fn board(seed: Seed) -> Board {
    Board::from_parts(BoardParts {
        id: BoardId(seed.id),
        uuid: seed.uuid,
        user_id: UserId(seed.owner),
        title: seed.title.to_string(),
        description: "test".to_string(),
        tag: Tag::EntertainmentArt,
        contents: seed.contents.map(str::to_string),
        heart_cnt: 0,
        is_public: seed.id == 1,
        is_shared: false,
        fixed_date: seed.fixed,
        deleted_date: seed.deleted,
        audit_info: AuditInfo::from_parts(seed.modified, seed.modified),
    })
}

/// 预置数据
///
/// 用户 1 拥有 board1~board5，其中 board5 已删除；
/// board4 与 board2 置顶（board4 更晚），列表顺序为 4、2、3、1。
/// 用户 2 拥有 board6
pub async fn seeded_repositories() -> (Arc<InMemoryBoardRepository>, Arc<InMemoryUserRepository>)
{
    let users = Arc::new(InMemoryUserRepository::new());
    users.insert(user(1, USER_EMAIL)).await;
    users.insert(user(2, OTHER_EMAIL)).await;

    let boards = Arc::new(InMemoryBoardRepository::new());
    let seeds = [
        Seed {
            id: 1,
            uuid: parse_uuid(BOARD1_UUID),
            owner: 1,
            title: "board1",
            contents: None,
            fixed: None,
            modified: board1_modified(),
            deleted: None,
        },
        Seed {
            id: 2,
            uuid: parse_uuid(BOARD2_UUID),
            owner: 1,
            title: "board2",
            contents: Some("test contents"),
            fixed: Some(at(4, 11)),
            modified: board2_modified(),
            deleted: None,
        },
        Seed {
            id: 3,
            uuid: Uuid::new_v4(),
            owner: 1,
            title: "board3",
            contents: None,
            fixed: None,
            modified: at(3, 11),
            deleted: None,
        },
        Seed {
            id: 4,
            uuid: Uuid::new_v4(),
            owner: 1,
            title: "board4",
            contents: None,
            fixed: Some(at(5, 11)),
            modified: at(1, 12),
            deleted: None,
        },
        Seed {
            id: 5,
            uuid: Uuid::new_v4(),
            owner: 1,
            title: "board5",
            contents: None,
            fixed: None,
            modified: at(6, 11),
            deleted: Some(at(7, 11)),
        },
        Seed {
            id: OTHER_BOARD_ID,
            uuid: Uuid::new_v4(),
            owner: 2,
            title: "other board",
            contents: None,
            fixed: None,
            modified: at(8, 11),
            deleted: None,
        },
    ];
    for seed in seeds {
        boards.insert(board(seed)).await.unwrap();
    }

    (boards, users)
}

pub async fn seeded_service() -> (BoardService, Arc<InMemoryBoardRepository>) {
    let (boards, users) = seeded_repositories().await;
    (BoardService::new(boards.clone(), users), boards)
}

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(
        "integration_test_secret",
        3600,
        "dadamda".to_string(),
        "dadamda-web".to_string(),
    ))
}

pub struct TestApp {
    pub router: Router,
    pub tokens: Arc<TokenService>,
    pub boards: Arc<InMemoryBoardRepository>,
}

impl TestApp {
    pub async fn new() -> Self {
        let (boards, users) = seeded_repositories().await;
        let tokens = token_service();
        let service = Arc::new(BoardService::new(boards.clone(), users));
        let state = AppState::new(service, tokens.clone(), LOGIN_REDIRECT_URL);

        Self {
            router: router(state),
            tokens,
            boards,
        }
    }

    pub fn token_for(&self, email: &str) -> String {
        self.tokens.generate_token(email, "USER").unwrap()
    }
}
