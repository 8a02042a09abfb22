//! dadamda-board - 看板服务
//!
//! 看板的创建、查询、搜索、修改、置顶与软删除

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
