//! 实体模块

mod board;
mod user;

pub use board::{Board, BoardParts};
pub use user::User;
