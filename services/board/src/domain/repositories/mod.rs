//! 仓储接口

mod board_repository;
mod board_spec;
mod user_repository;

pub use board_repository::BoardRepository;
pub use board_spec::BoardSpec;
pub use user_repository::UserRepository;
