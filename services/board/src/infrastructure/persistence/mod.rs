//! Persistence implementations

mod converters;
mod memory;
mod postgres;
mod rows;
mod schema;

pub use memory::{InMemoryBoardRepository, InMemoryUserRepository};
pub use postgres::{PostgresBoardRepository, PostgresUserRepository};
pub use schema::migrations;
