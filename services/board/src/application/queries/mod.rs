//! Queries

mod board_queries;

pub use board_queries::*;
