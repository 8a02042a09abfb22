//! Commands

mod board_commands;

pub use board_commands::*;
