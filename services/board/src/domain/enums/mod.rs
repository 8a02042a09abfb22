//! 枚举模块

mod provider;
mod role;
mod tag;

pub use provider::Provider;
pub use role::Role;
pub use tag::Tag;
