//! 领域层
//!
//! 实体、枚举、值对象与仓储接口

pub mod entities;
pub mod enums;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use enums::*;
pub use repositories::*;
pub use value_objects::*;
