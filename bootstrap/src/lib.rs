//! dadamda-bootstrap - 统一服务启动骨架
//!
//! 配置加载、日志初始化、基础设施创建与优雅关闭

mod infrastructure;
mod runtime;
mod starter;

pub use infrastructure::*;
pub use runtime::*;
pub use starter::*;
