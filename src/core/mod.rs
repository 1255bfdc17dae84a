//! KnightLog 核心模块
//!
//! 本模块包含日志级别、参数值模型、消息模板解析以及负责分发的日志器。

pub mod level;
pub mod logger;
pub mod template;
pub mod value;

// 重新导出核心类型
pub use level::LoggingLevel;
pub use logger::{DispatchErrorStrategy, Logger};
pub use template::{compile_message, parse_template, MessageTemplateParams};
pub use value::{Value, ValueMap};
