//! KnightLog - 结构化分级日志库
//!
//! KnightLog 把带命名占位符的消息模板和参数分发给一个或多个 sink，
//! 每个 sink 按自己的级别范围过滤，再交给格式化器渲染为彩色文本或 JSON。
//!
//! # 快速开始
//!
//! ```rust
//! use knight_log::{args, object, ConsoleSink, Logger};
//!
//! fn main() -> knight_log::Result<()> {
//!     let logger = Logger::new().attach(ConsoleSink::new());
//!
//!     logger.info("Hello World", &[])?;
//!     logger.info("Example message with {msg} and {favNum}", &args!["My message", 1337])?;
//!     logger.debug("My object: {obj}", &[object! { "foo" => "bar", "baz" => "qux" }])?;
//!     Ok(())
//! }
//! ```
//!
//! # 多个 sink
//!
//! ```rust,no_run
//! use knight_log::{ConsoleSink, FileSink, JsonFormatter, Logger, LoggingLevel};
//!
//! fn main() -> knight_log::Result<()> {
//!     let logger = Logger::new()
//!         .attach(ConsoleSink::new().with_range(LoggingLevel::Info, None))
//!         .attach(FileSink::new("logs/app.log")?.with_formatter(JsonFormatter::new()));
//!
//!     logger.warning("Disk usage at {percent}%", &knight_log::args![91.5])?;
//!     Ok(())
//! }
//! ```
//!
//! # 从配置文件构建
//!
//! ```rust,no_run
//! use knight_log::{load_config_from_file, Logger};
//! use std::path::Path;
//!
//! fn main() -> knight_log::Result<()> {
//!     let config = load_config_from_file(Path::new("knight_log.toml"))?;
//!     let logger = Logger::from_config(&config)?;
//!     logger.success("Configured {count} sinks", &knight_log::args![logger.sinks().len()])?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod formatters;
pub mod sinks;
pub mod utils;

// 重新导出主要类型
pub use config::{
    build_logger, load_config_from_file, load_config_from_str, validate_config, LoggerConfig,
    OutputFormat, SinkConfig, SinkKind, TimestampConfig,
};
pub use diagnostics::{Diagnostics, DiagnosticsSnapshot};
pub use error::{KnightLogError, Result};

// 重新导出核心功能
pub use crate::core::level::LoggingLevel;
pub use crate::core::logger::{DispatchErrorStrategy, Logger};
pub use crate::core::template::{compile_message, parse_template, MessageTemplateParams};
pub use crate::core::value::{Value, ValueMap};
pub use formatters::{
    Formatter, JsonFormatter, LevelColors, LoggingFormatterData, ParamColors, TextFormatter,
    TextFormatterOptions, ValueFormatter,
};
pub use sinks::{ConsoleSink, ConsoleStream, FileSink, Sink, SinkCore};
pub use utils::timestamp::TimestampProvider;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
