//! KnightLog Sinks 模块
//!
//! 提供日志输出目标的实现：按级别选择输出流的控制台 sink 和追加写入的文件 sink。
//! 每个 sink 自行决定接受哪些级别。

pub mod console;
pub mod file;
pub mod traits;

// 重新导出主要类型
pub use console::{ConsoleSink, ConsoleStream};
pub use file::FileSink;
pub use traits::{Sink, SinkCore};
