//! 格式化器
//!
//! 格式化器把一条消息（模板、参数、级别、时间戳）渲染成目标输出所需的字符串。
//! 提供两种实现：人类可读的 [`TextFormatter`] 和结构化的 [`JsonFormatter`]。

pub mod colors;
pub mod json;
pub mod pretty;
pub mod text;

use crate::core::level::LoggingLevel;
use crate::core::template::MessageTemplateParams;
use crate::error::Result;
use std::fmt::Debug;

pub use colors::{LevelColors, ParamColors};
pub use json::JsonFormatter;
pub use pretty::{ValueFormatter, MAX_INLINE_SIZE};
pub use text::{TextFormatter, TextFormatterOptions};

/// 单条消息的格式化输入，只在一次格式化调用内有效
#[derive(Debug, Clone, Copy)]
pub struct LoggingFormatterData<'a> {
    pub level: LoggingLevel,
    pub timestamp: &'a str,
    pub template: &'a str,
    pub params: &'a MessageTemplateParams,
}

/// 格式化策略
///
/// 实现必须是确定性的：同一实例对同一输入两次格式化得到相同的输出。
pub trait Formatter: Send + Sync + Debug {
    /// 按格式化器自身的颜色设置渲染
    fn format(&self, data: &LoggingFormatterData<'_>) -> Result<String>;

    /// 不带任何颜色地渲染，不改变格式化器的设置
    fn format_plain(&self, data: &LoggingFormatterData<'_>) -> Result<String> {
        self.format(data)
    }

    /// 关闭颜色输出；不支持颜色的格式化器忽略此调用
    fn no_colors(&self) {}

    /// 当前是否输出颜色
    fn colors_enabled(&self) -> bool {
        false
    }
}
