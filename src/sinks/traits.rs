//! Sink Traits
//!
//! 定义统一的 [`Sink`] 接口以及各 sink 共用的状态 [`SinkCore`]。
//!
//! # 架构设计
//!
//! - 每个 sink 独立持有级别范围、格式化器和时间戳提供器
//! - 级别过滤完全由 sink 负责，`Logger` 只负责分发
//! - sink 以 `Arc<dyn Sink>` 共享，可同时挂载到多个 `Logger`
//!
//! # 使用示例
//!
//! ```rust
//! use knight_log::core::level::LoggingLevel;
//! use knight_log::core::template::MessageTemplateParams;
//! use knight_log::error::Result;
//! use knight_log::formatters::TextFormatter;
//! use knight_log::sinks::traits::{Sink, SinkCore};
//! use knight_log::utils::timestamp;
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct CountingSink {
//!     core: SinkCore,
//! }
//!
//! impl Sink for CountingSink {
//!     fn name(&self) -> &'static str {
//!         "counting"
//!     }
//!
//!     fn core(&self) -> &SinkCore {
//!         &self.core
//!     }
//!
//!     fn log(&self, level: LoggingLevel, template: &str, params: &MessageTemplateParams) -> Result<bool> {
//!         Ok(self.core.render(level, template, params)?.is_some())
//!     }
//! }
//!
//! let sink = CountingSink {
//!     core: SinkCore::new(Arc::new(TextFormatter::new()), timestamp::default_timestamp()),
//! };
//! sink.set_range(LoggingLevel::Warning, None);
//! assert!(!sink.accepts(LoggingLevel::Info));
//! ```

use crate::core::level::LoggingLevel;
use crate::core::template::MessageTemplateParams;
use crate::error::Result;
use crate::formatters::{Formatter, LoggingFormatterData};
use crate::utils::timestamp::{self, TimestampProvider};
use parking_lot::RwLock;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// 基础 Sink trait
///
/// 所有日志输出目标都必须实现此 trait。
pub trait Sink: Send + Sync + Debug {
    /// 获取 sink 的名称
    ///
    /// 用于日志和调试目的
    fn name(&self) -> &'static str;

    /// sink 的共用状态
    fn core(&self) -> &SinkCore;

    /// 处理一条消息
    ///
    /// 级别不在范围内时不做任何事并返回 `Ok(false)`；写出后返回 `Ok(true)`。
    fn log(&self, level: LoggingLevel, template: &str, params: &MessageTemplateParams)
        -> Result<bool>;

    /// 当前接受的级别，升序
    fn levels(&self) -> Vec<LoggingLevel> {
        self.core().levels()
    }

    /// 重新设置级别范围为 `min..=max`，`max` 缺省为 [`LoggingLevel::Fatal`]
    fn set_range(&self, min: LoggingLevel, max: Option<LoggingLevel>) {
        self.core().set_range(min, max);
    }

    /// 是否处理该级别
    fn accepts(&self, level: LoggingLevel) -> bool {
        self.core().accepts(level)
    }

    /// 关闭颜色输出；默认不做任何事
    fn no_colors(&self) {}
}

/// sink 共用状态：级别范围、格式化器、时间戳提供器
pub struct SinkCore {
    levels: RwLock<Vec<LoggingLevel>>,
    formatter: Arc<dyn Formatter>,
    timestamp: TimestampProvider,
}

impl SinkCore {
    /// 创建接受全部级别的状态
    pub fn new(formatter: Arc<dyn Formatter>, timestamp: TimestampProvider) -> Self {
        Self {
            levels: RwLock::new(LoggingLevel::range(LoggingLevel::MIN, LoggingLevel::MAX)),
            formatter,
            timestamp,
        }
    }

    pub fn levels(&self) -> Vec<LoggingLevel> {
        self.levels.read().clone()
    }

    pub fn set_range(&self, min: LoggingLevel, max: Option<LoggingLevel>) {
        let levels = LoggingLevel::range(min, max.unwrap_or(LoggingLevel::MAX));
        *self.levels.write() = levels;
    }

    pub fn accepts(&self, level: LoggingLevel) -> bool {
        self.levels.read().contains(&level)
    }

    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    pub fn set_formatter(&mut self, formatter: Arc<dyn Formatter>) {
        self.formatter = formatter;
    }

    pub fn set_timestamp(&mut self, timestamp: TimestampProvider) {
        self.timestamp = timestamp;
    }

    /// 按格式化器自身的颜色设置渲染；级别不在范围内时返回 `None`
    pub fn render(
        &self,
        level: LoggingLevel,
        template: &str,
        params: &MessageTemplateParams,
    ) -> Result<Option<String>> {
        self.render_with(level, template, params, |formatter, data| formatter.format(data))
    }

    /// 不带颜色地渲染；级别不在范围内时返回 `None`
    pub fn render_plain(
        &self,
        level: LoggingLevel,
        template: &str,
        params: &MessageTemplateParams,
    ) -> Result<Option<String>> {
        self.render_with(level, template, params, |formatter, data| {
            formatter.format_plain(data)
        })
    }

    fn render_with<F>(
        &self,
        level: LoggingLevel,
        template: &str,
        params: &MessageTemplateParams,
        format: F,
    ) -> Result<Option<String>>
    where
        F: FnOnce(&dyn Formatter, &LoggingFormatterData<'_>) -> Result<String>,
    {
        if !self.accepts(level) {
            return Ok(None);
        }
        let timestamp = (self.timestamp)();
        let data = LoggingFormatterData {
            level,
            timestamp: &timestamp,
            template,
            params,
        };
        format(self.formatter.as_ref(), &data).map(Some)
    }
}

impl Default for SinkCore {
    fn default() -> Self {
        Self::new(
            Arc::new(crate::formatters::TextFormatter::new()),
            timestamp::default_timestamp(),
        )
    }
}

impl Debug for SinkCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkCore")
            .field("levels", &*self.levels.read())
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}
