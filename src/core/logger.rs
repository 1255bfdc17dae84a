//! 日志器
//!
//! [`Logger`] 只负责分发：每次调用解析一次模板，然后把同一组
//! `(level, template, params)` 交给所有挂载的 sink。级别过滤完全由 sink 负责，
//! 因此同一个日志器可以同时驱动不同阈值的 sink。
//!
//! ```
//! use knight_log::{args, ConsoleSink, Logger, LoggingLevel};
//!
//! let logger = Logger::new()
//!     .attach(ConsoleSink::new().with_range(LoggingLevel::Warning, None));
//!
//! logger.info("filtered by the sink", &[])?;
//! logger.warning("{count} retries left", &args![3])?;
//! # Ok::<(), knight_log::KnightLogError>(())
//! ```

use crate::config::{self, LoggerConfig};
use crate::core::level::LoggingLevel;
use crate::core::template::parse_template;
use crate::core::value::Value;
use crate::diagnostics::{Diagnostics, DiagnosticsSnapshot};
use crate::error::Result;
use crate::sinks::traits::Sink;
use serde::Deserialize;
use std::sync::Arc;

/// sink 写入失败时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchErrorStrategy {
    /// 第一个错误即中止分发并返回该错误，后续 sink 不再执行
    #[default]
    StopOnError,
    /// 记录错误并继续处理剩余 sink，调用最终返回 `Ok`
    LogAndContinue,
    /// 忽略错误，只计数
    Ignore,
}

/// 日志器
///
/// 克隆得到的日志器共享同一组 sink 和诊断计数器。
#[derive(Debug, Clone, Default)]
pub struct Logger {
    sinks: Vec<Arc<dyn Sink>>,
    error_strategy: DispatchErrorStrategy,
    diagnostics: Arc<Diagnostics>,
}

impl Logger {
    /// 创建没有任何 sink 的日志器
    pub fn new() -> Self {
        Self::default()
    }

    /// 从配置构建日志器
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        config::build_logger(config)
    }

    /// 挂载一个 sink
    pub fn attach<S: Sink + 'static>(self, sink: S) -> Self {
        self.attach_shared(Arc::new(sink))
    }

    /// 挂载一个可与其他日志器共享的 sink
    pub fn attach_shared(mut self, sink: Arc<dyn Sink>) -> Self {
        tracing::debug!("Attaching {} sink", sink.name());
        self.sinks.push(sink);
        self
    }

    /// 设置 sink 写入失败时的处理策略
    pub fn with_error_strategy(mut self, strategy: DispatchErrorStrategy) -> Self {
        self.error_strategy = strategy;
        self
    }

    /// 已挂载的 sink，按挂载顺序
    pub fn sinks(&self) -> &[Arc<dyn Sink>] {
        &self.sinks
    }

    pub fn error_strategy(&self) -> DispatchErrorStrategy {
        self.error_strategy
    }

    /// 诊断数据快照
    pub fn diagnostics(&self) -> DiagnosticsSnapshot {
        self.diagnostics.snapshot()
    }

    /// 以指定级别记录一条消息
    ///
    /// 模板只解析一次；缺少参数时返回 `MissingParameter`，不会调用任何 sink。
    pub fn log_at(&self, level: LoggingLevel, template: &str, args: &[Value]) -> Result<()> {
        let params = parse_template(template, args)?;
        self.diagnostics.increment_messages_dispatched();

        for sink in &self.sinks {
            match sink.log(level, template, &params) {
                Ok(true) => self.diagnostics.increment_sink_writes(),
                Ok(false) => self.diagnostics.increment_messages_filtered(),
                Err(e) => {
                    self.diagnostics.increment_sink_errors();
                    match self.error_strategy {
                        DispatchErrorStrategy::StopOnError => return Err(e),
                        DispatchErrorStrategy::LogAndContinue => {
                            tracing::warn!("Sink {} failed to write message: {}", sink.name(), e);
                        }
                        DispatchErrorStrategy::Ignore => {}
                    }
                }
            }
        }
        Ok(())
    }

    pub fn log(&self, template: &str, args: &[Value]) -> Result<()> {
        self.log_at(LoggingLevel::Log, template, args)
    }

    pub fn debug(&self, template: &str, args: &[Value]) -> Result<()> {
        self.log_at(LoggingLevel::Debug, template, args)
    }

    pub fn info(&self, template: &str, args: &[Value]) -> Result<()> {
        self.log_at(LoggingLevel::Info, template, args)
    }

    pub fn success(&self, template: &str, args: &[Value]) -> Result<()> {
        self.log_at(LoggingLevel::Success, template, args)
    }

    pub fn warning(&self, template: &str, args: &[Value]) -> Result<()> {
        self.log_at(LoggingLevel::Warning, template, args)
    }

    pub fn error(&self, template: &str, args: &[Value]) -> Result<()> {
        self.log_at(LoggingLevel::Error, template, args)
    }

    pub fn critical(&self, template: &str, args: &[Value]) -> Result<()> {
        self.log_at(LoggingLevel::Critical, template, args)
    }

    pub fn fatal(&self, template: &str, args: &[Value]) -> Result<()> {
        self.log_at(LoggingLevel::Fatal, template, args)
    }
}
