//! 控制台输出 Sink 实现
//!
//! 按级别选择输出流：Log/Success、Debug、Info 写入标准输出，
//! Warning 与 Error/Critical/Fatal 写入标准错误。默认使用彩色 [`TextFormatter`]。

use crate::core::level::LoggingLevel;
use crate::core::template::MessageTemplateParams;
use crate::error::Result;
use crate::formatters::{Formatter, TextFormatter};
use crate::sinks::traits::{Sink, SinkCore};
use crate::utils::timestamp::{self, TimestampProvider};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// 控制台输出流
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Log,
    Debug,
    Info,
    Warn,
    Error,
}

impl ConsoleStream {
    /// 级别对应的输出流
    pub fn for_level(level: LoggingLevel) -> Self {
        match level {
            LoggingLevel::Log | LoggingLevel::Success => ConsoleStream::Log,
            LoggingLevel::Debug => ConsoleStream::Debug,
            LoggingLevel::Info => ConsoleStream::Info,
            LoggingLevel::Warning => ConsoleStream::Warn,
            LoggingLevel::Error | LoggingLevel::Critical | LoggingLevel::Fatal => {
                ConsoleStream::Error
            }
        }
    }

    /// 是否写入标准错误
    pub fn is_stderr(self) -> bool {
        matches!(self, ConsoleStream::Warn | ConsoleStream::Error)
    }
}

type ConsoleWriter = Box<dyn Write + Send>;

/// 控制台输出 Sink
pub struct ConsoleSink {
    core: SinkCore,
    stdout: Mutex<ConsoleWriter>,
    stderr: Mutex<ConsoleWriter>,
}

impl ConsoleSink {
    /// 创建写入进程标准输出/标准错误的控制台 Sink
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    /// 使用自定义的输出流（例如用于捕获输出）
    pub fn with_writers<O, E>(stdout: O, stderr: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        tracing::debug!("ConsoleSink created");
        Self {
            core: SinkCore::new(Arc::new(TextFormatter::new()), timestamp::default_timestamp()),
            stdout: Mutex::new(Box::new(stdout)),
            stderr: Mutex::new(Box::new(stderr)),
        }
    }

    /// 设置格式化器
    pub fn with_formatter<F: Formatter + 'static>(self, formatter: F) -> Self {
        self.with_shared_formatter(Arc::new(formatter))
    }

    /// 设置可与其他 sink 共享的格式化器
    pub fn with_shared_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.core.set_formatter(formatter);
        self
    }

    /// 设置时间戳提供器
    pub fn with_timestamp(mut self, timestamp: TimestampProvider) -> Self {
        self.core.set_timestamp(timestamp);
        self
    }

    /// 只处理 `min..=max` 的级别，`max` 缺省为 [`LoggingLevel::Fatal`]
    pub fn with_range(self, min: LoggingLevel, max: Option<LoggingLevel>) -> Self {
        self.core.set_range(min, max);
        self
    }

    /// 关闭格式化器的颜色输出
    pub fn without_colors(self) -> Self {
        self.core.formatter().no_colors();
        self
    }

    fn write_line(&self, stream: ConsoleStream, line: &str) -> Result<()> {
        let writer = if stream.is_stderr() {
            &self.stderr
        } else {
            &self.stdout
        };
        let mut writer = writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl Sink for ConsoleSink {
    fn name(&self) -> &'static str {
        "console"
    }

    fn core(&self) -> &SinkCore {
        &self.core
    }

    fn log(
        &self,
        level: LoggingLevel,
        template: &str,
        params: &MessageTemplateParams,
    ) -> Result<bool> {
        let Some(line) = self.core.render(level, template, params)? else {
            return Ok(false);
        };
        self.write_line(ConsoleStream::for_level(level), &line)?;
        Ok(true)
    }

    fn no_colors(&self) {
        self.core.formatter().no_colors();
    }
}
