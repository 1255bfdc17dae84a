//! 单一文件 Sink
//!
//! 此模块实现写入单一文件的 sink。每条消息以不带颜色的文本追加为一行；
//! 创建时确保文件存在（必要时创建父目录），已有内容保持不变。

use crate::core::level::LoggingLevel;
use crate::core::template::MessageTemplateParams;
use crate::error::Result;
use crate::formatters::{Formatter, TextFormatter};
use crate::sinks::traits::{Sink, SinkCore};
use crate::utils::timestamp::{self, TimestampProvider};
use crate::utils::FileTools;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 单一文件 Sink
#[derive(Debug)]
pub struct FileSink {
    core: SinkCore,
    /// 日志文件路径
    path: PathBuf,
    /// 同一 sink 的写入互斥，保证整行写入不交错
    write_lock: Mutex<()>,
}

impl FileSink {
    /// 创建新的文件 sink
    ///
    /// 文件不存在时创建（包括缺失的父目录）。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        FileTools::ensure_file_exists(&path)?;
        tracing::debug!("FileSink created for {}", path.display());

        Ok(Self {
            core: SinkCore::new(Arc::new(TextFormatter::new()), timestamp::default_timestamp()),
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// 设置格式化器
    pub fn with_formatter<F: Formatter + 'static>(self, formatter: F) -> Self {
        self.with_shared_formatter(Arc::new(formatter))
    }

    /// 设置可与其他 sink 共享的格式化器；文件输出始终不带颜色
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

    /// 日志文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn name(&self) -> &'static str {
        "file"
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
        let Some(mut line) = self.core.render_plain(level, template, params)? else {
            return Ok(false);
        };
        line.push('\n');

        let _guard = self.write_lock.lock();
        FileTools::append(&self.path, line.as_bytes())?;
        Ok(true)
    }
}
