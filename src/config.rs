//! 定义 KnightLog 日志器的配置结构体。
//!
//! 配置从 TOML 加载：
//!
//! ```toml
//! error_strategy = "log_and_continue"
//!
//! [[sinks]]
//! type = "console"
//! min_level = "info"
//! colors = true
//!
//! [sinks.level_colors]
//! warning = "#ffdb58"
//!
//! [[sinks]]
//! type = "file"
//! path = "logs/app.log"
//! format = "json"
//! timestamp = "iso"
//! ```

use crate::core::level::LoggingLevel;
use crate::core::logger::{DispatchErrorStrategy, Logger};
use crate::error::{KnightLogError, Result};
use crate::formatters::{Formatter, JsonFormatter, LevelColors, TextFormatter, TextFormatterOptions};
use crate::sinks::{ConsoleSink, FileSink, Sink};
use crate::utils::timestamp::{self, TimestampProvider};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// --- 辅助函数，用于提供配置项的默认值 ---
fn default_true() -> bool {
    true
}

/// 日志器的顶层配置结构体。
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default)]
    pub error_strategy: DispatchErrorStrategy,
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
}

/// sink 类型
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    Console,
    File,
}

/// 输出格式
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 时间戳格式
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimestampConfig {
    /// `YYYY-MM-DD HH:MM:SS`
    #[default]
    Default,
    /// UTC RFC 3339，毫秒精度
    Iso,
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM:SS`
    Time,
    /// strftime 格式，例如 `{ custom = "%d/%m %H:%M" }`
    Custom(String),
}

impl TimestampConfig {
    pub fn provider(&self) -> TimestampProvider {
        match self {
            TimestampConfig::Default => timestamp::default_timestamp(),
            TimestampConfig::Iso => timestamp::iso_timestamp(),
            TimestampConfig::Date => timestamp::date_timestamp(),
            TimestampConfig::Time => timestamp::time_timestamp(),
            TimestampConfig::Custom(format) => timestamp::custom(format),
        }
    }
}

/// 单个 sink 的配置（`[[sinks]]` 表）
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SinkConfig {
    #[serde(rename = "type")]
    pub kind: SinkKind,
    /// 文件路径，仅用于 `type = "file"`
    pub path: Option<PathBuf>,
    /// 最低级别，缺省为 `log`
    pub min_level: Option<String>,
    /// 最高级别，缺省为 `fatal`
    pub max_level: Option<String>,
    #[serde(default)]
    pub format: OutputFormat,
    /// 是否输出颜色（文件 sink 始终不带颜色）
    #[serde(default = "default_true")]
    pub colors: bool,
    /// 是否对齐级别名称
    #[serde(default = "default_true")]
    pub align: bool,
    #[serde(default)]
    pub timestamp: TimestampConfig,
    /// 级别名称 → 颜色，覆盖默认配色
    #[serde(default)]
    pub level_colors: HashMap<String, String>,
}

impl SinkConfig {
    /// 解析级别范围
    pub fn level_range(&self) -> Result<(LoggingLevel, Option<LoggingLevel>)> {
        let min = match &self.min_level {
            Some(name) => name.parse::<LoggingLevel>()?,
            None => LoggingLevel::MIN,
        };
        let max = self.max_level.as_deref().map(str::parse::<LoggingLevel>).transpose()?;
        Ok((min, max))
    }

    fn formatter(&self) -> Result<Arc<dyn Formatter>> {
        match self.format {
            OutputFormat::Json => Ok(Arc::new(JsonFormatter::new())),
            OutputFormat::Text => {
                let levels = LevelColors::default().merge_names(&self.level_colors)?;
                Ok(Arc::new(TextFormatter::with_options(TextFormatterOptions {
                    colors_enabled: self.colors,
                    align: self.align,
                    levels,
                    ..Default::default()
                })))
            }
        }
    }

    fn build(&self) -> Result<Arc<dyn Sink>> {
        let (min, max) = self.level_range()?;
        let formatter = self.formatter()?;
        let sink: Arc<dyn Sink> = match self.kind {
            SinkKind::Console => Arc::new(
                ConsoleSink::new()
                    .with_shared_formatter(formatter)
                    .with_timestamp(self.timestamp.provider())
                    .with_range(min, max),
            ),
            SinkKind::File => {
                let path = self
                    .path
                    .as_ref()
                    .ok_or_else(|| KnightLogError::config("file sink requires a path"))?;
                Arc::new(
                    FileSink::new(path)?
                        .with_shared_formatter(formatter)
                        .with_timestamp(self.timestamp.provider())
                        .with_range(min, max),
                )
            }
        };
        Ok(sink)
    }
}

/// 用于从 TOML 文件加载 `LoggerConfig` 的辅助函数。
pub fn load_config_from_file(path: &Path) -> Result<LoggerConfig> {
    if !path.exists() {
        return Err(KnightLogError::ConfigFileMissing(
            path.to_string_lossy().into_owned(),
        ));
    }

    let config_str = std::fs::read_to_string(path)?;
    load_config_from_str(&config_str)
}

/// 用于从 TOML 字符串加载 `LoggerConfig` 的辅助函数。
pub fn load_config_from_str(config_str: &str) -> Result<LoggerConfig> {
    Ok(toml::from_str(config_str)?)
}

/// 验证配置的有效性。
pub fn validate_config(config: &LoggerConfig) -> Result<()> {
    for (index, sink) in config.sinks.iter().enumerate() {
        let (min, max) = sink.level_range()?;
        if max.is_some_and(|max| min > max) {
            tracing::warn!(
                "Sink #{} has min_level {} above max_level; it will ignore every message",
                index,
                min
            );
        }

        match (sink.kind, &sink.path) {
            (SinkKind::File, None) => {
                return Err(KnightLogError::config(format!(
                    "sink #{}: file sink requires a path",
                    index
                )))
            }
            (SinkKind::File, Some(path)) if path.as_os_str().is_empty() => {
                return Err(KnightLogError::config(format!(
                    "sink #{}: file path must not be empty",
                    index
                )))
            }
            (SinkKind::Console, Some(_)) => {
                return Err(KnightLogError::config(format!(
                    "sink #{}: path is only valid for file sinks",
                    index
                )))
            }
            _ => {}
        }

        if let TimestampConfig::Custom(format) = &sink.timestamp {
            if format.trim().is_empty() {
                return Err(KnightLogError::config(format!(
                    "sink #{}: custom timestamp format must not be empty",
                    index
                )));
            }
            if !timestamp::is_valid_format(format) {
                return Err(KnightLogError::config(format!(
                    "sink #{}: invalid custom timestamp format {:?}",
                    index, format
                )));
            }
        }

        LevelColors::default().merge_names(&sink.level_colors)?;
    }

    Ok(())
}

/// 按配置构建日志器。
pub fn build_logger(config: &LoggerConfig) -> Result<Logger> {
    validate_config(config)?;

    let mut logger = Logger::new().with_error_strategy(config.error_strategy);
    for sink in &config.sinks {
        logger = logger.attach_shared(sink.build()?);
    }
    tracing::debug!("Logger built with {} sinks", logger.sinks().len());
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FULL_CONFIG: &str = r##"
error_strategy = "log_and_continue"

[[sinks]]
type = "console"
min_level = "info"
max_level = "error"
colors = false
timestamp = { custom = "%H:%M" }

[sinks.level_colors]
warning = "#ffdb58"
info = "bright_blue"

[[sinks]]
type = "file"
path = "app.log"
format = "json"
timestamp = "iso"
"##;

    #[test]
    fn test_load_full_config() {
        let config = load_config_from_str(FULL_CONFIG).unwrap();
        assert_eq!(config.error_strategy, DispatchErrorStrategy::LogAndContinue);
        assert_eq!(config.sinks.len(), 2);

        let console = &config.sinks[0];
        assert_eq!(console.kind, SinkKind::Console);
        assert!(!console.colors);
        assert!(console.align);
        assert_eq!(console.timestamp, TimestampConfig::Custom("%H:%M".to_string()));
        assert_eq!(
            console.level_range().unwrap(),
            (LoggingLevel::Info, Some(LoggingLevel::Error))
        );
        assert_eq!(console.level_colors.len(), 2);

        let file = &config.sinks[1];
        assert_eq!(file.kind, SinkKind::File);
        assert_eq!(file.format, OutputFormat::Json);
        assert_eq!(file.timestamp, TimestampConfig::Iso);
        assert_eq!(file.path.as_deref(), Some(Path::new("app.log")));

        validate_config(&config).unwrap();
    }

    #[test]
    fn test_empty_config_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.error_strategy, DispatchErrorStrategy::StopOnError);
        assert!(build_logger(&config).unwrap().sinks().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_config_from_file(Path::new("/nonexistent/knight_log.toml")).unwrap_err();
        assert!(matches!(err, KnightLogError::ConfigFileMissing(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = load_config_from_str("[[sinks]]\ntype = \"console\"\nlevel = \"info\"\n").unwrap_err();
        assert!(matches!(err, KnightLogError::TomlError { .. }));
    }

    #[test]
    fn test_unknown_level() {
        let config = load_config_from_str("[[sinks]]\ntype = \"console\"\nmin_level = \"verbose\"\n").unwrap();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, KnightLogError::UnknownLevel(ref level) if level == "verbose"));
    }

    #[test]
    fn test_file_sink_requires_path() {
        let config = load_config_from_str("[[sinks]]\ntype = \"file\"\n").unwrap();
        assert!(matches!(
            validate_config(&config).unwrap_err(),
            KnightLogError::ConfigError(_)
        ));

        let config = load_config_from_str("[[sinks]]\ntype = \"console\"\npath = \"x.log\"\n").unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_custom_timestamp() {
        let config = load_config_from_str(
            "[[sinks]]\ntype = \"console\"\ntimestamp = { custom = \"%Q\" }\n",
        )
        .unwrap();
        assert!(matches!(
            validate_config(&config).unwrap_err(),
            KnightLogError::ConfigError(_)
        ));
        assert!(Logger::from_config(&config).is_err());
    }

    #[test]
    fn test_invalid_level_color() {
        let config = load_config_from_str(
            "[[sinks]]\ntype = \"console\"\n[sinks.level_colors]\ninfo = \"not-a-color\"\n",
        )
        .unwrap();
        assert!(matches!(
            validate_config(&config).unwrap_err(),
            KnightLogError::ConfigError(_)
        ));
    }

    #[test]
    fn test_build_logger_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("app.log");
        let toml = format!(
            "[[sinks]]\ntype = \"file\"\npath = '{}'\nmin_level = \"warning\"\ntimestamp = {{ custom = \"static\" }}\n",
            path.display()
        );

        let config = load_config_from_str(&toml).unwrap();
        let logger = Logger::from_config(&config).unwrap();
        assert_eq!(logger.sinks().len(), 1);
        assert_eq!(logger.sinks()[0].name(), "file");

        logger.info("dropped", &[]).unwrap();
        logger.warning("kept", &[]).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[static | Warning ]: kept\n"
        );
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("knight_log.toml");
        fs::write(&path, FULL_CONFIG).unwrap();

        let config = load_config_from_file(&path).unwrap();
        assert_eq!(config.sinks.len(), 2);
    }
}
