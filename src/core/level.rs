//! 日志级别定义
//!
//! `LoggingLevel` 按声明顺序全序排列 (0..7)，级别范围过滤依赖此顺序。

use crate::error::{KnightLogError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 日志级别，按严重程度从低到高排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LoggingLevel {
    Log = 0,
    Debug = 1,
    Info = 2,
    Success = 3,
    Warning = 4,
    Error = 5,
    Critical = 6,
    Fatal = 7,
}

impl LoggingLevel {
    /// 全部级别，升序
    pub const ALL: [LoggingLevel; 8] = [
        LoggingLevel::Log,
        LoggingLevel::Debug,
        LoggingLevel::Info,
        LoggingLevel::Success,
        LoggingLevel::Warning,
        LoggingLevel::Error,
        LoggingLevel::Critical,
        LoggingLevel::Fatal,
    ];

    /// 最低级别
    pub const MIN: LoggingLevel = LoggingLevel::Log;

    /// 最高级别
    pub const MAX: LoggingLevel = LoggingLevel::Fatal;

    /// 级别的序号
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// 级别名称，例如 `Info`、`Critical`
    pub fn name(self) -> &'static str {
        match self {
            LoggingLevel::Log => "Log",
            LoggingLevel::Debug => "Debug",
            LoggingLevel::Info => "Info",
            LoggingLevel::Success => "Success",
            LoggingLevel::Warning => "Warning",
            LoggingLevel::Error => "Error",
            LoggingLevel::Critical => "Critical",
            LoggingLevel::Fatal => "Fatal",
        }
    }

    /// `min..=max` 之间的所有级别，升序；`min > max` 时为空
    pub fn range(min: LoggingLevel, max: LoggingLevel) -> Vec<LoggingLevel> {
        Self::ALL
            .iter()
            .copied()
            .filter(|level| *level >= min && *level <= max)
            .collect()
    }
}

impl fmt::Display for LoggingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for LoggingLevel {
    type Error = KnightLogError;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| KnightLogError::unknown_level(value.to_string()))
    }
}

impl FromStr for LoggingLevel {
    type Err = KnightLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(LoggingLevel::Log),
            "debug" => Ok(LoggingLevel::Debug),
            "info" => Ok(LoggingLevel::Info),
            "success" => Ok(LoggingLevel::Success),
            "warning" | "warn" => Ok(LoggingLevel::Warning),
            "error" => Ok(LoggingLevel::Error),
            "critical" => Ok(LoggingLevel::Critical),
            "fatal" => Ok(LoggingLevel::Fatal),
            _ => Err(KnightLogError::unknown_level(s)),
        }
    }
}

// JSON 输出中级别以序号表示
impl Serialize for LoggingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.ordinal())
    }
}

// 配置文件中级别以名称书写
impl<'de> Deserialize<'de> for LoggingLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        for pair in LoggingLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].ordinal() + 1, pair[1].ordinal());
        }
        assert_eq!(LoggingLevel::MIN.ordinal(), 0);
        assert_eq!(LoggingLevel::MAX.ordinal(), 7);
    }

    #[test]
    fn test_level_range() {
        assert_eq!(
            LoggingLevel::range(LoggingLevel::Warning, LoggingLevel::Fatal),
            vec![
                LoggingLevel::Warning,
                LoggingLevel::Error,
                LoggingLevel::Critical,
                LoggingLevel::Fatal
            ]
        );
        assert_eq!(
            LoggingLevel::range(LoggingLevel::Info, LoggingLevel::Info),
            vec![LoggingLevel::Info]
        );
        assert!(LoggingLevel::range(LoggingLevel::Error, LoggingLevel::Debug).is_empty());
    }

    #[test]
    fn test_level_conversions() {
        assert_eq!(LoggingLevel::try_from(4).unwrap(), LoggingLevel::Warning);
        let err = LoggingLevel::try_from(8).unwrap_err();
        assert!(matches!(err, KnightLogError::UnknownLevel(_)));

        assert_eq!("WARN".parse::<LoggingLevel>().unwrap(), LoggingLevel::Warning);
        assert_eq!("critical".parse::<LoggingLevel>().unwrap(), LoggingLevel::Critical);
        assert!("verbose".parse::<LoggingLevel>().is_err());
    }

    #[test]
    fn test_level_serde() {
        assert_eq!(serde_json::to_string(&LoggingLevel::Info).unwrap(), "2");
        let level: LoggingLevel = serde_json::from_str("\"Success\"").unwrap();
        assert_eq!(level, LoggingLevel::Success);
        assert!(serde_json::from_str::<LoggingLevel>("\"loud\"").is_err());
    }

    #[test]
    fn test_level_names_fit_alignment() {
        let widest = LoggingLevel::ALL.iter().map(|l| l.name().len()).max();
        assert_eq!(widest, Some(8));
        assert_eq!(LoggingLevel::Info.to_string(), "Info");
    }
}
