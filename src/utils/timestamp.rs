//! 时间戳提供器
//!
//! 每个 sink 持有一个无参函数，在每条消息格式化前调用以获得时间戳字符串。

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, SecondsFormat, Utc};
use std::fmt::Write;
use std::sync::Arc;

/// 生成时间戳字符串的函数
pub type TimestampProvider = Arc<dyn Fn() -> String + Send + Sync>;

/// 本地时间 `YYYY-MM-DD HH:MM:SS`，sink 的默认值
pub fn default_timestamp() -> TimestampProvider {
    custom("%Y-%m-%d %H:%M:%S")
}

/// UTC ISO-8601 时间，毫秒精度，例如 `2024-01-01T12:00:00.000Z`
pub fn iso_timestamp() -> TimestampProvider {
    Arc::new(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// 本地日期 `YYYY-MM-DD`
pub fn date_timestamp() -> TimestampProvider {
    custom("%Y-%m-%d")
}

/// 本地时间 `HH:MM:SS`
pub fn time_timestamp() -> TimestampProvider {
    custom("%H:%M:%S")
}

/// strftime 格式是否可被 chrono 解析
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// 使用 strftime 格式的本地时间
///
/// 格式无法渲染时返回格式字符串本身。
pub fn custom(format: &str) -> TimestampProvider {
    let format = format.to_string();
    Arc::new(move || {
        let mut stamp = String::new();
        match write!(stamp, "{}", Local::now().format(&format)) {
            Ok(()) => stamp,
            Err(_) => format.clone(),
        }
    })
}

/// 始终返回同一字符串
pub fn fixed(text: &str) -> TimestampProvider {
    let text = text.to_string();
    Arc::new(move || text.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape() {
        let stamp = default_timestamp()();
        assert_eq!(stamp.len(), "2024-01-01 12:00:00".len());
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M:%S").is_ok());
    }

    #[test]
    fn test_iso_shape() {
        let stamp = iso_timestamp()();
        assert!(stamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }

    #[test]
    fn test_date_and_time_shapes() {
        assert!(chrono::NaiveDate::parse_from_str(&date_timestamp()(), "%Y-%m-%d").is_ok());
        assert!(chrono::NaiveTime::parse_from_str(&time_timestamp()(), "%H:%M:%S").is_ok());
    }

    #[test]
    fn test_invalid_custom_format_does_not_panic() {
        assert!(!is_valid_format("%Q"));
        assert!(is_valid_format("%Y-%m-%d %H:%M:%S%.3f"));
        assert_eq!(custom("%Q")(), "%Q");
    }

    #[test]
    fn test_fixed_and_custom() {
        assert_eq!(fixed("T0")(), "T0");
        assert_eq!(custom("static")(), "static");
    }
}
