//! 文本格式化器
//!
//! 输出形如 `[TIMESTAMP | LEVEL   ]: MESSAGE` 的人类可读文本。

use crate::core::template::compile_message;
use crate::error::{KnightLogError, Result};
use crate::formatters::colors::{LevelColors, ParamColors, GRAY, TIMESTAMP_COLOR};
use crate::formatters::pretty::ValueFormatter;
use crate::formatters::{Formatter, LoggingFormatterData};
use colored::{Color, Colorize};
use std::sync::atomic::{AtomicBool, Ordering};

/// 级别名称的对齐宽度（最长的级别名 `Critical` 为 8 个字符）
pub const LEVEL_ALIGN_WIDTH: usize = 8;

/// `TextFormatter` 的选项
#[derive(Debug, Clone, PartialEq)]
pub struct TextFormatterOptions {
    pub colors_enabled: bool,
    pub align: bool,
    pub levels: LevelColors,
    pub params: ParamColors,
    pub timestamp: Color,
}

impl Default for TextFormatterOptions {
    fn default() -> Self {
        Self {
            colors_enabled: true,
            align: true,
            levels: LevelColors::default(),
            params: ParamColors::default(),
            timestamp: TIMESTAMP_COLOR,
        }
    }
}

/// 默认的控制台格式化器
#[derive(Debug)]
pub struct TextFormatter {
    colors_enabled: AtomicBool,
    align: bool,
    levels: LevelColors,
    values: ValueFormatter,
    timestamp_color: Color,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::with_options(TextFormatterOptions::default())
    }

    pub fn with_options(options: TextFormatterOptions) -> Self {
        Self {
            colors_enabled: AtomicBool::new(options.colors_enabled),
            align: options.align,
            levels: options.levels,
            values: ValueFormatter::new(options.params),
            timestamp_color: options.timestamp,
        }
    }

    /// 设置是否按 [`LEVEL_ALIGN_WIDTH`] 补齐级别名称
    pub fn with_align(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    /// 关闭颜色输出（可用于已共享的实例）
    pub fn no_colors(&self) -> &Self {
        self.colors_enabled.store(false, Ordering::Relaxed);
        self
    }

    fn render(&self, data: &LoggingFormatterData<'_>, colors: bool) -> Result<String> {
        let name = data.level.name();
        let padding = if self.align {
            " ".repeat(LEVEL_ALIGN_WIDTH.saturating_sub(name.len()))
        } else {
            String::new()
        };
        let message = compile_message(data.template, data.params, |value| {
            self.values.format(value, colors)
        });

        if !colors {
            return Ok(format!("[{} | {}{}]: {}", data.timestamp, name, padding, message));
        }

        let level_color = self
            .levels
            .get(data.level)
            .ok_or_else(|| KnightLogError::unsupported_layout(name.to_lowercase()))?;
        Ok(format!(
            "{}{} {} {}{}{} {}",
            "[".color(GRAY),
            data.timestamp.color(self.timestamp_color),
            "|".color(GRAY),
            name.color(level_color).bold(),
            padding,
            "]:".color(GRAY),
            message
        ))
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn format(&self, data: &LoggingFormatterData<'_>) -> Result<String> {
        self.render(data, self.colors_enabled())
    }

    fn format_plain(&self, data: &LoggingFormatterData<'_>) -> Result<String> {
        self.render(data, false)
    }

    fn no_colors(&self) {
        TextFormatter::no_colors(self);
    }

    fn colors_enabled(&self) -> bool {
        self.colors_enabled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::LoggingLevel;
    use crate::core::template::{parse_template, MessageTemplateParams};
    use crate::{args, object};

    const TIMESTAMP: &str = "2024-01-01 12:00:00";

    fn data<'a>(
        level: LoggingLevel,
        template: &'a str,
        params: &'a MessageTemplateParams,
    ) -> LoggingFormatterData<'a> {
        LoggingFormatterData {
            level,
            timestamp: TIMESTAMP,
            template,
            params,
        }
    }

    #[test]
    fn test_plain_hello_world() {
        let formatter = TextFormatter::new();
        formatter.no_colors();
        let params = MessageTemplateParams::new();
        let line = formatter
            .format(&data(LoggingLevel::Info, "Hello World", &params))
            .unwrap();
        assert_eq!(line, "[2024-01-01 12:00:00 | Info    ]: Hello World");
    }

    #[test]
    fn test_alignment_for_every_level() {
        let formatter = TextFormatter::new();
        let params = MessageTemplateParams::new();
        let expected = [
            (LoggingLevel::Log, "Log     "),
            (LoggingLevel::Debug, "Debug   "),
            (LoggingLevel::Info, "Info    "),
            (LoggingLevel::Success, "Success "),
            (LoggingLevel::Warning, "Warning "),
            (LoggingLevel::Error, "Error   "),
            (LoggingLevel::Critical, "Critical"),
            (LoggingLevel::Fatal, "Fatal   "),
        ];
        for (level, column) in expected {
            let line = formatter.format_plain(&data(level, "x", &params)).unwrap();
            assert_eq!(line, format!("[{TIMESTAMP} | {column}]: x"));
        }
    }

    #[test]
    fn test_non_aligned() {
        let formatter = TextFormatter::new().with_align(false);
        let params = MessageTemplateParams::new();
        let line = formatter
            .format_plain(&data(LoggingLevel::Info, "Example message", &params))
            .unwrap();
        assert_eq!(line, "[2024-01-01 12:00:00 | Info]: Example message");
    }

    #[test]
    fn test_template_parameters() {
        let formatter = TextFormatter::new();
        let template = "Example message with {msg} and {favNum}";
        let params = parse_template(template, &args!["My message", 1337]).unwrap();
        let line = formatter
            .format_plain(&data(LoggingLevel::Info, template, &params))
            .unwrap();
        assert!(line.ends_with("]: Example message with My message and 1337"));

        let template = "My object: {obj}";
        let params = parse_template(template, &[object! { "foo" => "bar", "baz" => "qux" }]).unwrap();
        let line = formatter
            .format_plain(&data(LoggingLevel::Debug, template, &params))
            .unwrap();
        assert!(line.ends_with(r#"]: My object: {foo: "bar", baz: "qux"}"#));
    }

    #[test]
    fn test_format_plain_keeps_colors_setting() {
        let formatter = TextFormatter::new();
        let params = MessageTemplateParams::new();
        formatter.format_plain(&data(LoggingLevel::Info, "x", &params)).unwrap();
        assert!(Formatter::colors_enabled(&formatter));
        formatter.no_colors();
        assert!(!Formatter::colors_enabled(&formatter));
    }

    #[test]
    fn test_colored_output_contains_text() {
        let formatter = TextFormatter::new();
        let params = parse_template("value {v}", &args![42]).unwrap();
        let line = formatter
            .format(&data(LoggingLevel::Warning, "value {v}", &params))
            .unwrap();
        assert!(line.contains("Warning"));
        assert!(line.contains(TIMESTAMP));
        assert!(line.contains("42"));
    }

    /// 在作用域内强制 `colored` 输出转义序列，离开时恢复
    struct ForceColors;

    impl ForceColors {
        fn new() -> Self {
            colored::control::set_override(true);
            ForceColors
        }
    }

    impl Drop for ForceColors {
        fn drop(&mut self) {
            colored::control::unset_override();
        }
    }

    #[test]
    fn test_colored_layout_exact() {
        let _colors = ForceColors::new();
        let formatter = TextFormatter::with_options(TextFormatterOptions {
            levels: LevelColors::default()
                .with(LoggingLevel::Info, Color::Cyan)
                .with(LoggingLevel::Critical, Color::Red),
            timestamp: Color::Blue,
            ..Default::default()
        });
        let params = MessageTemplateParams::new();

        let info = formatter.format(&data(LoggingLevel::Info, "x", &params)).unwrap();
        assert_eq!(
            info,
            "\u{1b}[90m[\u{1b}[0m\u{1b}[34m2024-01-01 12:00:00\u{1b}[0m \u{1b}[90m|\u{1b}[0m \
             \u{1b}[1;36mInfo\u{1b}[0m    \u{1b}[90m]:\u{1b}[0m x"
        );

        let critical = formatter
            .format(&data(LoggingLevel::Critical, "x", &params))
            .unwrap();
        assert_eq!(
            critical,
            "\u{1b}[90m[\u{1b}[0m\u{1b}[34m2024-01-01 12:00:00\u{1b}[0m \u{1b}[90m|\u{1b}[0m \
             \u{1b}[1;31mCritical\u{1b}[0m\u{1b}[90m]:\u{1b}[0m x"
        );
    }

    #[test]
    fn test_missing_level_color_is_unsupported_layout() {
        let formatter = TextFormatter::with_options(TextFormatterOptions {
            levels: LevelColors::default().without(LoggingLevel::Fatal),
            ..Default::default()
        });
        let params = MessageTemplateParams::new();

        let err = formatter
            .format(&data(LoggingLevel::Fatal, "boom", &params))
            .unwrap_err();
        assert!(matches!(err, KnightLogError::UnsupportedLayout(ref level) if level == "fatal"));

        // 无颜色时不需要级别颜色
        assert!(formatter
            .format_plain(&data(LoggingLevel::Fatal, "boom", &params))
            .is_ok());
    }

    #[test]
    fn test_idempotent() {
        let formatter = TextFormatter::new();
        let template = "{a} {b}";
        let params = parse_template(template, &args![1.5, "x"]).unwrap();
        let first = formatter.format(&data(LoggingLevel::Error, template, &params)).unwrap();
        let second = formatter.format(&data(LoggingLevel::Error, template, &params)).unwrap();
        assert_eq!(first, second);
    }
}
