//! 颜色配置
//!
//! 文本格式化器使用的级别颜色与参数类型颜色，基于 `colored` crate。

use crate::core::level::LoggingLevel;
use crate::error::{KnightLogError, Result};
use colored::{Color, ColoredString, Colorize};
use std::collections::HashMap;
use std::str::FromStr;

/// 括号与分隔符使用的中性灰色
pub const GRAY: Color = Color::BrightBlack;

/// 时间戳默认颜色
pub const TIMESTAMP_COLOR: Color = Color::TrueColor {
    r: 140,
    g: 140,
    b: 170,
};

/// 级别 → 颜色
///
/// 映射可以不完整；启用颜色时遇到未配置的级别，格式化返回
/// [`KnightLogError::UnsupportedLayout`]。
#[derive(Debug, Clone, PartialEq)]
pub struct LevelColors {
    colors: HashMap<LoggingLevel, Color>,
}

impl LevelColors {
    /// 不含任何颜色的映射
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// 设置某个级别的颜色
    pub fn with(mut self, level: LoggingLevel, color: Color) -> Self {
        self.colors.insert(level, color);
        self
    }

    /// 移除某个级别的颜色
    pub fn without(mut self, level: LoggingLevel) -> Self {
        self.colors.remove(&level);
        self
    }

    pub fn get(&self, level: LoggingLevel) -> Option<Color> {
        self.colors.get(&level).copied()
    }

    /// 用级别名称 → 颜色名称的配置覆盖当前映射
    pub fn merge_names(mut self, names: &HashMap<String, String>) -> Result<Self> {
        for (level, color) in names {
            let level: LoggingLevel = level.parse()?;
            self.colors.insert(level, parse_color(color)?);
        }
        Ok(self)
    }
}

impl Default for LevelColors {
    fn default() -> Self {
        Self::empty()
            .with(LoggingLevel::Log, Color::White)
            .with(LoggingLevel::Debug, GRAY)
            .with(LoggingLevel::Info, Color::Cyan)
            .with(LoggingLevel::Success, Color::Green)
            .with(
                LoggingLevel::Warning,
                Color::TrueColor {
                    r: 255,
                    g: 219,
                    b: 88,
                },
            )
            .with(LoggingLevel::Error, Color::Red)
            .with(
                LoggingLevel::Critical,
                Color::TrueColor {
                    r: 255,
                    g: 115,
                    b: 60,
                },
            )
            .with(LoggingLevel::Fatal, Color::Red)
    }
}

/// 插值参数按类型着色
#[derive(Debug, Clone, PartialEq)]
pub struct ParamColors {
    pub string: Color,
    pub number: Color,
    pub integer: Color,
    pub bigint: Color,
    pub boolean: Color,
    pub undefined: Color,
    pub null: Color,
    pub function: Color,
    pub symbol: Color,
    pub object_key: Color,
    pub date: Color,
    pub exception: Color,
}

impl Default for ParamColors {
    fn default() -> Self {
        Self {
            string: Color::Cyan,
            number: Color::Magenta,
            integer: Color::Yellow,
            bigint: Color::Yellow,
            boolean: Color::BrightBlue,
            undefined: GRAY,
            null: GRAY,
            function: Color::Blue,
            symbol: Color::BrightMagenta,
            object_key: GRAY,
            date: Color::Blue,
            exception: Color::Red,
        }
    }
}

impl ParamColors {
    /// 按值类型着色；`null` 与 `undefined` 额外使用斜体
    pub fn paint(&self, kind: &str, text: &str) -> ColoredString {
        match kind {
            "string" => text.color(self.string),
            "number" => text.color(self.number),
            "integer" => text.color(self.integer),
            "bigint" => text.color(self.bigint),
            "boolean" => text.color(self.boolean),
            "undefined" => text.color(self.undefined).italic(),
            "null" => text.color(self.null).italic(),
            "function" => text.color(self.function),
            "symbol" => text.color(self.symbol),
            "date" => text.color(self.date),
            "exception" => text.color(self.exception),
            _ => text.normal(),
        }
    }
}

/// 解析颜色名称（`red`、`bright blue` 等）或 `#rrggbb`
pub fn parse_color(name: &str) -> Result<Color> {
    let trimmed = name.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        };
        return match (hex.len(), channel(0..2), channel(2..4), channel(4..6)) {
            (6, Some(r), Some(g), Some(b)) => Ok(Color::TrueColor { r, g, b }),
            _ => Err(KnightLogError::config(format!("Invalid color: {}", name))),
        };
    }
    Color::from_str(&trimmed.replace(['_', '-'], " "))
        .map_err(|_| KnightLogError::config(format!("Invalid color: {}", name)))
}
