//! 参数值格式化器
//!
//! 按值类型渲染模板参数。数组和对象递归渲染，当任一元素的 JSON 长度或
//! 元素数量超过 [`MAX_INLINE_SIZE`] 时展开为多行，每层缩进两个空格。
//!
//! 不做循环检测；`Value` 是拥有所有权的树，无法构造自引用结构。

use crate::core::value::{Value, ValueMap};
use crate::formatters::colors::ParamColors;
use colored::Colorize;

/// 单行布局的大小阈值（元素 JSON 长度与元素数量共用），固定值
///
/// JSON 长度按 UTF-16 码元计数，BMP 以外的字符（如 emoji）计为 2。
pub const MAX_INLINE_SIZE: usize = 20;

const INDENT: &str = "  ";

/// 类型分派的值格式化器
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueFormatter {
    palette: ParamColors,
}

impl ValueFormatter {
    pub fn new(palette: ParamColors) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &ParamColors {
        &self.palette
    }

    /// 渲染顶层参数值；顶层字符串不加引号
    pub fn format(&self, value: &Value, colors_enabled: bool) -> String {
        match value {
            Value::Array(items) => self.format_array(items, colors_enabled),
            Value::Object(map) => self.format_object(map, colors_enabled),
            scalar => {
                let text = scalar.scalar_text().unwrap_or_default();
                self.paint(scalar.kind(), &text, colors_enabled)
            }
        }
    }

    /// 渲染数组/对象内部的值；字符串和 symbol 加引号
    fn format_nested(&self, value: &Value, colors_enabled: bool) -> String {
        let rendered = match value {
            Value::String(_) | Value::Symbol(_) => {
                let text = format!("\"{}\"", value.scalar_text().unwrap_or_default());
                self.paint(value.kind(), &text, colors_enabled)
            }
            other => self.format(other, colors_enabled),
        };
        rendered.replace('\n', &format!("\n{INDENT}"))
    }

    fn format_array(&self, items: &[Value], colors_enabled: bool) -> String {
        let entries: Vec<String> = items
            .iter()
            .map(|item| self.format_nested(item, colors_enabled))
            .collect();
        let longest = items.iter().map(json_len).max().unwrap_or(0);
        layout(('[', ']'), &entries, longest)
    }

    fn format_object(&self, map: &ValueMap, colors_enabled: bool) -> String {
        let entries: Vec<String> = map
            .iter()
            .map(|(key, value)| {
                let key = if colors_enabled {
                    key.color(self.palette.object_key).to_string()
                } else {
                    key.to_string()
                };
                format!("{}: {}", key, self.format_nested(value, colors_enabled))
            })
            .collect();
        let longest = map.values().map(json_len).max().unwrap_or(0);
        layout(('{', '}'), &entries, longest)
    }

    fn paint(&self, kind: &str, text: &str, colors_enabled: bool) -> String {
        if colors_enabled {
            self.palette.paint(kind, text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// 原始值 JSON 序列化后的 UTF-16 码元数
fn json_len(value: &Value) -> usize {
    serde_json::to_string(value)
        .map(|json| json.encode_utf16().count())
        .unwrap_or(0)
}

fn layout((open, close): (char, char), entries: &[String], longest: usize) -> String {
    if longest > MAX_INLINE_SIZE || entries.len() > MAX_INLINE_SIZE {
        let separator = format!(",\n{INDENT}");
        format!("{open}\n{INDENT}{}\n{close}", entries.join(&separator))
    } else {
        format!("{open}{}{close}", entries.join(", "))
    }
}
