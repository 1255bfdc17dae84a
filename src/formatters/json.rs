//! JSON 格式化器
//!
//! 每条消息输出为一行 JSON：
//! `{"message": ..., "template": ..., "params": ..., "level": <序号>, "timestamp": ...}`。
//! 不支持颜色。

use crate::core::level::LoggingLevel;
use crate::core::template::{compile_message, MessageTemplateParams};
use crate::core::value::Value;
use crate::error::Result;
use crate::formatters::{Formatter, LoggingFormatterData};
use serde::Serialize;

#[derive(Serialize)]
struct JsonRecord<'a> {
    message: String,
    template: &'a str,
    params: &'a MessageTemplateParams,
    level: LoggingLevel,
    timestamp: &'a str,
}

/// 结构化 JSON 格式化器
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

/// 以 JSON 文本替换占位符；未绑定的占位符写作 `undefined`
fn json_param(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        other => other.to_json().unwrap_or_else(|_| "null".to_string()),
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, data: &LoggingFormatterData<'_>) -> Result<String> {
        let record = JsonRecord {
            message: compile_message(data.template, data.params, json_param),
            template: data.template,
            params: data.params,
            level: data.level,
            timestamp: data.timestamp,
        };
        Ok(serde_json::to_string(&record)?)
    }
}
