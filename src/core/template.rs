//! 消息模板解析
//!
//! 模板中的 `{name}` 占位符按出现顺序依次消费位置参数。解析分两步：
//! [`parse_template`] 建立名称到参数的映射，[`compile_message`] 将格式化后的值
//! 替换回模板。

use crate::core::value::{Value, ValueMap};
use crate::error::{KnightLogError, Result};

/// 一次日志调用的模板参数：占位符名称 → 原始参数值
pub type MessageTemplateParams = ValueMap;

static UNDEFINED: Value = Value::Undefined;

/// 模板片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// 按从左到右的顺序切分模板
///
/// 占位符为 `{` + 至少一个非 `}` 字符 + `}`；`{}` 和未闭合的 `{` 视为普通文本。
fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(offset) = template[cursor..].find('{') {
        let open = cursor + offset;
        let Some(len) = template[open + 1..].find('}') else {
            break;
        };
        let close = open + 1 + len;
        if len == 0 {
            cursor = close + 1;
            continue;
        }
        if literal_start < open {
            out.push(Segment::Literal(&template[literal_start..open]));
        }
        out.push(Segment::Placeholder(&template[open + 1..close]));
        cursor = close + 1;
        literal_start = cursor;
    }

    if literal_start < template.len() {
        out.push(Segment::Literal(&template[literal_start..]));
    }
    out
}

/// 模板中的占位符名称，按出现顺序（可重复）
pub fn placeholders(template: &str) -> Vec<&str> {
    segments(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// 从模板中提取占位符名称，并与位置参数逐一配对
///
/// 每个占位符（包括重复的名称）消费下一个未使用的参数；同名占位符以最后一次
/// 出现的参数为准。多余的参数被忽略。
///
/// # 错误
///
/// 占位符没有对应参数时返回 [`KnightLogError::MissingParameter`]。
pub fn parse_template(template: &str, args: &[Value]) -> Result<MessageTemplateParams> {
    let mut params = MessageTemplateParams::new();
    let mut remaining = args.iter();

    for name in placeholders(template) {
        let value = remaining
            .next()
            .ok_or_else(|| KnightLogError::missing_parameter(name))?;
        params.insert(name, value.clone());
    }

    Ok(params)
}

/// 将模板中的每个占位符替换为 `format_value(params[name])`
///
/// 不再校验参数；名称不在 `params` 中时以 [`Value::Undefined`] 调用格式化函数。
pub fn compile_message<F>(template: &str, params: &MessageTemplateParams, mut format_value: F) -> String
where
    F: FnMut(&Value) -> String,
{
    let mut message = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => message.push_str(text),
            Segment::Placeholder(name) => {
                let value = params.get(name).unwrap_or(&UNDEFINED);
                message.push_str(&format_value(value));
            }
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use proptest::prelude::*;

    fn plain(value: &Value) -> String {
        value.scalar_text().unwrap_or_default()
    }

    #[test]
    fn test_parse_pairs_positionally() {
        let params = parse_template(
            "Example message with {msg} and {favNum}",
            &args!["My message", 1337],
        )
        .unwrap();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["msg", "favNum"]);
        assert_eq!(params.get("favNum"), Some(&Value::Integer(1337)));
    }

    #[test]
    fn test_parse_missing_parameter() {
        let err = parse_template("{a} and {b}", &args![1]).unwrap_err();
        match err {
            KnightLogError::MissingParameter { key } => assert_eq!(key, "b"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_repeated_name_consumes_each_argument() {
        let params = parse_template("{x} then {x}", &args![1, 2]).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("x"), Some(&Value::Integer(2)));

        assert!(parse_template("{x} then {x}", &args![1]).is_err());
    }

    #[test]
    fn test_no_placeholders_ignores_extra_arguments() {
        let params = parse_template("Hello World", &args![1, "two"]).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_literal_braces() {
        assert!(placeholders("empty {} braces").is_empty());
        assert!(placeholders("unclosed {brace").is_empty());
        assert_eq!(placeholders("{a}{b}"), vec!["a", "b"]);
        assert_eq!(placeholders("nested {a{b}"), vec!["a{b"]);
    }

    #[test]
    fn test_compile_message() {
        let params = parse_template("{greeting}, {name}!", &args!["Hello", "World"]).unwrap();
        assert_eq!(compile_message("{greeting}, {name}!", &params, plain), "Hello, World!");
        assert_eq!(compile_message("{} and {open", &params, plain), "{} and {open");
    }

    #[test]
    fn test_compile_missing_name_uses_undefined() {
        let params = MessageTemplateParams::new();
        assert_eq!(compile_message("value: {nope}", &params, plain), "value: undefined");
    }

    #[test]
    fn test_unicode_template() {
        let params = parse_template("用户 {名字} 登录", &args!["小明"]).unwrap();
        assert_eq!(compile_message("用户 {名字} 登录", &params, plain), "用户 小明 登录");
    }

    proptest! {
        #[test]
        fn prop_distinct_placeholders_map_in_order(
            names in proptest::collection::btree_set("[a-z]{1,6}", 1..6),
            extra in 0usize..3,
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let template = names.iter().map(|n| format!("<{{{n}}}>")).collect::<Vec<_>>().join(" ");
            let args: Vec<Value> = (0..names.len() + extra).map(|i| Value::from(i as i64)).collect();

            let params = parse_template(&template, &args).unwrap();
            prop_assert_eq!(params.len(), names.len());
            for (i, name) in names.iter().enumerate() {
                prop_assert_eq!(params.get(name), Some(&Value::Integer(i as i64)));
            }
        }

        #[test]
        fn prop_too_few_arguments_fail(
            names in proptest::collection::vec("[a-z]{1,6}", 1..6),
            missing in 1usize..6,
        ) {
            let template = names.iter().map(|n| format!("{{{n}}}")).collect::<String>();
            let supplied = names.len().saturating_sub(missing);
            let args: Vec<Value> = (0..supplied).map(|i| Value::from(i as i64)).collect();

            let is_missing = matches!(
                parse_template(&template, &args),
                Err(KnightLogError::MissingParameter { .. })
            );
            prop_assert!(is_missing);
        }
    }
}
