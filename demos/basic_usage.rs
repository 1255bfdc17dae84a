//! KnightLog 基本使用示例
//! 展示日志器、控制台 sink、文件 sink 以及各种参数值的渲染

use anyhow::Result;
use knight_log::{args, array, object, ConsoleSink, FileSink, JsonFormatter, Logger, LoggingLevel, Value};
use std::env;

fn main() -> Result<()> {
    println!("\n=== 示例1: 所有级别 ===");
    let logger = Logger::new().attach(ConsoleSink::new());
    logger.log("Example message", &[])?;
    logger.debug("Example message", &[])?;
    logger.info("Example message", &[])?;
    logger.success("Example message", &[])?;
    logger.warning("Example message", &[])?;
    logger.error("Example message", &[])?;
    logger.critical("Example message", &[])?;
    logger.fatal("Example message", &[])?;

    println!("\n=== 示例2: 模板参数 ===");
    logger.info("Example message with {msg} and {favNum}", &args!["My message", 1337])?;
    logger.debug("My object: {obj}", &[object! { "foo" => "bar", "baz" => "qux" }])?;
    logger.log("My array: {arr}", &[array!["string", 1337, true, Value::Null]])?;
    logger.critical(
        "Lots of data:\n{data}",
        &[object! {
            "list" => (1..=25).collect::<Vec<i64>>(),
            "deep" => object! { "object" => object! { "with" => "a fairly long string value" } },
        }],
    )?;

    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
    logger.error("Failed to load: {err}", &[Value::error(&err)])?;

    println!("\n=== 示例3: 级别范围与文件输出 ===");
    let log_path = env::temp_dir().join("knight_log_demo").join("app.log");
    let logger = Logger::new()
        .attach(ConsoleSink::new().with_range(LoggingLevel::Warning, None))
        .attach(FileSink::new(&log_path)?)
        .attach(FileSink::new(log_path.with_extension("json"))?.with_formatter(JsonFormatter::new()));

    logger.info("Only in the files", &[])?;
    logger.warning("Everywhere: {count} retries left", &args![2])?;
    println!("文件输出: {}", log_path.display());

    println!("\n=== 示例4: 诊断信息 ===");
    let snapshot = logger.diagnostics();
    println!(
        "dispatched={} writes={} filtered={} errors={}",
        snapshot.messages_dispatched, snapshot.sink_writes, snapshot.messages_filtered, snapshot.sink_errors
    );

    Ok(())
}
