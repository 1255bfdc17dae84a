//! 从配置文件加载 KnightLog 配置的示例
//! 这个示例展示了如何从 TOML 配置文件构建日志器

use anyhow::{Context, Result};
use knight_log::{args, load_config_from_file, load_config_from_str, object, validate_config, Logger};
use std::path::Path;

/// 创建示例配置文件内容
fn create_example_config() -> &'static str {
    r#"
error_strategy = "stop_on_error"

[[sinks]]
type = "console"
min_level = "info"
colors = false
align = false
"#
}

fn main() -> Result<()> {
    println!("\n=== 从字符串加载配置 ===");
    let config = load_config_from_str(create_example_config())?;
    validate_config(&config)?;
    let logger = Logger::from_config(&config)?;
    logger.debug("This is filtered by the console sink", &[])?;
    logger.info("Configured from a string with {count} sink", &args![logger.sinks().len()])?;

    println!("\n=== 从文件加载配置 ===");
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("knight_log.toml");
    let config = load_config_from_file(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let logger = Logger::from_config(&config)?;

    logger.debug("Debug only reaches the console", &[])?;
    logger.info("Request {id} served in {ms}ms", &args!["req-42", 12.5])?;
    logger.success("Deployment finished", &[])?;
    logger.warning("Cache miss ratio {ratio}", &[object! { "hits" => 40, "misses" => 60 }])?;

    let snapshot = logger.diagnostics();
    println!(
        "dispatched={} writes={} filtered={}",
        snapshot.messages_dispatched, snapshot.sink_writes, snapshot.messages_filtered
    );
    Ok(())
}
