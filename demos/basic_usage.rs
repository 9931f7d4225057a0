//! Basic logger usage example
//!
//! Demonstrates leveled logging, contextual children, runtime level changes
//! and the process-wide default logger.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::registry;

fn main() -> Result<()> {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .name("checkout")
        .environment("development")
        .level("debug")
        .format(Format::Console)
        .tag("team", "payments")
        .build();

    println!("1. Logging at different levels:");
    logger.debug("cart loaded", kv!["items" => 3]);
    logger.info("payment authorised", kv!["amount" => 42.5, "currency" => "EUR"]);
    logger.warn("slow response from gateway", kv!["latency_ms" => 812]);
    logger.error("receipt email failed", kv!["retry" => true]);

    println!("\n2. Formatted messages:");
    infof!(logger, "processed {} orders in {}ms", 17, 230);
    errorf!(logger, "failed: {}", "disk full");

    println!("\n3. Contextual child logger:");
    let request = logger.with(kv!["request_id" => "req-7f3a", "user" => "alice"]);
    request.info("request started", kv![]);
    request.set_level("warn");
    request.info("hidden on the child", kv![]);
    logger.info("parent still logs at debug", kv!["level_now" => logger.get_level().to_str()]);

    println!("\n4. Changing the level at runtime:");
    logger.set_level("error");
    logger.warn("hidden", kv![]);
    logger.error("still visible", kv![]);

    println!("\n5. Process-wide default logger:");
    registry::info("no logger registered yet, nothing printed", kv![]);
    registry::set_singleton(&Logger::builder().name("global").format(Format::Json).build());
    registry::info("hello from the registry", kv!["pid" => std::process::id()]);

    registry::close()?;
    logger.close()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
