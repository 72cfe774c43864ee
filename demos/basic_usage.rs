//! Basic logger usage example
//!
//! Demonstrates level gating, the three emission shapes and the default logger.
//!
//! Run with: cargo run --example basic_usage

use leveled_log::prelude::*;
use leveled_log::{global, info, warn};
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Leveled Log - Basic Usage Example ===\n");

    // Colors are used only when stdout is a terminal
    let logger = Logger::new(std::io::stdout(), Level::Debug);

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Emission shapes:");
    logger.infoln(&[&"listening on", &"0.0.0.0", &8080]);
    info!(logger, "request took {}ms", 12);
    warn!(logger, "payload {}", to_json(&json!({"id": 7, "ok": false})));

    println!("\n3. Raising the minimum level to WARN:");
    logger.set_level(Level::Warn);
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    logger.warn("Warning message (visible)");

    println!("\n4. Default logger:");
    global::infof(format_args!("default level is {}", global::level()));
    global::set_level(Level::Error);
    global::info("hidden after set_level");

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
