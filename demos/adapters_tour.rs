//! Tour of the adapters
//!
//! Runs the same call site against every backend, then shows the async
//! destination and colored plain-text output.
//!
//! Run with: cargo run --example adapters_tour

use rust_log_adapter::prelude::*;
use rust_log_adapter::{infof, warn};

/// Application code only sees the trait
fn handle_request(logger: &dyn Logger, request_id: &str, items: u32) {
    let logger = logger.with_fields(fields! { "request_id" => request_id });

    logger.debug(&[&"parsing", &"request"]);
    logger.infof("served {} items", &[&items]);
    if items > 10 {
        logger.warnf("large response: {} items", &[&items]);
    }
}

fn main() -> Result<()> {
    println!("=== Rust Log Adapter - Adapters Tour ===\n");

    println!("1. Structured (JSON):");
    let structured = StructuredLogger::default();
    handle_request(&structured, "abc-123", 12);

    println!("\n2. Key-value (logfmt):");
    let kv = KvLogger::new(Some(
        LogfmtEngine::default().with_timestamp_format(TimestampFormat::Rfc3339),
    ));
    handle_request(&kv, "abc-124", 3);

    println!("\n3. Plain text:");
    let simple = SimpleLogger::new(Some(TextEngine::default().with_colors(true)));
    handle_request(&simple, "abc-125", 42);

    println!("\n4. Plain text, warnings and up:");
    let quiet = SimpleLogger::new(Some(TextEngine::default().with_min_level(Level::Warn)));
    handle_request(&quiet, "abc-126", 42);

    println!("\n5. No-op (prints nothing):");
    handle_request(&NoopLogger::new(), "abc-127", 42);

    println!("\n6. Capture:");
    let capture = CaptureLogger::new();
    handle_request(&capture, "abc-128", 1);
    print!("{}", capture.contents());
    println!("   captured {} records", capture.call_count());

    println!("\n7. Async destination to stderr:");
    let destination = Destination::asynchronous(Destination::stderr(), 1024)?;
    let async_logger = StructuredLogger::new(Some(JsonEngine::new(destination)));
    for i in 0..5 {
        infof!(async_logger, "background message {}", i);
    }
    warn!(async_logger, "queue", "drained", "on", "flush");
    async_logger.flush();

    println!("\n=== Tour completed ===");
    Ok(())
}
