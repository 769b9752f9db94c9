//! Standalone delegate demo
//!
//! Builds a small sensor-style delegate pipeline and shows both invocation
//! forms plus return aggregation.
//!
//! Usage:
//!   cargo run --example aggregate
//!   RUST_LOG=trace cargo run --example aggregate   (watch the engine work)

use delegate_core::{Delegate, RetDelegate};

fn show_reading(value: i64) {
    println!("  reading = {}", value);
}

fn spike_alert(value: i64) {
    if value > 50 {
        println!("  ALERT: spike of {}", value);
    }
}

fn weight_double(value: i64) -> i64 {
    value * 2
}

fn weight_plain(value: i64) -> i64 {
    value
}

fn main() {
    env_logger::init();

    println!("=== BROADCAST ===");
    let mut on_reading: Delegate<i64> = Delegate::new();
    on_reading.subscribe(show_reading);
    on_reading.subscribe(spike_alert);
    on_reading.invoke(42);
    on_reading.invoke(77);

    println!("\n=== DEFERRED REPLAY ===");
    let mut replay: Delegate<i64> = Delegate::new();
    replay.subscribe_each(show_reading, [5, 6, 7]);
    replay.invoke_bound();
    replay.invoke_bound(); // records stay put, replay is repeatable

    println!("\n=== AGGREGATION ===");
    let mut score: RetDelegate<i64, i64> = RetDelegate::new();
    score.subscribe(weight_double);
    score.subscribe(weight_plain);
    println!("  weighted total for 10: {}", score.invoke(10));

    score.subscribe_with(weight_double, 100);
    println!("  deferred total: {}", score.invoke_bound());
}
