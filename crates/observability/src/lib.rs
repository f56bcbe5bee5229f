//! Process-wide logging setup for hosts embedding the sync layer.

/// Tracing subscriber installation.
pub mod tracing;

/// Initialize process-wide tracing (JSON, `RUST_LOG`-driven).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize human-readable tracing captured by the test harness.
pub fn init_for_tests() {
    tracing::init_for_tests();
}
