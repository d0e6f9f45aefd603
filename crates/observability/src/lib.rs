//! Tracing/logging setup shared by storefront services and tests.

/// Initialize process-wide tracing/logging (JSON lines).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Human-readable logs routed through the test harness' captured output.
pub fn init_test() {
    tracing::init_test();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
