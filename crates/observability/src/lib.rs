//! Tracing/logging setup shared by every process embedding the inventory.

/// Initialize process-wide tracing with the default `info` filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with_filter("info");
}

pub use self::tracing::init_with_filter;

/// Tracing configuration (filters, layers).
pub mod tracing;
