//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide tracing using `PAINTCALC_LOG_FORMAT` and `RUST_LOG`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, formatters).
pub mod tracing;

pub use self::tracing::LogFormat;
