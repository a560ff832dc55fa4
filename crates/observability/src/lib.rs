//! Tracing and logging setup shared by catalog binaries and tests.

/// Subscriber configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogConfig;

/// Initialize process-wide tracing from `config`.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &LogConfig) {
    self::tracing::init(config);
}
