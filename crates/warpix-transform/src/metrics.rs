//! Injectable timing collaborator
//!
//! The resampler reports how long each operation took to a [`Metrics`]
//! sink supplied by the caller. The default sink discards everything;
//! [`LogMetrics`] forwards to the `log` facade so hosts that wire up a
//! logger see per-operation timings at debug level.

/// Receiver for operation timings.
pub trait Metrics {
    /// Record that the operation `label` took `seconds` to complete.
    fn record_duration(&self, label: &str, seconds: f64);
}

/// Discards all recordings; the default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl Metrics for NoopMetrics {
    fn record_duration(&self, _label: &str, _seconds: f64) {}
}

/// Forwards recordings to `log::debug!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMetrics;

impl Metrics for LogMetrics {
    fn record_duration(&self, label: &str, seconds: f64) {
        log::debug!("{label} finished in {seconds:.4}s");
    }
}
