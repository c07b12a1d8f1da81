//! Tracing setup for applications embedding `plot-markers`.
//!
//! Marker mutations and overlay passes emit `tracing` events under the
//! `plot_markers` target. Hosts either call `init_default_tracing` or install
//! their own subscriber.

/// Installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`
/// (falling back to `info`).
///
/// Returns `false` when the `telemetry` feature is disabled or when the host
/// application already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default_filter("info")
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"plot_markers=debug"`.
#[must_use]
pub fn init_tracing_with_default_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}

#[cfg(all(test, not(feature = "telemetry")))]
mod tests {
    use super::{init_default_tracing, init_tracing_with_default_filter};

    #[test]
    fn tracing_init_is_a_no_op_without_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing_with_default_filter("plot_markers=debug"));
    }
}
