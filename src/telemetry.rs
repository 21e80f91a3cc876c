//! Telemetry helpers for applications embedding `cellchart`.
//!
//! Controllers emit `tracing` events for draw passes, per-item draws and
//! selection transitions. Hosts either call `init_default_tracing` or install
//! their own subscriber.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "cellchart=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or the host already installed a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
