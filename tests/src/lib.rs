//! Testing utilities and benchmarks for the tlskex library
pub mod fixtures;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Route `tracing` output to the test harness, filtered by `RUST_LOG`
///
/// Idempotent; later calls are ignored. Without `RUST_LOG` nothing is
/// printed, so tests that feed bad input on purpose stay quiet.
pub fn init_tracing() {
    let layer = tracing_subscriber::fmt::layer().with_test_writer();
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(layer)
        .try_init();
}
