//! Structured logging bootstrap.
//!
//! The library only emits `tracing` events; binaries decide where they go.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install a console subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once, and a no-op if another global subscriber
/// was installed first.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .with(filter);

        if subscriber.try_init().is_err() {
            tracing::debug!("global tracing subscriber already installed");
        }
    });
}
