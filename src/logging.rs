// SPDX-License-Identifier: MPL-2.0
//! Tracing setup shared by the page and the `sync-assets` command.
//!
//! Output goes to stderr. The filter is read from `RUST_LOG` and falls back
//! to [`DEFAULT_FILTER`].

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "simvla_page=info";

/// Installs the global subscriber.
///
/// Returns `false` if a subscriber was already installed (tests, repeated
/// calls), in which case the existing one stays in place.
pub fn init() -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return false;
    }

    tracing::debug!(filter = DEFAULT_FILTER, "tracing initialized");
    true
}
