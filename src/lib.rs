//! Resolve an address to a coordinate with the Kakao Local API, then collect
//! places near that coordinate into a CSV file without repeating rows.
//!
//! The `locate` binary writes `location.json`; the `collect` binary reads it
//! back and appends to `places_data.csv`. Both files live in the configured
//! output directory, and that file is the only state the two share.

pub mod api;
pub mod collect;
pub mod config;
mod error;
pub mod location;
pub mod prompt;
pub mod store;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};

use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
