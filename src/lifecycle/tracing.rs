//! # Observability & Tracing
//!
//! Library code only emits events; installing a subscriber is left to the
//! binary, which calls [`setup_tracing`] once at startup.
//!
//! ## What Gets Traced
//!
//! - **Construction**: `debug!` when a [`Circle`](crate::shape::Circle) is created
//! - **Replacement**: `debug!` when a [`ResourceManager`](crate::resource::ResourceManager) takes new data
//! - **Rejections**: `warn!` with the offending value before an error is returned
//! - **Harness**: one `case` span per verification case, `info!` on pass and `error!` on failure
//!
//! ## Usage Examples
//!
//! ```bash
//! # Only case results
//! RUST_LOG=info cargo run
//!
//! # Include construction and rejection events
//! RUST_LOG=debug cargo run
//!
//! # Filter to one module
//! RUST_LOG=code_rules::resource=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing/logging infrastructure for the application.
///
/// Filtering is read from `RUST_LOG`; when unset, only `info` and above are shown.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
