//! Logging Infrastructure

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// Honors `RUST_LOG`; defaults to info level for the server and tower-http.
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foodies_server=info,tower_http=info".into()),
        )
        .with_target(false)
        .init();
}
