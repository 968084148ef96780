use std::env;

use tracing_subscriber::EnvFilter;

/// Compact subscriber on stderr so the word count on stdout stays clean.
/// `RUST_LOG` overrides the default `info` level.
pub fn init() {
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from(env_filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
