//! Tracing setup for the console binary.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `LOG_LEVEL` (default `info`) applies
/// to this crate and its companion crates while third-party noise stays at
/// `warn`. `LOG_FORMAT=json` switches to line-delimited JSON for ingestion.
pub fn init_logging() {
    use tracing_subscriber::fmt;

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,{0}={level},cobro_client={level},cobro_cache={level},cobro_cli={level}",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    // Logs go to stderr; stdout carries the rendered output.
    if json {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .with_filter(filter),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact()
                    .with_filter(filter),
            )
            .init();
    }
}
