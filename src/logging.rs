use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging.
///
/// - **Log Level**: `RUST_LOG` if set, otherwise `LOG_LEVEL` (default: "info")
///   for authgate crates, with noisy dependencies held at warn
/// - **Format**: compact human-readable output, or JSON lines when
///   `LOG_FORMAT=json`
/// - **Output**: stderr, so command output on stdout stays machine-readable
pub fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "authgate={level},authgate_db={level},authgate_cache={level},sqlx=warn,redis=warn",
            level = log_level
        ))
    });

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let layer = if json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter)
            .boxed()
    };

    tracing_subscriber::registry().with(layer).init();
}
