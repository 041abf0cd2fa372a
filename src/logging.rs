use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over `default_level` when set. Calling twice is harmless.
pub fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
