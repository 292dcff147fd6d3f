use tracing_subscriber::EnvFilter;

use super::Config;

/// Installs the global subscriber. Output goes to stderr so stdout carries
/// only the computed totals. `RUST_LOG` wins over `LOG_LEVEL` when both are set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(!config.is_production())
        .init();
}
