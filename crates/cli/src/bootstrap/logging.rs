use netbridge_domain::config::LogFormat;
use netbridge_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries one result line per event.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.with_ansi(false).init(),
    }

    info!("Logging initialized at level: {}", config.logging.level);
}
