use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Env var holding an `EnvFilter` directive, e.g. `CLAUDEFLOW_LOG=debug`
pub(crate) const LOG_ENV: &str = "CLAUDEFLOW_LOG";

/// Send diagnostics to stderr; stdout belongs to the status line
pub(crate) fn init_logging(debug: bool) {
    let default_level = if debug { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    // A second init keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
